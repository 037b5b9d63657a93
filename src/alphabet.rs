//! Restricted alphabet for password blocks.

/// Characters a password block may contain: lowercase ASCII letters and
/// digits, minus glyphs that are easily misread on printed material
/// (`0`/`O`/`o`, `1`/`l`, `5`/`S`, `8`/`B`, `9`/`g`, `q`/`Q`), sorted
/// ascending. Passwords are base-27 encodings over this exact table, so
/// any change breaks every previously issued credential.
pub const ALPHABET: &[u8] = b"23467abcdefhijkmnprstuvwxyz";
