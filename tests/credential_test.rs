//! End-to-end checks over the issuance flow: one shared signer feeding both
//! credential encoders, verified against known-answer vectors.

use credential_code::{CredentialError, Password, SerialNumber, Signer};

const KEY: &str = "f09d837b265d7ff95d724c7f9dcc8b51dc6a357db5630eedff48b6c1659e2181";

#[test]
fn issues_and_verifies_both_credentials_from_one_signer() {
    let signer = Signer::new(KEY).unwrap();
    let serials = SerialNumber::new(&signer);
    let passwords = Password::new(&signer);

    for number in 0..50 {
        let serial = serials.serial(number).unwrap();
        let password = passwords.password(number).unwrap();

        assert_eq!(serial.len(), 12);
        assert_eq!(password.len(), 14);
        assert!(serials.check(&serial));
        assert!(passwords.check(number, &password));

        // A credential issued for one identifier never validates another
        assert!(!passwords.check(number + 1, &password));
    }
}

#[test]
fn matches_known_vectors() {
    let signer = Signer::new(KEY).unwrap();
    assert_eq!(
        SerialNumber::new(&signer).serial(0).unwrap(),
        "000075101802"
    );
    assert_eq!(Password::new(&signer).password(0).unwrap(), "yd2f-ktfb-dyru");

    let other = Signer::new("00ff").unwrap();
    assert_eq!(SerialNumber::new(&other).serial(0).unwrap(), "000056850228");
    assert_eq!(Password::new(&other).password(0).unwrap(), "emic-b323-srbr");
}

#[test]
fn separate_signers_with_the_same_key_agree() {
    let a = Signer::new(KEY).unwrap();
    let b = Signer::new(KEY).unwrap();
    assert_eq!(
        SerialNumber::new(&a).serial(77).unwrap(),
        SerialNumber::new(&b).serial(77).unwrap()
    );
    assert_eq!(
        Password::new(&a).password(77).unwrap(),
        Password::new(&b).password(77).unwrap()
    );
}

#[test]
fn mismatched_digit_width_diverges_silently() {
    // The width is part of the signed message: credentials issued at one
    // width never verify at another, with no error to flag the mismatch.
    let narrow = Signer::new(KEY).unwrap();
    let wide = Signer::new(KEY).unwrap().with_digit_width(6);

    let serial = SerialNumber::new(&narrow).serial(42).unwrap();
    assert!(!SerialNumber::new(&wide).check(&serial));

    let password = Password::new(&narrow).password(42).unwrap();
    assert!(!Password::new(&wide).check(42, &password));
}

#[test]
fn generation_surfaces_errors_while_verification_fails_closed() {
    let signer = Signer::new(KEY).unwrap();
    let serials = SerialNumber::new(&signer);
    let passwords = Password::new(&signer);

    assert!(matches!(
        serials.serial(10_000),
        Err(CredentialError::InvalidInput { .. })
    ));
    assert!(matches!(
        passwords.password(10_000),
        Err(CredentialError::InvalidInput { .. })
    ));

    assert!(!serials.check("not a serial"));
    assert!(!passwords.check(10_000, "anything"));
}
