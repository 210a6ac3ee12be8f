use super::*;

#[test]
fn validate_credentials_trims_email() {
    assert_eq!(
        validate_credentials("  pm@agency.de ", "secret"),
        Ok(("pm@agency.de".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_credentials_keeps_password_whitespace() {
    assert_eq!(
        validate_credentials("a@b.de", " pass "),
        Ok(("a@b.de".to_owned(), " pass ".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("   ", "secret"), Err(Text::LoginMissingFields));
    assert_eq!(validate_credentials("a@b.de", ""), Err(Text::LoginMissingFields));
}
