#[cfg(test)]
mod tests {
    use crate::validation::{
        INVALID_EMAIL, WEAK_PASSWORD, email_is_valid, password_is_strong, validate_signup,
    };

    #[test]
    fn accepts_plain_addresses() {
        assert!(email_is_valid("a@b.co"));
        assert!(email_is_valid("test@example.com"));
        assert!(email_is_valid("test.user@example.com"));
        assert!(email_is_valid("first_last@mail-server.org"));
        assert!(email_is_valid("user@example.co.uk"));
    }

    #[test]
    fn rejects_single_letter_tld() {
        // Each dot-suffix segment needs two or three word characters.
        assert!(!email_is_valid("a@b.c"));
    }

    #[test]
    fn rejects_long_tld_segment() {
        assert!(!email_is_valid("a@b.comm"));
    }

    #[test]
    fn rejects_non_ascii_word_characters() {
        // Word characters are the ASCII set only; accented letters do not
        // count anywhere in the address.
        assert!(!email_is_valid("jos\u{e9}@b.co"), "accented local part");
        assert!(!email_is_valid("a@caf\u{e9}.co"), "accented domain");
        assert!(!email_is_valid("a@b.c\u{f6}"), "accented suffix");
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!email_is_valid(""));
        assert!(!email_is_valid("test@"));
        assert!(!email_is_valid("@example.com"));
        assert!(!email_is_valid("no-at-sign.com"));
        assert!(!email_is_valid("spaced out@example.com"));
        assert!(!email_is_valid("test@example"));
    }

    #[test]
    fn accepts_strong_password() {
        assert!(password_is_strong("Passw0rd!"));
        assert!(password_is_strong("aB3$aB3$"));
    }

    #[test]
    fn rejects_short_password() {
        assert!(!password_is_strong("aB3$aB3"));
    }

    #[test]
    fn rejects_missing_character_classes() {
        assert!(!password_is_strong("PASSW0RD!"), "no lowercase");
        assert!(!password_is_strong("passw0rd!"), "no uppercase");
        assert!(!password_is_strong("Password!"), "no digit");
        assert!(!password_is_strong("Passw0rdX"), "no symbol");
    }

    #[test]
    fn symbol_must_come_from_fixed_set() {
        // '?' and '-' are not in the accepted set.
        assert!(!password_is_strong("Passw0rd?"));
        assert!(!password_is_strong("Passw0rd-"));
        assert!(password_is_strong("Passw0rd*"));
    }

    #[test]
    fn signup_checks_pass_for_valid_input() {
        assert!(validate_signup("test@example.com", "Passw0rd!").is_ok());
    }

    #[test]
    fn email_error_reported_before_password_error() {
        // Both fields are bad: the email message wins.
        let err = validate_signup("nope", "weak").unwrap_err();
        assert_eq!(err.message(), INVALID_EMAIL);
    }

    #[test]
    fn weak_password_reported_when_email_is_fine() {
        let err = validate_signup("test@example.com", "weak").unwrap_err();
        assert_eq!(err.message(), WEAK_PASSWORD);
        assert_eq!(err.to_string(), WEAK_PASSWORD);
    }
}
