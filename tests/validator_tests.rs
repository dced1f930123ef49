mod common;

#[cfg(test)]
pub mod validator_tests {
    use super::common::*;

    use inmobiliaria_mendoza::common::*;
    use inmobiliaria_mendoza::login::*;
    use inmobiliaria_mendoza::types::*;

    fn check(email: &str, password: &str) -> ValidationErrors {
        validate(&Credentials::new(email, password), &LoginPolicy::default())
    }

    #[test]
    fn test_is_valid_email_format_success() {
        for email in ["a@b.com", "user.name@mail.example.org", "x@y.co", "ñandú@correo.ar"] {
            assert!(is_valid_email_format(email), "{email} should be accepted");
        }
    }

    #[test]
    fn test_is_valid_email_format_fails_on_malformed_input() {
        for email in [
            "",
            "ab.com",
            "a@bcom",
            "a.b@com",
            "a b@c.com",
            "a@b@c.com",
            "@b.com",
            "a@.com",
            "a@b.",
            "a@b .com",
            "a\u{FEFF}b@c.com",
            "a@b.c\u{FEFF}om",
        ] {
            assert!(!is_valid_email_format(email), "{email:?} should be rejected");
        }
    }

    #[test]
    fn test_validate_fails_on_empty_form() {
        let errors = check("", "");

        assert_eq!(errors.email, Some(ValidationError::EmailRequired));
        assert_eq!(errors.password, Some(ValidationError::PasswordRequired));
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_validate_fails_on_blank_email() {
        let errors = check("   ", VALID_PASSWORD);

        assert_eq!(errors.email, Some(ValidationError::EmailRequired));
        assert_eq!(errors.password, None);
    }

    #[test]
    fn test_validate_fails_on_invalid_email_format() {
        let errors = check("bad-email", "abcdef");

        assert_eq!(errors.email, Some(ValidationError::EmailInvalid));
        assert_eq!(errors.password, None);
    }

    #[test]
    fn test_validate_fails_on_short_password() {
        let errors = check("a@b.com", "ab");

        assert_eq!(errors.email, None);
        assert_eq!(errors.password, Some(ValidationError::PasswordTooShort));
    }

    #[test]
    fn test_validate_password_length_boundary() {
        for len in 1..3 {
            let errors = check(VALID_EMAIL, &"x".repeat(len));
            assert_eq!(errors.password, Some(ValidationError::PasswordTooShort));
        }

        for len in 3..12 {
            let errors = check(VALID_EMAIL, &"x".repeat(len));
            assert_eq!(errors.password, None, "length {len} should be accepted");
        }
    }

    #[test]
    fn test_validate_counts_password_utf16_units_not_bytes() {
        assert_eq!(check(VALID_EMAIL, "ñá").password, Some(ValidationError::PasswordTooShort));
        assert_eq!(check(VALID_EMAIL, "ñáé").password, None);
    }

    #[test]
    fn test_validate_counts_surrogate_pair_as_two_units() {
        assert_eq!(check(VALID_EMAIL, "😀a").password, None);
        assert_eq!(check(VALID_EMAIL, "😀").password, Some(ValidationError::PasswordTooShort));
    }

    #[test]
    fn test_validate_success() {
        assert!(check(VALID_EMAIL, VALID_PASSWORD).is_empty());
    }

    #[test]
    fn test_validate_respects_policy_min_password_len() {
        let policy = LoginPolicy {
            min_password_len: 8,
            ..LoginPolicy::default()
        };
        let errors = validate(&Credentials::new(VALID_EMAIL, "abcdef"), &policy);

        assert_eq!(errors.password, Some(ValidationError::PasswordTooShort));
    }

    #[test]
    fn test_validation_errors_clear_single_field() {
        let mut errors = check("", "");
        errors.clear(Field::Email);

        assert_eq!(errors.get(Field::Email), None);
        assert_eq!(errors.get(Field::Password), Some(ValidationError::PasswordRequired));
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::EmailRequired.to_string(),
            "El correo electrónico es obligatorio"
        );
        assert_eq!(
            ValidationError::EmailInvalid.to_string(),
            "Ingrese un correo electrónico válido"
        );
        assert_eq!(
            ValidationError::PasswordRequired.to_string(),
            "La contraseña es obligatoria"
        );
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "La contraseña es muy corta"
        );
    }
}
