use regex::Regex;
use std::sync::OnceLock;

use crate::common::ValidationError;
use crate::types::{Credentials, Field};

use super::LoginPolicy;

static EMAIL_FORMAT: OnceLock<Regex> = OnceLock::new();

fn email_format() -> &'static Regex {
    EMAIL_FORMAT.get_or_init(|| {
        Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("Invalid email pattern")
    })
}

/// `local@domain.tld` shape check only, no deliverability.
/// U+FEFF counts as whitespace, as it does for browser regexes.
pub fn is_valid_email_format(email: &str) -> bool {
    email_format().is_match(email)
}

/// One optional message per form field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub email: Option<ValidationError>,
    pub password: Option<ValidationError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Email => self.email = None,
            Field::Password => self.password = None,
        }
    }
}

/// Password length is measured in UTF-16 code units, matching what the
/// browser reports for an input's value.
pub fn validate(credentials: &Credentials, policy: &LoginPolicy) -> ValidationErrors {
    let email = if credentials.email.trim().is_empty() {
        Some(ValidationError::EmailRequired)
    } else if !is_valid_email_format(&credentials.email) {
        Some(ValidationError::EmailInvalid)
    } else {
        None
    };

    let password = if credentials.password.is_empty() {
        Some(ValidationError::PasswordRequired)
    } else if credentials.password.encode_utf16().count() < policy.min_password_len {
        Some(ValidationError::PasswordTooShort)
    } else {
        None
    };

    ValidationErrors { email, password }
}
