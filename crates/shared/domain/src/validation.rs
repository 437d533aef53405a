//! Field-level checks shared by the forms.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{MIN_BUSINESS_DESCRIPTION_LENGTH, MIN_STAFF_PHONE_LENGTH};
use crate::messages;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static HTTP_URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://.+").expect("valid url pattern"));

/// True when the value holds something other than whitespace.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Loose `local@domain.tld` check, the same one the web forms apply.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

/// Identity provider principal ids are UUIDs.
pub fn is_valid_principal(value: &str) -> bool {
    uuid::Uuid::parse_str(value.trim()).is_ok()
}

/// Absolute http(s) URL check.
pub fn is_http_url(value: &str) -> bool {
    HTTP_URL_PATTERN.is_match(value.trim())
}

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub(crate) fn validate_business_name(value: &str) -> Result<(), ValidationError> {
    if is_present(value) {
        Ok(())
    } else {
        Err(failure("required", messages::BUSINESS_NAME_REQUIRED))
    }
}

pub(crate) fn validate_business_description(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(failure("required", messages::BUSINESS_DESCRIPTION_REQUIRED));
    }
    if value.chars().count() < MIN_BUSINESS_DESCRIPTION_LENGTH {
        return Err(failure("length", messages::BUSINESS_DESCRIPTION_TOO_SHORT));
    }
    Ok(())
}

/// An empty logo is allowed; anything else must be an http(s) URL.
pub(crate) fn validate_logo_url(value: &str) -> Result<(), ValidationError> {
    if !is_present(value) || is_http_url(value) {
        Ok(())
    } else {
        Err(failure("url", messages::INVALID_LOGO_URL))
    }
}

pub(crate) fn validate_staff_name(value: &str) -> Result<(), ValidationError> {
    if is_present(value) {
        Ok(())
    } else {
        Err(failure("required", messages::STAFF_NAME_REQUIRED))
    }
}

pub(crate) fn validate_staff_email(value: &str) -> Result<(), ValidationError> {
    if !is_present(value) {
        return Err(failure("required", messages::STAFF_EMAIL_REQUIRED));
    }
    if !is_valid_email(value) {
        return Err(failure("email", messages::STAFF_EMAIL_INVALID));
    }
    Ok(())
}

pub(crate) fn validate_staff_role(value: &str) -> Result<(), ValidationError> {
    if is_present(value) {
        Ok(())
    } else {
        Err(failure("required", messages::STAFF_ROLE_REQUIRED))
    }
}

pub(crate) fn validate_staff_phone(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(failure("required", messages::STAFF_PHONE_REQUIRED));
    }
    if value.chars().count() < MIN_STAFF_PHONE_LENGTH {
        return Err(failure("length", messages::STAFF_PHONE_TOO_SHORT));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("ana@x.com"));
        assert!(is_valid_email("  ana@x.com "));
        assert!(!is_valid_email("ana@x"));
        assert!(!is_valid_email("ana x@y.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_http_url_pattern() {
        assert!(is_http_url("https://tu-negocio.com/logo.png"));
        assert!(is_http_url("HTTP://example.com"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("/assets/logo.webp"));
    }

    #[test]
    fn test_principal_format() {
        assert!(is_valid_principal("2b7e1516-28ae-4d2a-a6f7-15889a09cf4f"));
        assert!(!is_valid_principal("u1"));
        assert!(!is_valid_principal("../admin"));
        assert!(!is_valid_principal(""));
    }

    #[test]
    fn test_empty_logo_is_allowed() {
        assert!(validate_logo_url("").is_ok());
        assert!(validate_logo_url("   ").is_ok());
        assert!(validate_logo_url("logo.png").is_err());
    }

    #[test]
    fn test_staff_phone_messages() {
        let empty = validate_staff_phone("").unwrap_err();
        assert_eq!(empty.message.as_deref(), Some(messages::STAFF_PHONE_REQUIRED));

        let short = validate_staff_phone("5512").unwrap_err();
        assert_eq!(short.message.as_deref(), Some(messages::STAFF_PHONE_TOO_SHORT));

        assert!(validate_staff_phone("55 1234 5678").is_ok());
    }
}
