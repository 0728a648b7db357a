//! Field-level validation predicates used by the form validator.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// Kenyan mobile numbers: optional +254/254/0 prefix, then a 7xx or 1xx
// subscriber number of nine digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+?254|0)?[17]\d{8}$").expect("phone pattern is valid"));

/// Whether the value looks like an email address.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Whether the value looks like a Kenyan phone number.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("jane.doe+tag@mail.co.ke"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-symbol"));
        assert!(!is_valid_email("spaces in@mail.com"));
        assert!(!is_valid_email("user@nodot"));
    }

    #[test]
    fn test_valid_phones() {
        assert!(is_valid_phone("0712345678"));
        assert!(is_valid_phone("0112345678"));
        assert!(is_valid_phone("+254712345678"));
        assert!(is_valid_phone("254712345678"));
        assert!(is_valid_phone("712345678"));
    }

    #[test]
    fn test_invalid_phones() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("0812345678"));
        assert!(!is_valid_phone("071234567"));
        assert!(!is_valid_phone("07123456789"));
        assert!(!is_valid_phone("not-a-number"));
    }
}
