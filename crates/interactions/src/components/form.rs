//! Form validation with inline field errors.
//!
//! Validation runs locally on submit; a failing form blocks submission and
//! never reaches the network.

use std::sync::Arc;

use crate::validate::{is_valid_email, is_valid_phone};

const REQUIRED_MESSAGE: &str = "This field is required";
const EMAIL_MESSAGE: &str = "Please enter a valid email address";
const PHONE_MESSAGE: &str = "Please enter a valid phone number";

/// How a field's value is validated beyond the required check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
}

/// A form field snapshot taken at submit time.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub required: bool,
    pub kind: FieldKind,
}

impl FormField {
    /// Convenience constructor for a required text field.
    #[must_use]
    pub fn required(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required: true,
            kind: FieldKind::Text,
        }
    }

    /// Set the validation kind.
    #[must_use]
    pub const fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Inline field error rendering.
pub trait FieldErrors: Send + Sync {
    fn show_error(&self, field: &str, message: &str);
    fn clear_error(&self, field: &str);
}

/// Validates form fields on submit.
pub struct FormValidator {
    errors: Arc<dyn FieldErrors>,
}

impl FormValidator {
    #[must_use]
    pub fn new(errors: Arc<dyn FieldErrors>) -> Self {
        Self { errors }
    }

    /// Validate all fields at submit time. Returns `true` when submission
    /// may proceed; otherwise inline errors have been rendered for every
    /// failing field.
    pub fn on_submit(&self, fields: &[FormField]) -> bool {
        let mut is_valid = true;
        for field in fields {
            match Self::check(field) {
                Some(message) => {
                    self.errors.show_error(&field.name, message);
                    is_valid = false;
                }
                None => self.errors.clear_error(&field.name),
            }
        }
        is_valid
    }

    fn check(field: &FormField) -> Option<&'static str> {
        let value = field.value.trim();
        if field.required && value.is_empty() {
            return Some(REQUIRED_MESSAGE);
        }
        if value.is_empty() {
            return None;
        }
        match field.kind {
            FieldKind::Text => None,
            FieldKind::Email => (!is_valid_email(value)).then_some(EMAIL_MESSAGE),
            FieldKind::Phone => (!is_valid_phone(value)).then_some(PHONE_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingErrors {
        shown: Mutex<HashMap<String, String>>,
    }

    impl FieldErrors for RecordingErrors {
        fn show_error(&self, field: &str, message: &str) {
            self.shown
                .lock()
                .expect("lock")
                .insert(field.to_string(), message.to_string());
        }

        fn clear_error(&self, field: &str) {
            self.shown.lock().expect("lock").remove(field);
        }
    }

    fn validator() -> (FormValidator, Arc<RecordingErrors>) {
        let errors = Arc::new(RecordingErrors::default());
        let validator = FormValidator::new(Arc::clone(&errors) as Arc<dyn FieldErrors>);
        (validator, errors)
    }

    #[test]
    fn test_required_field_blocks_submission() {
        let (validator, errors) = validator();
        let ok = validator.on_submit(&[FormField::required("name", "   ")]);
        assert!(!ok);
        assert_eq!(
            errors.shown.lock().expect("lock").get("name").map(String::as_str),
            Some(REQUIRED_MESSAGE)
        );
    }

    #[test]
    fn test_invalid_email_blocks_submission() {
        let (validator, errors) = validator();
        let ok = validator.on_submit(&[
            FormField::required("email", "not-an-email").kind(FieldKind::Email)
        ]);
        assert!(!ok);
        assert_eq!(
            errors.shown.lock().expect("lock").get("email").map(String::as_str),
            Some(EMAIL_MESSAGE)
        );
    }

    #[test]
    fn test_invalid_phone_blocks_submission() {
        let (validator, _errors) = validator();
        let ok = validator.on_submit(&[
            FormField::required("phone", "12345").kind(FieldKind::Phone)
        ]);
        assert!(!ok);
    }

    #[test]
    fn test_optional_empty_field_passes() {
        let (validator, _errors) = validator();
        let field = FormField {
            name: "phone".to_string(),
            value: String::new(),
            required: false,
            kind: FieldKind::Phone,
        };
        assert!(validator.on_submit(&[field]));
    }

    #[test]
    fn test_valid_form_clears_previous_errors() {
        let (validator, errors) = validator();
        assert!(!validator.on_submit(&[FormField::required("name", "")]));
        assert!(validator.on_submit(&[FormField::required("name", "Wanjiku")]));
        assert!(errors.shown.lock().expect("lock").is_empty());
    }
}
