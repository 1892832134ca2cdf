//! Per-field validation rules for the contact form.
//!
//! Each field maps to an ordered list of [`Rule`]s; the first failing rule
//! decides the error shown under the field.
//!
//! The email pattern is a UX sanity check, not address validation. It must
//! stay exactly `^[^@]+@[^.]+\..+$` with browser regex semantics: the page is
//! expected to accept and reject the same strings it always has.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use super::field::Field;

pub const EMAIL_PATTERN: &str = r"^[^@]+@[^.]+\..+$";

/// [`EMAIL_PATTERN`] in `regex` syntax. A browser `.` also refuses `\r`,
/// U+2028 and U+2029, so the tail spells those line terminators out.
const EMAIL_REGEX_SOURCE: &str = r"^[^@]+@[^.]+\.[^\n\r\x{2028}\x{2029}]+$";

pub const EMAIL_FORMAT_MESSAGE: &str = "Please enter a valid email address";

/// Field-level validation failure. Never leaves the browser.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: Field },
    #[error("{message}")]
    Format { field: Field, message: &'static str },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required { field } | ValidationError::Format { field, .. } => *field,
        }
    }
}

/// A single declarative check applied to a field value.
#[derive(Clone, Copy, Debug)]
pub enum Rule {
    /// Value must contain at least one non-whitespace character.
    Required,
    /// Value must match the regex returned by `regex`.
    Pattern { regex: fn() -> &'static Regex, message: &'static str },
}

impl Rule {
    fn check(self, field: Field, value: &str) -> Result<(), ValidationError> {
        match self {
            Rule::Required => {
                if value.trim().is_empty() {
                    return Err(ValidationError::Required { field });
                }
            }
            Rule::Pattern { regex, message } => {
                if !regex().is_match(value) {
                    return Err(ValidationError::Format { field, message });
                }
            }
        }
        Ok(())
    }
}

static REQUIRED_RULES: [Rule; 1] = [Rule::Required];
static EMAIL_RULES: [Rule; 2] = [
    Rule::Required,
    Rule::Pattern { regex: email_regex, message: EMAIL_FORMAT_MESSAGE },
];

/// Compiled [`EMAIL_PATTERN`], built once.
pub fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_REGEX_SOURCE).expect("valid regex"))
}

/// Rules applied to `field`, in evaluation order.
pub fn rules_for(field: Field) -> &'static [Rule] {
    match field {
        Field::Name | Field::Message => &REQUIRED_RULES,
        Field::Email => &EMAIL_RULES,
    }
}

/// Validate one field value. Pure: the same input always yields the same result.
///
/// # Errors
///
/// Returns the error of the first rule in [`rules_for`] that rejects `value`.
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    rules_for(field).iter().try_for_each(|rule| rule.check(field, value))
}
