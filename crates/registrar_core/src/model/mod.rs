//! Entity model for the academic records core.
//!
//! # Responsibility
//! - Define the four entity shapes and their single-entity validation
//!   rules.
//! - Keep cross-entity rules out: those belong to the service layer.
//!
//! # Invariants
//! - `validate()` never mutates; stores call it before every write.
//! - Text keys (department name, course code) compare case-insensitively.

pub mod course;
pub mod department;
pub mod grade;
pub mod student;

use std::error::Error;
use std::fmt::{Display, Formatter};
use time::Date;

use crate::validate;

/// Validation failure for a single entity field.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Required text field is empty or whitespace.
    EmptyField(&'static str),
    /// Person name breaks the letters-and-spaces rule.
    MalformedName { field: &'static str, value: String },
    /// Course credit weight must be greater than zero.
    NonPositiveCredits(u32),
    /// Student number is not exactly nine decimal digits.
    InvalidStudentNumber(u32),
    /// Birth date outside the accepted window.
    BirthDateOutOfRange(Date),
    /// Letter grade outside the nine-symbol table.
    UnknownLetterGrade(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{field} must not be empty"),
            Self::MalformedName { field, value } => write!(
                f,
                "invalid {field} `{value}`: letters and spaces only, at least two characters"
            ),
            Self::NonPositiveCredits(value) => {
                write!(f, "credit weight must be positive, got {value}")
            }
            Self::InvalidStudentNumber(value) => {
                write!(f, "student number must be exactly nine digits, got {value}")
            }
            Self::BirthDateOutOfRange(value) => write!(
                f,
                "birth date {} outside accepted range [{}, today]",
                validate::format_date(*value),
                validate::format_date(validate::DATE_FLOOR)
            ),
            Self::UnknownLetterGrade(value) => write!(f, "unknown letter grade `{value}`"),
        }
    }
}

impl Error for ValidationError {}

/// Case-insensitive comparison for text keys. Uses full Unicode lowering
/// so names in any script compare the way they read.
pub(crate) fn keys_match(stored: &str, candidate: &str) -> bool {
    stored.to_lowercase() == candidate.trim().to_lowercase()
}
