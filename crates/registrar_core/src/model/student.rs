//! Student entity.
//!
//! # Invariants
//! - `number` is a fixed-width nine-digit identifier and never changes.
//! - `birth_date` and `department` are set at creation and never change.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::model::ValidationError;
use crate::validate;

const NUMBER_MIN: u32 = 100_000_000;
const NUMBER_MAX: u32 = 999_999_999;

/// Enrolled student. `number` is the unique key; only the name fields may
/// change after creation. `department` holds the name of the department
/// the student belongs to, a non-owning association by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    /// Unique nine-digit student number.
    pub number: u32,
    /// Never mutated after creation.
    pub birth_date: Date,
    /// Name of the referenced department.
    pub department: String,
}

impl Student {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        number: u32,
        birth_date: Date,
        department: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            number,
            birth_date,
            department: department.into(),
        }
    }

    /// Checks single-entity rules. `today` bounds the birth-date window;
    /// callers pass the current date so the check stays pure.
    pub fn validate(&self, today: Date) -> Result<(), ValidationError> {
        if !validate::is_valid_name(&self.first_name) {
            return Err(ValidationError::MalformedName {
                field: "first name",
                value: self.first_name.clone(),
            });
        }
        if !validate::is_valid_name(&self.last_name) {
            return Err(ValidationError::MalformedName {
                field: "last name",
                value: self.last_name.clone(),
            });
        }
        if !(NUMBER_MIN..=NUMBER_MAX).contains(&self.number) {
            return Err(ValidationError::InvalidStudentNumber(self.number));
        }
        if !validate::is_plausible_date(self.birth_date, today) {
            return Err(ValidationError::BirthDateOutOfRange(self.birth_date));
        }
        if self.department.trim().is_empty() {
            return Err(ValidationError::EmptyField("department name"));
        }
        Ok(())
    }
}
