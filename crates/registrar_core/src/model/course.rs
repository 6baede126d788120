//! Course entity.

use serde::{Deserialize, Serialize};

use crate::model::{keys_match, ValidationError};

/// University course. `code` is the unique key; `code` and `credits` are
/// fixed at creation, only the display `name` may change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Display name shown to users.
    pub name: String,
    /// Unique course code (e.g. `CENG445`), compared case-insensitively.
    pub code: String,
    /// Credit weight used by the GPA computation. Always positive.
    pub credits: u32,
}

impl Course {
    pub fn new(name: impl Into<String>, code: impl Into<String>, credits: u32) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            credits,
        }
    }

    /// Checks single-entity rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("course name"));
        }
        if self.code.trim().is_empty() {
            return Err(ValidationError::EmptyField("course code"));
        }
        if self.credits == 0 {
            return Err(ValidationError::NonPositiveCredits(self.credits));
        }
        Ok(())
    }

    /// Case-insensitive key match against `code`.
    pub fn matches_code(&self, code: &str) -> bool {
        keys_match(&self.code, code)
    }
}
