//! Department entity.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::model::{keys_match, ValidationError};

/// Academic department. `name` is the unique key; `name` and `founded`
/// are fixed at creation, only `homepage` may change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Unique department name, compared case-insensitively.
    pub name: String,
    /// Official homepage URL, if any.
    pub homepage: Option<String>,
    /// Founding date; never mutated after creation.
    pub founded: Date,
}

impl Department {
    pub fn new(name: impl Into<String>, homepage: Option<String>, founded: Date) -> Self {
        Self {
            name: name.into(),
            homepage,
            founded,
        }
    }

    /// Checks single-entity rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("department name"));
        }
        Ok(())
    }

    /// Case-insensitive key match against `name`.
    pub fn matches_name(&self, name: &str) -> bool {
        keys_match(&self.name, name)
    }
}
