//! In-memory stores, one per entity.
//!
//! # Responsibility
//! - Own every entity of one kind and enforce its per-store invariants
//!   (key uniqueness, validation before write).
//! - Keep iteration order equal to insertion order.
//!
//! # Invariants
//! - A failed operation leaves its store unchanged.
//! - No store sees another store; cross-entity rules live in the service
//!   layer.

pub mod course_store;
pub mod department_store;
pub mod grade_book;
pub mod student_store;

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::ValidationError;

pub type StoreResult<T> = Result<T, StoreError>;

/// Expected, recoverable failure from a store operation.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Unique key already in use: department name, course code, student
    /// number, or a (student, course) grade pair.
    DuplicateKey { entity: &'static str, key: String },
    /// No entity stored under the given key.
    NotFound { entity: &'static str, key: String },
    /// Input failed entity validation.
    InvalidValue(ValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKey { entity, key } => write!(f, "{entity} `{key}` already exists"),
            Self::NotFound { entity, key } => write!(f, "{entity} `{key}` not found"),
            Self::InvalidValue(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidValue(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::InvalidValue(value)
    }
}
