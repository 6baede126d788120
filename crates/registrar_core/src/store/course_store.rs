//! Course store.
//!
//! # Invariants
//! - Course codes are unique, compared case-insensitively.
//! - `update` only touches the display name; code and credit weight stay
//!   fixed.

use crate::model::course::Course;
use crate::store::{StoreError, StoreResult};

const ENTITY: &str = "course";

/// In-memory course collection in insertion order.
#[derive(Debug, Default)]
pub struct CourseStore {
    items: Vec<Course>,
}

impl CourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new course. Fails with `InvalidValue` on an empty name or
    /// code or a zero credit weight, and `DuplicateKey` when the code is
    /// already taken.
    pub fn add(&mut self, course: Course) -> StoreResult<()> {
        course.validate()?;
        if self.exists(&course.code) {
            return Err(StoreError::DuplicateKey {
                entity: ENTITY,
                key: course.code,
            });
        }
        self.items.push(course);
        Ok(())
    }

    /// Case-insensitive lookup by code.
    pub fn find_by_code(&self, code: &str) -> Option<&Course> {
        self.items.iter().find(|course| course.matches_code(code))
    }

    pub fn exists(&self, code: &str) -> bool {
        self.find_by_code(code).is_some()
    }

    /// Removes the course stored under `code`.
    pub fn remove(&mut self, code: &str) -> StoreResult<()> {
        let index = self
            .items
            .iter()
            .position(|course| course.matches_code(code))
            .ok_or_else(|| StoreError::NotFound {
                entity: ENTITY,
                key: code.trim().to_string(),
            })?;
        self.items.remove(index);
        Ok(())
    }

    /// All courses in insertion order, as a read-only view.
    pub fn list(&self) -> &[Course] {
        &self.items
    }

    /// Replaces the display name of the stored course matching by code.
    /// Code and credit weight are never changed through this path.
    pub fn update(&mut self, course: &Course) -> StoreResult<()> {
        course.validate()?;
        let stored = self
            .items
            .iter_mut()
            .find(|item| item.matches_code(&course.code))
            .ok_or_else(|| StoreError::NotFound {
                entity: ENTITY,
                key: course.code.clone(),
            })?;
        stored.name = course.name.clone();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
