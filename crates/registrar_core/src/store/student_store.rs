//! Student store.
//!
//! # Invariants
//! - Student numbers are unique nine-digit identifiers.
//! - `update` only touches the name fields; number, birth date and
//!   department stay fixed.
//! - Removal here does not clean grade records: the cascade runs at the
//!   orchestration layer before this store is called.

use time::{Date, OffsetDateTime};

use crate::model::student::Student;
use crate::store::{StoreError, StoreResult};

const ENTITY: &str = "student";

/// In-memory student collection in insertion order.
#[derive(Debug, Default)]
pub struct StudentStore {
    items: Vec<Student>,
}

impl StudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new student. Fails with `InvalidValue` when the number is
    /// not nine digits, a name breaks the letters-and-spaces rule, or the
    /// birth date falls outside the accepted window; `DuplicateKey` when
    /// the number is already taken.
    pub fn add(&mut self, student: Student) -> StoreResult<()> {
        student.validate(today())?;
        if self.exists(student.number) {
            return Err(StoreError::DuplicateKey {
                entity: ENTITY,
                key: student.number.to_string(),
            });
        }
        self.items.push(student);
        Ok(())
    }

    pub fn find_by_number(&self, number: u32) -> Option<&Student> {
        self.items.iter().find(|student| student.number == number)
    }

    pub fn exists(&self, number: u32) -> bool {
        self.find_by_number(number).is_some()
    }

    /// Removes the student stored under `number`.
    pub fn remove(&mut self, number: u32) -> StoreResult<()> {
        let index = self
            .items
            .iter()
            .position(|student| student.number == number)
            .ok_or_else(|| StoreError::NotFound {
                entity: ENTITY,
                key: number.to_string(),
            })?;
        self.items.remove(index);
        Ok(())
    }

    /// All students in insertion order, as a read-only view.
    pub fn list(&self) -> &[Student] {
        &self.items
    }

    /// Replaces first/last name on the record matching the student number.
    /// Number, birth date and department are never changed through this
    /// path.
    pub fn update(&mut self, student: &Student) -> StoreResult<()> {
        student.validate(today())?;
        let stored = self
            .items
            .iter_mut()
            .find(|item| item.number == student.number)
            .ok_or_else(|| StoreError::NotFound {
                entity: ENTITY,
                key: student.number.to_string(),
            })?;
        stored.first_name = student.first_name.clone();
        stored.last_name = student.last_name.clone();
        Ok(())
    }

    /// Number of students referencing `department` (case-insensitive).
    /// The dependent census behind the department-removal integrity rule.
    pub fn count_in_department(&self, department: &str) -> usize {
        let wanted = department.trim().to_lowercase();
        self.items
            .iter()
            .filter(|student| student.department.to_lowercase() == wanted)
            .count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
