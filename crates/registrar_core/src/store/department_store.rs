//! Department store.
//!
//! # Invariants
//! - Department names are unique, compared case-insensitively.
//! - `update` only touches the homepage; name and founding date stay
//!   fixed.
//! - This store has no cross-store visibility: the dependent-students
//!   check for removal happens at the orchestration layer.

use crate::model::department::Department;
use crate::store::{StoreError, StoreResult};

const ENTITY: &str = "department";

/// In-memory department collection in insertion order.
#[derive(Debug, Default)]
pub struct DepartmentStore {
    items: Vec<Department>,
}

impl DepartmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new department. Fails with `InvalidValue` on malformed
    /// input and `DuplicateKey` when the name is already taken.
    pub fn add(&mut self, department: Department) -> StoreResult<()> {
        department.validate()?;
        if self.exists(&department.name) {
            return Err(StoreError::DuplicateKey {
                entity: ENTITY,
                key: department.name,
            });
        }
        self.items.push(department);
        Ok(())
    }

    /// Case-insensitive lookup by name.
    pub fn find_by_name(&self, name: &str) -> Option<&Department> {
        self.items.iter().find(|dept| dept.matches_name(name))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Removes the department stored under `name`.
    pub fn remove(&mut self, name: &str) -> StoreResult<()> {
        let index = self
            .items
            .iter()
            .position(|dept| dept.matches_name(name))
            .ok_or_else(|| StoreError::NotFound {
                entity: ENTITY,
                key: name.trim().to_string(),
            })?;
        self.items.remove(index);
        Ok(())
    }

    /// All departments in insertion order, as a read-only view.
    pub fn list(&self) -> &[Department] {
        &self.items
    }

    /// Replaces the homepage of the stored department matching by name.
    /// Name and founding date are never changed through this path.
    pub fn update(&mut self, department: &Department) -> StoreResult<()> {
        department.validate()?;
        let stored = self
            .items
            .iter_mut()
            .find(|item| item.matches_name(&department.name))
            .ok_or_else(|| StoreError::NotFound {
                entity: ENTITY,
                key: department.name.clone(),
            })?;
        stored.homepage = department.homepage.clone();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
