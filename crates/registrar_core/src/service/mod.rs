//! Orchestration layer over the entity stores.
//!
//! # Responsibility
//! - Host every rule that needs visibility across more than one store.
//! - Keep presentation layers decoupled from store internals.

pub mod registrar;
