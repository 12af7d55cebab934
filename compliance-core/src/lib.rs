//! Compliance registry core — domain types, registry operations, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and value records
//! - [`error`] — [`RegistryError`]
//! - [`registry`] — the [`Registry`] and its add/count/lookup operations
//! - [`reports`] — aggregation queries over a [`Registry`]

pub mod error;
pub mod registry;
pub mod reports;
pub mod types;

pub use error::{Entity, RegistryError};
pub use registry::Registry;
pub use types::{Document, DocumentName, Project, ProjectName, StandardName};
