//! Error types for compliance-core.

use std::fmt;

use thiserror::Error;

/// Which kind of entity an error refers to. Used in error messages,
/// so variants render lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Project,
    Document,
    Standard,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Project => write!(f, "project"),
            Entity::Document => write!(f, "document"),
            Entity::Standard => write!(f, "standard"),
        }
    }
}

/// All errors that can arise from registry operations.
///
/// Every operation either fully succeeds or returns one of these with the
/// registry left unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// An empty name was supplied where a non-empty one is required.
    #[error("{entity} name must not be empty")]
    EmptyName { entity: Entity },

    /// The referenced project or document does not exist.
    #[error("{entity} \"{name}\" not found")]
    NotFound { entity: Entity, name: String },

    /// An entity with this name is already registered.
    #[error("{entity} \"{name}\" already exists")]
    AlreadyExists { entity: Entity, name: String },
}
