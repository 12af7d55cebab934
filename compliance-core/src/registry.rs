//! In-memory registry of projects, their documents, and their standards.
//!
//! # Ownership
//!
//! The [`Registry`] is the sole owner of every [`Project`]; projects and
//! documents are plain value records with no back-pointers. There is no
//! process-wide instance — callers create a `Registry` and pass it around.
//!
//! # Mutation contract
//!
//! Every mutating operation validates first and only then writes: on error
//! the registry is unchanged. Projects, documents, and standards are added
//! and never removed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Entity, RegistryError};
use crate::types::{Document, DocumentName, Project, ProjectName, StandardName};

/// The registry root: project name → project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    pub(crate) projects: BTreeMap<ProjectName, Project>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // 1. Projects
    // -----------------------------------------------------------------------

    /// Create an empty project under `name`.
    pub fn add_project(&mut self, name: ProjectName) -> Result<(), RegistryError> {
        if name.0.is_empty() {
            return Err(RegistryError::EmptyName { entity: Entity::Project });
        }
        if self.projects.contains_key(&name) {
            return Err(RegistryError::AlreadyExists {
                entity: Entity::Project,
                name: name.0,
            });
        }
        tracing::debug!("add project: {name}");
        self.projects.insert(name.clone(), Project::new(name));
        Ok(())
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn has_project(&self, name: &ProjectName) -> bool {
        self.projects.contains_key(name)
    }

    /// Projects in lexicographic name order.
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    // -----------------------------------------------------------------------
    // 2. Documents
    // -----------------------------------------------------------------------

    /// Insert `Document { doc, standard }` into `project`.
    ///
    /// The associated standard is recorded verbatim — it does not have to be
    /// registered in the project (and often isn't yet).
    pub fn add_document(
        &mut self,
        project: &ProjectName,
        doc: DocumentName,
        standard: Option<StandardName>,
    ) -> Result<(), RegistryError> {
        let project = self.project_mut(project)?;
        if doc.0.is_empty() {
            return Err(RegistryError::EmptyName { entity: Entity::Document });
        }
        if project.has_document(&doc) {
            return Err(RegistryError::AlreadyExists {
                entity: Entity::Document,
                name: doc.0,
            });
        }
        tracing::debug!("add document to {}: {doc}", project.name);
        project.insert_document(Document { name: doc, standard });
        Ok(())
    }

    pub fn document_count(&self, project: &ProjectName) -> Result<usize, RegistryError> {
        Ok(self.project(project)?.document_count())
    }

    pub fn has_document(
        &self,
        project: &ProjectName,
        doc: &DocumentName,
    ) -> Result<bool, RegistryError> {
        Ok(self.project(project)?.has_document(doc))
    }

    /// The standard associated with `doc`, or `None` if the document has no
    /// standard assigned.
    pub fn document_standard(
        &self,
        project: &ProjectName,
        doc: &DocumentName,
    ) -> Result<Option<&StandardName>, RegistryError> {
        let document = self
            .project(project)?
            .document(doc)
            .ok_or_else(|| RegistryError::NotFound {
                entity: Entity::Document,
                name: doc.0.clone(),
            })?;
        Ok(document.standard.as_ref())
    }

    // -----------------------------------------------------------------------
    // 3. Standards
    // -----------------------------------------------------------------------

    /// Register `standard` in `project`'s standard set.
    pub fn add_standard(
        &mut self,
        project: &ProjectName,
        standard: StandardName,
    ) -> Result<(), RegistryError> {
        let project = self.project_mut(project)?;
        if standard.0.is_empty() {
            return Err(RegistryError::EmptyName { entity: Entity::Standard });
        }
        if project.has_standard(&standard) {
            return Err(RegistryError::AlreadyExists {
                entity: Entity::Standard,
                name: standard.0,
            });
        }
        tracing::debug!("register standard in {}: {standard}", project.name);
        project.insert_standard(standard);
        Ok(())
    }

    pub fn standard_count(&self, project: &ProjectName) -> Result<usize, RegistryError> {
        Ok(self.project(project)?.standard_count())
    }

    pub fn has_standard(
        &self,
        project: &ProjectName,
        standard: &StandardName,
    ) -> Result<bool, RegistryError> {
        Ok(self.project(project)?.has_standard(standard))
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn project(&self, name: &ProjectName) -> Result<&Project, RegistryError> {
        self.projects.get(name).ok_or_else(|| RegistryError::NotFound {
            entity: Entity::Project,
            name: name.0.clone(),
        })
    }

    fn project_mut(&mut self, name: &ProjectName) -> Result<&mut Project, RegistryError> {
        self.projects.get_mut(name).ok_or_else(|| RegistryError::NotFound {
            entity: Entity::Project,
            name: name.0.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
