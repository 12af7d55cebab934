//! Domain types for the compliance registry.
//!
//! Names are strongly typed; `BTreeMap`/`BTreeSet` keep iteration
//! deterministic (lexicographic), which the report queries rely on for
//! their tie-break and "first project" semantics.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a project in the registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectName(pub String);

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ProjectName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed name for a document inside a project.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentName(pub String);

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for DocumentName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DocumentName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed name for a compliance standard.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StandardName(pub String);

impl fmt::Display for StandardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for StandardName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for StandardName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A named artifact within a project, tagged with at most one standard.
///
/// The associated standard is free-form: it is recorded even when the
/// owning project has not registered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: DocumentName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<StandardName>,
}

/// A named container of documents and registered standards.
///
/// Construction and insertion go through [`crate::Registry`], which enforces
/// the non-empty and uniqueness invariants; `Project` itself only answers
/// lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: ProjectName,
    #[serde(default)]
    documents: BTreeMap<DocumentName, Document>,
    #[serde(default)]
    standards: BTreeSet<StandardName>,
}

impl Project {
    pub(crate) fn new(name: ProjectName) -> Self {
        Self {
            name,
            documents: BTreeMap::new(),
            standards: BTreeSet::new(),
        }
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn has_document(&self, name: &DocumentName) -> bool {
        self.documents.contains_key(name)
    }

    pub fn document(&self, name: &DocumentName) -> Option<&Document> {
        self.documents.get(name)
    }

    /// Documents in lexicographic name order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    pub fn standard_count(&self) -> usize {
        self.standards.len()
    }

    pub fn has_standard(&self, name: &StandardName) -> bool {
        self.standards.contains(name)
    }

    /// Registered standards in lexicographic order.
    pub fn standards(&self) -> impl Iterator<Item = &StandardName> {
        self.standards.iter()
    }

    pub(crate) fn insert_document(&mut self, document: Document) {
        self.documents.insert(document.name.clone(), document);
    }

    pub(crate) fn insert_standard(&mut self, standard: StandardName) {
        self.standards.insert(standard);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_display() {
        assert_eq!(ProjectName::from("alpha").to_string(), "alpha");
        assert_eq!(DocumentName::from("spec.pdf").to_string(), "spec.pdf");
        assert_eq!(StandardName::from("ISO-9001").to_string(), "ISO-9001");
    }

    #[test]
    fn newtype_equality() {
        let a = StandardName::from("x");
        let b = StandardName::from(String::from("x"));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_project_answers_lookups() {
        let project = Project::new(ProjectName::from("alpha"));
        assert_eq!(project.document_count(), 0);
        assert_eq!(project.standard_count(), 0);
        assert!(!project.has_document(&DocumentName::from("spec.pdf")));
        assert!(!project.has_standard(&StandardName::from("ISO-9001")));
    }

    #[test]
    fn project_iteration_is_lexicographic() {
        let mut project = Project::new(ProjectName::from("alpha"));
        project.insert_standard(StandardName::from("b"));
        project.insert_standard(StandardName::from("a"));
        let order: Vec<_> = project.standards().map(|s| s.0.as_str()).collect();
        assert_eq!(order, ["a", "b"]);
    }
}
