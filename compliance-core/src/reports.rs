//! Aggregation queries over a [`Registry`].
//!
//! All queries are read-only and iterate projects in lexicographic name
//! order (the registry's `BTreeMap` order), which pins down every
//! order-sensitive result below.

use std::collections::BTreeSet;

use crate::registry::Registry;
use crate::types::{ProjectName, StandardName};

impl Registry {
    /// Standards registered in every project — the intersection of all
    /// projects' standard sets. Empty registry yields an empty set.
    pub fn standards_used_by_all_projects(&self) -> BTreeSet<StandardName> {
        let mut projects = self.projects.values();
        let Some(first) = projects.next() else {
            return BTreeSet::new();
        };
        let mut shared: BTreeSet<StandardName> = first.standards().cloned().collect();
        for project in projects {
            shared.retain(|standard| project.has_standard(standard));
        }
        shared
    }

    /// Projects whose documents all carry a registered standard.
    ///
    /// A project with zero registered standards is always included,
    /// whatever its documents carry. In a project with registered
    /// standards, a document with no standard at all disqualifies it.
    pub fn projects_with_all_standard_documents(&self) -> BTreeSet<ProjectName> {
        self.projects
            .iter()
            .filter(|(_, project)| {
                project.standard_count() == 0
                    || project.documents().all(|document| {
                        document
                            .standard
                            .as_ref()
                            .map(|s| project.has_standard(s))
                            .unwrap_or(false)
                    })
            })
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Projects reported as missing a document for `standard`.
    ///
    /// A project without `standard` registered is always included. A project
    /// WITH it registered is included only if at least one of its documents
    /// carries no standard at all — not, as the name might suggest, if no
    /// document uses `standard`. This is the historical contract of the
    /// operation and is preserved deliberately.
    pub fn projects_missing_standard_document(
        &self,
        standard: &StandardName,
    ) -> BTreeSet<ProjectName> {
        self.projects
            .iter()
            .filter(|(_, project)| {
                if project.has_standard(standard) {
                    project.documents().any(|document| document.standard.is_none())
                } else {
                    true
                }
            })
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// The registered standard used by the greatest number of documents
    /// across all projects.
    ///
    /// Candidates are the standards registered in any project; a candidate
    /// no document uses counts 0 but can still win. Documents whose
    /// associated standard is registered nowhere are not counted. Ties go to
    /// the candidate seen first (projects in lexicographic order, standards
    /// lexicographic within a project). `None` when no project registers any
    /// standard.
    pub fn most_popular_standard(&self) -> Option<StandardName> {
        let mut candidates: Vec<&StandardName> = Vec::new();
        for project in self.projects.values() {
            for standard in project.standards() {
                if !candidates.contains(&standard) {
                    candidates.push(standard);
                }
            }
        }

        let mut counts = vec![0usize; candidates.len()];
        for project in self.projects.values() {
            for document in project.documents() {
                if let Some(standard) = &document.standard {
                    if let Some(i) = candidates.iter().position(|c| *c == standard) {
                        counts[i] += 1;
                    }
                }
            }
        }

        let mut winner: Option<usize> = None;
        for (i, &count) in counts.iter().enumerate() {
            // Strict > keeps the first candidate seen at the maximum.
            if winner.map(|w| count > counts[w]).unwrap_or(true) {
                winner = Some(i);
            }
        }
        winner.map(|i| candidates[i].clone())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentName;

    fn registry_with(projects: &[&str]) -> Registry {
        let mut registry = Registry::new();
        for name in projects {
            registry.add_project(ProjectName::from(*name)).expect("add project");
        }
        registry
    }

    #[test]
    fn shared_standards_is_true_intersection() {
        let mut registry = registry_with(&["alpha", "beta"]);
        for s in ["ISO-9001", "ISO-27001"] {
            registry
                .add_standard(&ProjectName::from("alpha"), StandardName::from(s))
                .expect("add");
        }
        registry
            .add_standard(&ProjectName::from("beta"), StandardName::from("ISO-27001"))
            .expect("add");

        let shared = registry.standards_used_by_all_projects();
        assert_eq!(shared.len(), 1);
        assert!(shared.contains(&StandardName::from("ISO-27001")));
    }

    #[test]
    fn shared_standards_of_empty_registry_is_empty() {
        assert!(Registry::new().standards_used_by_all_projects().is_empty());
    }

    #[test]
    fn most_popular_counts_documents_per_candidate() {
        let mut registry = registry_with(&["alpha"]);
        let alpha = ProjectName::from("alpha");
        registry.add_standard(&alpha, StandardName::from("A")).expect("add");
        registry.add_standard(&alpha, StandardName::from("B")).expect("add");
        for (doc, std) in [("d1", "A"), ("d2", "A"), ("d3", "B")] {
            registry
                .add_document(&alpha, DocumentName::from(doc), Some(StandardName::from(std)))
                .expect("add doc");
        }
        assert_eq!(registry.most_popular_standard(), Some(StandardName::from("A")));
    }

    #[test]
    fn most_popular_of_standard_free_registry_is_none() {
        let mut registry = registry_with(&["alpha"]);
        registry
            .add_document(
                &ProjectName::from("alpha"),
                DocumentName::from("d"),
                Some(StandardName::from("unregistered")),
            )
            .expect("add doc");
        // "unregistered" is not a candidate: no project registers it.
        assert_eq!(registry.most_popular_standard(), None);
    }

    #[test]
    fn most_popular_tie_goes_to_first_seen() {
        let mut registry = registry_with(&["alpha"]);
        let alpha = ProjectName::from("alpha");
        registry.add_standard(&alpha, StandardName::from("B")).expect("add");
        registry.add_standard(&alpha, StandardName::from("A")).expect("add");
        // No documents: both candidates count 0; "A" is first in the
        // project's lexicographic standard order.
        assert_eq!(registry.most_popular_standard(), Some(StandardName::from("A")));
    }
}
