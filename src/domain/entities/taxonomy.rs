//! Taxonomy entity
//!
//! Taxonomies only decorate listing rows; they never change tree shape.

use serde::{Deserialize, Serialize};

/// Hierarchical (category-like) or flat (tag-like)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomyKind {
    Hierarchical,
    Flat,
}

/// A classification registered for one or more post types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub name: String,
    pub kind: TaxonomyKind,
    /// Post types the taxonomy is registered for. Empty means all.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub object_types: Vec<String>,
}

impl Taxonomy {
    pub fn hierarchical(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TaxonomyKind::Hierarchical,
            object_types: Vec::new(),
        }
    }

    pub fn flat(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TaxonomyKind::Flat,
            object_types: Vec::new(),
        }
    }

    pub fn for_types(mut self, types: &[&str]) -> Self {
        self.object_types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn is_hierarchical(&self) -> bool {
        self.kind == TaxonomyKind::Hierarchical
    }

    pub fn applies_to(&self, post_type: &str) -> bool {
        self.object_types.is_empty() || self.object_types.iter().any(|t| t == post_type)
    }
}

/// The terms a node belongs to within one taxonomy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermSet {
    pub taxonomy: String,
    pub kind: TaxonomyKind,
    pub term_ids: Vec<u64>,
}
