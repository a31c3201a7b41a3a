//! Node entity
//!
//! The uniform shape every record is normalized into before either tree
//! walk sees it. Taxonomy terms are attached explicitly as [`TermSet`]s.

use chrono::NaiveDateTime;

use super::taxonomy::{TaxonomyKind, TermSet};
use crate::domain::value_objects::{NodeId, NodeType, PostStatus, Visibility, ROOT_NODE};

/// Per-node settings for the generated navigation menu
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavSettings {
    /// Hidden nodes are removed from the menu
    pub status: Visibility,
    /// Menu label override
    pub title: Option<String>,
    pub title_attr: String,
    pub css_classes: String,
    /// Declared menu item type (`custom`, `post_type`, `taxonomy`, ...)
    pub nav_type: Option<String>,
    pub object: Option<String>,
    pub object_id: Option<u64>,
    pub link_target: String,
}

/// A normalized content node
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub parent_id: NodeId,
    pub status: PostStatus,
    pub menu_order: i64,
    pub title: String,
    pub content: String,
    pub node_type: NodeType,
    pub author: u64,
    pub date: Option<NaiveDateTime>,
    /// Shown/hidden in the listing, independent of status
    pub listing_status: Visibility,
    pub nav: NavSettings,
    pub terms: Vec<TermSet>,
}

impl Node {
    pub fn new(id: NodeId, parent_id: NodeId, status: PostStatus) -> Self {
        Self {
            id,
            parent_id,
            status,
            menu_order: 0,
            title: String::new(),
            content: String::new(),
            node_type: NodeType::Page,
            author: 0,
            date: None,
            listing_status: Visibility::Show,
            nav: NavSettings::default(),
            terms: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_type(mut self, node_type: NodeType) -> Self {
        self.node_type = node_type;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_nav(mut self, nav: NavSettings) -> Self {
        self.nav = nav;
        self
    }

    pub fn hidden_from_nav(mut self) -> Self {
        self.nav.status = Visibility::Hide;
        self
    }

    pub fn hidden_from_listing(mut self) -> Self {
        self.listing_status = Visibility::Hide;
        self
    }

    pub fn with_terms(mut self, taxonomy: &str, kind: TaxonomyKind, term_ids: Vec<u64>) -> Self {
        self.terms.push(TermSet {
            taxonomy: taxonomy.to_string(),
            kind,
            term_ids,
        });
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == ROOT_NODE
    }

    pub fn is_trashed(&self) -> bool {
        self.status.is_trash()
    }

    /// Label used in the generated menu
    pub fn nav_title(&self) -> &str {
        self.nav.title.as_deref().unwrap_or(&self.title)
    }

    pub fn terms_of_kind(&self, kind: TaxonomyKind) -> impl Iterator<Item = &TermSet> {
        self.terms.iter().filter(move |t| t.kind == kind)
    }
}
