//! Node type value object
//!
//! Discriminates ordinary pages, redirect links and any other post type
//! the host hands us.

/// Post type name of ordinary pages
pub const PAGE_POST_TYPE: &str = "page";

/// Post type name of redirect links (menu-only link records)
pub const REDIRECT_POST_TYPE: &str = "np-redirect";

/// Kind of content record behind a node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NodeType {
    #[default]
    Page,
    RedirectLink,
    Other(String),
}

impl NodeType {
    pub fn from_post_type(post_type: &str) -> Self {
        match post_type {
            PAGE_POST_TYPE => NodeType::Page,
            REDIRECT_POST_TYPE => NodeType::RedirectLink,
            other => NodeType::Other(other.to_string()),
        }
    }

    /// Host post type name
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Page => PAGE_POST_TYPE,
            NodeType::RedirectLink => REDIRECT_POST_TYPE,
            NodeType::Other(name) => name,
        }
    }

    pub fn is_page(&self) -> bool {
        matches!(self, NodeType::Page)
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, NodeType::RedirectLink)
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
