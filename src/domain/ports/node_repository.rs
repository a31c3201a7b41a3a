//! NodeRepository port - fetches flat node lists from the host
//!
//! Implementations must honor every field of [`NodeQuery`] and must return
//! trashed records when the query asks for them; the renderer applies its
//! own trash rules.

use crate::domain::entities::PostRecord;
use crate::domain::value_objects::{
    PostStatus, SortKey, SortOrder, PAGE_POST_TYPE, REDIRECT_POST_TYPE,
};

use super::repository_error::RepositoryResult;

/// Restrict a fetch to records carrying one taxonomy term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermFilter {
    pub taxonomy: String,
    pub term_id: u64,
}

/// Arguments of a node fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeQuery {
    pub post_types: Vec<String>,
    pub statuses: Vec<PostStatus>,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub author: Option<u64>,
    /// Case-insensitive title substring
    pub title_like: Option<String>,
    pub term: Option<TermFilter>,
}

impl NodeQuery {
    /// All statuses of the given post types, in menu order
    pub fn new(post_types: Vec<String>) -> Self {
        Self {
            post_types,
            statuses: PostStatus::ALL.to_vec(),
            sort_key: SortKey::MenuOrder,
            sort_order: SortOrder::Asc,
            author: None,
            title_like: None,
            term: None,
        }
    }

    /// Published pages and redirect links in menu order
    pub fn menu_sync() -> Self {
        Self::new(vec![
            PAGE_POST_TYPE.to_string(),
            REDIRECT_POST_TYPE.to_string(),
        ])
        .with_statuses(vec![PostStatus::Publish])
    }

    pub fn with_statuses(mut self, statuses: Vec<PostStatus>) -> Self {
        self.statuses = statuses;
        self
    }

    pub fn with_sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_key = key;
        self.sort_order = order;
        self
    }

    pub fn with_author(mut self, author: Option<u64>) -> Self {
        self.author = author;
        self
    }

    pub fn with_title_like(mut self, title_like: impl Into<String>) -> Self {
        self.title_like = Some(title_like.into());
        self
    }

    pub fn with_term(mut self, taxonomy: impl Into<String>, term_id: u64) -> Self {
        self.term = Some(TermFilter {
            taxonomy: taxonomy.into(),
            term_id,
        });
        self
    }
}

/// Source of flat node lists
pub trait NodeRepository {
    /// Fetch every record matching `query`, sorted as it asks
    fn fetch_nodes(&self, query: &NodeQuery) -> RepositoryResult<Vec<PostRecord>>;

    /// Whether the host knows this post type
    fn has_post_type(&self, post_type: &str) -> bool;
}

impl<T: NodeRepository + ?Sized> NodeRepository for &T {
    fn fetch_nodes(&self, query: &NodeQuery) -> RepositoryResult<Vec<PostRecord>> {
        (**self).fetch_nodes(query)
    }

    fn has_post_type(&self, post_type: &str) -> bool {
        (**self).has_post_type(post_type)
    }
}
