//! ListingStateRepository port
//!
//! The per-user set of expanded listing rows, maintained by the client-side
//! toggle UI and stored by the host.

use crate::domain::value_objects::NodeId;

use super::repository_error::RepositoryResult;

/// Source of the caller's expanded-row state
pub trait ListingStateRepository {
    /// Node ids whose child lists are expanded for `post_type`
    fn visible_pages(&self, post_type: &str) -> RepositoryResult<Vec<NodeId>>;
}

impl<T: ListingStateRepository + ?Sized> ListingStateRepository for &T {
    fn visible_pages(&self, post_type: &str) -> RepositoryResult<Vec<NodeId>> {
        (**self).visible_pages(post_type)
    }
}
