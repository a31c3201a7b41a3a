//! TaxonomyRepository port

use crate::domain::entities::Taxonomy;

use super::repository_error::RepositoryResult;

/// Source of taxonomy metadata for a post type
pub trait TaxonomyRepository {
    /// Taxonomies registered for `post_type` of the requested kind
    fn list_taxonomies(&self, post_type: &str, hierarchical: bool)
        -> RepositoryResult<Vec<Taxonomy>>;
}

impl<T: TaxonomyRepository + ?Sized> TaxonomyRepository for &T {
    fn list_taxonomies(
        &self,
        post_type: &str,
        hierarchical: bool,
    ) -> RepositoryResult<Vec<Taxonomy>> {
        (**self).list_taxonomies(post_type, hierarchical)
    }
}
