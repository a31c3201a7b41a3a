//! Listing use case
//!
//! Fetches every node of the listed post types, adapts them, and hands the
//! sorted list to [`ListingRenderer`]. A failed fetch renders an empty
//! listing; a failed taxonomy or expanded-state lookup only drops the
//! decoration it would have provided.

use tracing::{debug, warn};

use crate::domain::entities::Taxonomy;
use crate::domain::ports::{
    ExtensionPoint, ListingStateRepository, NestingPolicy, NodeQuery, NodeRepository,
    NoopQueryModifier, QueryModifier, TaxonomyRepository,
};
use crate::domain::policies::Unlimited;
use crate::domain::services::NodeAdapter;
use crate::error::{NestedPagesError, NestedPagesResult};

use super::model::Listing;
use super::options::ListingOptions;
use super::render::ListingRenderer;
use super::request::ListingRequest;
use super::row::{DefaultRowTemplate, RowTemplate};

/// Listing use case, parameterized by the host's stores
pub struct ListingUseCase<NR, TR, SR>
where
    NR: NodeRepository,
    TR: TaxonomyRepository,
    SR: ListingStateRepository,
{
    options: ListingOptions,
    nodes: NR,
    taxonomies: TR,
    state: SR,
    query_modifier: Box<dyn QueryModifier>,
    nesting: Box<dyn NestingPolicy>,
    rows: Box<dyn RowTemplate>,
}

impl<NR, TR, SR> ListingUseCase<NR, TR, SR>
where
    NR: NodeRepository,
    TR: TaxonomyRepository,
    SR: ListingStateRepository,
{
    /// Fails when the host does not know `options.post_type`
    pub fn new(options: ListingOptions, nodes: NR, taxonomies: TR, state: SR) -> NestedPagesResult<Self> {
        if !nodes.has_post_type(&options.post_type) {
            return Err(NestedPagesError::UnknownPostType {
                post_type: options.post_type,
            });
        }

        Ok(Self {
            options,
            nodes,
            taxonomies,
            state,
            query_modifier: Box::new(NoopQueryModifier),
            nesting: Box::new(Unlimited),
            rows: Box::new(DefaultRowTemplate),
        })
    }

    pub fn with_query_modifier(mut self, modifier: impl QueryModifier + 'static) -> Self {
        self.query_modifier = Box::new(modifier);
        self
    }

    pub fn with_nesting(mut self, nesting: impl NestingPolicy + 'static) -> Self {
        self.nesting = Box::new(nesting);
        self
    }

    pub fn with_boxed_nesting(mut self, nesting: Box<dyn NestingPolicy>) -> Self {
        self.nesting = nesting;
        self
    }

    pub fn with_row_template(mut self, rows: impl RowTemplate + 'static) -> Self {
        self.rows = Box::new(rows);
        self
    }

    pub fn options(&self) -> &ListingOptions {
        &self.options
    }

    /// The fetch issued for `request`, after the host's modifier
    pub fn query_for(&self, request: &ListingRequest) -> NodeQuery {
        let query = request.to_query(self.options.post_types());
        self.query_modifier.modify(ExtensionPoint::PageListing, query)
    }

    pub fn render(&self, request: &ListingRequest) -> Listing {
        let query = self.query_for(request);
        let records = match self.nodes.fetch_nodes(&query) {
            Ok(records) => records,
            Err(err) => {
                warn!(post_type = %self.options.post_type, error = %err, "node fetch failed, rendering nothing");
                return Listing::empty();
            }
        };

        let hierarchical = self.taxonomies_of_kind(true);
        let flat = self.taxonomies_of_kind(false);
        let nodes = NodeAdapter::new(&hierarchical, &flat).build_all(&records);

        let expanded = self
            .state
            .visible_pages(&self.options.post_type)
            .unwrap_or_else(|err| {
                warn!(error = %err, "expanded-state lookup failed, collapsing all groups");
                Vec::new()
            });

        let listing = ListingRenderer::new(&self.options.post_type, &*self.nesting, &*self.rows)
            .sortable(self.options.sortable && !request.is_search())
            .search_mode(request.is_search())
            .expanded(expanded)
            .render(&nodes);

        debug!(
            post_type = %self.options.post_type,
            fetched = records.len(),
            items = listing.item_count(),
            search = request.is_search(),
            "rendered listing"
        );
        listing
    }

    fn taxonomies_of_kind(&self, hierarchical: bool) -> Vec<Taxonomy> {
        self.taxonomies
            .list_taxonomies(&self.options.post_type, hierarchical)
            .unwrap_or_else(|err| {
                warn!(error = %err, hierarchical, "taxonomy lookup failed, rows get no term classes");
                Vec::new()
            })
    }
}
