//! Listing request parameters
//!
//! Sort, author, search and category values arrive as untrusted strings.
//! Everything is sanitized and whitelisted here before it can shape a query.

use tracing::debug;

use crate::domain::policies::sanitize_text_field;
use crate::domain::ports::NodeQuery;
use crate::domain::value_objects::{SortKey, SortOrder};

/// Taxonomy the `category` request parameter filters on
pub const CATEGORY_TAXONOMY: &str = "category";

/// Sanitized listing parameters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingRequest {
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub author: Option<u64>,
    /// Non-empty title search; switches the listing to flat search mode
    pub search: Option<String>,
    /// Category term id; `None` for "all"
    pub category: Option<u64>,
}

impl ListingRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw request parameters (`orderby`, `order`, `author`,
    /// `search`, `category`). Unknown keys are ignored.
    pub fn from_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut request = Self::default();

        for (key, value) in params {
            let value = sanitize_text_field(value.as_ref());
            match key.as_ref() {
                "orderby" => match SortKey::parse(&value) {
                    Some(key) => request.sort_key = key,
                    None => debug!(orderby = %value, "ignoring unsupported sort column"),
                },
                "order" => {
                    if let Some(order) = SortOrder::parse(&value) {
                        request.sort_order = order;
                    }
                }
                "author" => request.author = value.parse::<u64>().ok().filter(|id| *id != 0),
                "search" => request.search = Some(value).filter(|s| !s.is_empty()),
                "category" => request.category = parse_category(&value),
                _ => {}
            }
        }

        request
    }

    pub fn with_sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_key = key;
        self.sort_order = order;
        self
    }

    pub fn with_author(mut self, author: u64) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(sanitize_text_field(search)).filter(|s| !s.is_empty());
        self
    }

    pub fn with_category(mut self, term_id: u64) -> Self {
        self.category = Some(term_id);
        self
    }

    pub fn is_search(&self) -> bool {
        self.search.is_some()
    }

    pub fn is_filtered(&self) -> bool {
        self.category.is_some()
    }

    /// The fetch this request asks for over `post_types`
    pub fn to_query(&self, post_types: Vec<String>) -> NodeQuery {
        let mut query = NodeQuery::new(post_types)
            .with_sort(self.sort_key, self.sort_order)
            .with_author(self.author);

        if let Some(search) = &self.search {
            query = query.with_title_like(search.clone());
        }
        if let Some(term_id) = self.category {
            query = query.with_term(CATEGORY_TAXONOMY, term_id);
        }
        query
    }
}

fn parse_category(value: &str) -> Option<u64> {
    if value.is_empty() || value.eq_ignore_ascii_case("all") {
        return None;
    }
    let parsed = value.parse::<u64>().ok();
    if parsed.is_none() {
        debug!(category = %value, "ignoring non-numeric category filter");
    }
    parsed
}
