//! Listing options

use crate::domain::value_objects::{PAGE_POST_TYPE, REDIRECT_POST_TYPE};

/// Per-screen settings of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingOptions {
    /// Post type the listing is for
    pub post_type: String,
    /// Whether the current user may drag-reorder rows
    pub sortable: bool,
    /// When set, redirect links are left out of the page listing
    pub menus_disabled: bool,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self::new(PAGE_POST_TYPE)
    }
}

impl ListingOptions {
    pub fn new(post_type: impl Into<String>) -> Self {
        Self {
            post_type: post_type.into(),
            sortable: true,
            menus_disabled: false,
        }
    }

    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn with_menus_disabled(mut self, menus_disabled: bool) -> Self {
        self.menus_disabled = menus_disabled;
        self
    }

    /// Post types fetched for this listing
    pub fn post_types(&self) -> Vec<String> {
        let mut types = vec![self.post_type.clone()];
        if self.post_type == PAGE_POST_TYPE && !self.menus_disabled {
            types.push(REDIRECT_POST_TYPE.to_string());
        }
        types
    }
}
