//! nestedpages - nested page listing and navigation menu sync
//!
//! Rebuilds a page tree from a flat list of records and either renders it
//! as a nested, sortable admin listing or mirrors it into a navigation menu.
//! Both walks run against repository ports so any host store can back them.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    Listing, ListingOptions, ListingRequest, ListingUseCase, MenuSyncResult, MenuSyncUseCase,
};
pub use config::Config;
pub use error::{NestedPagesError, NestedPagesResult};
pub use infrastructure::{InMemoryContent, InMemoryMenu, InMemorySite, JsonSiteRepository};
