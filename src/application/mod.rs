//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ListingUseCase` - Fetch, adapt and render the nested page listing
//! - `MenuSyncUseCase` - Mirror the published page tree into the menu

pub mod listing;
pub mod menu_sync;

pub use listing::{
    DefaultRowTemplate, LevelKind, ListItem, ListLevel, Listing, ListingOptions, ListingRenderer,
    ListingRequest, ListingUseCase, RowTemplate,
};
pub use menu_sync::{menu_fields, MenuSyncResult, MenuSyncUseCase};
