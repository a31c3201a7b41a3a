//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! - `repositories/` - In-memory site and its JSON snapshot store

pub mod repositories;

pub use repositories::{InMemoryContent, InMemoryMenu, InMemorySite, JsonSiteRepository};
