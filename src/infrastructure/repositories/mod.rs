//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod json_site;
mod memory;
mod query;

pub use json_site::JsonSiteRepository;
pub use memory::{InMemoryContent, InMemoryMenu, InMemorySite};
