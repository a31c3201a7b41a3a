//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! The host platform (or the infrastructure layer) provides concrete
//! implementations.

pub mod extension_points;
pub mod listing_state;
pub mod menu_repository;
pub mod node_repository;
pub mod repository_error;
pub mod taxonomy_repository;

pub use extension_points::{ExtensionPoint, NestingPolicy, NoopQueryModifier, QueryModifier};
pub use listing_state::ListingStateRepository;
pub use menu_repository::{MatchMode, MenuRepository};
pub use node_repository::{NodeQuery, NodeRepository, TermFilter};
pub use repository_error::{RepositoryError, RepositoryResult};
pub use taxonomy_repository::TaxonomyRepository;
