//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod node_adapter;
mod taxonomy_classes;
mod tree_index;

pub use node_adapter::{meta_keys, NodeAdapter};
pub use taxonomy_classes::{row_classes, taxonomy_classes};
pub use tree_index::TreeIndex;
