//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod node_type;
mod post_status;
mod sort;
mod visibility;

pub use node_type::{NodeType, PAGE_POST_TYPE, REDIRECT_POST_TYPE};
pub use post_status::PostStatus;
pub use sort::{SortKey, SortOrder};
pub use visibility::Visibility;

/// Identifier of a content record. `0` is the virtual root.
pub type NodeId = u64;

/// Identifier of a menu entry. `0` means "no parent entry".
pub type EntryId = u64;

/// Parent id of top-level nodes
pub const ROOT_NODE: NodeId = 0;

/// Parent reference of top-level menu entries
pub const ROOT_ENTRY: EntryId = 0;
