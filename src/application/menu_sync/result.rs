//! Menu sync result

use serde::Serialize;

use crate::domain::value_objects::EntryId;

/// What one sync pass did to the menu
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuSyncResult {
    pub created: Vec<EntryId>,
    pub updated: Vec<EntryId>,
    /// Entries that were rewritten with identical properties
    pub unchanged: Vec<EntryId>,
    pub deleted: Vec<EntryId>,
    /// Nodes walked, hidden ones included
    pub visited: usize,
    /// The nesting policy stopped the walk above some existing children
    pub truncated: bool,
}

impl MenuSyncResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the pass changed nothing
    pub fn is_noop(&self) -> bool {
        self.created.is_empty() && self.updated.is_empty() && self.deleted.is_empty()
    }

    pub fn change_count(&self) -> usize {
        self.created.len() + self.updated.len() + self.deleted.len()
    }
}
