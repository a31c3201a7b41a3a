//! MenuRepository port - the external navigation menu store
//!
//! The synchronizer mutates the store one entry at a time and never
//! rebuilds it wholesale, so entry ids survive repeated syncs.

use crate::domain::entities::{MenuEntry, MenuEntryFields};
use crate::domain::value_objects::{EntryId, NodeId};

use super::repository_error::RepositoryResult;

/// How a node is matched back to its menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Page entry (`xfn == "page"`) whose object id equals the node id.
    /// Links that merely target the page do not match.
    ObjectId,
    /// Entry's relation key (`xfn`) equals the node id (redirect links)
    Relation,
}

/// Mutable navigation menu
pub trait MenuRepository {
    /// Entry currently representing `node_id`, if any
    fn find_menu_entry(&self, node_id: NodeId, mode: MatchMode)
        -> RepositoryResult<Option<EntryId>>;

    /// Read a single entry
    fn entry(&self, id: EntryId) -> RepositoryResult<Option<MenuEntry>>;

    /// Create (`existing == None`) or overwrite an entry under `parent`.
    ///
    /// Returns the id of the written entry.
    fn upsert_menu_entry(
        &mut self,
        parent: EntryId,
        existing: Option<EntryId>,
        fields: &MenuEntryFields,
    ) -> RepositoryResult<EntryId>;

    /// Remove an entry. Removing a missing entry is not an error.
    fn delete_menu_entry(&mut self, id: EntryId) -> RepositoryResult<()>;

    /// Every entry, in storage order
    fn entries(&self) -> RepositoryResult<Vec<MenuEntry>>;
}

impl<T: MenuRepository + ?Sized> MenuRepository for &mut T {
    fn find_menu_entry(
        &self,
        node_id: NodeId,
        mode: MatchMode,
    ) -> RepositoryResult<Option<EntryId>> {
        (**self).find_menu_entry(node_id, mode)
    }

    fn entry(&self, id: EntryId) -> RepositoryResult<Option<MenuEntry>> {
        (**self).entry(id)
    }

    fn upsert_menu_entry(
        &mut self,
        parent: EntryId,
        existing: Option<EntryId>,
        fields: &MenuEntryFields,
    ) -> RepositoryResult<EntryId> {
        (**self).upsert_menu_entry(parent, existing, fields)
    }

    fn delete_menu_entry(&mut self, id: EntryId) -> RepositoryResult<()> {
        (**self).delete_menu_entry(id)
    }

    fn entries(&self) -> RepositoryResult<Vec<MenuEntry>> {
        (**self).entries()
    }
}
