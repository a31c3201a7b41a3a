//! Menu Sync Use Case
//!
//! Walks the published page tree in document order and reconciles the menu
//! against it:
//! 1. Look up the entry of each node (object id, or relation key for links)
//! 2. Hidden nodes lose their entry and the entries of their descendants
//! 3. Everything else is upserted under the entry of its parent
//! 4. Recurse into the node's children with the new entry as menu parent
//!
//! Positions come from one counter shared across the whole walk.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::domain::entities::Node;
use crate::domain::ports::{
    ExtensionPoint, MatchMode, MenuRepository, NestingPolicy, NodeQuery, NodeRepository,
    NoopQueryModifier, QueryModifier,
};
use crate::domain::policies::Unlimited;
use crate::domain::services::{NodeAdapter, TreeIndex};
use crate::domain::value_objects::{EntryId, NodeId, ROOT_ENTRY, ROOT_NODE};
use crate::error::NestedPagesResult;

use super::fields::menu_fields;
use super::result::MenuSyncResult;

/// Walk state threaded through the recursion
#[derive(Debug, Default)]
struct SyncContext {
    /// Shared across levels, bumped once per visited node
    position: u32,
    /// Bumped after a sibling group, lowered when a group is empty.
    /// This is the level handed to the nesting policy.
    depth: u32,
    visited: HashSet<NodeId>,
}

/// Menu synchronizer, parameterized by the node source and the menu store
pub struct MenuSyncUseCase<NR, MR>
where
    NR: NodeRepository,
    MR: MenuRepository,
{
    nodes: NR,
    menu: MR,
    query_modifier: Box<dyn QueryModifier>,
    nesting: Box<dyn NestingPolicy>,
}

impl<NR, MR> MenuSyncUseCase<NR, MR>
where
    NR: NodeRepository,
    MR: MenuRepository,
{
    pub fn new(nodes: NR, menu: MR) -> Self {
        Self {
            nodes,
            menu,
            query_modifier: Box::new(NoopQueryModifier),
            nesting: Box::new(Unlimited),
        }
    }

    pub fn with_query_modifier(mut self, modifier: impl QueryModifier + 'static) -> Self {
        self.query_modifier = Box::new(modifier);
        self
    }

    pub fn with_nesting(mut self, nesting: impl NestingPolicy + 'static) -> Self {
        self.nesting = Box::new(nesting);
        self
    }

    pub fn with_boxed_nesting(mut self, nesting: Box<dyn NestingPolicy>) -> Self {
        self.nesting = nesting;
        self
    }

    pub fn menu(&self) -> &MR {
        &self.menu
    }

    pub fn into_menu(self) -> MR {
        self.menu
    }

    /// The fetch issued by [`sync`](Self::sync), after the host's modifier
    pub fn query(&self) -> NodeQuery {
        self.query_modifier
            .modify(ExtensionPoint::PageMenu, NodeQuery::menu_sync())
    }

    /// Fetch published pages and links, then sync them.
    ///
    /// A failed fetch is logged and leaves the menu alone. Menu store
    /// failures abort the pass; entries written before the failure stay.
    pub fn sync(&mut self) -> NestedPagesResult<MenuSyncResult> {
        let query = self.query();
        let records = match self.nodes.fetch_nodes(&query) {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "node fetch failed, menu left untouched");
                return Ok(MenuSyncResult::new());
            }
        };

        let nodes = NodeAdapter::plain().build_all(&records);
        self.sync_nodes(&nodes)
    }

    /// Sync an already fetched and sorted node list
    pub fn sync_nodes(&mut self, nodes: &[Node]) -> NestedPagesResult<MenuSyncResult> {
        let index = TreeIndex::build(nodes);
        let mut ctx = SyncContext::default();
        let mut result = MenuSyncResult::new();

        self.sync_level(&index, ROOT_NODE, ROOT_ENTRY, &mut ctx, &mut result)?;

        info!(
            visited = result.visited,
            created = result.created.len(),
            updated = result.updated.len(),
            deleted = result.deleted.len(),
            truncated = result.truncated,
            "menu sync finished"
        );
        Ok(result)
    }

    fn sync_level(
        &mut self,
        index: &TreeIndex<'_>,
        parent: NodeId,
        menu_parent: EntryId,
        ctx: &mut SyncContext,
        result: &mut MenuSyncResult,
    ) -> NestedPagesResult<()> {
        if !self.nesting.continue_nesting(ctx.depth) {
            if index.has_children(parent) {
                debug!(parent, depth = ctx.depth, "nesting stopped, deeper entries left as they are");
                result.truncated = true;
            }
            return Ok(());
        }

        if !index.has_children(parent) {
            ctx.depth = ctx.depth.saturating_sub(1);
            return Ok(());
        }

        for node in index.children(parent) {
            if !ctx.visited.insert(node.id) {
                continue;
            }
            ctx.position += 1;
            self.sync_node(index, node, menu_parent, ctx, result)?;
        }

        ctx.depth += 1;
        Ok(())
    }

    fn sync_node(
        &mut self,
        index: &TreeIndex<'_>,
        node: &Node,
        menu_parent: EntryId,
        ctx: &mut SyncContext,
        result: &mut MenuSyncResult,
    ) -> NestedPagesResult<()> {
        result.visited += 1;
        let existing = self.menu.find_menu_entry(node.id, match_mode(node))?;

        if node.nav.status.is_hidden() {
            return self.remove_hidden(index, node, existing, result);
        }

        let fields = menu_fields(node, ctx.position);
        let before = match existing {
            Some(id) => self.menu.entry(id)?,
            None => None,
        };
        let entry_id = self.menu.upsert_menu_entry(menu_parent, existing, &fields)?;

        match before {
            Some(prev) if prev.id == entry_id => {
                if prev.matches(menu_parent, &fields) {
                    result.unchanged.push(entry_id);
                } else {
                    debug!(node = node.id, entry = entry_id, "updated menu entry");
                    result.updated.push(entry_id);
                }
            }
            _ => {
                debug!(node = node.id, entry = entry_id, parent = menu_parent, "created menu entry");
                result.created.push(entry_id);
            }
        }

        self.sync_level(index, node.id, entry_id, ctx, result)
    }

    fn remove_hidden(
        &mut self,
        index: &TreeIndex<'_>,
        node: &Node,
        existing: Option<EntryId>,
        result: &mut MenuSyncResult,
    ) -> NestedPagesResult<()> {
        if let Some(id) = existing {
            self.delete(id, node.id, result)?;
        }

        for descendant in index.descendants(node.id) {
            if let Some(id) = self.menu.find_menu_entry(descendant.id, match_mode(descendant))? {
                self.delete(id, descendant.id, result)?;
            }
        }
        Ok(())
    }

    fn delete(&mut self, id: EntryId, node: NodeId, result: &mut MenuSyncResult) -> NestedPagesResult<()> {
        self.menu.delete_menu_entry(id)?;
        debug!(node, entry = id, "removed menu entry of hidden node");
        result.deleted.push(id);
        Ok(())
    }
}

fn match_mode(node: &Node) -> MatchMode {
    if node.node_type.is_redirect() {
        MatchMode::Relation
    } else {
        MatchMode::ObjectId
    }
}
