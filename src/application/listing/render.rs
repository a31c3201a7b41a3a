//! Tree builder
//!
//! Walks the parent index once, depth-first from the root. Trashed nodes get
//! no item of their own; their rendered children are spliced into the
//! enclosing list in their place. Nested lists are only created when they
//! have items.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::entities::Node;
use crate::domain::ports::NestingPolicy;
use crate::domain::services::{row_classes, TreeIndex};
use crate::domain::value_objects::{NodeId, ROOT_NODE};

use super::model::{LevelKind, ListItem, ListLevel, Listing};
use super::row::RowTemplate;

/// Renders one listing pass over an already sorted node list
pub struct ListingRenderer<'a> {
    post_type: &'a str,
    nesting: &'a dyn NestingPolicy,
    rows: &'a dyn RowTemplate,
    sortable: bool,
    search: bool,
    expanded: HashSet<NodeId>,
}

impl<'a> ListingRenderer<'a> {
    pub fn new(post_type: &'a str, nesting: &'a dyn NestingPolicy, rows: &'a dyn RowTemplate) -> Self {
        Self {
            post_type,
            nesting,
            rows,
            sortable: true,
            search: false,
            expanded: HashSet::new(),
        }
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Render a single flat list instead of the hierarchy
    pub fn search_mode(mut self, search: bool) -> Self {
        self.search = search;
        self
    }

    /// Ids the user left expanded
    pub fn expanded(mut self, ids: impl IntoIterator<Item = NodeId>) -> Self {
        self.expanded = ids.into_iter().collect();
        self
    }

    pub fn render(&self, nodes: &[Node]) -> Listing {
        let index = TreeIndex::build(nodes);

        if self.search {
            return self.render_flat(nodes, &index);
        }

        let orphans = index.orphans();
        if !orphans.is_empty() {
            debug!(count = orphans.len(), "skipping nodes whose parent is not listed");
        }

        let mut visited = HashSet::new();
        let items = self.build_level(&index, ROOT_NODE, 1, &mut visited);
        if items.is_empty() {
            return Listing::empty();
        }

        Listing::new(ListLevel::new(
            LevelKind::Root {
                sortable: self.sortable,
            },
            self.post_type,
            items,
        ))
    }

    fn build_level(
        &self,
        index: &TreeIndex<'_>,
        parent: NodeId,
        level: u32,
        visited: &mut HashSet<NodeId>,
    ) -> Vec<ListItem> {
        let descend = self.nesting.continue_nesting(level);
        let mut items = Vec::new();

        for node in index.children(parent) {
            if !visited.insert(node.id) {
                debug!(id = node.id, "node reached twice, parent cycle");
                continue;
            }

            let children = if descend {
                self.build_level(index, node.id, level + 1, visited)
            } else {
                Vec::new()
            };

            if node.is_trashed() {
                items.extend(children);
                continue;
            }

            let nested = if children.is_empty() {
                None
            } else {
                Some(self.nested_level(children))
            };
            items.push(self.item(node, index, nested));
        }

        items
    }

    fn nested_level(&self, items: Vec<ListItem>) -> ListLevel {
        let expanded = items.iter().any(|item| self.expanded.contains(&item.node_id));
        ListLevel::new(LevelKind::Nested { expanded }, self.post_type, items)
    }

    fn item(&self, node: &Node, index: &TreeIndex<'_>, children: Option<ListLevel>) -> ListItem {
        let published_children = index.published_children_count(node.id);
        // a nested list of spliced grandchildren still needs a toggle
        let toggle_children = match &children {
            Some(level) => published_children.max(level.items.len()),
            None => published_children,
        };
        ListItem {
            node_id: node.id,
            classes: row_classes(node),
            row: self.rows.render_row(node, toggle_children),
            published_children,
            children,
        }
    }

    fn render_flat(&self, nodes: &[Node], index: &TreeIndex<'_>) -> Listing {
        let items: Vec<ListItem> = nodes
            .iter()
            .filter(|node| !node.is_trashed())
            .map(|node| self.item(node, index, None))
            .collect();

        if items.is_empty() {
            return Listing::empty();
        }
        Listing::new(ListLevel::new(LevelKind::Search, self.post_type, items))
    }
}
