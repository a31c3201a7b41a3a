//! Parent index over a flat node list
//!
//! Built once per render or sync pass. Children keep the input order, which
//! callers have already sorted. Published-children counts are computed in
//! the same pass so neither walk rescans the list per node.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::Node;
use crate::domain::value_objects::{NodeId, ROOT_NODE};

/// Adjacency index from parent id to ordered children
#[derive(Debug)]
pub struct TreeIndex<'a> {
    nodes: &'a [Node],
    children: HashMap<NodeId, Vec<usize>>,
    published_children: HashMap<NodeId, usize>,
    ids: HashSet<NodeId>,
}

impl<'a> TreeIndex<'a> {
    pub fn build(nodes: &'a [Node]) -> Self {
        let mut children: HashMap<NodeId, Vec<usize>> = HashMap::new();
        let mut published_children: HashMap<NodeId, usize> = HashMap::new();
        let mut ids = HashSet::with_capacity(nodes.len());

        for (idx, node) in nodes.iter().enumerate() {
            children.entry(node.parent_id).or_default().push(idx);
            if !node.is_trashed() {
                *published_children.entry(node.parent_id).or_default() += 1;
            }
            ids.insert(node.id);
        }

        Self {
            nodes,
            children,
            published_children,
            ids,
        }
    }

    /// Direct children of `parent`, in input order
    pub fn children(&self, parent: NodeId) -> impl Iterator<Item = &'a Node> + '_ {
        let nodes = self.nodes;
        self.children
            .get(&parent)
            .into_iter()
            .flatten()
            .map(move |&idx| &nodes[idx])
    }

    pub fn has_children(&self, parent: NodeId) -> bool {
        self.children.get(&parent).is_some_and(|c| !c.is_empty())
    }

    /// Number of direct children that are not trashed
    pub fn published_children_count(&self, id: NodeId) -> usize {
        self.published_children.get(&id).copied().unwrap_or(0)
    }

    /// Every descendant of `id` in pre-order
    pub fn descendants(&self, id: NodeId) -> Vec<&'a Node> {
        let mut out = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut stack: Vec<&'a Node> = self.children(id).collect();
        stack.reverse();

        while let Some(node) = stack.pop() {
            if !seen.insert(node.id) {
                continue;
            }
            out.push(node);
            let mut kids: Vec<&'a Node> = self.children(node.id).collect();
            kids.reverse();
            stack.extend(kids);
        }
        out
    }

    /// Nodes whose parent is neither the root nor present in the list
    pub fn orphans(&self) -> Vec<&'a Node> {
        self.nodes
            .iter()
            .filter(|n| n.parent_id != ROOT_NODE && !self.ids.contains(&n.parent_id))
            .collect()
    }
}
