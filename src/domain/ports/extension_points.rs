//! Extension points
//!
//! Hosts customize both tree walks through these strategies instead of
//! global hooks: a [`QueryModifier`] rewrites fetch arguments and a
//! [`NestingPolicy`] decides whether a walk may descend further.

use super::node_repository::NodeQuery;

/// Where a query modifier is being invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionPoint {
    /// Fetch for the admin page listing
    PageListing,
    /// Fetch for the menu synchronizer
    PageMenu,
}

/// Rewrites node queries before they reach the repository
pub trait QueryModifier {
    fn modify(&self, point: ExtensionPoint, query: NodeQuery) -> NodeQuery;
}

/// Leaves every query untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopQueryModifier;

impl QueryModifier for NoopQueryModifier {
    fn modify(&self, _point: ExtensionPoint, query: NodeQuery) -> NodeQuery {
        query
    }
}

impl<F> QueryModifier for F
where
    F: Fn(ExtensionPoint, NodeQuery) -> NodeQuery,
{
    fn modify(&self, point: ExtensionPoint, query: NodeQuery) -> NodeQuery {
        self(point, query)
    }
}

/// Decides whether a tree walk may descend below `level`
pub trait NestingPolicy {
    fn continue_nesting(&self, level: u32) -> bool;
}

impl<F> NestingPolicy for F
where
    F: Fn(u32) -> bool,
{
    fn continue_nesting(&self, level: u32) -> bool {
        self(level)
    }
}
