//! Rendered listing model
//!
//! The renderer produces a typed nesting of lists and items. Markup is only
//! produced by [`Listing::to_html`], so every opened container is closed.

use std::fmt::Write as _;

use crate::domain::policies::escape_html;
use crate::domain::value_objects::NodeId;

/// Which kind of list a level is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelKind {
    /// Top-level list of a hierarchical listing
    Root { sortable: bool },
    /// Children of an item; `expanded` when the user left the group open
    Nested { expanded: bool },
    /// Flat list of search results
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLevel {
    pub kind: LevelKind,
    pub post_type: String,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub node_id: NodeId,
    pub classes: Vec<String>,
    /// Pre-rendered row body
    pub row: String,
    pub published_children: usize,
    pub children: Option<ListLevel>,
}

/// Result of a listing pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Listing {
    pub root: Option<ListLevel>,
}

impl Listing {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(root: ListLevel) -> Self {
        Self { root: Some(root) }
    }

    pub fn is_empty(&self) -> bool {
        self.root.as_ref().map_or(true, |level| level.items.is_empty())
    }

    /// Item ids in document order
    pub fn item_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        if let Some(root) = &self.root {
            root.collect_ids(&mut ids);
        }
        ids
    }

    pub fn item_count(&self) -> usize {
        self.item_ids().len()
    }

    /// Number of `<ol>` containers, root included
    pub fn container_count(&self) -> usize {
        self.root.as_ref().map_or(0, ListLevel::container_count)
    }

    /// Deepest list nesting; 1 for a flat listing, 0 when empty
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, ListLevel::depth)
    }

    pub fn find(&self, id: NodeId) -> Option<&ListItem> {
        self.root.as_ref().and_then(|level| level.find(id))
    }

    /// Serialize as nested `<ol>`/`<li>` markup, one tag per line
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.root.as_ref().filter(|level| !level.items.is_empty()) {
            root.write_html(&mut out, 0);
        }
        out
    }
}

impl ListLevel {
    pub fn new(kind: LevelKind, post_type: impl Into<String>, items: Vec<ListItem>) -> Self {
        Self {
            kind,
            post_type: post_type.into(),
            items,
        }
    }

    /// True when the level is rendered open
    pub fn is_visible(&self) -> bool {
        !matches!(self.kind, LevelKind::Nested { expanded: false })
    }

    fn collect_ids(&self, ids: &mut Vec<NodeId>) {
        for item in &self.items {
            ids.push(item.node_id);
            if let Some(children) = &item.children {
                children.collect_ids(ids);
            }
        }
    }

    fn container_count(&self) -> usize {
        1 + self
            .items
            .iter()
            .filter_map(|item| item.children.as_ref())
            .map(ListLevel::container_count)
            .sum::<usize>()
    }

    fn depth(&self) -> usize {
        1 + self
            .items
            .iter()
            .filter_map(|item| item.children.as_ref())
            .map(ListLevel::depth)
            .max()
            .unwrap_or(0)
    }

    fn find(&self, id: NodeId) -> Option<&ListItem> {
        self.items.iter().find_map(|item| {
            if item.node_id == id {
                Some(item)
            } else {
                item.children.as_ref().and_then(|level| level.find(id))
            }
        })
    }

    fn open_tag(&self) -> String {
        let id = escape_html(&self.post_type);
        match self.kind {
            LevelKind::Root { sortable: true } => {
                format!(r#"<ol class="sortable nplist visible" id="np-{id}">"#)
            }
            LevelKind::Root { sortable: false } => {
                format!(r#"<ol class="sortable no-sort nplist visible" id="np-{id}">"#)
            }
            LevelKind::Nested { expanded: true } => {
                format!(r#"<ol class="nplist visible" id="np-{id}" style="display:block;">"#)
            }
            LevelKind::Nested { expanded: false } => format!(r#"<ol class="nplist" id="np-{id}">"#),
            LevelKind::Search => r#"<ol class="sortable no-sort nplist visible">"#.to_string(),
        }
    }

    fn write_html(&self, out: &mut String, indent: usize) {
        let pad = "  ".repeat(indent);
        let _ = writeln!(out, "{pad}{}", self.open_tag());
        for item in &self.items {
            item.write_html(out, indent + 1);
        }
        let _ = writeln!(out, "{pad}</ol>");
    }
}

impl ListItem {
    fn write_html(&self, out: &mut String, indent: usize) {
        let pad = "  ".repeat(indent);
        let _ = writeln!(
            out,
            r#"{pad}<li id="menuItem_{}" class="{}">"#,
            self.node_id,
            escape_html(&self.classes.join(" "))
        );
        let _ = writeln!(out, "{pad}  {}", self.row);
        if let Some(children) = self.children.as_ref().filter(|level| !level.items.is_empty()) {
            children.write_html(out, indent + 1);
        }
        let _ = writeln!(out, "{pad}</li>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: NodeId, children: Option<ListLevel>) -> ListItem {
        ListItem {
            node_id: id,
            classes: vec!["page-row".to_string(), "published".to_string()],
            row: format!("<div class=\"row\">{id}</div>"),
            published_children: 0,
            children,
        }
    }

    #[test]
    fn empty_listing_renders_nothing() {
        assert_eq!(Listing::empty().to_html(), "");
        assert!(Listing::empty().is_empty());
        assert_eq!(Listing::empty().depth(), 0);
    }

    #[test]
    fn nested_markup_is_balanced() {
        let nested = ListLevel::new(LevelKind::Nested { expanded: false }, "page", vec![item(2, None)]);
        let listing = Listing::new(ListLevel::new(
            LevelKind::Root { sortable: true },
            "page",
            vec![item(1, Some(nested))],
        ));

        let html = listing.to_html();
        assert_eq!(html.matches("<ol").count(), html.matches("</ol>").count());
        assert_eq!(html.matches("<li").count(), html.matches("</li>").count());
        assert_eq!(
            html,
            "<ol class=\"sortable nplist visible\" id=\"np-page\">\n  <li id=\"menuItem_1\" class=\"page-row published\">\n    <div class=\"row\">1</div>\n    <ol class=\"nplist\" id=\"np-page\">\n      <li id=\"menuItem_2\" class=\"page-row published\">\n        <div class=\"row\">2</div>\n      </li>\n    </ol>\n  </li>\n</ol>\n"
        );
    }

    #[test]
    fn expanded_group_is_displayed() {
        let level = ListLevel::new(LevelKind::Nested { expanded: true }, "page", vec![item(3, None)]);
        assert!(level.is_visible());
        assert!(level.open_tag().contains("style=\"display:block;\""));
    }

    #[test]
    fn search_list_has_no_id() {
        let level = ListLevel::new(LevelKind::Search, "page", vec![item(3, None)]);
        assert_eq!(level.open_tag(), "<ol class=\"sortable no-sort nplist visible\">");
    }

    #[test]
    fn counts_and_lookup() {
        let nested = ListLevel::new(LevelKind::Nested { expanded: false }, "page", vec![item(2, None), item(3, None)]);
        let listing = Listing::new(ListLevel::new(
            LevelKind::Root { sortable: false },
            "page",
            vec![item(1, Some(nested)), item(4, None)],
        ));

        assert_eq!(listing.item_ids(), vec![1, 2, 3, 4]);
        assert_eq!(listing.container_count(), 2);
        assert_eq!(listing.depth(), 2);
        assert_eq!(listing.find(3).map(|i| i.node_id), Some(3));
        assert!(listing.find(9).is_none());
    }
}
