//! Node adapter
//!
//! Normalizes raw host records into [`Node`]s: parses status and type,
//! reads navigation settings out of post meta with defaults for anything
//! missing or malformed, and attaches the terms of the requested taxonomies.

use tracing::debug;

use crate::domain::entities::{NavSettings, Node, PostRecord, Taxonomy, TermSet};
use crate::domain::value_objects::{NodeType, PostStatus, Visibility};

/// Post meta keys read by the adapter
pub mod meta_keys {
    pub const NAV_STATUS: &str = "np_nav_status";
    pub const NAV_TITLE: &str = "np_nav_title";
    pub const NAV_TITLE_ATTR: &str = "np_title_attribute";
    pub const NAV_CSS: &str = "np_nav_css_classes";
    pub const NAV_TYPE: &str = "np_nav_menu_item_type";
    pub const NAV_OBJECT: &str = "np_nav_menu_item_object";
    pub const NAV_OBJECT_ID: &str = "np_nav_menu_item_object_id";
    pub const LINK_TARGET: &str = "np_link_target";
    pub const LISTING_STATUS: &str = "nested_pages_status";
}

/// Builds [`Node`]s from [`PostRecord`]s
#[derive(Debug, Clone, Copy)]
pub struct NodeAdapter<'t> {
    hierarchical: &'t [Taxonomy],
    flat: &'t [Taxonomy],
}

impl NodeAdapter<'static> {
    /// Adapter that attaches no taxonomy terms
    pub fn plain() -> Self {
        Self {
            hierarchical: &[],
            flat: &[],
        }
    }
}

impl<'t> NodeAdapter<'t> {
    pub fn new(hierarchical: &'t [Taxonomy], flat: &'t [Taxonomy]) -> Self {
        Self { hierarchical, flat }
    }

    pub fn build(&self, record: &PostRecord) -> Node {
        let status = PostStatus::parse(&record.status).unwrap_or_else(|| {
            debug!(id = record.id, status = %record.status, "unknown post status, treating as draft");
            PostStatus::Draft
        });

        Node {
            id: record.id,
            parent_id: record.parent,
            status,
            menu_order: record.menu_order,
            title: record.title.clone(),
            content: record.content.clone(),
            node_type: NodeType::from_post_type(&record.post_type),
            author: record.author,
            date: record.date,
            listing_status: Visibility::from_meta(record.meta_value(meta_keys::LISTING_STATUS)),
            nav: nav_settings(record),
            terms: self.terms(record),
        }
    }

    pub fn build_all(&self, records: &[PostRecord]) -> Vec<Node> {
        records.iter().map(|r| self.build(r)).collect()
    }

    fn terms(&self, record: &PostRecord) -> Vec<TermSet> {
        self.hierarchical
            .iter()
            .chain(self.flat.iter())
            .filter_map(|taxonomy| {
                let ids = record.terms.get(&taxonomy.name)?;
                let mut term_ids: Vec<u64> = Vec::with_capacity(ids.len());
                for id in ids {
                    if !term_ids.contains(id) {
                        term_ids.push(*id);
                    }
                }
                if term_ids.is_empty() {
                    return None;
                }
                Some(TermSet {
                    taxonomy: taxonomy.name.clone(),
                    kind: taxonomy.kind,
                    term_ids,
                })
            })
            .collect()
    }
}

fn nav_settings(record: &PostRecord) -> NavSettings {
    let owned = |key: &str| record.meta_value(key).map(str::to_string);

    NavSettings {
        status: Visibility::from_meta(record.meta_value(meta_keys::NAV_STATUS)),
        title: owned(meta_keys::NAV_TITLE),
        title_attr: owned(meta_keys::NAV_TITLE_ATTR).unwrap_or_default(),
        css_classes: owned(meta_keys::NAV_CSS).unwrap_or_default(),
        nav_type: owned(meta_keys::NAV_TYPE),
        object: owned(meta_keys::NAV_OBJECT),
        object_id: record
            .meta_value(meta_keys::NAV_OBJECT_ID)
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|id| *id != 0),
        link_target: owned(meta_keys::LINK_TARGET).unwrap_or_default(),
    }
}
