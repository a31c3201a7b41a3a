//! Menu entry fields for a node

use crate::domain::entities::{MenuEntryFields, Node};
use crate::domain::policies::sanitize_url;

/// Link type and object used when a node declares none
pub const CUSTOM_LINK: &str = "custom";
/// Status of every synced entry
pub const ENTRY_STATUS: &str = "publish";

/// Properties the menu entry of `node` should carry at `position`.
///
/// Pages always link as `post_type`/`page` with their own id and the
/// relation key `page`, whatever nav type their meta declares. The url is
/// only set for custom links.
pub fn menu_fields(node: &Node, position: u32) -> MenuEntryFields {
    let nav = &node.nav;

    let (kind, object, object_id, xfn) = if node.node_type.is_page() {
        ("post_type".to_string(), "page".to_string(), Some(node.id), "page".to_string())
    } else {
        (
            nav.nav_type.clone().unwrap_or_else(|| CUSTOM_LINK.to_string()),
            nav.object.clone().unwrap_or_else(|| CUSTOM_LINK.to_string()),
            nav.object_id,
            node.id.to_string(),
        )
    };

    let url = if kind == CUSTOM_LINK {
        sanitize_url(&node.content)
    } else {
        String::new()
    };

    MenuEntryFields {
        title: node.nav_title().to_string(),
        url,
        attr_title: nav.title_attr.clone(),
        classes: nav.css_classes.clone(),
        kind,
        object,
        object_id,
        xfn,
        target: nav.link_target.clone(),
        position,
        status: ENTRY_STATUS.to_string(),
    }
}
