//! Row bodies

use crate::domain::entities::Node;
use crate::domain::policies::{escape_html, sanitize_url};

/// Placeholder shown for untitled nodes
pub const UNTITLED: &str = "(no title)";

/// Produces the body of one listing row
///
/// Hosts plug in their own template to render actions, authors or
/// thumbnails; the renderer only owns the list structure around it.
/// `published_children` is at least the size of the row's nested list,
/// which may hold grandchildren lifted out of a trashed child.
pub trait RowTemplate {
    fn render_row(&self, node: &Node, published_children: usize) -> String;
}

impl<F> RowTemplate for F
where
    F: Fn(&Node, usize) -> String,
{
    fn render_row(&self, node: &Node, published_children: usize) -> String {
        self(node, published_children)
    }
}

/// Title row with a child toggle when there is something to expand
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRowTemplate;

impl RowTemplate for DefaultRowTemplate {
    fn render_row(&self, node: &Node, published_children: usize) -> String {
        let title = if node.title.trim().is_empty() {
            UNTITLED.to_string()
        } else {
            escape_html(&node.title)
        };
        let toggle = if published_children > 0 {
            r#"<div class="child-toggle"></div>"#
        } else {
            ""
        };

        if node.node_type.is_redirect() {
            format!(
                r#"<div class="row row-link">{toggle}<a class="title" href="{}">{title}</a></div>"#,
                escape_html(&sanitize_url(&node.content))
            )
        } else {
            format!(r#"<div class="row">{toggle}<span class="title">{title}</span></div>"#)
        }
    }
}
