//! Row decoration derived from status, listing visibility and terms

use crate::domain::entities::{Node, TaxonomyKind};
use crate::domain::policies::sanitize_html_class;
use crate::domain::value_objects::PostStatus;

/// Css classes of a listing row, `page-row` first
pub fn row_classes(node: &Node) -> Vec<String> {
    let mut classes = vec!["page-row".to_string()];

    match node.status {
        PostStatus::Publish => classes.push("published".to_string()),
        PostStatus::Draft => classes.push("draft".to_string()),
        _ => {}
    }

    if node.listing_status.is_hidden() {
        classes.push("np-hide".to_string());
    }

    classes.extend(taxonomy_classes(node));
    classes
}

/// `in-<taxonomy>-<term>` for hierarchical terms, then
/// `inf-<taxonomy>-nps-<term>` for flat terms
pub fn taxonomy_classes(node: &Node) -> Vec<String> {
    let mut classes = Vec::new();

    for set in node.terms_of_kind(TaxonomyKind::Hierarchical) {
        let name = sanitize_html_class(&set.taxonomy);
        for term in &set.term_ids {
            classes.push(format!("in-{}-{}", name, term));
        }
    }

    for set in node.terms_of_kind(TaxonomyKind::Flat) {
        let name = sanitize_html_class(&set.taxonomy);
        for term in &set.term_ids {
            classes.push(format!("inf-{}-nps-{}", name, term));
        }
    }

    classes
}
