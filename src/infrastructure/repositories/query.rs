//! Query evaluation over in-memory records

use std::cmp::Ordering;

use crate::domain::entities::PostRecord;
use crate::domain::ports::NodeQuery;
use crate::domain::value_objects::{PostStatus, SortKey};

/// Records matching `query`, sorted as it asks. Ties keep input order.
pub(crate) fn apply_query(records: &[PostRecord], query: &NodeQuery) -> Vec<PostRecord> {
    let needle = query.title_like.as_ref().map(|s| s.to_lowercase());

    let mut matched: Vec<PostRecord> = records
        .iter()
        .filter(|r| query.post_types.iter().any(|t| *t == r.post_type))
        .filter(|r| {
            let status = PostStatus::parse(&r.status).unwrap_or(PostStatus::Draft);
            query.statuses.contains(&status)
        })
        .filter(|r| query.author.map_or(true, |author| r.author == author))
        .filter(|r| {
            needle
                .as_ref()
                .map_or(true, |needle| r.title.to_lowercase().contains(needle.as_str()))
        })
        .filter(|r| {
            query.term.as_ref().map_or(true, |term| {
                r.terms
                    .get(&term.taxonomy)
                    .is_some_and(|ids| ids.contains(&term.term_id))
            })
        })
        .cloned()
        .collect();

    matched.sort_by(|a, b| query.sort_order.apply(compare(query.sort_key, a, b)));
    matched
}

fn compare(key: SortKey, a: &PostRecord, b: &PostRecord) -> Ordering {
    match key {
        SortKey::MenuOrder => a.menu_order.cmp(&b.menu_order),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Author => a.author.cmp(&b.author),
    }
}
