//! Listing contracts (LISTING-001 through LISTING-005)

use nestedpages::application::{LevelKind, ListingOptions, ListingRequest, ListingUseCase};
use nestedpages::domain::entities::{Node, PostRecord};
use nestedpages::domain::services::TreeIndex;
use nestedpages::domain::value_objects::PostStatus;
use nestedpages::infrastructure::InMemoryContent;

use crate::common::*;

fn render(content: &InMemoryContent, request: &ListingRequest) -> nestedpages::Listing {
    ListingUseCase::new(ListingOptions::default(), content, content, content)
        .unwrap()
        .render(request)
}

/// CONTRACT LISTING-001: every live node is emitted exactly once
#[test]
fn contract_every_live_node_rendered_once() {
    let content = sample_content();
    let listing = render(&content, &ListingRequest::new());

    let mut ids = listing.item_ids();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 6, 7, 8]);
}

/// CONTRACT LISTING-002: published-children count excludes trash
#[test]
fn contract_published_children_excludes_trash() {
    let nodes = vec![
        Node::new(1, 0, PostStatus::Publish),
        Node::new(2, 1, PostStatus::Publish),
        Node::new(3, 1, PostStatus::Trash),
    ];
    assert_eq!(TreeIndex::build(&nodes).published_children_count(1), 1);
}

/// CONTRACT LISTING-003: trashed leaf leaves no empty container behind
#[test]
fn contract_trashed_leaf_leaves_no_container() {
    let content = InMemoryContent::new(vec![
        PostRecord::new(1, 0, "One"),
        PostRecord::new(2, 1, "Two"),
        PostRecord::new(3, 1, "Three").with_status("trash"),
    ]);

    let html = render(&content, &ListingRequest::new()).to_html();

    assert_eq!(
        html,
        concat!(
            "<ol class=\"sortable nplist visible\" id=\"np-page\">\n",
            "  <li id=\"menuItem_1\" class=\"page-row published\">\n",
            "    <div class=\"row\"><div class=\"child-toggle\"></div><span class=\"title\">One</span></div>\n",
            "    <ol class=\"nplist\" id=\"np-page\">\n",
            "      <li id=\"menuItem_2\" class=\"page-row published\">\n",
            "        <div class=\"row\"><span class=\"title\">Two</span></div>\n",
            "      </li>\n",
            "    </ol>\n",
            "  </li>\n",
            "</ol>\n",
        )
    );
}

/// CONTRACT LISTING-004: search mode is always one flat list
#[test]
fn contract_search_mode_is_flat() {
    let content = sample_content();
    let listing = render(&content, &ListingRequest::new().with_search("a"));

    let root = listing.root.as_ref().unwrap();
    assert_eq!(root.kind, LevelKind::Search);
    assert!(root.items.iter().all(|item| item.children.is_none()));
    assert_eq!(listing.container_count(), 1);
}

/// CONTRACT LISTING-005: markup is balanced
#[test]
fn contract_markup_is_balanced() {
    let html = render(&sample_content(), &ListingRequest::new()).to_html();
    assert_eq!(html.matches("<ol").count(), html.matches("</ol>").count());
    assert_eq!(html.matches("<li ").count(), html.matches("</li>").count());
}
