//! Property tests for the listing and menu tree walks.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use nestedpages::application::{ListingOptions, ListingRequest, ListingUseCase, MenuSyncUseCase};
use nestedpages::domain::entities::PostRecord;
use nestedpages::domain::ports::{MatchMode, MenuRepository};
use nestedpages::domain::services::meta_keys;
use nestedpages::infrastructure::{InMemoryContent, InMemoryMenu};

#[derive(Debug, Clone)]
struct PageShape {
    /// Index of an earlier page to nest under, `None` for top level
    parent: Option<prop::sample::Index>,
    status: &'static str,
    hidden: bool,
    redirect: bool,
    /// Menu item type a redirect links as
    nav_type: &'static str,
    /// Page a redirect points its menu entry at
    target: prop::sample::Index,
    title: String,
}

fn page_shape() -> impl Strategy<Value = PageShape> {
    (
        proptest::option::of(any::<prop::sample::Index>()),
        prop::sample::select(vec!["publish", "publish", "draft", "trash"]),
        prop::bool::weighted(0.15),
        prop::bool::weighted(0.2),
        prop::sample::select(vec!["custom", "post_type"]),
        any::<prop::sample::Index>(),
        "[a-cA-C]{1,4}",
    )
        .prop_map(|(parent, status, hidden, redirect, nav_type, target, title)| PageShape {
            parent,
            status,
            hidden,
            redirect,
            nav_type,
            target,
            title,
        })
}

/// Random page tree; parents always precede their children so there are no cycles.
/// Redirects point their menu object id at one of the tree's own pages.
fn page_tree() -> impl Strategy<Value = Vec<PostRecord>> {
    proptest::collection::vec(page_shape(), 1..=16).prop_map(|shapes| {
        let count = shapes.len();
        shapes
            .into_iter()
            .enumerate()
            .map(|(i, shape)| {
                let id = i as u64 + 1;
                let parent = match shape.parent {
                    Some(index) if i > 0 => index.index(i) as u64 + 1,
                    _ => 0,
                };
                let mut record = PostRecord::new(id, parent, shape.title)
                    .with_status(shape.status)
                    .with_menu_order((i % 3) as i64);
                if shape.hidden {
                    record = record.with_meta(meta_keys::NAV_STATUS, "hide");
                }
                if shape.redirect {
                    record = record
                        .with_post_type("np-redirect")
                        .with_content(format!("https://example.com/{}", id))
                        .with_meta(meta_keys::NAV_TYPE, shape.nav_type)
                        .with_meta(meta_keys::NAV_OBJECT_ID, (shape.target.index(count) + 1).to_string());
                    if shape.nav_type == "post_type" {
                        record = record.with_meta(meta_keys::NAV_OBJECT, "page");
                    }
                }
                record
            })
            .collect()
    })
}

fn listing_use_case(content: &InMemoryContent) -> ListingUseCase<&InMemoryContent, &InMemoryContent, &InMemoryContent> {
    ListingUseCase::new(ListingOptions::default(), content, content, content).unwrap()
}

/// Ids of published nodes whose ancestors are all published and visible in the menu
fn menu_reachable(posts: &[PostRecord]) -> HashSet<u64> {
    let by_id: HashMap<u64, &PostRecord> = posts.iter().map(|p| (p.id, p)).collect();
    let shown = |p: &PostRecord| {
        p.status == "publish" && p.meta.get(meta_keys::NAV_STATUS).map(String::as_str) != Some("hide")
    };

    posts
        .iter()
        .filter(|post| {
            let mut current = Some(*post);
            while let Some(p) = current {
                if !shown(p) {
                    return false;
                }
                current = by_id.get(&p.parent).copied();
            }
            true
        })
        .map(|post| post.id)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every non-trashed page is listed exactly once, trashed pages never.
    #[test]
    fn property_every_live_node_listed_once(posts in page_tree()) {
        let content = InMemoryContent::new(posts.clone());
        let listing = listing_use_case(&content).render(&ListingRequest::new());

        let mut listed = listing.item_ids();
        listed.sort_unstable();
        let mut live: Vec<u64> = posts.iter().filter(|p| p.status != "trash").map(|p| p.id).collect();
        live.sort_unstable();

        prop_assert_eq!(listed, live);
    }

    /// PROPERTY: markup is balanced and never contains an empty list.
    #[test]
    fn property_markup_balanced_without_empty_lists(posts in page_tree()) {
        let content = InMemoryContent::new(posts);
        let html = listing_use_case(&content).render(&ListingRequest::new()).to_html();

        prop_assert_eq!(html.matches("<ol").count(), html.matches("</ol>").count());
        prop_assert_eq!(html.matches("<li ").count(), html.matches("</li>").count());

        let lines: Vec<&str> = html.lines().map(str::trim).collect();
        for pair in lines.windows(2) {
            prop_assert!(
                !(pair[0].starts_with("<ol") && pair[1] == "</ol>"),
                "empty list in:\n{}",
                html
            );
        }
    }

    /// PROPERTY: a search listing is flat and holds exactly the matching live pages.
    #[test]
    fn property_search_is_flat(posts in page_tree()) {
        let content = InMemoryContent::new(posts.clone());
        let listing = listing_use_case(&content).render(&ListingRequest::new().with_search("a"));

        prop_assert!(listing.depth() <= 1);

        let mut listed = listing.item_ids();
        listed.sort_unstable();
        let mut expected: Vec<u64> = posts
            .iter()
            .filter(|p| p.status != "trash" && p.title.to_lowercase().contains('a'))
            .map(|p| p.id)
            .collect();
        expected.sort_unstable();
        prop_assert_eq!(listed, expected);
    }

    /// PROPERTY: a second sync over an unchanged tree is a no-op.
    #[test]
    fn property_sync_idempotent(posts in page_tree()) {
        let content = InMemoryContent::new(posts);
        let mut menu = InMemoryMenu::new();

        MenuSyncUseCase::new(&content, &mut menu).sync().unwrap();
        let snapshot = menu.clone();
        let second = MenuSyncUseCase::new(&content, &mut menu).sync().unwrap();

        prop_assert!(second.is_noop(), "second pass changed the menu: {:?}", second);
        prop_assert_eq!(menu, snapshot);
    }

    /// PROPERTY: the menu holds exactly the published pages with no hidden or unpublished ancestor.
    #[test]
    fn property_hidden_subtrees_absent(posts in page_tree()) {
        let content = InMemoryContent::new(posts.clone());
        let mut menu = InMemoryMenu::new();
        MenuSyncUseCase::new(&content, &mut menu).sync().unwrap();

        let expected = menu_reachable(&posts);
        prop_assert_eq!(menu.len(), expected.len());
        for post in &posts {
            let mode = if post.post_type == "np-redirect" { MatchMode::Relation } else { MatchMode::ObjectId };
            let present = menu.find_menu_entry(post.id, mode).unwrap().is_some();
            prop_assert_eq!(present, expected.contains(&post.id), "page {}", post.id);
        }
    }
}
