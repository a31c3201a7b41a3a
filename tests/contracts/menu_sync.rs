//! Menu sync contracts (MENU-001 through MENU-004)

use nestedpages::application::{menu_fields, MenuSyncUseCase};
use nestedpages::domain::entities::{NavSettings, Node};
use nestedpages::domain::ports::{MatchMode, MenuRepository};
use nestedpages::domain::value_objects::PostStatus;
use nestedpages::infrastructure::InMemoryMenu;

use crate::common::*;

/// CONTRACT MENU-001: re-syncing an unchanged tree changes nothing
#[test]
fn contract_sync_is_idempotent() {
    let content = sample_content();
    let mut menu = InMemoryMenu::new();

    let first = MenuSyncUseCase::new(&content, &mut menu).sync().unwrap();
    let snapshot = menu.clone();
    let second = MenuSyncUseCase::new(&content, &mut menu).sync().unwrap();

    assert!(!first.is_noop());
    assert!(second.is_noop());
    assert_eq!(menu, snapshot);
    let mut first_ids = first.created.clone();
    let mut second_ids = second.unchanged.clone();
    first_ids.sort_unstable();
    second_ids.sort_unstable();
    assert_eq!(first_ids, second_ids);
}

/// CONTRACT MENU-002: a node hidden from navigation has no descendants in the menu
#[test]
fn contract_hidden_subtree_absent_from_menu() {
    let mut content = sample_content();
    let mut menu = InMemoryMenu::new();
    MenuSyncUseCase::new(&content, &mut menu).sync().unwrap();
    assert!(menu.find_menu_entry(3, MatchMode::ObjectId).unwrap().is_some());

    content.posts[1] = content.posts[1]
        .clone()
        .with_meta("np_nav_status", "hide");
    MenuSyncUseCase::new(&content, &mut menu).sync().unwrap();

    assert!(menu.find_menu_entry(2, MatchMode::ObjectId).unwrap().is_none());
    assert!(menu.find_menu_entry(3, MatchMode::ObjectId).unwrap().is_none());
}

/// CONTRACT MENU-003: pages always link as post_type/page whatever their nav meta says
#[test]
fn contract_page_compatibility_fields() {
    let node = Node::new(42, 0, PostStatus::Publish).with_nav(NavSettings {
        nav_type: Some("custom".to_string()),
        object: Some("custom".to_string()),
        object_id: Some(7),
        ..NavSettings::default()
    });

    let fields = menu_fields(&node, 1);
    assert_eq!(fields.kind, "post_type");
    assert_eq!(fields.object, "page");
    assert_eq!(fields.object_id, Some(42));
    assert_eq!(fields.xfn, "page");
}

/// CONTRACT MENU-004: positions follow document order
#[test]
fn contract_positions_follow_document_order() {
    let content = sample_content();
    let mut menu = InMemoryMenu::new();
    MenuSyncUseCase::new(&content, &mut menu).sync().unwrap();

    let titles: Vec<String> = {
        let mut entries = menu.entries().unwrap();
        entries.sort_by_key(|e| e.position);
        entries.into_iter().map(|e| e.title).collect()
    };
    assert_eq!(titles, vec!["Home", "About", "Team", "Docs"]);
}
