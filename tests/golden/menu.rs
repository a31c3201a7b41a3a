//! Menu generated from the reference site

use insta::assert_snapshot;

use nestedpages::application::MenuSyncUseCase;
use nestedpages::infrastructure::InMemoryMenu;

use crate::common::*;

#[test]
fn golden_menu_outline() {
    let content = sample_content();
    let mut menu = InMemoryMenu::new();
    let result = MenuSyncUseCase::new(&content, &mut menu).sync().unwrap();

    assert_eq!(result.created.len(), 4);
    assert_snapshot!(menu.outline().trim_end(), @r"
[1] Home (post_type/page)
[2] About (post_type/page)
  [3] Team (post_type/page)
[4] Docs (custom/custom https://docs.example.com)
");
}
