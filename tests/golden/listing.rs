//! Listing markup of the reference site

use insta::assert_snapshot;

use nestedpages::application::{ListingOptions, ListingRequest, ListingUseCase};

use crate::common::*;

fn render(request: &ListingRequest) -> String {
    let content = sample_content();
    ListingUseCase::new(ListingOptions::default(), &content, &content, &content)
        .unwrap()
        .render(request)
        .to_html()
}

#[test]
fn golden_full_listing() {
    let html = render(&ListingRequest::new());
    assert_snapshot!(html.trim_end(), @r#"
<ol class="sortable nplist visible" id="np-page">
  <li id="menuItem_1" class="page-row published">
    <div class="row"><span class="title">Home</span></div>
  </li>
  <li id="menuItem_2" class="page-row published">
    <div class="row"><div class="child-toggle"></div><span class="title">About</span></div>
    <ol class="nplist" id="np-page">
      <li id="menuItem_3" class="page-row published">
        <div class="row"><span class="title">Team</span></div>
      </li>
      <li id="menuItem_4" class="page-row draft">
        <div class="row"><span class="title">History</span></div>
      </li>
      <li id="menuItem_6" class="page-row published">
        <div class="row"><span class="title">Archive</span></div>
      </li>
    </ol>
  </li>
  <li id="menuItem_7" class="page-row published">
    <div class="row row-link"><a class="title" href="https://docs.example.com">Docs</a></div>
  </li>
  <li id="menuItem_8" class="page-row published">
    <div class="row"><span class="title">Contact</span></div>
  </li>
</ol>
"#);
}

#[test]
fn golden_search_listing() {
    let html = render(&ListingRequest::new().with_search("t"));
    assert_snapshot!(html.trim_end(), @r#"
<ol class="sortable no-sort nplist visible">
  <li id="menuItem_3" class="page-row published">
    <div class="row"><span class="title">Team</span></div>
  </li>
  <li id="menuItem_2" class="page-row published">
    <div class="row"><div class="child-toggle"></div><span class="title">About</span></div>
  </li>
  <li id="menuItem_4" class="page-row draft">
    <div class="row"><span class="title">History</span></div>
  </li>
  <li id="menuItem_8" class="page-row published">
    <div class="row"><span class="title">Contact</span></div>
  </li>
</ol>
"#);
}
