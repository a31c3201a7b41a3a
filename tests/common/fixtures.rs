//! Test fixtures - the reference site shared by the suites.
//!
//! ```text
//! 1 Home
//! 2 About
//!   3 Team
//!   4 History        (draft)
//!   5 Old            (trash)
//!     6 Archive
//! 7 Docs             (redirect link)
//! 8 Contact          (hidden from menu)
//! ```

use nestedpages::domain::entities::PostRecord;
use nestedpages::domain::services::meta_keys;
use nestedpages::infrastructure::{InMemoryContent, InMemorySite};

pub fn sample_posts() -> Vec<PostRecord> {
    vec![
        PostRecord::new(1, 0, "Home").with_menu_order(0),
        PostRecord::new(2, 0, "About").with_menu_order(1),
        PostRecord::new(3, 2, "Team").with_menu_order(0),
        PostRecord::new(4, 2, "History").with_menu_order(1).with_status("draft"),
        PostRecord::new(5, 2, "Old").with_menu_order(2).with_status("trash"),
        PostRecord::new(6, 5, "Archive").with_menu_order(0),
        PostRecord::new(7, 0, "Docs")
            .with_menu_order(2)
            .with_post_type("np-redirect")
            .with_content("https://docs.example.com"),
        PostRecord::new(8, 0, "Contact")
            .with_menu_order(3)
            .with_meta(meta_keys::NAV_STATUS, "hide"),
    ]
}

pub fn sample_content() -> InMemoryContent {
    InMemoryContent::new(sample_posts())
}

pub fn sample_site() -> InMemorySite {
    InMemorySite::new(sample_content())
}

/// Sample site as snapshot JSON
pub fn sample_site_json() -> String {
    serde_json::to_string_pretty(&sample_site()).unwrap()
}
