//! Output Rendering
//!
//! Text and JSON renderings of listing and sync results.

use similar::TextDiff;

use crate::application::{Listing, MenuSyncResult};
use crate::infrastructure::InMemoryMenu;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Unified diff between two menu outlines; empty when nothing changed
pub fn menu_diff(before: &InMemoryMenu, after: &InMemoryMenu) -> String {
    let old = before.outline();
    let new = after.outline();
    if old == new {
        return String::new();
    }

    TextDiff::from_lines(&old, &new)
        .unified_diff()
        .header("a/menu", "b/menu")
        .to_string()
}

/// One-line sync summary
pub fn render_sync_summary(result: &MenuSyncResult, dry_run: bool) -> String {
    let prefix = if dry_run { "Would sync" } else { "Synced" };
    let mut line = format!(
        "{} {} pages: {} created, {} updated, {} unchanged, {} removed",
        prefix,
        result.visited,
        result.created.len(),
        result.updated.len(),
        result.unchanged.len(),
        result.deleted.len()
    );
    if result.truncated {
        line.push_str(" (nesting limit reached)");
    }
    line
}

pub fn sync_json(result: &MenuSyncResult, dry_run: bool) -> serde_json::Value {
    serde_json::json!({
        "event": "sync",
        "dry_run": dry_run,
        "result": result,
    })
}

pub fn listing_json(post_type: &str, listing: &Listing) -> serde_json::Value {
    serde_json::json!({
        "event": "render",
        "post_type": post_type,
        "items": listing.item_count(),
        "depth": listing.depth(),
        "html": listing.to_html(),
    })
}
