//! Post status value object
//!
//! The host platform's publication states. Trash is a status like any other
//! at fetch time; the renderer and the tree index decide what it means.

use serde::{Deserialize, Serialize};

/// Publication status of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Publish,
    Draft,
    Pending,
    Private,
    Future,
    Trash,
}

impl PostStatus {
    /// Every status, trash included
    pub const ALL: [PostStatus; 6] = [
        PostStatus::Publish,
        PostStatus::Pending,
        PostStatus::Draft,
        PostStatus::Private,
        PostStatus::Future,
        PostStatus::Trash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Publish => "publish",
            PostStatus::Draft => "draft",
            PostStatus::Pending => "pending",
            PostStatus::Private => "private",
            PostStatus::Future => "future",
            PostStatus::Trash => "trash",
        }
    }

    /// Parse a host status string. Unknown statuses yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "publish" => Some(PostStatus::Publish),
            "draft" => Some(PostStatus::Draft),
            "pending" => Some(PostStatus::Pending),
            "private" => Some(PostStatus::Private),
            "future" => Some(PostStatus::Future),
            "trash" => Some(PostStatus::Trash),
            _ => None,
        }
    }

    pub fn is_trash(&self) -> bool {
        matches!(self, PostStatus::Trash)
    }

    pub fn is_published(&self) -> bool {
        matches!(self, PostStatus::Publish)
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
