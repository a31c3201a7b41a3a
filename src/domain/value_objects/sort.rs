//! Sort options for node queries

use serde::{Deserialize, Serialize};

/// Column a listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    MenuOrder,
    Title,
    Date,
    Author,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::MenuOrder => "menu_order",
            SortKey::Title => "title",
            SortKey::Date => "date",
            SortKey::Author => "author",
        }
    }

    /// Parse a request value. Anything outside the whitelist yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "menu_order" => Some(SortKey::MenuOrder),
            "title" => Some(SortKey::Title),
            "date" => Some(SortKey::Date),
            "author" => Some(SortKey::Author),
            _ => None,
        }
    }
}

/// Direction of a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Some(SortOrder::Asc),
            "DESC" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}
