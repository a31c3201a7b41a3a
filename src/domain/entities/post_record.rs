//! Raw content record as handed over by the host platform
//!
//! Everything beyond id/parent/status is optional so that partial host
//! dumps still load. The node adapter turns these into [`Node`]s.
//!
//! [`Node`]: super::Node

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{NodeId, PAGE_POST_TYPE};

/// A flat host record (post, page or redirect link)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: NodeId,

    /// Parent record id, `0` for top level
    #[serde(default)]
    pub parent: NodeId,

    #[serde(default = "default_status")]
    pub status: String,

    #[serde(default)]
    pub menu_order: i64,

    #[serde(default)]
    pub title: String,

    /// Body content. Redirect links keep their target url here.
    #[serde(default)]
    pub content: String,

    #[serde(default = "default_post_type")]
    pub post_type: String,

    #[serde(default)]
    pub author: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDateTime>,

    /// Post meta (navigation settings, listing visibility)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,

    /// Taxonomy name → term ids
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub terms: BTreeMap<String, Vec<u64>>,
}

fn default_status() -> String {
    "publish".to_string()
}

fn default_post_type() -> String {
    PAGE_POST_TYPE.to_string()
}

impl PostRecord {
    /// Create a published page record
    pub fn new(id: NodeId, parent: NodeId, title: impl Into<String>) -> Self {
        Self {
            id,
            parent,
            status: default_status(),
            menu_order: 0,
            title: title.into(),
            content: String::new(),
            post_type: default_post_type(),
            author: 0,
            date: None,
            meta: BTreeMap::new(),
            terms: BTreeMap::new(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_post_type(mut self, post_type: impl Into<String>) -> Self {
        self.post_type = post_type.into();
        self
    }

    pub fn with_menu_order(mut self, menu_order: i64) -> Self {
        self.menu_order = menu_order;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_author(mut self, author: u64) -> Self {
        self.author = author;
        self
    }

    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn with_terms(mut self, taxonomy: impl Into<String>, term_ids: Vec<u64>) -> Self {
        self.terms.insert(taxonomy.into(), term_ids);
        self
    }

    /// Meta value, with empty strings treated as missing
    pub fn meta_value(&self, key: &str) -> Option<&str> {
        self.meta
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}
