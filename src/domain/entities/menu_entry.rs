//! Navigation menu entry entity
//!
//! Entries live in the host's menu store. The synchronizer only ever
//! creates, updates or deletes them one at a time.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EntryId, NodeId};

/// Writable properties of a menu entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuEntryFields {
    pub title: String,
    pub url: String,
    pub attr_title: String,
    pub classes: String,
    /// Menu item type (`custom`, `post_type`, ...)
    pub kind: String,
    pub object: String,
    pub object_id: Option<NodeId>,
    /// Relation key. Redirect links are matched back to nodes through it.
    pub xfn: String,
    pub target: String,
    pub position: u32,
    pub status: String,
}

/// A stored menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: EntryId,
    /// Parent entry id, `0` for top level
    #[serde(default)]
    pub parent_id: EntryId,
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub attr_title: String,
    #[serde(default)]
    pub classes: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default = "default_kind")]
    pub object: String,
    #[serde(default)]
    pub object_id: Option<NodeId>,
    #[serde(default)]
    pub xfn: String,
    #[serde(default)]
    pub target: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_kind() -> String {
    "custom".to_string()
}

fn default_status() -> String {
    "publish".to_string()
}

impl MenuEntry {
    pub fn from_fields(id: EntryId, parent_id: EntryId, fields: &MenuEntryFields) -> Self {
        let mut entry = Self {
            id,
            parent_id,
            position: 0,
            title: String::new(),
            url: String::new(),
            attr_title: String::new(),
            classes: String::new(),
            kind: default_kind(),
            object: default_kind(),
            object_id: None,
            xfn: String::new(),
            target: String::new(),
            status: default_status(),
        };
        entry.apply(parent_id, fields);
        entry
    }

    /// Overwrite every writable property
    pub fn apply(&mut self, parent_id: EntryId, fields: &MenuEntryFields) {
        self.parent_id = parent_id;
        self.position = fields.position;
        self.title = fields.title.clone();
        self.url = fields.url.clone();
        self.attr_title = fields.attr_title.clone();
        self.classes = fields.classes.clone();
        self.kind = fields.kind.clone();
        self.object = fields.object.clone();
        self.object_id = fields.object_id;
        self.xfn = fields.xfn.clone();
        self.target = fields.target.clone();
        self.status = fields.status.clone();
    }

    /// True when applying `fields` under `parent_id` would change nothing
    pub fn matches(&self, parent_id: EntryId, fields: &MenuEntryFields) -> bool {
        let mut candidate = self.clone();
        candidate.apply(parent_id, fields);
        candidate == *self
    }
}
