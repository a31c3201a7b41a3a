//! In-memory site
//!
//! Backs every port with plain collections. Used by the JSON site adapter,
//! by tests, and by hosts that already hold their content in memory.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{MenuEntry, MenuEntryFields, PostRecord, Taxonomy};
use crate::domain::ports::{
    ListingStateRepository, MatchMode, MenuRepository, NodeQuery, NodeRepository,
    RepositoryResult, TaxonomyRepository,
};
use crate::domain::value_objects::{
    EntryId, NodeId, PAGE_POST_TYPE, REDIRECT_POST_TYPE, ROOT_ENTRY,
};

use super::query::apply_query;

/// Posts, taxonomies and listing state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InMemoryContent {
    /// Registered post types
    #[serde(default = "default_post_types")]
    pub post_types: Vec<String>,
    #[serde(default)]
    pub posts: Vec<PostRecord>,
    #[serde(default)]
    pub taxonomies: Vec<Taxonomy>,
    /// Post type → ids the user left expanded
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub expanded: BTreeMap<String, Vec<NodeId>>,
}

fn default_post_types() -> Vec<String> {
    vec![
        PAGE_POST_TYPE.to_string(),
        "post".to_string(),
        REDIRECT_POST_TYPE.to_string(),
    ]
}

impl Default for InMemoryContent {
    fn default() -> Self {
        Self {
            post_types: default_post_types(),
            posts: Vec::new(),
            taxonomies: Vec::new(),
            expanded: BTreeMap::new(),
        }
    }
}

impl InMemoryContent {
    pub fn new(posts: Vec<PostRecord>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }

    pub fn with_taxonomy(mut self, taxonomy: Taxonomy) -> Self {
        self.taxonomies.push(taxonomy);
        self
    }

    pub fn with_expanded(mut self, post_type: &str, ids: Vec<NodeId>) -> Self {
        self.expanded.insert(post_type.to_string(), ids);
        self
    }
}

impl NodeRepository for InMemoryContent {
    fn fetch_nodes(&self, query: &NodeQuery) -> RepositoryResult<Vec<PostRecord>> {
        Ok(apply_query(&self.posts, query))
    }

    fn has_post_type(&self, post_type: &str) -> bool {
        self.post_types.iter().any(|t| t == post_type)
    }
}

impl TaxonomyRepository for InMemoryContent {
    fn list_taxonomies(&self, post_type: &str, hierarchical: bool) -> RepositoryResult<Vec<Taxonomy>> {
        Ok(self
            .taxonomies
            .iter()
            .filter(|t| t.is_hierarchical() == hierarchical && t.applies_to(post_type))
            .cloned()
            .collect())
    }
}

impl ListingStateRepository for InMemoryContent {
    fn visible_pages(&self, post_type: &str) -> RepositoryResult<Vec<NodeId>> {
        Ok(self.expanded.get(post_type).cloned().unwrap_or_default())
    }
}

/// A single navigation menu
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryMenu {
    entries: Vec<MenuEntry>,
}

impl InMemoryMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    pub fn as_slice(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One line per entry, children indented under their parent
    pub fn outline(&self) -> String {
        let mut out = String::new();
        let mut seen = HashSet::new();
        self.outline_level(ROOT_ENTRY, 0, &mut seen, &mut out);
        out
    }

    fn outline_level(&self, parent: EntryId, indent: usize, seen: &mut HashSet<EntryId>, out: &mut String) {
        let mut children: Vec<&MenuEntry> =
            self.entries.iter().filter(|e| e.parent_id == parent).collect();
        children.sort_by_key(|e| (e.position, e.id));

        for entry in children {
            if !seen.insert(entry.id) {
                continue;
            }
            out.push_str(&"  ".repeat(indent));
            out.push_str(&format!(
                "[{}] {} ({}/{}",
                entry.position, entry.title, entry.kind, entry.object
            ));
            if !entry.url.is_empty() {
                out.push_str(&format!(" {}", entry.url));
            }
            out.push_str(")\n");
            self.outline_level(entry.id, indent + 1, seen, out);
        }
    }

    fn next_id(&self) -> EntryId {
        self.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }
}

impl MenuRepository for InMemoryMenu {
    fn find_menu_entry(&self, node_id: NodeId, mode: MatchMode) -> RepositoryResult<Option<EntryId>> {
        let key = node_id.to_string();
        Ok(self
            .entries
            .iter()
            .find(|e| match mode {
                MatchMode::ObjectId => e.xfn == PAGE_POST_TYPE && e.object_id == Some(node_id),
                MatchMode::Relation => e.xfn == key,
            })
            .map(|e| e.id))
    }

    fn entry(&self, id: EntryId) -> RepositoryResult<Option<MenuEntry>> {
        Ok(self.entries.iter().find(|e| e.id == id).cloned())
    }

    fn upsert_menu_entry(
        &mut self,
        parent: EntryId,
        existing: Option<EntryId>,
        fields: &MenuEntryFields,
    ) -> RepositoryResult<EntryId> {
        if let Some(entry) = existing.and_then(|id| self.entries.iter_mut().find(|e| e.id == id)) {
            entry.apply(parent, fields);
            return Ok(entry.id);
        }

        let id = self.next_id();
        self.entries.push(MenuEntry::from_fields(id, parent, fields));
        Ok(id)
    }

    fn delete_menu_entry(&mut self, id: EntryId) -> RepositoryResult<()> {
        let Some(idx) = self.entries.iter().position(|e| e.id == id) else {
            return Ok(());
        };
        let removed = self.entries.remove(idx);
        for entry in self.entries.iter_mut().filter(|e| e.parent_id == id) {
            entry.parent_id = removed.parent_id;
        }
        Ok(())
    }

    fn entries(&self) -> RepositoryResult<Vec<MenuEntry>> {
        Ok(self.entries.clone())
    }
}

/// Content plus its menu, as stored in a site snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InMemorySite {
    #[serde(flatten)]
    pub content: InMemoryContent,
    #[serde(default)]
    pub menu: InMemoryMenu,
}

impl InMemorySite {
    pub fn new(content: InMemoryContent) -> Self {
        Self {
            content,
            menu: InMemoryMenu::new(),
        }
    }
}
