//! JSON Site Repository
//!
//! Persists an [`InMemorySite`] snapshot as pretty JSON. Writes take an
//! exclusive lock on a sibling `.lock` file.

use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::error::{NestedPagesError, NestedPagesResult};

use super::memory::InMemorySite;

pub struct JsonSiteRepository {
    path: PathBuf,
}

impl JsonSiteRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    pub fn load(&self) -> NestedPagesResult<InMemorySite> {
        let content = fs::read_to_string(&self.path)?;
        let site: InMemorySite =
            serde_json::from_str(&content).map_err(|e| NestedPagesError::InvalidSnapshot {
                file: self.path.clone(),
                message: e.to_string(),
            })?;

        debug!(
            path = %self.path.display(),
            posts = site.content.posts.len(),
            menu_entries = site.menu.len(),
            "loaded site snapshot"
        );
        Ok(site)
    }

    pub fn save(&self, site: &InMemorySite) -> NestedPagesResult<()> {
        let lock_file = self.acquire_lock()?;
        let result = self.save_to_disk(site);
        let _ = lock_file.unlock();
        result
    }

    /// Load, modify and save while holding the lock.
    ///
    /// Nothing is written when `f` fails.
    pub fn update<T, F>(&self, f: F) -> NestedPagesResult<T>
    where
        F: FnOnce(&mut InMemorySite) -> NestedPagesResult<T>,
    {
        let lock_file = self.acquire_lock()?;

        let result = self.load().and_then(|mut site| {
            let value = f(&mut site)?;
            self.save_to_disk(&site)?;
            Ok(value)
        });

        let _ = lock_file.unlock();
        result
    }

    fn acquire_lock(&self) -> NestedPagesResult<fs::File> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let lock_file = fs::File::create(&lock_path)?;
        lock_file.lock_exclusive()?;
        Ok(lock_file)
    }

    fn save_to_disk(&self, site: &InMemorySite) -> NestedPagesResult<()> {
        let mut content = serde_json::to_string_pretty(site)?;
        content.push('\n');
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), "saved site snapshot");
        Ok(())
    }
}
