//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::ListingOptions;
use crate::domain::policies::nesting_from_depth;
use crate::domain::ports::NestingPolicy;
use crate::error::NestedPagesResult;

use super::loader::{self, ConfigWarning};

/// Page listing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Leave redirect links out of the page listing
    #[serde(default)]
    pub menus_disabled: bool,

    #[serde(default = "default_true")]
    pub sortable: bool,

    /// Deepest level the listing descends to; unlimited when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            menus_disabled: false,
            sortable: true,
            max_depth: None,
        }
    }
}

/// Menu synchronization configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default = "default_true")]
    pub sync_enabled: bool,

    /// Nesting level at which the sync walk stops
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            sync_enabled: true,
            max_depth: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub listing: ListingConfig,

    #[serde(default)]
    pub menu: MenuConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> NestedPagesResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> NestedPagesResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit path, the working directory, the user config
    /// directory, or defaults
    pub fn load_or_default(explicit: Option<&Path>) -> NestedPagesResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (NESTEDPAGES_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Listing options for `post_type` under this configuration
    pub fn listing_options(&self, post_type: &str) -> ListingOptions {
        ListingOptions::new(post_type)
            .with_sortable(self.listing.sortable)
            .with_menus_disabled(self.listing.menus_disabled)
    }

    pub fn listing_nesting(&self) -> Box<dyn NestingPolicy> {
        nesting_from_depth(self.listing.max_depth)
    }

    pub fn menu_nesting(&self) -> Box<dyn NestingPolicy> {
        nesting_from_depth(self.menu.max_depth)
    }
}
