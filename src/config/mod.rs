//! Configuration module for nestedpages
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NESTEDPAGES_*)
//! 3. Explicit `--config` file, else `./nestedpages.toml`
//! 4. User config (`<config dir>/nestedpages/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use loader::{apply_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, ListingConfig, MenuConfig};

#[doc(hidden)]
pub fn parse_config_str(content: &str) -> crate::error::NestedPagesResult<(Config, Vec<ConfigWarning>)> {
    loader::parse_with_warnings(content, std::path::Path::new("<inline>"))
}
