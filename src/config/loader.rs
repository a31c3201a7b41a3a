//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{NestedPagesError, NestedPagesResult};

use super::env_validator::{levenshtein, parse_bool, parse_depth, EnvVarValidator};
use super::types::Config;

/// Project config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "nestedpages.toml";

const BOOL_VALUES: &[&str] = &["true", "false", "1", "0", "yes", "no", "on", "off"];
const DEPTH_VALUES: &[&str] = &["<number>", "unlimited"];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> NestedPagesResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> NestedPagesResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| NestedPagesError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit path, `./nestedpages.toml`, the user config, or
/// defaults, then apply env overrides.
///
/// An explicit path must load. Implicit files that fail to parse are
/// skipped with a warning.
pub fn load_or_default(explicit: Option<&Path>) -> NestedPagesResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let candidates = [
        Some(PathBuf::from(PROJECT_CONFIG_FILE)),
        dirs::config_dir().map(|dir| dir.join("nestedpages/config.toml")),
    ];

    for path in candidates.into_iter().flatten() {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                debug!(path = %path.display(), "loaded config");
                return Ok((with_env_overrides(config), warnings));
            }
            Err(err) => warn!(path = %path.display(), error = %err, "ignoring unreadable config"),
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (NESTEDPAGES_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from any variable source
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("NESTEDPAGES_MENUS_DISABLED") {
        config.listing.menus_disabled = EnvVarValidator::new("NESTEDPAGES_MENUS_DISABLED", BOOL_VALUES)
            .parse(&val, parse_bool, config.listing.menus_disabled);
    }

    if let Some(val) = lookup("NESTEDPAGES_SORTABLE") {
        config.listing.sortable = EnvVarValidator::new("NESTEDPAGES_SORTABLE", BOOL_VALUES).parse(
            &val,
            parse_bool,
            config.listing.sortable,
        );
    }

    if let Some(val) = lookup("NESTEDPAGES_LISTING_MAX_DEPTH") {
        config.listing.max_depth = EnvVarValidator::new("NESTEDPAGES_LISTING_MAX_DEPTH", DEPTH_VALUES)
            .parse(&val, parse_depth, config.listing.max_depth);
    }

    if let Some(val) = lookup("NESTEDPAGES_MENU_MAX_DEPTH") {
        config.menu.max_depth = EnvVarValidator::new("NESTEDPAGES_MENU_MAX_DEPTH", DEPTH_VALUES)
            .parse(&val, parse_depth, config.menu.max_depth);
    }

    if let Some(val) = lookup("NESTEDPAGES_MENU_SYNC") {
        config.menu.sync_enabled = EnvVarValidator::new("NESTEDPAGES_MENU_SYNC", BOOL_VALUES).parse(
            &val,
            parse_bool,
            config.menu.sync_enabled,
        );
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "listing",
        "menus_disabled",
        "sortable",
        "max_depth",
        "menu",
        "sync_enabled",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
