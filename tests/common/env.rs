//! Test environment for running the nestedpages binary in isolation.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

use nestedpages::infrastructure::{InMemorySite, JsonSiteRepository};

const OVERRIDE_VARS: &[&str] = &[
    "NESTEDPAGES_MENUS_DISABLED",
    "NESTEDPAGES_SORTABLE",
    "NESTEDPAGES_LISTING_MAX_DEPTH",
    "NESTEDPAGES_MENU_MAX_DEPTH",
    "NESTEDPAGES_MENU_SYNC",
];

/// Result of running a CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Temp working directory holding `site.json`, used as cwd and HOME
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn with_site_json(json: &str) -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("site.json"), json).unwrap();
        Self { root }
    }

    pub fn site_path(&self) -> PathBuf {
        self.root.path().join("site.json")
    }

    pub fn write_config(&self, toml: &str) {
        fs::write(self.root.path().join("nestedpages.toml"), toml).unwrap();
    }

    pub fn load_site(&self) -> InMemorySite {
        JsonSiteRepository::new(self.site_path()).load().unwrap()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_nestedpages"));
        cmd.args(args)
            .current_dir(self.root.path())
            .env("HOME", self.root.path())
            .env("XDG_CONFIG_HOME", self.root.path().join(".config"))
            .env_remove("RUST_LOG");
        for key in OVERRIDE_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in vars {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
