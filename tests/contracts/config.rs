//! Configuration contracts (CONFIG-001 through CONFIG-002)
//!
//! Priority: CLI flags > env vars > config file > user config > defaults

use crate::common::*;

/// CONTRACT CONFIG-001: environment overrides the config file
#[test]
fn contract_env_overrides_config_file() {
    let env = TestEnv::with_site_json(&sample_site_json());
    env.write_config("[listing]\nmax_depth = 5\n");

    let result = env.run_with_env(&["render", "--site", "site.json"], &[("NESTEDPAGES_LISTING_MAX_DEPTH", "1")]);

    assert!(result.success, "render failed: {}", result.stderr);
    assert!(!result.stdout.contains("menuItem_3"), "nested page rendered:\n{}", result.stdout);
}

/// CONTRACT CONFIG-002: unknown keys warn but never fail
#[test]
fn contract_unknown_config_key_warns() {
    let env = TestEnv::with_site_json(&sample_site_json());
    env.write_config("[listing]\nsortabel = false\n");

    let result = env.run(&["render", "--site", "site.json"]);

    assert!(result.success, "render failed: {}", result.stderr);
    assert!(result.stderr.contains("sortabel"), "missing warning:\n{}", result.stderr);
    assert!(result.stderr.contains("did you mean 'sortable'?"));
}
