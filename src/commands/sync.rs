use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use nestedpages::config::Config;
use nestedpages::infrastructure::JsonSiteRepository;
use nestedpages::presentation::{create_menu_sync_use_case, menu_diff, output, OutputFormat};

pub fn cmd_sync(site: &Path, dry_run: bool, config: &Config, format: OutputFormat) -> Result<()> {
    if !config.menu.sync_enabled {
        info!("menu sync disabled by config");
        if format == OutputFormat::Json {
            println!("{}", serde_json::json!({ "event": "sync", "skipped": true }));
        } else {
            println!("Menu sync is disabled.");
        }
        return Ok(());
    }

    let repo = JsonSiteRepository::new(site);

    if dry_run {
        let mut site = repo
            .load()
            .with_context(|| format!("loading site snapshot {}", repo.path().display()))?;
        let before = site.menu.clone();
        let result = create_menu_sync_use_case(&site.content, &mut site.menu, config).sync()?;

        match format {
            OutputFormat::Json => println!("{}", output::sync_json(&result, true)),
            OutputFormat::Text => {
                print!("{}", menu_diff(&before, &site.menu));
                println!("{}", output::render_sync_summary(&result, true));
            }
        }
        return Ok(());
    }

    let result = repo
        .update(|site| create_menu_sync_use_case(&site.content, &mut site.menu, config).sync())
        .with_context(|| format!("syncing menu of {}", repo.path().display()))?;

    match format {
        OutputFormat::Json => println!("{}", output::sync_json(&result, false)),
        OutputFormat::Text => println!("{}", output::render_sync_summary(&result, false)),
    }
    Ok(())
}
