//! nestedpages CLI - nested page listing and menu sync
//!
//! Usage: nestedpages <COMMAND>
//!
//! Commands:
//!   render  Render the nested page listing
//!   sync    Sync the navigation menu with the page tree

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use nestedpages::config::Config;
use nestedpages::presentation::{logging, OutputFormat};

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::render::RenderArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let (config, warnings) = Config::load_or_default(cli.config.as_deref())?;
    for warning in &warnings {
        warn!("{}", warning);
    }

    let format = OutputFormat::from_json_flag(cli.json);

    match cli.command {
        Commands::Render {
            site,
            post_type,
            orderby,
            order,
            author,
            search,
            category,
        } => {
            let args = RenderArgs {
                post_type: &post_type,
                orderby: orderby.as_deref(),
                order: order.as_deref(),
                author: author.as_deref(),
                search: search.as_deref(),
                category: category.as_deref(),
            };
            commands::cmd_render(&site, &args, &config, format)
        }
        Commands::Sync { site, dry_run } => commands::cmd_sync(&site, dry_run, &config, format),
    }
}
