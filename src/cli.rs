//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// nestedpages - nested page listing and menu sync
#[derive(Parser, Debug)]
#[command(name = "nestedpages")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./nestedpages.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the nested page listing
    Render {
        /// Site snapshot (JSON)
        #[arg(short, long)]
        site: PathBuf,

        /// Post type to list
        #[arg(long, default_value = "page")]
        post_type: String,

        /// Sort column (menu_order, title, date, author)
        #[arg(long)]
        orderby: Option<String>,

        /// Sort direction (ASC or DESC)
        #[arg(long)]
        order: Option<String>,

        /// Only list pages by this author id
        #[arg(long)]
        author: Option<String>,

        /// Title search; renders a flat list
        #[arg(long)]
        search: Option<String>,

        /// Category term id, or "all"
        #[arg(long)]
        category: Option<String>,
    },

    /// Sync the navigation menu with the page tree
    Sync {
        /// Site snapshot (JSON)
        #[arg(short, long)]
        site: PathBuf,

        /// Dry run - show the menu diff without saving
        #[arg(long)]
        dry_run: bool,
    },
}
