//! Folio - a personal portfolio you can browse and search from the terminal

mod commands;
mod logging;
mod tui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{ContentStore, FolioConfig, MAX_RESULTS};

use tui::app::Services;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Browse and search a portfolio from the terminal")]
struct Cli {
    /// Path to the config file (defaults to ~/.folio/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Content file (JSON or TOML) replacing the builtin content
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch the interactive portfolio (default)
    Tui,
    /// Search all content once and print the results
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Maximum number of results (at most 10)
        #[arg(long, default_value_t = MAX_RESULTS)]
        limit: usize,
    },
    /// List sections and their routes
    Sections,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = FolioConfig::load(cli.config.as_deref())?;
    if let Some(content) = cli.content {
        config.content_path = Some(content);
    }

    let command = cli.command.unwrap_or(Commands::Tui);
    match &command {
        Commands::Tui => logging::init_file(&config.log_path())?,
        _ => logging::init_stderr(),
    }

    let store = ContentStore::load_or_builtin(config.content_path.as_deref())
        .context("Failed to load portfolio content")?;
    let services = Services::new(store);

    match command {
        Commands::Tui => tui::run(services, &config).await,
        Commands::Search { query, json, limit } => {
            commands::search(&services.engine, &query.join(" "), limit, json)
        }
        Commands::Sections => {
            commands::sections();
            Ok(())
        }
    }
}
