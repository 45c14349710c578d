//! Yardbook CLI - Command-line interface for the Yardbook yardage book.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use yardbook_cli::commands;
use yardbook_cli::{Cli, Command, Config, Formatter};
use yardbook_lifecycle::ClubLifecycleManager;
use yardbook_store::SqliteStore;

#[tokio::main]
async fn main() {
    // Logs go to stderr so table and JSON output stay clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> yardbook_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config, from --config if given
    let mut config = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };
    if let Some(database) = &cli.database {
        config.database = Some(PathBuf::from(database));
    }
    config.validate()?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let database = config.database_path()?;
    tracing::debug!("Opening yardage book at {}", database.display());
    let mut store = SqliteStore::new(&database)?;
    let manager = ClubLifecycleManager::new(config.lifecycle.clone());

    match cli.command {
        Command::Clubs(args) => commands::execute_clubs(args, &mut store, &manager, &formatter)?,
        Command::Shots(args) => commands::execute_shots(args, &mut store, &manager, &formatter)?,
        Command::Recommend(args) => {
            commands::execute_recommend(args, &mut store, &manager, &formatter)?
        }
        Command::Ladder(args) => commands::execute_ladder(args, &mut store, &manager, &formatter)?,
        Command::Range(args) => commands::execute_range(args, &mut store, &formatter)?,
        Command::Profile(args) => commands::execute_profile(args, &mut store, &formatter)?,
        Command::Settings(args) => commands::execute_settings(args, &mut store, &formatter)?,
        Command::Seed(args) => commands::execute_seed(args, &mut store, &manager, &formatter)?,
        Command::Maintain(args) => {
            commands::execute_maintain(args, store, &config, &formatter).await?
        }
    }

    Ok(())
}
