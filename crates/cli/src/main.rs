mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{Format, Host};

#[derive(Parser)]
#[command(name = "watchlist")]
#[command(about = "Movie watchlist with per-title watch history", long_about = None)]
struct Cli {
    /// SQLite database holding the watchlist
    #[arg(long, global = true, env = "WATCHLIST_DB_PATH")]
    db: Option<PathBuf>,

    /// Print views as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a title to the watchlist
    Add { name: String },
    /// Show titles containing QUERY (case-sensitive); no query shows all
    Filter { query: Option<String> },
    /// Empty the watchlist; watch history is kept
    Clear {
        /// Only blank the view, keep the stored list
        #[arg(long)]
        view_only: bool,
    },
    /// Show the watchlist
    List,
    /// Show every title ever added with its watch count
    History,
}

fn get_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("movie-watchlist")
        .join("watchlist.db")
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let db_path = cli.db.unwrap_or_else(get_db_path);
    let format = if cli.json { Format::Json } else { Format::Text };
    let mut host = Host::open(&db_path, format)?;

    match cli.command {
        Commands::Add { name } => host.add(&name),
        Commands::Filter { query } => host.filter(query.as_deref()),
        Commands::Clear { view_only } => host.clear(!view_only),
        Commands::List => host.list(),
        Commands::History => host.history(),
    }
}
