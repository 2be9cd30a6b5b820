use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dbsrc")]
#[command(version, about = "Manage named database connection profiles", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Config file path (defaults to $DBSRC_CONFIG or ~/.config/dbsrc/config.yml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List registered sources, marking the active one
    #[command(visible_alias = "list")]
    Ls,
    /// Register a new source
    Add {
        /// Source name
        name: String,
        /// Database kind (postgres, mysql, sqlite3, ...)
        db: String,
        /// Connection string
        dsn: String,
    },
    /// Set the active source
    #[command(visible_alias = "use")]
    Src {
        /// Source name
        name: String,
    },
    /// Show the active source
    Active,
    /// Print the config file path
    Path,
}
