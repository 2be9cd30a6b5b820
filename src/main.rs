mod cli;
mod commands;
mod config;
mod error;
mod listing;

use clap::Parser;
use cli::{Cli, Commands};
use config::{expand_home, ConfigStore, DEFAULT_CONFIG_PATH};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(if cli.verbose {
                    tracing::Level::DEBUG.into()
                } else {
                    tracing::Level::INFO.into()
                }),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let store = ConfigStore::with_path(resolve_config_path(cli.config)?);
    tracing::debug!(path = %store.path().display(), "using config");

    match cli.command {
        Commands::Ls => {
            commands::list_sources(&store, cli.format)?;
        }
        Commands::Add { name, db, dsn } => {
            commands::add_source(&store, name, db, dsn, cli.format)?;
        }
        Commands::Src { name } => {
            commands::set_active_source(&store, name, cli.format)?;
        }
        Commands::Active => {
            commands::show_active_source(&store, cli.format)?;
        }
        Commands::Path => {
            commands::show_config_path(&store, cli.format)?;
        }
    }

    Ok(())
}

/// `--config` wins over `DBSRC_CONFIG`, which wins over the default path.
fn resolve_config_path(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let logical = flag
        .or_else(|| {
            std::env::var_os("DBSRC_CONFIG")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    Ok(expand_home(&logical)?)
}
