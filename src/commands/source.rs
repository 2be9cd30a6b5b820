use crate::cli::OutputFormat;
use crate::config::{ConfigStore, Source, SourceConfig};
use crate::error::StoreError;
use crate::listing::source_rows;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::debug;

pub fn add_source(
    store: &ConfigStore,
    name: String,
    db: String,
    dsn: String,
    format: OutputFormat,
) -> Result<()> {
    let mut config = match store.load() {
        Ok(config) => config,
        Err(StoreError::ConfigNotFound { path }) => {
            debug!(path = %path.display(), "no config yet, starting a new one");
            SourceConfig::default()
        }
        Err(e) => return Err(e.into()),
    };

    let added = config.add_source(Source::new(name.clone(), db, dsn));
    if added {
        store.save(&config)?;
    }

    match format {
        OutputFormat::Human => {
            if added {
                println!("{} Added source: {}", "✓".green(), name.cyan());
            } else {
                println!(
                    "{}",
                    format!("Source '{}' already exists, skipping.", name).yellow()
                );
            }
        }
        OutputFormat::Json => {
            let output = if added {
                serde_json::json!({ "added": name })
            } else {
                serde_json::json!({ "skipped": name, "reason": "already exists" })
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

pub fn list_sources(store: &ConfigStore, format: OutputFormat) -> Result<()> {
    let config = match store.load() {
        Ok(config) => config,
        Err(StoreError::ConfigNotFound { path }) => {
            debug!(path = %path.display(), "no config yet");
            SourceConfig::default()
        }
        Err(e) => return Err(e.into()),
    };

    match format {
        OutputFormat::Human => {
            if config.sources.is_empty() {
                println!(
                    "{}",
                    "No sources registered. Use `dbsrc add` to add one.".dimmed()
                );
                return Ok(());
            }

            let rows: Vec<SourceTableRow> = source_rows(&config)
                .into_iter()
                .map(|row| SourceTableRow {
                    name: if row.is_active() {
                        format!("{} {}", row.marker, row.name)
                    } else {
                        row.name
                    },
                    db: row.db,
                    dsn: row.dsn,
                })
                .collect();

            let mut table = Table::new(rows);
            table.with(Style::modern());
            println!("{}", table);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

#[derive(Tabled)]
struct SourceTableRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "DB")]
    db: String,
    #[tabled(rename = "DSN")]
    dsn: String,
}

pub fn set_active_source(store: &ConfigStore, name: String, format: OutputFormat) -> Result<()> {
    let mut config = store.load()?;

    config.set_active_source(&name)?;
    store.save(&config)?;

    match format {
        OutputFormat::Human => {
            println!("{} Active source set to '{}'", "✓".green(), name.cyan());
        }
        OutputFormat::Json => {
            let output = serde_json::json!({ "active_source": name });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

pub fn show_active_source(store: &ConfigStore, format: OutputFormat) -> Result<()> {
    let config = store.load()?;
    let (db, dsn) = config.active_source_details()?;

    match format {
        OutputFormat::Human => {
            println!("{:<6} {}", "NAME".bold(), config.active_source.cyan());
            println!("{:<6} {}", "DB".bold(), db.yellow());
            println!("{:<6} {}", "DSN".bold(), dsn);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": config.active_source,
                "db": db,
                "dsn": dsn,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

pub fn show_config_path(store: &ConfigStore, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(store.path().as_os_str().as_encoded_bytes())?;
            stdout.write_all(b"\n")?;
        }
        OutputFormat::Json => {
            let output = serde_json::json!({ "path": store.path() });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
