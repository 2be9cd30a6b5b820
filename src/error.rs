use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not determine the current user's home directory")]
    PathResolution,

    #[error("No config found at {}. Use `dbsrc add` to register a source.", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("source '{0}' not found")]
    SourceNotFound(String),

    #[error("No active source configured. Use `dbsrc src <name>` to select one.")]
    NoActiveSource,

    #[error("active source '{0}' not found in sources")]
    ActiveSourceMissing(String),

    #[error("Failed to parse config at {}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to read config from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config")]
    Serialize(#[source] serde_yaml::Error),

    #[error("Failed to write config to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
