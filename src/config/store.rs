use super::SourceConfig;
use crate::error::StoreError;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Loads and saves a [`SourceConfig`] at a fixed path.
///
/// Concurrent invocations are not coordinated: two processes that both
/// load, mutate and save will race, and the last save wins. Each save is
/// still atomic, so the file always holds one complete document.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<SourceConfig, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::ConfigNotFound {
                    path: self.path.clone(),
                });
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if contents.trim().is_empty() {
            debug!(path = %self.path.display(), "config file is empty");
            return Ok(SourceConfig::default());
        }

        let config: SourceConfig =
            serde_yaml::from_str(&contents).map_err(|source| StoreError::Format {
                path: self.path.clone(),
                source,
            })?;
        debug!(
            path = %self.path.display(),
            sources = config.sources.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Create a temp file beside the target, restrict it to the owner,
    /// write `config` into it, then rename it into place.
    pub fn save(&self, config: &SourceConfig) -> Result<(), StoreError> {
        let contents = serde_yaml::to_string(config).map_err(StoreError::Serialize)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|source| self.write_error(source))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|source| self.write_error(source))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(tmp.path(), perms)
                .map_err(|source| self.write_error(source))?;
        }

        tmp.write_all(contents.as_bytes())
            .map_err(|source| self.write_error(source))?;

        tmp.as_file()
            .sync_all()
            .map_err(|source| self.write_error(source))?;
        tmp.persist(&self.path)
            .map_err(|e| self.write_error(e.error))?;

        debug!(
            path = %self.path.display(),
            sources = config.sources.len(),
            "saved config"
        );
        Ok(())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
