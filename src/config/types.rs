use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// Root of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SourceConfig {
    /// Name of the selected source, empty when none is selected.
    #[serde(default)]
    pub active_source: String,
    /// Registered sources in insertion order.
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// A named database connection descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub db: String,
    pub dsn: String,
}

impl Source {
    pub fn new(name: impl Into<String>, db: impl Into<String>, dsn: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            db: db.into(),
            dsn: dsn.into(),
        }
    }
}

impl SourceConfig {
    pub fn get_source(&self, name: &str) -> Option<&Source> {
        self.sources.iter().find(|s| s.name == name)
    }

    /// Append `source` unless one with the same name is already registered.
    /// Returns whether it was inserted.
    pub fn add_source(&mut self, source: Source) -> bool {
        if self.get_source(&source.name).is_some() {
            return false;
        }
        self.sources.push(source);
        true
    }

    pub fn set_active_source(&mut self, name: &str) -> Result<(), StoreError> {
        if self.get_source(name).is_none() {
            return Err(StoreError::SourceNotFound(name.to_string()));
        }
        self.active_source = name.to_string();
        Ok(())
    }

    pub fn active_source(&self) -> Result<&Source, StoreError> {
        if self.active_source.is_empty() {
            return Err(StoreError::NoActiveSource);
        }
        self.get_source(&self.active_source)
            .ok_or_else(|| StoreError::ActiveSourceMissing(self.active_source.clone()))
    }

    /// `(db, dsn)` of the active source.
    pub fn active_source_details(&self) -> Result<(&str, &str), StoreError> {
        let source = self.active_source()?;
        Ok((source.db.as_str(), source.dsn.as_str()))
    }
}
