//! JSON file item store
//!
//! Keeps the full stored sequence as a pretty-printed JSON array.
//! Every `store` call appends to what is already on disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::core::models::{ItemQuery, ProcessedItem};
use crate::core::ports::ItemStore;

/// File-backed store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path` (created on first write)
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored item
    ///
    /// A missing file reads as an empty store.
    pub fn read_all(&self) -> anyhow::Result<Vec<ProcessedItem>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("invalid item store file {}", self.path.display()))
    }

    fn write_all(&self, items: &[ProcessedItem]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

impl ItemStore for JsonFileStore {
    fn store(&self, items: &[ProcessedItem]) -> anyhow::Result<()> {
        let mut all = self.read_all()?;
        all.extend_from_slice(items);
        self.write_all(&all)?;
        log::debug!("file store: {} item(s) written to {}", items.len(), self.path.display());
        Ok(())
    }

    fn load(&self, query: &ItemQuery) -> anyhow::Result<Vec<ProcessedItem>> {
        Ok(self.read_all()?.into_iter().filter(|item| query.matches(item)).collect())
    }
}
