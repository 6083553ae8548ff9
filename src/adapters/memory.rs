//! In-memory item store

use std::sync::{Arc, Mutex, PoisonError};

use crate::core::models::{ItemQuery, ProcessedItem};
use crate::core::ports::ItemStore;

/// Store that keeps every stored item in process memory
///
/// Clones share the same backing buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<Vec<ProcessedItem>>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with items
    #[must_use]
    pub fn with_items(items: Vec<ProcessedItem>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
        }
    }

    /// Copy of everything stored so far
    #[must_use]
    pub fn snapshot(&self) -> Vec<ProcessedItem> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of stored items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing has been stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ItemStore for MemoryStore {
    fn store(&self, items: &[ProcessedItem]) -> anyhow::Result<()> {
        let mut stored =
            self.items.lock().map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?;
        stored.extend_from_slice(items);
        log::debug!("memory store: {} item(s) stored, {} total", items.len(), stored.len());
        Ok(())
    }

    fn load(&self, query: &ItemQuery) -> anyhow::Result<Vec<ProcessedItem>> {
        let stored =
            self.items.lock().map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?;
        Ok(stored.iter().filter(|item| query.matches(item)).cloned().collect())
    }
}
