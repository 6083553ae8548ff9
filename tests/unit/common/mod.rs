//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing itemproc components.

use itemproc::Processor;
use itemproc::adapters::{CollectingSink, MemoryStore};
use itemproc::core::models::Item;

/// A processor wired to in-memory collaborators that tests can inspect
pub struct TestProcessor {
    pub processor: Processor,
    pub store: MemoryStore,
    pub diagnostics: CollectingSink,
}

impl TestProcessor {
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let diagnostics = CollectingSink::new();
        let processor =
            Processor::builder().store(store.clone()).sink(diagnostics.clone()).build();
        Self {
            processor,
            store,
            diagnostics,
        }
    }
}

/// Parse a JSON array literal into items
pub fn items(json: &str) -> Vec<Item> {
    serde_json::from_str(json).expect("fixture must be a JSON array")
}

/// Shorthand for a text output
pub fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}
