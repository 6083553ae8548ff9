//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `noop` - Placeholder store (default)
//! - `memory` - In-process item store
//! - `file` - JSON file item store
//! - `diagnostics` - stderr, log and collecting diagnostic sinks

pub mod diagnostics;
pub mod file;
pub mod memory;
pub mod noop;

use std::path::Path;

use crate::core::ports::{ItemStore, StoreBackend};

pub use diagnostics::{CollectingSink, LogSink, StderrSink};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use noop::NoopStore;

/// Open the store for a backend
///
/// The file backend needs a path; the others ignore it.
pub fn open_store(
    backend: StoreBackend,
    path: Option<&Path>,
) -> anyhow::Result<Box<dyn ItemStore>> {
    match backend {
        StoreBackend::Noop => Ok(Box::new(NoopStore::new())),
        StoreBackend::Memory => Ok(Box::new(MemoryStore::new())),
        StoreBackend::File => {
            let Some(path) = path else {
                anyhow::bail!("the file store needs a path (use --store-path)");
            };
            Ok(Box::new(JsonFileStore::new(path)))
        },
    }
}
