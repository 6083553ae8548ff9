//! Item store port
//!
//! Defines the persistence capability the processor hands its output to.

use crate::core::models::{ItemQuery, ProcessedItem};

/// Persistence backend for processed items
///
/// The processor depends on this trait but never constructs a connection
/// itself. Implementations decide how (and whether) items are kept.
#[cfg_attr(test, mockall::automock)]
pub trait ItemStore: Send + Sync {
    /// Persist a processed batch
    fn store(&self, items: &[ProcessedItem]) -> anyhow::Result<()>;

    /// Load previously stored items matching a query
    fn load(&self, query: &ItemQuery) -> anyhow::Result<Vec<ProcessedItem>>;
}

/// Store backend type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// Discards everything (default)
    #[default]
    Noop,
    /// Keeps items in process memory
    Memory,
    /// JSON file on disk
    File,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "noop" | "none" => Ok(Self::Noop),
            "memory" | "mem" => Ok(Self::Memory),
            "file" | "json" => Ok(Self::File),
            _ => Err(format!("Unknown store: {s}. Use 'noop', 'memory' or 'file'")),
        }
    }
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Noop => write!(f, "noop"),
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
        }
    }
}
