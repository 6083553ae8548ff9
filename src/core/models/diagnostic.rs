//! Processing failures and the diagnostics reported for them

use super::item::{Item, ItemKind};

/// Why an item could not be normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProcessingError {
    /// The item has no text to trim or lowercase
    #[error("'{kind}' item does not support trim/lowercase")]
    Unsupported {
        /// Kind of the rejected item
        kind: ItemKind,
    },
}

/// A failed item together with the reason it failed
///
/// Renders as `Error processing <item>: <error>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The item that failed
    pub item: Item,
    /// The failure
    pub error: ProcessingError,
}

impl Diagnostic {
    /// Create a diagnostic for a failed item
    #[must_use]
    pub const fn new(item: Item, error: ProcessingError) -> Self {
        Self { item, error }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error processing {}: {}", self.item, self.error)
    }
}
