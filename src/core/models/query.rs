//! Store queries

use super::item::ProcessedItem;

/// A query passed through to an item store
///
/// The processor never interprets it. The bundled stores treat it as a
/// substring filter: an empty query matches everything, including absence
/// markers; a non-empty one matches stored text containing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ItemQuery(String);

impl ItemQuery {
    /// Create a query
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    /// Query matching every stored item
    #[must_use]
    pub const fn all() -> Self {
        Self(String::new())
    }

    /// Raw query text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the query is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Substring match used by the bundled stores
    #[must_use]
    pub fn matches(&self, item: &ProcessedItem) -> bool {
        if self.is_empty() {
            return true;
        }
        item.as_deref().is_some_and(|text| text.contains(self.0.as_str()))
    }
}

impl std::fmt::Display for ItemQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemQuery {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
