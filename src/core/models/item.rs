//! Input and output items
//!
//! An [`Item`] is whatever the caller hands to the processor. Only text items
//! can be normalized; everything else is either falsy (kept as an absence
//! marker) or rejected.

use serde::{Deserialize, Serialize};

/// Result of normalizing one item.
///
/// `Some(text)` holds the trimmed, lowercased text. `None` is the absence
/// marker produced for empty/falsy input.
pub type ProcessedItem = Option<String>;

/// An opaque input unit
///
/// Deserializes from any JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    /// No value at all (`null`)
    Absent,
    /// A boolean
    Bool(bool),
    /// A number
    Number(serde_json::Number),
    /// A piece of text, the only normalizable kind
    Text(String),
    /// A sequence of nested items
    List(Vec<Item>),
    /// A key/value map
    Object(serde_json::Map<String, serde_json::Value>),
}

/// The kind of an [`Item`], used in error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// `null`
    Absent,
    /// `true` / `false`
    Bool,
    /// Integer or float
    Number,
    /// Text
    Text,
    /// List
    List,
    /// Object
    Object,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => write!(f, "none"),
            Self::Bool => write!(f, "bool"),
            Self::Number => write!(f, "number"),
            Self::Text => write!(f, "text"),
            Self::List => write!(f, "list"),
            Self::Object => write!(f, "object"),
        }
    }
}

impl Item {
    /// Create a text item
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// The kind of this item
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::Absent => ItemKind::Absent,
            Self::Bool(_) => ItemKind::Bool,
            Self::Number(_) => ItemKind::Number,
            Self::Text(_) => ItemKind::Text,
            Self::List(_) => ItemKind::List,
            Self::Object(_) => ItemKind::Object,
        }
    }

    /// Whether this item counts as empty
    ///
    /// Falsy items: `null`, `false`, zero, `""`, `[]` and `{}`.
    /// Whitespace-only text is not falsy.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Bool(value) => !value,
            Self::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Object(map) => map.is_empty(),
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => write!(f, "null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => write!(f, "{text}"),
            Self::List(_) | Self::Object(_) => {
                write!(f, "{}", serde_json::to_string(self).unwrap_or_default())
            },
        }
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Item {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Item {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Item {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl<T: Into<Self>> From<Option<T>> for Item {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}
