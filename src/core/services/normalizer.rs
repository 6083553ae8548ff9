//! Single-item normalization

use crate::core::models::{Item, ProcessedItem, ProcessingError};

/// Normalize one item
///
/// Falsy items map to the absence marker (`Ok(None)`). Text is trimmed of
/// surrounding whitespace and lowercased. Any other truthy item has no text
/// form and is rejected.
///
/// # Errors
///
/// Returns [`ProcessingError::Unsupported`] for truthy non-text items.
pub fn normalize(item: &Item) -> Result<ProcessedItem, ProcessingError> {
    if item.is_falsy() {
        return Ok(None);
    }

    match item {
        Item::Text(text) => Ok(Some(text.trim_matches(is_separator).to_lowercase())),
        other => Err(ProcessingError::Unsupported { kind: other.kind() }),
    }
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
