//! Batch service - normalizes a sequence of items
//!
//! Each item yields an explicit result. Successes are accumulated in input
//! order; failures are handed to the caller's error handler and dropped.

use serde::Serialize;

use super::normalizer::normalize;
use crate::core::models::{Item, ProcessedItem, ProcessingError};

/// Outcome of processing a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Normalized items, in input order, without the dropped ones
    pub items: Vec<ProcessedItem>,
    /// Number of items that failed and were dropped
    pub dropped: usize,
}

impl BatchReport {
    /// Total number of input items seen
    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len() + self.dropped
    }
}

/// Normalize every item, routing failures to `on_error`
///
/// This is pure orchestration: it never retries and never fails. The output
/// has one entry per non-failing input item.
pub fn process_items<F>(items: &[Item], mut on_error: F) -> BatchReport
where
    F: FnMut(&ProcessingError, &Item),
{
    let mut report = BatchReport {
        items: Vec::with_capacity(items.len()),
        dropped: 0,
    };

    for item in items {
        match normalize(item) {
            Ok(processed) => report.items.push(processed),
            Err(err) => {
                on_error(&err, item);
                report.dropped += 1;
            },
        }
    }

    report
}
