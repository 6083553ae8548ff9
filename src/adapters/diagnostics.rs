//! Diagnostic sinks

use std::sync::{Arc, Mutex, PoisonError};

use crate::core::models::Diagnostic;
use crate::core::ports::DiagnosticSink;

/// Writes one line per diagnostic to standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&self, diagnostic: &Diagnostic) {
        eprintln!("{diagnostic}");
    }
}

/// Routes diagnostics through the `log` facade at warn level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic) {
        log::warn!("{diagnostic}");
    }
}

/// Records rendered diagnostic lines in memory
///
/// Clones share the same buffer, so a clone can be handed to a processor
/// while the original is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CollectingSink {
    /// Create an empty collector
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines reported so far
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of lines reported so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing has been reported
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).push(diagnostic.to_string());
    }
}
