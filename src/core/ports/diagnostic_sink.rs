//! Diagnostic sink port
//!
//! Where per-item failures are reported. This is the only channel through
//! which a dropped item becomes visible.

use crate::core::models::Diagnostic;

/// Receiver for per-item failure diagnostics
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink: Send + Sync {
    /// Report one failed item
    fn report(&self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn report(&self, diagnostic: &Diagnostic) {
        self(diagnostic);
    }
}
