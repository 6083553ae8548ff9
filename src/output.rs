//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::ProcessedItem;
use crate::core::services::BatchReport;

/// Placeholder printed for the absence marker in human mode
pub const ABSENT_LABEL: &str = "<absent>";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Human rendering of one processed item (without color)
#[must_use]
pub fn format_item(item: &ProcessedItem) -> String {
    item.clone().unwrap_or_else(|| ABSENT_LABEL.to_string())
}

fn print_items(items: &[ProcessedItem]) {
    for item in items {
        let line = format_item(item);
        if item.is_some() {
            println!("{line}");
        } else {
            println!("{}", line.dimmed());
        }
    }
}

/// Result of a run operation
#[derive(Debug, Serialize)]
pub struct RunResult {
    /// Processed items, in input order
    pub items: Vec<ProcessedItem>,
    /// Number of dropped items
    pub dropped: usize,
    /// Where the items were sent
    pub store: String,
    /// When the run finished (RFC3339)
    pub completed_at: String,
}

impl RunResult {
    /// Build a result from a batch report
    #[must_use]
    pub fn from_report(report: BatchReport, store: impl Into<String>) -> Self {
        Self {
            items: report.items,
            dropped: report.dropped,
            store: store.into(),
            completed_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        print_items(&self.items);

        let summary = format!(
            "Processed {} item(s), dropped {}, store: {}",
            self.items.len(),
            self.dropped,
            self.store
        );
        if self.dropped == 0 {
            println!("\n{}", summary.green());
        } else {
            println!("\n{}", summary.yellow());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a load operation
#[derive(Debug, Serialize)]
pub struct LoadResult {
    /// The query that was run
    pub query: String,
    /// Items returned by the store
    pub items: Vec<ProcessedItem>,
}

impl LoadResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.items.is_empty() {
            println!("No stored items found.");
            return;
        }
        print_items(&self.items);
        println!("\n{} item(s) loaded.", self.items.len());
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
