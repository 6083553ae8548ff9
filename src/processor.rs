//! The item processor
//!
//! [`Processor`] ties the pure batch service to its two collaborators: an
//! [`ItemStore`] that receives processed output and a [`DiagnosticSink`]
//! that hears about every dropped item.
//!
//! ```
//! use itemproc::Processor;
//! use itemproc::core::models::Item;
//!
//! let processor = Processor::new();
//! let out = processor.run(&[Item::text("  Hello  "), Item::text("")]);
//! assert_eq!(out, vec![Some("hello".to_string()), None]);
//! ```

use crate::adapters::{NoopStore, StderrSink};
use crate::config::Settings;
use crate::core::models::{
    DatabaseConfig, Diagnostic, Item, ItemQuery, ProcessedItem, ProcessingConfig, ProcessingError,
};
use crate::core::ports::{DiagnosticSink, ItemStore};
use crate::core::services::{self, BatchReport};

/// Normalizes batches of items and forwards them to a store
pub struct Processor {
    processing: ProcessingConfig,
    database: DatabaseConfig,
    store: Box<dyn ItemStore>,
    sink: Box<dyn DiagnosticSink>,
}

impl std::fmt::Debug for Processor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Processor")
            .field("processing", &self.processing)
            .field("database", &self.database)
            .finish_non_exhaustive()
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Processor {
    /// Create a processor with default configuration, a no-op store and
    /// diagnostics on stderr
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a processor
    #[must_use]
    pub fn builder() -> ProcessorBuilder {
        ProcessorBuilder::default()
    }

    /// Processing limits this processor was built with
    #[must_use]
    pub const fn processing_config(&self) -> &ProcessingConfig {
        &self.processing
    }

    /// Database parameters this processor was built with
    #[must_use]
    pub const fn database_config(&self) -> &DatabaseConfig {
        &self.database
    }

    /// Normalize a batch, dropping items that fail
    ///
    /// Failures are reported through [`Processor::handle_error`] and never
    /// reach the caller.
    #[must_use]
    pub fn process_batch(&self, items: &[Item]) -> Vec<ProcessedItem> {
        self.process_batch_report(items).items
    }

    /// Like [`Processor::process_batch`], also counting dropped items
    #[must_use]
    pub fn process_batch_report(&self, items: &[Item]) -> BatchReport {
        let report = services::process_items(items, |err, item| self.handle_error(err, item));
        log::debug!("processed {} item(s), dropped {}", report.items.len(), report.dropped);
        report
    }

    /// Normalize a single item
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError`] when the item has no text form.
    #[allow(clippy::unused_self)]
    pub fn process_single_item(&self, item: &Item) -> Result<ProcessedItem, ProcessingError> {
        services::normalize(item)
    }

    /// Report a failed item to the diagnostic sink
    pub fn handle_error(&self, error: &ProcessingError, item: &Item) {
        self.sink.report(&Diagnostic::new(item.clone(), *error));
    }

    /// Hand processed items to the store
    pub fn save_to_database(&self, data: &[ProcessedItem]) -> anyhow::Result<()> {
        self.store.store(data)
    }

    /// Load previously stored items from the store
    pub fn load_from_database(&self, query: &ItemQuery) -> anyhow::Result<Vec<ProcessedItem>> {
        self.store.load(query)
    }

    /// Process a batch, save it, and return the processed items
    ///
    /// A store failure is logged and otherwise ignored; the processed items
    /// are returned either way.
    #[must_use]
    pub fn run(&self, items: &[Item]) -> Vec<ProcessedItem> {
        self.run_report(items).items
    }

    /// Like [`Processor::run`], also counting dropped items
    #[must_use]
    pub fn run_report(&self, items: &[Item]) -> BatchReport {
        let report = self.process_batch_report(items);
        if let Err(e) = self.save_to_database(&report.items) {
            log::warn!("failed to save {} processed item(s): {e:#}", report.items.len());
        }
        report
    }
}

/// Builder for [`Processor`]
pub struct ProcessorBuilder {
    processing: ProcessingConfig,
    database: DatabaseConfig,
    store: Box<dyn ItemStore>,
    sink: Box<dyn DiagnosticSink>,
}

impl std::fmt::Debug for ProcessorBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorBuilder")
            .field("processing", &self.processing)
            .field("database", &self.database)
            .finish_non_exhaustive()
    }
}

impl Default for ProcessorBuilder {
    fn default() -> Self {
        Self {
            processing: ProcessingConfig::default(),
            database: DatabaseConfig::default(),
            store: Box::new(NoopStore::new()),
            sink: Box::new(StderrSink),
        }
    }
}

impl ProcessorBuilder {
    /// Set processing limits
    #[must_use]
    pub fn processing(mut self, config: ProcessingConfig) -> Self {
        self.processing = config;
        self
    }

    /// Set database parameters
    #[must_use]
    pub fn database(mut self, config: DatabaseConfig) -> Self {
        self.database = config;
        self
    }

    /// Take both configuration records from loaded settings
    #[must_use]
    pub fn settings(self, settings: &Settings) -> Self {
        self.processing(settings.processing).database(settings.database.clone())
    }

    /// Set the item store
    #[must_use]
    pub fn store(self, store: impl ItemStore + 'static) -> Self {
        self.boxed_store(Box::new(store))
    }

    /// Set an already boxed item store
    #[must_use]
    pub fn boxed_store(mut self, store: Box<dyn ItemStore>) -> Self {
        self.store = store;
        self
    }

    /// Set the diagnostic sink
    #[must_use]
    pub fn sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Build the processor
    #[must_use]
    pub fn build(self) -> Processor {
        Processor {
            processing: self.processing,
            database: self.database,
            store: self.store,
            sink: self.sink,
        }
    }
}
