//! Run command - process a JSON array of items

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;

use itemproc::Processor;
use itemproc::adapters::{self, LogSink, StderrSink};
use itemproc::core::models::Item;
use itemproc::core::ports::StoreBackend;
use itemproc::output::{OutputMode, RunResult};

/// Where dropped items are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostics {
    /// One plain line per item on stderr
    Stderr,
    /// Warn-level log records
    Log,
}

/// Process items from a file or stdin and print the result
pub fn run(
    input: Option<&Path>,
    backend: StoreBackend,
    store_path: Option<&Path>,
    diagnostics: Diagnostics,
    config: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let settings = super::load_settings(config)?;
    settings.validate()?;

    let items = read_items(input)?;
    log::debug!("read {} item(s)", items.len());

    let store = adapters::open_store(backend, store_path)?;
    let builder = Processor::builder().settings(&settings).boxed_store(store);
    let processor = match diagnostics {
        Diagnostics::Stderr => builder.sink(StderrSink).build(),
        Diagnostics::Log => builder.sink(LogSink).build(),
    };

    let report = processor.run_report(&items);
    RunResult::from_report(report, backend.to_string()).render(mode);

    Ok(())
}

fn read_items(input: Option<&Path>) -> anyhow::Result<Vec<Item>> {
    let content = match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => io::read_to_string(io::stdin()).context("failed to read stdin")?,
    };

    serde_json::from_str(&content).context("input must be a JSON array of items")
}
