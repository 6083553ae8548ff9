//! Load command - read items back from a store

use std::path::Path;

use itemproc::Processor;
use itemproc::adapters::JsonFileStore;
use itemproc::core::models::ItemQuery;
use itemproc::output::{LoadResult, OutputMode};

/// Load stored items matching `query`
pub fn load(
    query: Option<&str>,
    store_path: Option<&Path>,
    config: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let settings = super::load_settings(config)?;

    let builder = Processor::builder().settings(&settings);
    let processor = match store_path {
        Some(path) => builder.store(JsonFileStore::new(path)).build(),
        None => builder.build(),
    };

    let query = query.map_or_else(ItemQuery::all, ItemQuery::new);
    let items = processor.load_from_database(&query)?;

    LoadResult {
        query: query.to_string(),
        items,
    }
    .render(mode);

    Ok(())
}
