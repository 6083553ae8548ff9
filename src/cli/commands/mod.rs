//! Command implementations

mod config;
mod load;
mod run;

use std::path::Path;

use itemproc::config::Settings;

pub use config::{config, init_config};
pub use load::load;
pub use run::{Diagnostics, run};

/// Load settings from an explicit path, or the default location
fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let settings = match path {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    Ok(settings)
}
