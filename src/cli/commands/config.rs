//! Config command - show or validate the effective settings

use std::path::Path;

use itemproc::config::Settings;
use itemproc::output::{OperationResult, OutputMode};

/// Print (or validate) the settings in effect
pub fn config(validate: bool, path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let settings = super::load_settings(path)?;

    if validate {
        let result = match settings.validate() {
            Ok(()) => OperationResult {
                success: true,
                message: "Settings are valid.".to_string(),
            },
            Err(e) => OperationResult {
                success: false,
                message: e.to_string(),
            },
        };
        result.render(mode);
        if !result.success {
            anyhow::bail!("settings validation failed");
        }
        return Ok(());
    }

    match mode {
        OutputMode::Human => print!("{}", settings.to_toml_string()?),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&settings)?),
    }

    Ok(())
}

/// Write default settings to the given path, or the default location
///
/// An existing file is never overwritten.
pub fn init_config(path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let target = path.map_or_else(Settings::default_path, Path::to_path_buf);
    if target.exists() {
        anyhow::bail!("settings file already exists: {}", target.display());
    }

    Settings::default().save_to(&target)?;
    log::debug!("wrote default settings to {}", target.display());

    OperationResult {
        success: true,
        message: format!("Wrote default settings to {}", target.display()),
    }
    .render(mode);

    Ok(())
}
