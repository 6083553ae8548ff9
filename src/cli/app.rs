//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use itemproc::core::ports::StoreBackend;
use itemproc::output::OutputMode;

/// itemproc - Normalize batches of text items
#[derive(Parser, Debug)]
#[command(
    name = "itemproc",
    version,
    about = "Normalize batches of text items",
    long_about = "Trim and lowercase every text item in a JSON array.\n\n\
                  Empty items are kept as null. Items that cannot be normalized\n\
                  are reported on stderr and dropped."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Settings file (defaults to ~/.config/itemproc/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process a JSON array of items
    Run {
        /// Input file (reads stdin when omitted or "-")
        input: Option<PathBuf>,

        /// Store backend: noop, memory, file
        #[arg(short, long, default_value = "noop")]
        store: StoreBackend,

        /// Path for the file store
        #[arg(long)]
        store_path: Option<PathBuf>,

        /// Report dropped items through the logger instead of plain stderr
        #[arg(long)]
        log_diagnostics: bool,
    },

    /// Load stored items
    Load {
        /// Substring to filter by (all items when omitted)
        query: Option<String>,

        /// Path of a file store to read (no-op store when omitted)
        #[arg(long)]
        store_path: Option<PathBuf>,
    },

    /// Show the effective settings
    Config {
        /// Validate the settings instead of printing them
        #[arg(long, conflicts_with = "init")]
        validate: bool,

        /// Write a settings file with default values
        #[arg(long)]
        init: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = cli.config.as_deref();

    match cli.command {
        Some(Command::Run {
            input,
            store,
            store_path,
            log_diagnostics,
        }) => {
            let diagnostics = if log_diagnostics {
                commands::Diagnostics::Log
            } else {
                commands::Diagnostics::Stderr
            };
            commands::run(
                input.as_deref(),
                store,
                store_path.as_deref(),
                diagnostics,
                config,
                output_mode,
            )
        },
        Some(Command::Load { query, store_path }) => {
            commands::load(query.as_deref(), store_path.as_deref(), config, output_mode)
        },
        Some(Command::Config { validate, init }) => {
            if init {
                commands::init_config(config, output_mode)
            } else {
                commands::config(validate, config, output_mode)
            }
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": itemproc::VERSION
                    })
                );
            } else {
                println!("itemproc v{}", itemproc::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": itemproc::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("itemproc v{}", itemproc::VERSION);
                println!("\nRun 'itemproc --help' for usage");
                println!("Run 'itemproc run items.json' to process a batch");
            }
            Ok(())
        },
    }
}
