//! CodeMigrate - terminal client for the CodeMigrate migration service
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use codemigrate_api::HttpBackend;
use codemigrate_app::config::{self, CliOverrides};
use codemigrate_core::logging;
use codemigrate_core::prelude::*;

/// CodeMigrate - analyze legacy code and migrate it to a modern stack
#[derive(Parser, Debug)]
#[command(name = "codemigrate", version)]
#[command(about = "Analyze legacy code and migrate it with the CodeMigrate service", long_about = None)]
struct Args {
    /// File to upload and analyze at startup
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Backend base URL (overrides CODEMIGRATE_API_BASE and the config file)
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Target language label, e.g. "Vue.js 3"
    #[arg(long, value_name = "LANG")]
    target: Option<String>,

    /// Run without a TUI, printing NDJSON events to stdout
    #[arg(long, requires = "file")]
    headless: bool,

    /// In headless mode, also generate unit tests for the migrated code
    #[arg(long, requires = "headless")]
    generate_tests: bool,

    /// Write a default .codemigrate/config.toml and exit
    #[arg(long, conflicts_with_all = ["file", "headless"])]
    init: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file; stdout belongs to the TUI or the NDJSON stream
    logging::init()?;

    let project_path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init {
        let path = config::init_config_dir(&project_path)?;
        eprintln!("Config file: {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let settings = config::resolve_settings(
        &project_path,
        &CliOverrides {
            api_base: args.api_base,
            target: args.target,
        },
    );
    info!("Backend: {}", settings.api.base_url);

    let backend = Arc::new(HttpBackend::new(&settings.api.client_config())?);

    if args.headless {
        let Some(file) = args.file else {
            // clap enforces `requires = "file"`
            return Ok(ExitCode::FAILURE);
        };
        let success =
            codemigrate::run_headless(settings, backend, file, args.generate_tests).await?;
        return Ok(if success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let result = codemigrate_tui::run(settings, backend, args.file).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result.map(|_| ExitCode::SUCCESS)
}
