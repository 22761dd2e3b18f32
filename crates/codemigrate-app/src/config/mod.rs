//! Configuration file parsing for CodeMigrate
//!
//! Supports `.codemigrate/config.toml` with `CODEMIGRATE_API_BASE` and CLI
//! overrides layered on top.

pub mod settings;
pub mod types;

pub use settings::{
    apply_overrides, config_path, generate_default_config, init_config_dir, load_settings,
    resolve_settings, CliOverrides, API_BASE_ENV,
};
pub use types::*;
