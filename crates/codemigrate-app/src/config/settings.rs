//! Settings loader for .codemigrate/config.toml

use std::path::{Path, PathBuf};

use codemigrate_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = ".codemigrate";

/// Environment variable overriding `api.base_url`
pub const API_BASE_ENV: &str = "CODEMIGRATE_API_BASE";

/// Path of the config file for a project directory
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.codemigrate/config.toml`
///
/// Returns defaults if the file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = config_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Command-line values that take precedence over the environment and the file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub api_base: Option<String>,
    pub target: Option<String>,
}

/// Apply overrides in priority order: CLI > `CODEMIGRATE_API_BASE` > file
pub fn apply_overrides(settings: &mut Settings, cli: &CliOverrides) {
    if let Ok(env_base) = std::env::var(API_BASE_ENV) {
        let env_base = env_base.trim();
        if !env_base.is_empty() {
            debug!("Using {} from {}", env_base, API_BASE_ENV);
            settings.api.base_url = env_base.to_string();
        }
    }

    if let Some(api_base) = cli.api_base.as_deref() {
        debug!("Using {} from --api-base", api_base);
        settings.api.base_url = api_base.to_string();
    }

    if let Some(target) = cli.target.as_deref() {
        settings.ui.default_target = target.to_string();
    }
}

/// Load settings and apply overrides
pub fn resolve_settings(project_path: &Path, cli: &CliOverrides) -> Settings {
    let mut settings = load_settings(project_path);
    apply_overrides(&mut settings, cli);
    settings
}

/// Create `.codemigrate/config.toml` with commented defaults
///
/// An existing file is left untouched. Returns the config file path.
pub fn init_config_dir(project_path: &Path) -> Result<PathBuf> {
    let config_dir = project_path.join(CONFIG_DIR);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)
            .map_err(|e| Error::config(format!("Failed to create {} dir: {}", CONFIG_DIR, e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        info!("Config already exists at {:?}", config_path);
        return Ok(config_path);
    }

    std::fs::write(&config_path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(config_path)
}

/// Default config file contents
pub fn generate_default_config() -> String {
    format!(
        r#"# CodeMigrate Configuration

[api]
base_url = "{base_url}"
# timeout_secs = 120   # Unset = wait as long as the backend takes

[ui]
default_target = "{target}"   # React (Hooks), Vue.js 3, Python 3, Angular (Modern), JavaScript (ES6+)
default_source = "{source}"
show_line_numbers = true

[behavior]
confirm_rollback = true       # Ask before discarding migrated code
"#,
        base_url = super::types::DEFAULT_API_BASE,
        target = codemigrate_core::TargetLanguage::default().label(),
        source = codemigrate_core::SourceLanguage::default().label(),
    )
}
