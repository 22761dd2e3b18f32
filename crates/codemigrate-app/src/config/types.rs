//! Configuration types for CodeMigrate
//!
//! Defines `Settings`, the contents of `.codemigrate/config.toml`.

use std::time::Duration;

use codemigrate_api::ClientConfig;
use codemigrate_core::{SourceLanguage, TargetLanguage};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Backend used when neither the CLI, the environment nor the config file names one
pub const DEFAULT_API_BASE: &str = "https://code-migrate-api.onrender.com";

/// Global settings from `.codemigrate/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout; absent means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl ApiSettings {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url.clone())
            .with_timeout(self.timeout_secs.filter(|s| *s > 0).map(Duration::from_secs))
    }
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Initial target language, by label or wire value
    #[serde(default = "default_target")]
    pub default_target: String,

    /// Initial source language, by label
    #[serde(default = "default_source")]
    pub default_source: String,

    #[serde(default = "default_true")]
    pub show_line_numbers: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            default_target: default_target(),
            default_source: default_source(),
            show_line_numbers: true,
        }
    }
}

impl UiSettings {
    pub fn target_language(&self) -> TargetLanguage {
        TargetLanguage::parse(&self.default_target).unwrap_or_else(|| {
            warn!(
                "Unknown default_target '{}', using {}",
                self.default_target,
                TargetLanguage::default().label()
            );
            TargetLanguage::default()
        })
    }

    pub fn source_language(&self) -> SourceLanguage {
        SourceLanguage::parse(&self.default_source).unwrap_or_else(|| {
            warn!(
                "Unknown default_source '{}', using {}",
                self.default_source,
                SourceLanguage::default().label()
            );
            SourceLanguage::default()
        })
    }
}

/// Interaction settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before discarding migrated code
    #[serde(default = "default_true")]
    pub confirm_rollback: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            confirm_rollback: true,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_target() -> String {
    TargetLanguage::default().label().to_string()
}

fn default_source() -> String {
    SourceLanguage::default().label().to_string()
}

fn default_true() -> bool {
    true
}
