//! Wire types for the migration backend
//!
//! Request bodies serialize exactly as the backend expects. Responses are
//! deserialized into `*Wire` structs first and then normalized, so the rest of
//! the application never sees untyped JSON.

use std::path::Path;

use codemigrate_core::prelude::*;
use codemigrate_core::{decode_analysis, AnalysisPayload, DEFAULT_MIGRATION_STEP};
use serde::{Deserialize, Serialize};

/// Endpoint paths, relative to the configured base URL
pub mod endpoints {
    pub const HEALTH: &str = "";
    pub const ANALYZE: &str = "analyze";
    pub const MIGRATE: &str = "migrate";
    pub const GENERATE_TESTS: &str = "generate-tests";
}

/// Multipart field name carrying the uploaded file
pub const UPLOAD_FIELD: &str = "file";

// ─────────────────────────────────────────────────────────────────
// Upload
// ─────────────────────────────────────────────────────────────────

/// A file selected by the user, held only until it is forwarded to `/analyze`
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk
    pub async fn read(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| Error::file_read(path, e.to_string()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        debug!("Read {} ({} bytes) for upload", name, bytes.len());
        Ok(Self { name, bytes })
    }
}

// ─────────────────────────────────────────────────────────────────
// /analyze
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeWire {
    #[serde(default)]
    analysis: serde_json::Value,
    source_code: String,
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    source: Option<String>,
}

/// Normalized `/analyze` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisPayload,
    pub source_code: String,
    /// File name echoed back by the backend
    pub filename: Option<String>,
    /// Where the analysis came from (`MOCK_FALLBACK` when the AI call failed)
    pub source: Option<String>,
}

impl From<AnalyzeWire> for AnalyzeResponse {
    fn from(wire: AnalyzeWire) -> Self {
        Self {
            analysis: decode_analysis(wire.analysis),
            source_code: wire.source_code,
            filename: wire.filename,
            source: wire.source,
        }
    }
}

impl AnalyzeResponse {
    /// Parse and normalize a raw response body
    pub fn from_json(body: &str) -> Result<Self> {
        let wire: AnalyzeWire = serde_json::from_str(body)
            .map_err(|e| Error::decode(format!("analyze response: {}", e)))?;
        Ok(wire.into())
    }
}

// ─────────────────────────────────────────────────────────────────
// /migrate
// ─────────────────────────────────────────────────────────────────

/// `/migrate` request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrateRequest {
    pub code: String,
    pub target_lang: String,
}

/// `/migrate` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrateResponse {
    pub migrated_code: String,
    #[serde(default)]
    pub migration_steps: Option<Vec<String>>,
}

impl MigrateResponse {
    /// Steps to display; a missing field becomes the single default step
    pub fn steps_or_default(&self) -> Vec<String> {
        self.migration_steps
            .clone()
            .unwrap_or_else(|| vec![DEFAULT_MIGRATION_STEP.to_string()])
    }
}

// ─────────────────────────────────────────────────────────────────
// /generate-tests
// ─────────────────────────────────────────────────────────────────

/// `/generate-tests` request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateTestsRequest {
    pub migrated_code: String,
}

/// `/generate-tests` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateTestsResponse {
    pub test_code: String,
}

// ─────────────────────────────────────────────────────────────────
// Health probe
// ─────────────────────────────────────────────────────────────────

/// `GET /` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub ai_engine: Option<String>,
}
