//! # codemigrate-api - Migration Backend Client
//!
//! Wire types and the HTTP client for the CodeMigrate backend.
//!
//! ## Public API
//!
//! - [`MigrationBackend`] - async trait the app layer is generic over
//! - [`HttpBackend`] - reqwest implementation (`/analyze`, `/migrate`,
//!   `/generate-tests`, `GET /`)
//! - [`ClientConfig`] - base URL and timeout
//! - Protocol types: [`UploadedFile`], [`AnalyzeResponse`], [`MigrateRequest`],
//!   [`MigrateResponse`], [`GenerateTestsRequest`], [`HealthResponse`]
//!
//! With the `test-helpers` feature, [`test_utils::MockBackend`] provides a
//! scripted backend.

pub mod backend;
pub mod client;
pub mod protocol;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use backend::{LocalMigrationBackend, MigrationBackend};
pub use client::{parse_base_url, ClientConfig, HttpBackend};
pub use protocol::{
    endpoints, AnalyzeResponse, GenerateTestsRequest, GenerateTestsResponse, HealthResponse,
    MigrateRequest, MigrateResponse, UploadedFile, UPLOAD_FIELD,
};
