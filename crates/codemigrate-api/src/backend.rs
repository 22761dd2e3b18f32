//! Backend abstraction
//!
//! The app crate depends on this trait rather than on [`crate::HttpBackend`]
//! so the reducer loop and headless runner can be driven by a scripted backend
//! in tests.

use codemigrate_core::prelude::*;

use crate::protocol::{AnalyzeResponse, HealthResponse, MigrateResponse, UploadedFile};

/// Remote analysis, migration and test-generation operations
///
/// Implement [`MigrationBackend`]; the local variant follows automatically.
#[trait_variant::make(MigrationBackend: Send)]
pub trait LocalMigrationBackend {
    /// `POST /analyze` with the file as multipart field `file`
    async fn analyze(&self, file: UploadedFile) -> Result<AnalyzeResponse>;

    /// `POST /migrate` with the source code and the target wire value
    async fn migrate(&self, code: String, target_lang: String) -> Result<MigrateResponse>;

    /// `POST /generate-tests`, returning the generated test code
    async fn generate_tests(&self, migrated_code: String) -> Result<String>;

    /// `GET /`
    async fn health(&self) -> Result<HealthResponse>;
}
