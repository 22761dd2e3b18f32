//! # codemigrate-core - Core Domain Types
//!
//! Foundation crate for CodeMigrate. Provides domain types, error handling,
//! logging setup, boundary decoding of the backend's analysis payload and the
//! line diff used by the migration view.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Tab`] - The four read-only views (code, report, diff, steps)
//! - [`SourceLanguage`], [`TargetLanguage`] - Language selector choices
//! - [`AnalysisResult`] - Structured analysis fields
//! - [`AnalysisPayload`] - Structured or raw analysis after decoding
//!
//! ### Analysis Decoding (`analysis`)
//! - [`decode_analysis()`] - Normalize the `analysis` JSON value
//! - [`strip_code_fences()`] - Remove Markdown fence markers
//!
//! ### Diff (`diff`)
//! - [`side_by_side()`] - Aligned rows for the diff view
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context

pub mod analysis;
pub mod diff;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all CodeMigrate crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use analysis::{decode_analysis, decode_analysis_str, strip_code_fences};
pub use diff::{side_by_side, DiffKind, DiffLine, DiffRow, DiffStats};
pub use error::{Error, Result, ResultExt};
pub use types::{
    AnalysisPayload, AnalysisResult, SourceLanguage, Tab, TargetLanguage, DEFAULT_MIGRATION_STEP,
    DEFAULT_RISK, FALLBACK_ANALYSIS_SOURCE, SOURCE_PLACEHOLDER, UNKNOWN_LANGUAGE,
};
