//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use codemigrate_api::{AnalyzeResponse, HealthResponse, MigrateResponse};
use codemigrate_core::{SourceLanguage, Tab, TargetLanguage};

use crate::input_key::InputKey;
use crate::requests::RequestToken;
use crate::state::ContentMetrics;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),
    /// Tick event for periodic updates (spinner animation)
    Tick,
    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Upload & Analyze
    // ─────────────────────────────────────────────────────────
    /// Open the file path prompt
    OpenPathInput,
    PathInputChar(char),
    PathInputBackspace,
    PathInputClear,
    SubmitPathInput,
    CancelPathInput,
    /// Upload a file and request its analysis
    UploadFile { path: PathBuf },
    AnalyzeCompleted {
        token: RequestToken,
        response: AnalyzeResponse,
    },
    AnalyzeFailed {
        token: RequestToken,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Language selectors
    // ─────────────────────────────────────────────────────────
    NextSourceLang,
    PreviousSourceLang,
    SetSourceLang(SourceLanguage),
    NextTargetLang,
    PreviousTargetLang,
    SetTargetLang(TargetLanguage),

    // ─────────────────────────────────────────────────────────
    // Migrate
    // ─────────────────────────────────────────────────────────
    Migrate,
    MigrateCompleted {
        token: RequestToken,
        response: MigrateResponse,
    },
    MigrateFailed {
        token: RequestToken,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Rollback
    // ─────────────────────────────────────────────────────────
    /// Ask for rollback (shows confirmation if configured)
    RequestRollback,
    /// Discard migrated code and steps
    ConfirmRollback,
    CancelDialog,

    // ─────────────────────────────────────────────────────────
    // Generate tests
    // ─────────────────────────────────────────────────────────
    GenerateTests,
    TestsGenerated {
        token: RequestToken,
        test_code: String,
    },
    TestsFailed {
        token: RequestToken,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Tabs & scrolling
    // ─────────────────────────────────────────────────────────
    SelectTab(Tab),
    NextTab,
    PreviousTab,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    /// Rendered size of the active tab, sent by the event loop after a draw
    ContentMeasured(ContentMetrics),

    DismissAlert,

    // ─────────────────────────────────────────────────────────
    // Backend health
    // ─────────────────────────────────────────────────────────
    CheckBackend,
    BackendChecked(HealthResponse),
    BackendUnreachable { error: String },
}
