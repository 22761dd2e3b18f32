//! Application state (Model in TEA pattern)

use std::collections::VecDeque;
use std::path::PathBuf;

use codemigrate_api::HealthResponse;
use codemigrate_core::{
    side_by_side, AnalysisPayload, DiffRow, SourceLanguage, Tab, TargetLanguage,
    FALLBACK_ANALYSIS_SOURCE, SOURCE_PLACEHOLDER,
};
use serde::Serialize;

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::requests::{RequestKind, RequestTracker};

/// Lines moved by PageUp/PageDown
pub const PAGE_LINES: usize = 20;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UiMode {
    /// Sidebar and tabbed main panel
    #[default]
    Normal,
    /// Typing the path of a file to upload
    PathInput,
    /// Confirmation dialog (rollback)
    ConfirmDialog,
    /// Blocking alert; any key dismisses
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Error,
    Info,
}

/// A blocking message box
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertState {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    /// Underlying error text, shown under the message
    pub detail: Option<String>,
}

impl AlertState {
    pub fn error(title: impl Into<String>, message: impl Into<String>, detail: String) -> Self {
        Self {
            kind: AlertKind::Error,
            title: title.into(),
            message: message.into(),
            detail: Some(detail),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Info,
            title: title.into(),
            message: message.into(),
            detail: None,
        }
    }
}

/// Result of the `GET /` probe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BackendStatus {
    #[default]
    Unknown,
    Checking,
    Online {
        status: String,
        ai_engine: Option<String>,
    },
    Unreachable {
        reason: String,
    },
}

impl From<HealthResponse> for BackendStatus {
    fn from(health: HealthResponse) -> Self {
        BackendStatus::Online {
            status: health.status,
            ai_engine: health.ai_engine,
        }
    }
}

/// Rendered size of the active tab's content, measured by the view layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentMetrics {
    pub tab: Tab,
    /// Rows the content occupies once wrapped to the panel width
    pub rows: usize,
    /// Rows visible inside the panel
    pub visible: usize,
}

/// The file most recently chosen for upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadInfo {
    pub name: String,
    pub path: PathBuf,
}

impl UploadInfo {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone, Serialize)]
pub struct AppState {
    /// File selected for the latest upload (display only)
    pub upload: Option<UploadInfo>,

    /// Decoded analysis of the last successful upload
    pub analysis: Option<AnalysisPayload>,

    /// Backend `source` marker for the analysis
    pub analysis_source: Option<String>,

    /// Source text returned by `/analyze`; placeholder until then
    pub source_code: String,

    /// Output of `/migrate`, or of `/generate-tests` which overwrites it.
    /// Set through [`AppState::set_migrated_code`] so `diff_rows` stays in sync.
    pub migrated_code: Option<String>,

    /// Side-by-side diff of `source_code` against `migrated_code`
    #[serde(skip)]
    pub diff_rows: Vec<DiffRow>,

    pub migration_steps: Vec<String>,

    pub active_tab: Tab,

    pub source_lang: SourceLanguage,

    pub target_lang: TargetLanguage,

    /// In-flight backend requests
    pub requests: RequestTracker,

    pub ui_mode: UiMode,

    /// Alert currently shown
    pub alert: Option<AlertState>,

    /// Alerts raised while another one was still on screen
    pub pending_alerts: VecDeque<AlertState>,

    pub confirm_dialog: Option<ConfirmDialogState>,

    /// Path prompt buffer
    pub path_input: String,

    /// Vertical scroll of the active tab, reset on tab change
    pub scroll_offset: usize,

    /// Last measurement reported by the view layer
    pub content_metrics: Option<ContentMetrics>,

    /// Spinner frame, advanced on ticks while a request is pending
    pub animation_frame: usize,

    pub backend_status: BackendStatus,

    pub settings: Settings,

    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            upload: None,
            analysis: None,
            analysis_source: None,
            source_code: SOURCE_PLACEHOLDER.to_string(),
            migrated_code: None,
            diff_rows: Vec::new(),
            migration_steps: Vec::new(),
            active_tab: Tab::Code,
            source_lang: settings.ui.source_language(),
            target_lang: settings.ui.target_language(),
            requests: RequestTracker::new(),
            ui_mode: UiMode::Normal,
            alert: None,
            pending_alerts: VecDeque::new(),
            confirm_dialog: None,
            path_input: String::new(),
            scroll_offset: 0,
            content_metrics: None,
            animation_frame: 0,
            backend_status: BackendStatus::Unknown,
            settings,
            should_quit: false,
        }
    }

    /// Replace the migrated code and recompute the diff against the source
    pub fn set_migrated_code(&mut self, code: Option<String>) {
        self.diff_rows = match &code {
            Some(migrated) => side_by_side(&self.source_code, migrated),
            None => Vec::new(),
        };
        self.migrated_code = code;
    }

    /// An analyze request is in flight
    pub fn loading(&self) -> bool {
        self.requests.is_pending(RequestKind::Analyze)
    }

    /// A migrate request is in flight
    pub fn migrating(&self) -> bool {
        self.requests.is_pending(RequestKind::Migrate)
    }

    /// A generate-tests request is in flight
    pub fn generating_tests(&self) -> bool {
        self.requests.is_pending(RequestKind::GenerateTests)
    }

    pub fn has_analysis(&self) -> bool {
        self.analysis.is_some()
    }

    pub fn has_migration(&self) -> bool {
        self.migrated_code.is_some()
    }

    /// Whether `tab` may be shown right now
    pub fn tab_available(&self, tab: Tab) -> bool {
        !tab.requires_migration() || self.has_migration()
    }

    /// Tabs currently reachable, in tab-bar order
    pub fn available_tabs(&self) -> Vec<Tab> {
        Tab::ALL
            .into_iter()
            .filter(|tab| self.tab_available(*tab))
            .collect()
    }

    /// Migrate is offered once an analysis exists and no migration is running
    pub fn can_migrate(&self) -> bool {
        self.has_analysis() && !self.migrating()
    }

    pub fn can_generate_tests(&self) -> bool {
        self.has_migration() && !self.generating_tests()
    }

    /// The analysis came from the backend's canned fallback
    pub fn is_fallback_analysis(&self) -> bool {
        self.analysis_source.as_deref() == Some(FALLBACK_ANALYSIS_SOURCE)
    }

    /// Detected language for the sidebar, once an analysis exists
    pub fn detected_language(&self) -> Option<&str> {
        self.analysis.as_ref().map(|a| a.language())
    }

    /// Measurement for the active tab, if the view has reported one
    fn active_metrics(&self) -> Option<ContentMetrics> {
        self.content_metrics.filter(|m| m.tab == self.active_tab)
    }

    /// Number of rows in the active tab, for scroll clamping.
    /// The report wraps, so its measured row count wins over the line estimate.
    pub fn content_lines(&self) -> usize {
        match self.active_tab {
            Tab::Code => self.source_code.lines().count(),
            Tab::Report => match self.active_metrics() {
                Some(metrics) => metrics.rows,
                None => self.report_lines_estimate(),
            },
            Tab::Diff => self.diff_rows.len(),
            Tab::Steps => self.migration_steps.len().max(1),
        }
    }

    /// Logical report lines, before wrapping
    fn report_lines_estimate(&self) -> usize {
        match &self.analysis {
                Some(AnalysisPayload::Structured(result)) => {
                    let summary = result.summary.as_deref().unwrap_or("").lines().count();
                    // headings, blank separators and the fixed fields
                    12 + summary + result.risks_or_default().len() + result.suggestions().len()
                }
                Some(AnalysisPayload::Raw(text)) => text.lines().count() + 2,
            None => 1,
        }
    }

    /// Largest valid scroll offset for the active tab.
    /// Once measured, the last row sits at the bottom of the panel.
    pub fn max_scroll(&self) -> usize {
        let visible = self.active_metrics().map_or(1, |m| m.visible.max(1));
        self.content_lines().saturating_sub(visible)
    }

    /// Spinner glyph for the current animation frame
    pub fn spinner(&self) -> char {
        const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
        FRAMES[self.animation_frame % FRAMES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codemigrate_core::AnalysisResult;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.source_code, SOURCE_PLACEHOLDER);
        assert_eq!(state.active_tab, Tab::Code);
        assert!(state.migrated_code.is_none());
        assert!(!state.loading());
        assert!(!state.migrating());
        assert!(!state.can_migrate());
        assert_eq!(state.available_tabs(), vec![Tab::Code, Tab::Report]);
    }

    #[test]
    fn test_settings_seed_selectors() {
        let mut settings = Settings::default();
        settings.ui.default_target = "Python 3".into();
        settings.ui.default_source = "Python 2".into();
        let state = AppState::with_settings(settings);
        assert_eq!(state.target_lang, TargetLanguage::Python3);
        assert_eq!(state.source_lang, SourceLanguage::Python2);
    }

    #[test]
    fn test_flags_follow_requests() {
        let mut state = AppState::new();
        state.requests.begin(RequestKind::Analyze);
        assert!(state.loading());
        state.requests.begin(RequestKind::Migrate);
        assert!(state.migrating());
        assert!(!state.generating_tests());
    }

    #[test]
    fn test_tabs_available_after_migration() {
        let mut state = AppState::new();
        state.set_migrated_code(Some("new".into()));
        assert_eq!(state.available_tabs(), Tab::ALL.to_vec());
        assert!(state.can_generate_tests());
    }

    #[test]
    fn test_diff_rows_follow_migrated_code() {
        let mut state = AppState::new();
        state.source_code = "a\nb\nc".into();
        state.set_migrated_code(Some("a\nB\nc\nd".into()));
        assert_eq!(state.diff_rows.len(), 4);

        state.active_tab = Tab::Diff;
        assert_eq!(state.content_lines(), 4);
        assert_eq!(state.max_scroll(), 3);

        state.set_migrated_code(None);
        assert!(state.diff_rows.is_empty());
    }

    #[test]
    fn test_measured_report_rows_drive_max_scroll() {
        let mut state = AppState::new();
        state.analysis = Some(AnalysisPayload::Structured(AnalysisResult::default()));
        state.active_tab = Tab::Report;
        let estimate = state.content_lines();

        state.content_metrics = Some(ContentMetrics {
            tab: Tab::Report,
            rows: estimate + 30,
            visible: 10,
        });
        assert_eq!(state.content_lines(), estimate + 30);
        assert_eq!(state.max_scroll(), estimate + 20);

        // A measurement of another tab is ignored
        state.active_tab = Tab::Code;
        assert_eq!(state.max_scroll(), state.source_code.lines().count() - 1);
    }

    #[test]
    fn test_fallback_analysis_detection() {
        let mut state = AppState::new();
        state.analysis = Some(AnalysisPayload::Structured(AnalysisResult::default()));
        state.analysis_source = Some("MOCK_FALLBACK".into());
        assert!(state.is_fallback_analysis());
        assert_eq!(state.detected_language(), Some("Unknown"));
    }

    #[test]
    fn test_state_serializes() {
        let state = AppState::new();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["active_tab"], "code");
        assert_eq!(json["ui_mode"], "normal");
        assert_eq!(json["backend_status"]["state"], "unknown");
    }

    #[test]
    fn test_upload_info_name() {
        let info = UploadInfo::from_path(PathBuf::from("/tmp/legacy/app.js"));
        assert_eq!(info.name, "app.js");
    }

    #[test]
    fn test_spinner_cycles() {
        let mut state = AppState::new();
        let first = state.spinner();
        state.animation_frame = 10;
        assert_eq!(state.spinner(), first);
    }
}
