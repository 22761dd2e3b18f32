//! Test utilities for TUI rendering verification
//!
//! Widgets and full frames are rendered into ratatui's `TestBackend` and
//! asserted on as plain text.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.draw_with(|frame| view(frame, &state));
//! assert!(term.buffer_contains("Source Code"));
//! ```

use codemigrate_app::AppState;
use codemigrate_core::{AnalysisPayload, AnalysisResult};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing responsive layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    /// The underlying ratatui terminal with TestBackend.
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with compact dimensions (40x12)
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame with a custom rendering function (e.g. `render::view`)
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Row index of the first line containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        (0..self.buffer().area.height).find(|y| self.line_contains(*y, text))
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&ratatui::buffer::Cell> {
        let buffer = self.buffer();
        if x < buffer.area.width && y < buffer.area.height {
            Some(&buffer[(x, y)])
        } else {
            None
        }
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, y)].symbol());
        }
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

// ─────────────────────────────────────────────────────────
// State fixtures
// ─────────────────────────────────────────────────────────

pub const LEGACY_SOURCE: &str = "var x = 1;\n$('#btn').click(go);\nfunction go() {}";
pub const MIGRATED_SOURCE: &str = "const x = 1;\n$('#btn').click(go);\nfunction go() {}";

pub fn sample_analysis() -> AnalysisResult {
    AnalysisResult {
        language: Some("jQuery".into()),
        complexity: Some("Medium".into()),
        summary: Some("Event-driven DOM code".into()),
        risks: Some(vec!["Global state".into()]),
        modernization_suggestions: Some(vec!["Use modules".into()]),
    }
}

/// State after a successful analyze of `legacy.js`
pub fn analyzed_state() -> AppState {
    let mut state = AppState::new();
    state.upload = Some(codemigrate_app::state::UploadInfo::from_path(
        "legacy.js".into(),
    ));
    state.analysis = Some(AnalysisPayload::Structured(sample_analysis()));
    state.source_code = LEGACY_SOURCE.to_string();
    state
}

/// State after a successful migration on top of [`analyzed_state`]
pub fn migrated_state() -> AppState {
    let mut state = analyzed_state();
    state.set_migrated_code(Some(MIGRATED_SOURCE.to_string()));
    state.migration_steps = vec!["Replace var with const".into(), "Remove jQuery".into()];
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_compact_terminal() {
        let term = TestTerminal::compact();
        assert_eq!(term.area(), Rect::new(0, 0, COMPACT_WIDTH, COMPACT_HEIGHT));
    }

    #[test]
    fn test_buffer_contains_and_find_line() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("one\ntwo"), term.area());

        assert!(term.buffer_contains("two"));
        assert!(!term.buffer_contains("three"));
        assert_eq!(term.find_line("two"), Some(1));
    }

    #[test]
    fn test_fixtures_are_consistent() {
        let state = migrated_state();
        assert!(state.has_analysis());
        assert!(state.has_migration());
        assert_eq!(state.detected_language(), Some("jQuery"));
    }
}
