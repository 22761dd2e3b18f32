//! Key hint line at the bottom of the screen

use codemigrate_app::{AppState, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct Footer<'a> {
    state: &'a AppState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.ui_mode {
            UiMode::Normal if self.state.has_migration() => &[
                ("u", "upload"),
                ("g", "tests"),
                ("r", "rollback"),
                ("1-4", "tabs"),
                ("j/k", "scroll"),
                ("t/s", "language"),
                ("q", "quit"),
            ],
            UiMode::Normal => &[
                ("u", "upload"),
                ("m", "migrate"),
                ("1-2", "tabs"),
                ("j/k", "scroll"),
                ("t/s", "language"),
                ("b", "backend"),
                ("q", "quit"),
            ],
            UiMode::PathInput => &[("Enter", "upload"), ("Esc", "cancel")],
            UiMode::ConfirmDialog => &[("y", "confirm"), ("n", "cancel")],
            UiMode::Alert => &[("Enter", "dismiss")],
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", label), styles::text_muted()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{migrated_state, TestTerminal};

    #[test]
    fn test_normal_hints() {
        let mut term = TestTerminal::with_size(80, 1);
        let state = AppState::new();
        term.render_widget(Footer::new(&state), term.area());
        assert!(term.buffer_contains("u upload"));
        assert!(term.buffer_contains("m migrate"));
        assert!(term.buffer_contains("q quit"));
    }

    #[test]
    fn test_hints_after_migration() {
        let mut term = TestTerminal::with_size(80, 1);
        let state = migrated_state();
        term.render_widget(Footer::new(&state), term.area());
        assert!(term.buffer_contains("r rollback"));
    }

    #[test]
    fn test_dialog_hints() {
        let mut term = TestTerminal::with_size(80, 1);
        let mut state = AppState::new();
        state.ui_mode = UiMode::ConfirmDialog;
        term.render_widget(Footer::new(&state), term.area());
        assert!(term.buffer_contains("y confirm"));
    }
}
