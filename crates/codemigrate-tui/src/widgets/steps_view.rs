//! Numbered manual migration steps

use codemigrate_app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

pub const NO_STEPS: &str = "Run a migration to see the migration guide.";

pub struct StepsView<'a> {
    state: &'a AppState,
}

impl<'a> StepsView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for StepsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let block = styles::glass_block(true)
            .title(Span::styled(" Migration Guide ", styles::text_secondary()))
            .style(Style::default().bg(palette::CARD_BG));

        let lines: Vec<Line> = if !state.has_migration() {
            vec![Line::from(Span::styled(NO_STEPS, styles::text_muted()))]
        } else {
            let width = state.migration_steps.len().to_string().len();
            state
                .migration_steps
                .iter()
                .enumerate()
                .skip(state.scroll_offset)
                .map(|(i, step)| {
                    Line::from(vec![
                        Span::styled(
                            format!("{:>width$}. ", i + 1, width = width),
                            styles::accent_bold(),
                        ),
                        Span::styled(step.clone(), styles::text_primary()),
                    ])
                })
                .collect()
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{analyzed_state, migrated_state, TestTerminal};

    #[test]
    fn test_placeholder_without_migration() {
        let mut term = TestTerminal::new();
        let state = analyzed_state();
        term.render_widget(StepsView::new(&state), term.area());
        assert!(term.buffer_contains(NO_STEPS));
    }

    #[test]
    fn test_numbered_steps() {
        let mut term = TestTerminal::new();
        let state = migrated_state();
        term.render_widget(StepsView::new(&state), term.area());

        assert!(term.buffer_contains("1. Replace var with const"));
        assert!(term.buffer_contains("2. Remove jQuery"));
    }

    #[test]
    fn test_scrolled_steps() {
        let mut term = TestTerminal::new();
        let mut state = migrated_state();
        state.scroll_offset = 1;
        term.render_widget(StepsView::new(&state), term.area());

        assert!(!term.buffer_contains("Replace var with const"));
        assert!(term.buffer_contains("2. Remove jQuery"));
    }
}
