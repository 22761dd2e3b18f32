//! Confirmation dialog widget (rollback)

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use codemigrate_app::confirm_dialog::ConfirmDialogState;

use super::modal_overlay;
use crate::theme::styles;

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = modal_overlay::centered_rect(60, 9, area);
        modal_overlay::prepare_modal(buf, area, modal_area);

        let block = styles::modal_block(&self.state.title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(styles::status_yellow())
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        let buttons = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("y", styles::status_green().add_modifier(Modifier::BOLD)),
            Span::styled(format!("] {}  ", self.state.confirm_label), styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("n", styles::status_red().add_modifier(Modifier::BOLD)),
            Span::styled(format!("] {}", self.state.cancel_label), styles::text_muted()),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_rollback_dialog_renders() {
        let mut term = TestTerminal::new();
        let state = ConfirmDialogState::rollback();
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Rollback Migration?"));
        assert!(term.buffer_contains("Are you sure?"));
        assert!(term.buffer_contains("unit tests."));
        assert!(term.buffer_contains("[y] Rollback"));
        assert!(term.buffer_contains("[n] Cancel"));
    }

    #[test]
    fn test_dialog_fits_compact_terminal() {
        let mut term = TestTerminal::compact();
        let state = ConfirmDialogState::rollback();
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Rollback"));
    }
}
