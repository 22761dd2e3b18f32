//! Blocking alert box for errors and notices

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use codemigrate_app::AlertState;

use super::modal_overlay;
use crate::theme::styles;

const ALERT_WIDTH: u16 = 64;

pub struct AlertDialog<'a> {
    state: &'a AlertState,
}

impl<'a> AlertDialog<'a> {
    pub fn new(state: &'a AlertState) -> Self {
        Self { state }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = if self.state.detail.is_some() { 11 } else { 8 };
        let modal_area = modal_overlay::centered_rect(ALERT_WIDTH, height, area);
        modal_overlay::prepare_modal(buf, area, modal_area);

        let title = Line::from(Span::styled(
            format!(" {} ", self.state.title),
            styles::alert_title(self.state.kind),
        ));
        let block = styles::popup_block()
            .title(title)
            .title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [_, message, detail, hint] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(styles::text_primary())
            .wrap(Wrap { trim: true })
            .render(message, buf);

        if let Some(text) = &self.state.detail {
            Paragraph::new(text.as_str())
                .alignment(Alignment::Center)
                .style(styles::text_muted())
                .wrap(Wrap { trim: true })
                .render(detail, buf);
        }

        let hint_line = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled("] OK", styles::text_muted()),
        ]);
        Paragraph::new(hint_line)
            .alignment(Alignment::Center)
            .render(hint, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette;

    #[test]
    fn test_error_alert_renders_message_and_detail() {
        let mut term = TestTerminal::new();
        let state = AlertState::error(
            "Analysis Failed",
            "Backend error. Ensure backend is running and URL is correct.",
            "HTTP 500".to_string(),
        );
        term.render_widget(AlertDialog::new(&state), term.area());

        assert!(term.buffer_contains("Analysis Failed"));
        assert!(term.buffer_contains("Ensure backend is running"));
        assert!(term.buffer_contains("HTTP 500"));
        assert!(term.buffer_contains("[Enter] OK"));
    }

    #[test]
    fn test_info_alert_title_is_green() {
        let mut term = TestTerminal::new();
        let state = AlertState::info("Tests Generated!", "The view has been updated.");
        term.render_widget(AlertDialog::new(&state), term.area());

        let y = term.find_line("Tests Generated!").expect("title row");
        let content = term.content();
        let line = content.lines().nth(y as usize).expect("row");
        let byte = line.find("Tests").expect("title");
        let col = line[..byte].chars().count() as u16;
        assert_eq!(
            term.cell_at(col, y).map(|c| c.fg),
            Some(palette::STATUS_GREEN)
        );
    }
}
