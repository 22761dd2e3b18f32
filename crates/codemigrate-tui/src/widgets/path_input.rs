//! File path prompt used to pick the file to upload

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use super::modal_overlay;
use crate::theme::styles;

const CURSOR: &str = "█";

pub struct PathInput<'a> {
    buffer: &'a str,
}

impl<'a> PathInput<'a> {
    pub fn new(buffer: &'a str) -> Self {
        Self { buffer }
    }
}

/// Longest suffix of `text` that fits in `width` columns
fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

impl Widget for PathInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = modal_overlay::centered_rect(64, 7, area);
        modal_overlay::prepare_modal(buf, area, modal_area);

        let block = styles::modal_block("Upload File");
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [label, input, _, hint] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Span::styled(
            " Path of the file to analyze:",
            styles::text_secondary(),
        ))
        .render(label, buf);

        // prompt (3) + cursor (1)
        let room = (input.width as usize).saturating_sub(4);
        let line = Line::from(vec![
            Span::styled(" > ", styles::accent_bold()),
            Span::styled(visible_tail(self.buffer, room), styles::text_primary()),
            Span::styled(CURSOR, styles::accent()),
        ]);
        buf.set_line(input.x, input.y, &line, input.width);

        let hint_line = Line::from(vec![
            Span::raw(" "),
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" upload  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" cancel  ", styles::text_muted()),
            Span::styled("Ctrl+U", styles::keybinding()),
            Span::styled(" clear", styles::text_muted()),
        ]);
        buf.set_line(hint.x, hint.y, &hint_line, hint.width);
    }
}
