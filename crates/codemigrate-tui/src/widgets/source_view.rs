//! Read-only view of the uploaded source

use codemigrate_app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::expand_tabs;
use crate::theme::{palette, styles};

pub struct SourceView<'a> {
    state: &'a AppState,
}

impl<'a> SourceView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for SourceView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let title = match &state.upload {
            Some(upload) => format!(" {} ", upload.name),
            None => " Source Code ".to_string(),
        };
        let block = styles::glass_block(true)
            .title(Span::styled(title, styles::text_secondary()))
            .style(Style::default().bg(palette::CARD_BG));

        // Before the first analysis the buffer only holds the placeholder
        if !state.has_analysis() {
            Paragraph::new(Span::styled(state.source_code.clone(), styles::text_muted()))
                .block(block)
                .render(area, buf);
            return;
        }

        let total = state.source_code.lines().count();
        let gutter = total.max(1).to_string().len();
        let show_numbers = state.settings.ui.show_line_numbers;

        let lines: Vec<Line> = state
            .source_code
            .lines()
            .enumerate()
            .skip(state.scroll_offset)
            .map(|(i, text)| {
                let code = Span::styled(expand_tabs(text), styles::text_primary());
                if show_numbers {
                    Line::from(vec![
                        Span::styled(
                            format!("{:>width$} ", i + 1, width = gutter),
                            Style::default().fg(palette::DIFF_GUTTER),
                        ),
                        code,
                    ])
                } else {
                    Line::from(code)
                }
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
