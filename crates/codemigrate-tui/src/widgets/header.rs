//! Header bar widget
//!
//! App title, the uploaded file name and the backend status pill.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use codemigrate_app::BackendStatus;

use crate::theme::{palette, styles};

/// Main header showing the app title, file name and backend status
pub struct MainHeader<'a> {
    file_name: Option<&'a str>,
    backend: &'a BackendStatus,
}

impl<'a> MainHeader<'a> {
    pub fn new(file_name: Option<&'a str>, backend: &'a BackendStatus) -> Self {
        Self { file_name, backend }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut left_spans = vec![
            Span::raw(" "),
            Span::styled("CodeMigrate", styles::accent_bold()),
        ];
        if let Some(name) = self.file_name {
            left_spans.push(Span::raw(" "));
            left_spans.push(Span::styled("/", styles::text_muted()));
            left_spans.push(Span::raw(" "));
            left_spans.push(Span::styled(name, styles::text_secondary()));
        }
        let left_line = Line::from(left_spans);
        let left_width = left_line.width() as u16;

        let (icon, label, style) = styles::backend_indicator(self.backend);
        let status_line = Line::from(vec![
            Span::styled(icon, style),
            Span::raw(" "),
            Span::styled(label, style),
            Span::raw(" "),
        ]);
        let status_width = status_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-align the status pill when it does not collide with the title
        if left_width + status_width + 2 <= inner.width {
            let status_x = inner.x + inner.width - status_width;
            buf.set_line(status_x, inner.y, &status_line, status_width);
        }
    }
}
