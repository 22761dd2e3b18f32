//! Side-by-side diff of the source against the migrated (or test) code

use codemigrate_app::AppState;
use codemigrate_core::{DiffKind, DiffLine, DiffRow, DiffStats};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::expand_tabs;
use crate::theme::{palette, styles};

pub const NO_MIGRATION: &str = "Run a migration to see the diff.";

pub struct DiffView<'a> {
    state: &'a AppState,
}

impl<'a> DiffView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

fn stats_title(stats: &DiffStats) -> Line<'static> {
    if stats.is_identical() {
        return Line::from(vec![
            Span::styled(" Migration Diff ", styles::text_secondary()),
            Span::styled("identical ", styles::text_muted()),
        ]);
    }
    Line::from(vec![
        Span::styled(" Migration Diff ", styles::text_secondary()),
        Span::styled(format!("+{} ", stats.added), styles::status_green()),
        Span::styled(format!("-{} ", stats.removed), styles::status_red()),
        Span::styled(format!("~{} ", stats.modified), styles::status_yellow()),
    ])
}

/// Draw one side of a row: right-aligned line number, then the text clipped to the column
fn render_cell(
    buf: &mut Buffer,
    area: Rect,
    y: u16,
    line: Option<&DiffLine>,
    gutter: usize,
    style: Style,
) {
    let row = Rect::new(area.x, y, area.width, 1);
    buf.set_style(row, style);

    let Some(line) = line else {
        return;
    };

    let number = format!("{:>width$} ", line.number, width = gutter);
    let number_width = number.width() as u16;
    buf.set_stringn(
        area.x,
        y,
        &number,
        area.width as usize,
        style.fg(palette::DIFF_GUTTER),
    );

    if number_width < area.width {
        let text = expand_tabs(&line.text);
        buf.set_stringn(
            area.x + number_width,
            y,
            &text,
            (area.width - number_width) as usize,
            style,
        );
    }
}

fn row_styles(row: &DiffRow) -> (Style, Style) {
    let base = styles::text_primary();
    match row.kind {
        DiffKind::Unchanged => (base, base),
        DiffKind::Removed => (styles::diff_row(DiffKind::Removed), base),
        DiffKind::Added => (base, styles::diff_row(DiffKind::Added)),
        DiffKind::Modified => (
            styles::diff_row(DiffKind::Modified),
            styles::diff_row(DiffKind::Modified),
        ),
    }
}

impl Widget for DiffView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;

        if !state.has_migration() {
            let block = styles::glass_block(true)
                .title(Span::styled(" Migration Diff ", styles::text_secondary()))
                .style(Style::default().bg(palette::CARD_BG));
            Paragraph::new(Span::styled(NO_MIGRATION, styles::text_muted()))
                .block(block)
                .render(area, buf);
            return;
        }

        let rows = &state.diff_rows;
        let stats = DiffStats::from_rows(rows);

        let block = styles::glass_block(true)
            .title(stats_title(&stats))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width < 4 {
            return;
        }

        let [header, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(inner);
        let [left, divider, right] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(body);

        let [left_header, _, right_header] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(header);
        buf.set_stringn(
            left_header.x,
            left_header.y,
            "Original",
            left_header.width as usize,
            styles::heading(),
        );
        buf.set_stringn(
            right_header.x,
            right_header.y,
            "Migrated",
            right_header.width as usize,
            styles::heading(),
        );

        let max_number = rows
            .iter()
            .flat_map(|r| [r.left.as_ref(), r.right.as_ref()])
            .flatten()
            .map(|l| l.number)
            .max()
            .unwrap_or(1);
        let gutter = max_number.to_string().len();

        for (i, row) in rows
            .iter()
            .skip(state.scroll_offset)
            .take(body.height as usize)
            .enumerate()
        {
            let y = body.y + i as u16;
            let (left_style, right_style) = row_styles(row);
            render_cell(buf, left, y, row.left.as_ref(), gutter, left_style);
            render_cell(buf, right, y, row.right.as_ref(), gutter, right_style);
        }

        for y in divider.top()..divider.bottom() {
            buf.set_string(divider.x, y, "│", styles::border_inactive());
        }
    }
}
