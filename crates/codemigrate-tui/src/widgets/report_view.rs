//! Analysis report view

use codemigrate_app::AppState;
use codemigrate_core::{AnalysisPayload, AnalysisResult};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

pub const NO_ANALYSIS: &str = "No analysis yet. Press [u] to upload a file.";
pub const FALLBACK_NOTICE: &str =
    "AI engine unavailable: the backend returned a generic fallback analysis.";
pub const RAW_NOTICE: &str = "The analysis could not be parsed; showing the raw response.";

pub struct ReportView<'a> {
    state: &'a AppState,
}

impl<'a> ReportView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

fn field(label: &'static str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), styles::text_muted()),
        Span::styled(value.to_string(), styles::text_primary()),
    ])
}

fn bullets(items: &[String], empty: &'static str) -> Vec<Line<'static>> {
    if items.is_empty() {
        return vec![Line::from(Span::styled(format!("  {}", empty), styles::text_muted()))];
    }
    items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled("  • ", styles::accent()),
                Span::styled(item.clone(), styles::text_primary()),
            ])
        })
        .collect()
}

fn structured_lines(result: &AnalysisResult) -> Vec<Line<'static>> {
    let mut lines = vec![
        field("Language", result.language_or_unknown()),
        field("Complexity", result.complexity.as_deref().unwrap_or("-")),
        Line::default(),
        Line::from(Span::styled("Executive Summary", styles::heading())),
    ];
    match result.summary.as_deref().filter(|s| !s.is_empty()) {
        Some(summary) => lines.extend(
            summary
                .lines()
                .map(|l| Line::from(Span::styled(format!("  {}", l), styles::text_primary()))),
        ),
        None => lines.push(Line::from(Span::styled("  -", styles::text_muted()))),
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Risks Identified", styles::heading())));
    lines.extend(bullets(&result.risks_or_default(), "None reported"));

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Recommended Path", styles::heading())));
    lines.extend(bullets(result.suggestions(), "None reported"));
    lines
}

fn report_lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if state.is_fallback_analysis() {
        lines.push(Line::from(Span::styled(FALLBACK_NOTICE, styles::status_yellow())));
        lines.push(Line::default());
    }

    match &state.analysis {
        None => lines.push(Line::from(Span::styled(NO_ANALYSIS, styles::text_muted()))),
        Some(AnalysisPayload::Structured(result)) => lines.extend(structured_lines(result)),
        Some(AnalysisPayload::Raw(text)) => {
            lines.push(Line::from(Span::styled(RAW_NOTICE, styles::status_yellow())));
            lines.push(Line::default());
            lines.extend(
                text.lines()
                    .map(|l| Line::from(Span::styled(l.to_string(), styles::text_primary()))),
            );
        }
    }
    lines
}

fn report_paragraph(state: &AppState) -> Paragraph<'static> {
    Paragraph::new(report_lines(state)).wrap(Wrap { trim: false })
}

/// Rows the report occupies when wrapped to `width` columns
pub fn rendered_rows(state: &AppState, width: u16) -> usize {
    report_paragraph(state).line_count(width)
}

impl Widget for ReportView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let block = styles::glass_block(true)
            .title(Span::styled(" Analysis Report ", styles::text_secondary()))
            .style(Style::default().bg(palette::CARD_BG));

        let scroll = u16::try_from(state.scroll_offset).unwrap_or(u16::MAX);
        report_paragraph(state)
            .block(block)
            .scroll((scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{analyzed_state, TestTerminal};
    use codemigrate_core::{DEFAULT_RISK, FALLBACK_ANALYSIS_SOURCE};

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::new();
        term.render_widget(ReportView::new(state), term.area());
        term
    }

    #[test]
    fn test_empty_report() {
        let term = render(&AppState::new());
        assert!(term.buffer_contains(NO_ANALYSIS));
    }

    #[test]
    fn test_structured_report_fields() {
        let term = render(&analyzed_state());
        assert!(term.buffer_contains("jQuery"));
        assert!(term.buffer_contains("Medium"));
        assert!(term.buffer_contains("Event-driven DOM code"));
        assert!(term.buffer_contains("• Global state"));
        assert!(term.buffer_contains("• Use modules"));
    }

    #[test]
    fn test_missing_risks_fall_back() {
        let mut state = AppState::new();
        state.analysis = Some(AnalysisPayload::Structured(AnalysisResult::default()));
        let term = render(&state);

        assert!(term.buffer_contains(DEFAULT_RISK));
        assert!(term.buffer_contains("Unknown"));
    }

    #[test]
    fn test_raw_analysis_rendered_best_effort() {
        let mut state = AppState::new();
        state.analysis = Some(AnalysisPayload::Raw("not json at all".into()));
        let term = render(&state);

        assert!(term.buffer_contains("not json at all"));
        assert!(term.buffer_contains("could not be parsed"));
    }

    #[test]
    fn test_wrapped_rows_exceed_logical_lines() {
        let result = AnalysisResult {
            summary: Some("word ".repeat(40)),
            ..Default::default()
        };
        let mut state = AppState::new();
        state.analysis = Some(AnalysisPayload::Structured(result));

        let narrow = rendered_rows(&state, 20);
        let wide = rendered_rows(&state, 400);
        assert!(narrow > wide);
    }

    #[test]
    fn test_fallback_notice() {
        let mut state = analyzed_state();
        state.analysis_source = Some(FALLBACK_ANALYSIS_SOURCE.into());
        let term = render(&state);

        assert!(term.buffer_contains("AI engine unavailable"));
    }
}
