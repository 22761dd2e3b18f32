//! Sidebar with the upload, language selectors and workflow actions

use codemigrate_app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

pub struct Sidebar<'a> {
    state: &'a AppState,
}

impl<'a> Sidebar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn selector(label: &'static str, value: &'static str, key: &'static str) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(label, styles::text_muted())),
            Line::from(vec![
                Span::styled(" ‹ ", styles::text_muted()),
                Span::styled(value, styles::text_primary().add_modifier(Modifier::BOLD)),
                Span::styled(" › ", styles::text_muted()),
                Span::styled(key, styles::keybinding()),
            ]),
        ]
    }

    /// `[k] Label` when enabled, the spinner line when busy, muted otherwise
    fn action(
        &self,
        key: &'static str,
        label: impl Into<String>,
        busy_label: &'static str,
        enabled: bool,
        busy: bool,
    ) -> Line<'static> {
        let label = label.into();
        if busy {
            return Line::from(vec![
                Span::styled(format!(" {} ", self.state.spinner()), styles::status_yellow()),
                Span::styled(busy_label, styles::status_yellow()),
            ]);
        }
        if enabled {
            Line::from(vec![
                Span::styled("[", styles::text_muted()),
                Span::styled(key, styles::keybinding()),
                Span::styled("] ", styles::text_muted()),
                Span::styled(label, styles::text_primary()),
            ])
        } else {
            Line::from(Span::styled(
                format!("[{}] {}", key, label),
                styles::text_muted(),
            ))
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let state = self.state;
        let mut lines = Vec::new();

        lines.extend(Self::selector("Source", state.source_lang.label(), "s"));
        lines.extend(Self::selector("Target", state.target_lang.label(), "t"));
        lines.push(Line::default());

        if let Some(language) = state.detected_language() {
            lines.push(Line::from(vec![
                Span::styled("Detected ", styles::text_muted()),
                Span::styled(language.to_string(), styles::accent_bold()),
            ]));
            lines.push(Line::default());
        }

        lines.push(self.action("u", "Upload file", "Analyzing...", true, state.loading()));
        lines.push(self.action(
            "m",
            format!("Migrate to {}", state.target_lang.label()),
            "Migrating...",
            state.can_migrate(),
            state.migrating(),
        ));
        lines.push(self.action(
            "g",
            "Generate tests",
            "Generating tests...",
            state.can_generate_tests(),
            state.generating_tests(),
        ));
        lines.push(self.action("r", "Rollback", "", state.has_migration(), false));
        lines.push(self.action("b", "Check backend", "", true, false));

        lines
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(" Controls ", styles::text_secondary()))
            .style(Style::default().bg(palette::CARD_BG));

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
