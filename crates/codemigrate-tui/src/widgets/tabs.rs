//! Tab bar for the main panel

use codemigrate_app::AppState;
use codemigrate_core::Tab;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// One-line tab bar; tabs that need a migration are dimmed until one exists
pub struct TabBar<'a> {
    state: &'a AppState,
}

impl<'a> TabBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = Vec::with_capacity(Tab::ALL.len() * 2);
        for tab in Tab::ALL {
            let label = format!(" {} {} ", tab.index() + 1, tab.title());
            let style = if tab == self.state.active_tab {
                styles::focused_selected()
            } else if self.state.tab_available(tab) {
                styles::text_secondary()
            } else {
                styles::text_muted()
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
