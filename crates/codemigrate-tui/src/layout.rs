//! Screen layout definitions for the TUI
//!
//! Header across the top, a sidebar of controls on the left, the tab bar and
//! active view on the right, and a one-line key hint footer.

use ratatui::layout::{Constraint, Layout, Rect};

/// Sidebar width when the terminal is wide enough
pub const SIDEBAR_WIDTH: u16 = 30;

/// Below this width the sidebar is hidden
const MIN_WIDTH_FOR_SIDEBAR: u16 = 70;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and backend status (glass container)
    pub header: Rect,

    /// Upload, language selectors and action hints; `None` on narrow terminals
    pub sidebar: Option<Rect>,

    /// Tab bar above the content panel
    pub tabs: Rect,

    /// Active view
    pub content: Rect,

    /// Key hints
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let (sidebar, main) = if area.width >= MIN_WIDTH_FOR_SIDEBAR {
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
                .areas(body);
        (Some(sidebar), main)
    } else {
        (None, body)
    };

    let [tabs, content] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(main);

    ScreenAreas {
        header,
        sidebar,
        tabs,
        content,
        footer,
    }
}
