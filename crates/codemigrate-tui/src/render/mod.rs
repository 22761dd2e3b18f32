//! Main render/view function (View in TEA pattern)


use codemigrate_app::{AppState, ContentMetrics, UiMode};
use codemigrate_core::Tab;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::{palette, styles};
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure: reads `state` and draws; never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    let file_name = state.upload.as_ref().map(|u| u.name.as_str());
    frame.render_widget(
        widgets::MainHeader::new(file_name, &state.backend_status),
        areas.header,
    );

    if let Some(sidebar) = areas.sidebar {
        frame.render_widget(widgets::Sidebar::new(state), sidebar);
    }

    frame.render_widget(widgets::TabBar::new(state), areas.tabs);

    match state.active_tab {
        Tab::Code => frame.render_widget(widgets::SourceView::new(state), areas.content),
        Tab::Report => frame.render_widget(widgets::ReportView::new(state), areas.content),
        Tab::Diff => frame.render_widget(widgets::DiffView::new(state), areas.content),
        Tab::Steps => frame.render_widget(widgets::StepsView::new(state), areas.content),
    }

    frame.render_widget(widgets::Footer::new(state), areas.footer);

    // Overlays
    match state.ui_mode {
        UiMode::Normal => {}
        UiMode::PathInput => {
            frame.render_widget(widgets::PathInput::new(&state.path_input), area);
        }
        UiMode::ConfirmDialog => {
            if let Some(dialog) = &state.confirm_dialog {
                frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
            }
        }
        UiMode::Alert => {
            // An alert raised while a dialog is open stacks on top of it
            if let Some(dialog) = &state.confirm_dialog {
                frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
            }
            if let Some(alert) = &state.alert {
                frame.render_widget(widgets::AlertDialog::new(alert), area);
            }
        }
    }
}

/// Rendered size of the active tab on a screen of `area`
///
/// The event loop reports this back as `Message::ContentMeasured` so scroll
/// limits match what [`view`] draws.
pub fn measure(state: &AppState, area: Rect) -> ContentMetrics {
    let content = layout::create(area).content;
    let inner = styles::glass_block(true).inner(content);

    let (rows, visible) = match state.active_tab {
        Tab::Report => (widgets::report_rows(state, inner.width), inner.height),
        // Column headers take the first row
        Tab::Diff => (state.content_lines(), inner.height.saturating_sub(1)),
        Tab::Code | Tab::Steps => (state.content_lines(), inner.height),
    };

    ContentMetrics {
        tab: state.active_tab,
        rows,
        visible: visible as usize,
    }
}
