//! Scroll and tab navigation handlers

use codemigrate_core::Tab;
use tracing::debug;

use crate::state::{AppState, ContentMetrics, PAGE_LINES};

use super::UpdateResult;

pub fn handle_scroll_by(state: &mut AppState, delta: isize) -> UpdateResult {
    let max = state.max_scroll();
    let current = state.scroll_offset.min(max);
    state.scroll_offset = if delta.is_negative() {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta as usize).min(max)
    };
    UpdateResult::none()
}

pub fn handle_page(state: &mut AppState, down: bool) -> UpdateResult {
    let delta = PAGE_LINES as isize;
    handle_scroll_by(state, if down { delta } else { -delta })
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.scroll_offset = 0;
    UpdateResult::none()
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.scroll_offset = state.max_scroll();
    UpdateResult::none()
}

/// Record the rendered size of the active tab and keep the offset in range
pub fn handle_content_measured(state: &mut AppState, metrics: ContentMetrics) -> UpdateResult {
    state.content_metrics = Some(metrics);
    if metrics.tab == state.active_tab {
        state.scroll_offset = state.scroll_offset.min(state.max_scroll());
    }
    UpdateResult::none()
}

/// Switch tabs; diff and steps are ignored until migrated code exists
pub fn handle_select_tab(state: &mut AppState, tab: Tab) -> UpdateResult {
    if !state.tab_available(tab) {
        debug!("Ignoring {:?} tab: no migrated code yet", tab);
        return UpdateResult::none();
    }
    set_tab(state, tab);
    UpdateResult::none()
}

/// Cycle through the reachable tabs
pub fn handle_cycle_tab(state: &mut AppState, forward: bool) -> UpdateResult {
    let tabs = state.available_tabs();
    let pos = tabs
        .iter()
        .position(|t| *t == state.active_tab)
        .unwrap_or(0);
    let next = if forward {
        (pos + 1) % tabs.len()
    } else {
        (pos + tabs.len() - 1) % tabs.len()
    };
    set_tab(state, tabs[next]);
    UpdateResult::none()
}

pub(crate) fn set_tab(state: &mut AppState, tab: Tab) {
    if state.active_tab != tab {
        state.active_tab = tab;
        state.scroll_offset = 0;
    }
}
