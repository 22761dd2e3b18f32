//! Semantic style builders.

use codemigrate_app::{AlertKind, BackendStatus};
use codemigrate_core::DiffKind;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn heading() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default()
        .fg(palette::STATUS_YELLOW)
        .add_modifier(Modifier::BOLD)
}

/// "Black on Cyan" for the active tab
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

/// Untitled popup container
pub fn popup_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

pub fn modal_block(title: &str) -> Block<'static> {
    popup_block().title(format!(" {} ", title))
}

// --- Status mapping ---

/// Header indicator for the backend probe: `(icon, label, style)`
pub fn backend_indicator(status: &BackendStatus) -> (&'static str, String, Style) {
    match status {
        BackendStatus::Unknown => ("○", "Backend".to_string(), text_muted()),
        BackendStatus::Checking => ("◌", "Checking backend".to_string(), status_yellow()),
        BackendStatus::Online { status, ai_engine } => {
            let label = match ai_engine {
                Some(engine) => format!("{} · {}", status, engine),
                None => status.clone(),
            };
            ("●", label, status_green().add_modifier(Modifier::BOLD))
        }
        BackendStatus::Unreachable { .. } => ("✗", "Backend unreachable".to_string(), status_red()),
    }
}

pub fn alert_title(kind: AlertKind) -> Style {
    match kind {
        AlertKind::Error => status_red().add_modifier(Modifier::BOLD),
        AlertKind::Info => status_green().add_modifier(Modifier::BOLD),
    }
}

/// Background for a diff row
pub fn diff_row(kind: DiffKind) -> Style {
    match kind {
        DiffKind::Unchanged => text_primary(),
        DiffKind::Removed => text_primary().bg(palette::DIFF_REMOVED_BG),
        DiffKind::Added => text_primary().bg(palette::DIFF_ADDED_BG),
        DiffKind::Modified => text_primary().bg(palette::DIFF_MODIFIED_BG),
    }
}
