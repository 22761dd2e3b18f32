//! Key event handlers for different UI modes

use codemigrate_core::Tab;

use crate::confirm_dialog::ConfirmAction;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C from every mode
    if key.is_force_quit() {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Normal => handle_key_normal(key),
        UiMode::PathInput => handle_key_path_input(key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(state, key),
        UiMode::Alert => handle_key_alert(key),
    }
}

fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        // Workflow
        InputKey::Char('u' | 'o') => Some(Message::OpenPathInput),
        InputKey::Char('m') => Some(Message::Migrate),
        InputKey::Char('g') => Some(Message::GenerateTests),
        InputKey::Char('r') => Some(Message::RequestRollback),
        InputKey::Char('b') => Some(Message::CheckBackend),

        // Selectors
        InputKey::Char('t') => Some(Message::NextTargetLang),
        InputKey::Char('T') => Some(Message::PreviousTargetLang),
        InputKey::Char('s') => Some(Message::NextSourceLang),
        InputKey::Char('S') => Some(Message::PreviousSourceLang),

        // Tabs
        InputKey::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            Tab::from_index(index).map(Message::SelectTab)
        }
        InputKey::Tab | InputKey::Right | InputKey::Char('l') => Some(Message::NextTab),
        InputKey::BackTab | InputKey::Left | InputKey::Char('h') => Some(Message::PreviousTab),

        // Scrolling
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),

        _ => None,
    }
}

fn handle_key_path_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelPathInput),
        InputKey::Enter => Some(Message::SubmitPathInput),
        InputKey::Backspace => Some(Message::PathInputBackspace),
        InputKey::CharCtrl('u') => Some(Message::PathInputClear),
        InputKey::Char(c) => Some(Message::PathInputChar(c)),
        _ => None,
    }
}

fn handle_key_confirm_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    let action = state.confirm_dialog.as_ref().map(|d| d.action)?;
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => match action {
            ConfirmAction::Rollback => Some(Message::ConfirmRollback),
        },
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelDialog),
        _ => None,
    }
}

fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ' | 'q') => Some(Message::DismissAlert),
        _ => None,
    }
}
