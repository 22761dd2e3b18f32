//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget
//! lives in codemigrate-tui's `widgets/confirm_dialog.rs`.

use serde::Serialize;

/// What a confirmed dialog does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmAction {
    Rollback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub action: ConfirmAction,
}

impl ConfirmDialogState {
    /// Rollback confirmation
    pub fn rollback() -> Self {
        Self {
            title: "Rollback Migration?".to_string(),
            message: "Are you sure? This will discard the migrated code and unit tests."
                .to_string(),
            confirm_label: "Rollback".to_string(),
            cancel_label: "Cancel".to_string(),
            action: ConfirmAction::Rollback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rollback_dialog() {
        let dialog = ConfirmDialogState::rollback();
        assert_eq!(dialog.action, ConfirmAction::Rollback);
        assert!(dialog.message.contains("discard the migrated code"));
    }
}
