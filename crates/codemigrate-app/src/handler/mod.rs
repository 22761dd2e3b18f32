//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `scroll`: Scroll and tab navigation handlers

pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod update;


use std::path::PathBuf;

use crate::message::Message;
use crate::requests::RequestToken;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Read the file and `POST /analyze`
    Analyze { path: PathBuf, token: RequestToken },

    /// `POST /migrate`
    Migrate {
        code: String,
        /// Wire value of the selected target language
        target_lang: String,
        token: RequestToken,
    },

    /// `POST /generate-tests`
    GenerateTests {
        migrated_code: String,
        token: RequestToken,
    },

    /// `GET /` health probe
    CheckBackend,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
