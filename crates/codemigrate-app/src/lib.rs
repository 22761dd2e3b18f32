//! codemigrate-app - Application state and orchestration for CodeMigrate
//!
//! Implements the TEA (The Elm Architecture) pattern: a serializable
//! [`AppState`], a [`Message`] enum, a single [`handler::update`] reducer, and
//! background actions that call the backend and report back over a channel.
//! Also owns configuration loading and signal handling.

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod requests;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use requests::{RequestKind, RequestToken};
pub use state::{AlertKind, AlertState, AppState, BackendStatus, ContentMetrics, UiMode};
