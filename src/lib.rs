//! CodeMigrate - a terminal client for the CodeMigrate AI migration service
//!
//! The binary wires configuration, logging and the HTTP backend together and
//! then runs either the TUI (`codemigrate-tui`) or the headless NDJSON mode
//! defined here.

pub mod headless;

pub use headless::runner::{run_headless, run_pipeline};
pub use headless::{HeadlessEvent, Stage};
