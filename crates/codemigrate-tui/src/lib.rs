//! codemigrate-tui - Terminal UI for CodeMigrate
//!
//! Draws [`codemigrate_app::AppState`] with ratatui and feeds crossterm key
//! events back into the reducer. Rendering is a pure function of the state.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
