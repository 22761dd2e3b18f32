//! Color palette for the TUI.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Effects ---
pub const SHADOW: Color = Color::Black;

// --- Diff rows ---
pub const DIFF_REMOVED_BG: Color = Color::Rgb(60, 20, 24);
pub const DIFF_ADDED_BG: Color = Color::Rgb(18, 52, 30);
pub const DIFF_MODIFIED_BG: Color = Color::Rgb(52, 46, 16);
pub const DIFF_GUTTER: Color = Color::DarkGray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_backgrounds_are_distinct() {
        assert_ne!(DIFF_REMOVED_BG, DIFF_ADDED_BG);
        assert_ne!(DIFF_ADDED_BG, DIFF_MODIFIED_BG);
    }
}
