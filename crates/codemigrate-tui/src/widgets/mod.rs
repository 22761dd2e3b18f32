//! Widgets for the CodeMigrate screen

mod alert;
mod confirm_dialog;
mod diff_view;
mod footer;
mod header;
pub mod modal_overlay;
mod path_input;
mod report_view;
mod sidebar;
mod source_view;
mod steps_view;
mod tabs;

pub use alert::AlertDialog;
pub use confirm_dialog::ConfirmDialog;
pub use diff_view::{DiffView, NO_MIGRATION};
pub use footer::Footer;
pub use header::MainHeader;
pub use path_input::PathInput;
pub use report_view::{ReportView, FALLBACK_NOTICE, NO_ANALYSIS, RAW_NOTICE};
pub(crate) use report_view::rendered_rows as report_rows;
pub use sidebar::Sidebar;
pub use source_view::SourceView;
pub use steps_view::{StepsView, NO_STEPS};
pub use tabs::TabBar;

const TAB_WIDTH: usize = 4;

/// Replace hard tabs so cell widths stay predictable
pub(crate) fn expand_tabs(text: &str) -> String {
    if text.contains('\t') {
        text.replace('\t', &" ".repeat(TAB_WIDTH))
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tabs() {
        assert_eq!(expand_tabs("\tx"), "    x");
        assert_eq!(expand_tabs("x"), "x");
    }
}
