//! Main update function - handles state transitions (TEA pattern)

use std::path::PathBuf;

use codemigrate_api::{AnalyzeResponse, HealthResponse, MigrateResponse};
use codemigrate_core::prelude::*;
use codemigrate_core::Tab;

use crate::confirm_dialog::ConfirmDialogState;
use crate::message::Message;
use crate::requests::{RequestKind, RequestToken};
use crate::state::{AlertState, AppState, BackendStatus, UiMode, UploadInfo};

use super::{keys, scroll, UpdateAction, UpdateResult};

const ANALYZE_FAILED: &str = "Backend error. Ensure backend is running and URL is correct.";
const MIGRATE_FAILED: &str = "Migration failed. See the log file for details.";
const TESTS_FAILED: &str = "Test generation failed. See the log file for details.";
pub(crate) const TESTS_GENERATED: &str =
    "Tests Generated! The view has been updated with the test suite.";

/// Process a message and update state
/// Returns an optional action for the event loop to execute
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => keys::handle_key(state, key)
            .map(UpdateResult::message)
            .unwrap_or_else(UpdateResult::none),

        Message::Tick => {
            if state.requests.any_pending() {
                state.animation_frame = state.animation_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        Message::Quit => {
            info!("Quit requested");
            state.should_quit = true;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Upload & Analyze
        // ─────────────────────────────────────────────────────────
        Message::OpenPathInput => {
            if state.ui_mode == UiMode::Normal {
                state.path_input.clear();
                state.ui_mode = UiMode::PathInput;
            }
            UpdateResult::none()
        }

        Message::PathInputChar(c) => {
            state.path_input.push(c);
            UpdateResult::none()
        }

        Message::PathInputBackspace => {
            state.path_input.pop();
            UpdateResult::none()
        }

        Message::PathInputClear => {
            state.path_input.clear();
            UpdateResult::none()
        }

        Message::SubmitPathInput => {
            let path = state.path_input.trim().to_string();
            if path.is_empty() {
                return UpdateResult::none();
            }
            state.ui_mode = UiMode::Normal;
            state.path_input.clear();
            UpdateResult::message(Message::UploadFile {
                path: PathBuf::from(path),
            })
        }

        Message::CancelPathInput => {
            state.path_input.clear();
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        Message::UploadFile { path } => handle_upload(state, path),

        Message::AnalyzeCompleted { token, response } => {
            handle_analyze_completed(state, token, response)
        }

        Message::AnalyzeFailed { token, error } => {
            if !finish_request(state, RequestKind::Analyze, token) {
                return UpdateResult::none();
            }
            error!("Analyze failed: {}", error);
            show_alert(state, AlertState::error("Analysis Failed", ANALYZE_FAILED, error));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Language selectors (local only, never trigger requests)
        // ─────────────────────────────────────────────────────────
        Message::NextSourceLang => {
            state.source_lang = state.source_lang.next();
            UpdateResult::none()
        }

        Message::PreviousSourceLang => {
            state.source_lang = state.source_lang.previous();
            UpdateResult::none()
        }

        Message::SetSourceLang(lang) => {
            state.source_lang = lang;
            UpdateResult::none()
        }

        Message::NextTargetLang => {
            state.target_lang = state.target_lang.next();
            UpdateResult::none()
        }

        Message::PreviousTargetLang => {
            state.target_lang = state.target_lang.previous();
            UpdateResult::none()
        }

        Message::SetTargetLang(lang) => {
            state.target_lang = lang;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Migrate
        // ─────────────────────────────────────────────────────────
        Message::Migrate => handle_migrate(state),

        Message::MigrateCompleted { token, response } => {
            handle_migrate_completed(state, token, response)
        }

        Message::MigrateFailed { token, error } => {
            if !finish_request(state, RequestKind::Migrate, token) {
                return UpdateResult::none();
            }
            error!("Migration failed: {}", error);
            show_alert(state, AlertState::error("Migration Failed", MIGRATE_FAILED, error));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Rollback
        // ─────────────────────────────────────────────────────────
        Message::RequestRollback => {
            if !state.has_migration() {
                debug!("Rollback requested with nothing to roll back");
                return UpdateResult::none();
            }
            if !state.settings.behavior.confirm_rollback {
                return UpdateResult::message(Message::ConfirmRollback);
            }
            state.confirm_dialog = Some(ConfirmDialogState::rollback());
            state.ui_mode = UiMode::ConfirmDialog;
            UpdateResult::none()
        }

        Message::ConfirmRollback => {
            close_dialog(state);
            handle_rollback(state)
        }

        Message::CancelDialog => {
            close_dialog(state);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Generate tests
        // ─────────────────────────────────────────────────────────
        Message::GenerateTests => handle_generate_tests(state),

        Message::TestsGenerated { token, test_code } => {
            if !finish_request(state, RequestKind::GenerateTests, token) {
                return UpdateResult::none();
            }
            info!("Generated tests ({} lines)", test_code.lines().count());
            state.set_migrated_code(Some(test_code));
            scroll::set_tab(state, Tab::Diff);
            state.scroll_offset = 0;
            show_alert(state, AlertState::info("Tests Generated", TESTS_GENERATED));
            UpdateResult::none()
        }

        Message::TestsFailed { token, error } => {
            if !finish_request(state, RequestKind::GenerateTests, token) {
                return UpdateResult::none();
            }
            error!("Test generation failed: {}", error);
            show_alert(
                state,
                AlertState::error("Test Generation Failed", TESTS_FAILED, error),
            );
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Tabs & scrolling
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(tab) => scroll::handle_select_tab(state, tab),
        Message::NextTab => scroll::handle_cycle_tab(state, true),
        Message::PreviousTab => scroll::handle_cycle_tab(state, false),
        Message::ScrollUp => scroll::handle_scroll_by(state, -1),
        Message::ScrollDown => scroll::handle_scroll_by(state, 1),
        Message::PageUp => scroll::handle_page(state, false),
        Message::PageDown => scroll::handle_page(state, true),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::ContentMeasured(metrics) => scroll::handle_content_measured(state, metrics),

        Message::DismissAlert => {
            state.alert = state.pending_alerts.pop_front();
            state.ui_mode = if state.alert.is_some() {
                UiMode::Alert
            } else if state.confirm_dialog.is_some() {
                UiMode::ConfirmDialog
            } else {
                UiMode::Normal
            };
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Backend health
        // ─────────────────────────────────────────────────────────
        Message::CheckBackend => {
            state.backend_status = BackendStatus::Checking;
            UpdateResult::action(UpdateAction::CheckBackend)
        }

        Message::BackendChecked(health) => handle_backend_checked(state, health),

        Message::BackendUnreachable { error } => {
            warn!("Backend health check failed: {}", error);
            state.backend_status = BackendStatus::Unreachable { reason: error };
            UpdateResult::none()
        }
    }
}

/// Clear the in-flight slot, logging and returning `false` for stale tokens
fn finish_request(state: &mut AppState, kind: RequestKind, token: RequestToken) -> bool {
    let current = state.requests.finish(kind, token);
    if !current {
        debug!("Discarding stale {} response {}", kind.label(), token);
    }
    current
}

/// Show `alert`, or queue it behind the one already on screen
fn show_alert(state: &mut AppState, alert: AlertState) {
    if state.alert.is_some() {
        debug!("Queueing alert '{}'", alert.title);
        state.pending_alerts.push_back(alert);
    } else {
        state.alert = Some(alert);
    }
    state.ui_mode = UiMode::Alert;
}

fn close_dialog(state: &mut AppState) {
    state.confirm_dialog = None;
    if state.ui_mode == UiMode::ConfirmDialog {
        state.ui_mode = UiMode::Normal;
    }
}

fn handle_upload(state: &mut AppState, path: PathBuf) -> UpdateResult {
    let info = UploadInfo::from_path(path.clone());
    info!("Uploading {}", info.name);
    state.upload = Some(info);
    let token = state.requests.begin(RequestKind::Analyze);
    UpdateResult::action(UpdateAction::Analyze { path, token })
}

fn handle_analyze_completed(
    state: &mut AppState,
    token: RequestToken,
    response: AnalyzeResponse,
) -> UpdateResult {
    if !finish_request(state, RequestKind::Analyze, token) {
        return UpdateResult::none();
    }

    info!(
        "Analysis complete: language={} source={}",
        response.analysis.language(),
        response.source.as_deref().unwrap_or("-")
    );
    if response.analysis.is_raw() {
        warn!("Analysis was not valid JSON, showing raw text");
    }

    state.analysis = Some(response.analysis);
    state.analysis_source = response.source;
    state.source_code = response.source_code;
    state.set_migrated_code(None);
    state.migration_steps.clear();
    state.active_tab = Tab::Code;
    state.scroll_offset = 0;

    // Pending work on the previous source is now meaningless
    state.requests.cancel(RequestKind::Migrate);
    state.requests.cancel(RequestKind::GenerateTests);

    UpdateResult::none()
}

fn handle_migrate(state: &mut AppState) -> UpdateResult {
    if !state.can_migrate() {
        debug!(
            "Ignoring migrate: analysis={} migrating={}",
            state.has_analysis(),
            state.migrating()
        );
        return UpdateResult::none();
    }

    let token = state.requests.begin(RequestKind::Migrate);
    info!("Migrating to {}", state.target_lang.label());
    UpdateResult::action(UpdateAction::Migrate {
        code: state.source_code.clone(),
        target_lang: state.target_lang.wire_value().to_string(),
        token,
    })
}

fn handle_migrate_completed(
    state: &mut AppState,
    token: RequestToken,
    response: MigrateResponse,
) -> UpdateResult {
    if !finish_request(state, RequestKind::Migrate, token) {
        return UpdateResult::none();
    }

    state.migration_steps = response.steps_or_default();
    state.set_migrated_code(Some(response.migrated_code));
    scroll::set_tab(state, Tab::Diff);
    state.scroll_offset = 0;
    state.requests.cancel(RequestKind::GenerateTests);

    info!("Migration complete ({} steps)", state.migration_steps.len());
    UpdateResult::none()
}

fn handle_rollback(state: &mut AppState) -> UpdateResult {
    if !state.has_migration() {
        return UpdateResult::none();
    }
    info!("Rolled back to original source");
    state.set_migrated_code(None);
    state.migration_steps.clear();
    scroll::set_tab(state, Tab::Code);
    state.requests.cancel(RequestKind::GenerateTests);
    UpdateResult::none()
}

fn handle_generate_tests(state: &mut AppState) -> UpdateResult {
    if !state.can_generate_tests() {
        debug!(
            "Ignoring generate-tests: migrated={} generating={}",
            state.has_migration(),
            state.generating_tests()
        );
        return UpdateResult::none();
    }
    let Some(migrated_code) = state.migrated_code.clone() else {
        return UpdateResult::none();
    };

    let token = state.requests.begin(RequestKind::GenerateTests);
    UpdateResult::action(UpdateAction::GenerateTests {
        migrated_code,
        token,
    })
}

fn handle_backend_checked(state: &mut AppState, health: HealthResponse) -> UpdateResult {
    debug!("Backend status: {}", health.status);
    state.backend_status = health.into();
    UpdateResult::none()
}
