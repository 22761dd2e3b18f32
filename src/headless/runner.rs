//! Headless mode runner - drives the reducer without a terminal
//!
//! Messages flow through the same `process_message` path the TUI uses; this
//! loop only decides which step comes next and reports each transition.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use codemigrate_api::MigrationBackend;
use codemigrate_app::config::Settings;
use codemigrate_app::{process_message, signals, AlertKind, AppState, Message};
use codemigrate_core::prelude::*;

use super::{HeadlessEvent, Stage};

/// Run one pass in headless mode, printing NDJSON events to stdout
///
/// Returns whether every requested stage succeeded.
pub async fn run_headless<B>(
    settings: Settings,
    backend: Arc<B>,
    file: PathBuf,
    generate_tests: bool,
) -> Result<bool>
where
    B: MigrationBackend + Sync + 'static,
{
    info!("CodeMigrate starting in HEADLESS mode");
    info!("File: {}", file.display());

    let success = run_pipeline(settings, backend, file, generate_tests, |event| event.emit()).await;

    info!("CodeMigrate headless mode exiting (success={})", success);
    Ok(success)
}

/// Upload → analyze → migrate → optionally generate tests, reporting each
/// step to `emit`
pub async fn run_pipeline<B, F>(
    settings: Settings,
    backend: Arc<B>,
    file: PathBuf,
    generate_tests: bool,
    mut emit: F,
) -> bool
where
    B: MigrationBackend + Sync + 'static,
    F: FnMut(HeadlessEvent),
{
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(16);
    let mut state = AppState::with_settings(settings);

    signals::spawn_signal_handler(msg_tx.clone());

    emit(HeadlessEvent::started(
        &state.settings.api.base_url,
        state.target_lang.label(),
        &file,
    ));

    emit(HeadlessEvent::stage_started(Stage::Analyze));
    process_message(&mut state, Message::UploadFile { path: file }, &msg_tx, &backend);

    let success = loop {
        // msg_tx is held here, so the channel never closes under us
        let Some(msg) = msg_rx.recv().await else {
            break false;
        };

        match msg {
            Message::Quit => {
                warn!("Interrupted before completion");
                emit(HeadlessEvent::error(None, "Interrupted".to_string(), None));
                break false;
            }

            msg @ Message::AnalyzeCompleted { .. } => {
                process_message(&mut state, msg, &msg_tx, &backend);
                let Some(analysis) = &state.analysis else {
                    // Stale response
                    continue;
                };
                emit(HeadlessEvent::analyze_completed(
                    analysis.language(),
                    state.is_fallback_analysis(),
                    analysis.is_raw(),
                ));

                emit(HeadlessEvent::stage_started(Stage::Migrate));
                process_message(&mut state, Message::Migrate, &msg_tx, &backend);
            }

            msg @ Message::MigrateCompleted { .. } => {
                process_message(&mut state, msg, &msg_tx, &backend);
                let Some(migrated) = &state.migrated_code else {
                    continue;
                };
                emit(HeadlessEvent::migrate_completed(
                    migrated.clone(),
                    state.migration_steps.clone(),
                ));

                if !generate_tests {
                    break true;
                }
                emit(HeadlessEvent::stage_started(Stage::GenerateTests));
                process_message(&mut state, Message::GenerateTests, &msg_tx, &backend);
            }

            msg @ Message::TestsGenerated { .. } => {
                process_message(&mut state, msg, &msg_tx, &backend);
                if let Some(test_code) = &state.migrated_code {
                    emit(HeadlessEvent::tests_generated(test_code.clone()));
                }
                break true;
            }

            msg @ (Message::AnalyzeFailed { .. }
            | Message::MigrateFailed { .. }
            | Message::TestsFailed { .. }) => {
                let stage = match &msg {
                    Message::AnalyzeFailed { .. } => Stage::Analyze,
                    Message::MigrateFailed { .. } => Stage::Migrate,
                    _ => Stage::GenerateTests,
                };
                process_message(&mut state, msg, &msg_tx, &backend);
                match state.alert.take() {
                    Some(alert) if alert.kind == AlertKind::Error => {
                        emit(HeadlessEvent::error(Some(stage), alert.message, alert.detail));
                        break false;
                    }
                    // Stale failure for a superseded request
                    _ => continue,
                }
            }

            other => process_message(&mut state, other, &msg_tx, &backend),
        }
    };

    emit(HeadlessEvent::finished(success));
    success
}

#[cfg(test)]
mod tests {
    use super::*;
    use codemigrate_api::test_utils::{analyze_reply, migrate_reply, MockBackend, Scripted};

    fn write_source(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("legacy.js");
        std::fs::write(&path, "var x = 1;").unwrap();
        path
    }

    async fn collect(backend: MockBackend, file: PathBuf, tests: bool) -> (bool, Vec<HeadlessEvent>) {
        let mut events = Vec::new();
        let ok = run_pipeline(
            Settings::default(),
            Arc::new(backend),
            file,
            tests,
            |e| events.push(e),
        )
        .await;
        (ok, events)
    }

    #[tokio::test]
    async fn test_pipeline_without_tests_stops_after_migrate() {
        let dir = tempfile::tempdir().unwrap();
        let backend = MockBackend::new();
        backend
            .push_analyze(Scripted::Reply(analyze_reply(
                r#"{"language":"jQuery"}"#,
                "var x = 1;",
            )))
            .push_migrate(Scripted::Reply(migrate_reply("const x = 1;", &[])));

        let (ok, events) = collect(backend, write_source(&dir), false).await;

        assert!(ok);
        assert!(matches!(events.first(), Some(HeadlessEvent::Started { .. })));
        assert!(events.iter().any(|e| matches!(
            e,
            HeadlessEvent::AnalyzeCompleted { language, .. } if language == "jQuery"
        )));
        assert!(events.iter().any(|e| matches!(
            e,
            HeadlessEvent::MigrateCompleted { migrated_code, .. } if migrated_code == "const x = 1;"
        )));
        assert!(!events
            .iter()
            .any(|e| matches!(e, HeadlessEvent::TestsGenerated { .. })));
        assert!(matches!(
            events.last(),
            Some(HeadlessEvent::Finished { success: true, .. })
        ));
    }

    #[tokio::test]
    async fn test_migrate_failure_reports_stage() {
        let dir = tempfile::tempdir().unwrap();
        let backend = MockBackend::new();
        backend
            .push_analyze(Scripted::Reply(analyze_reply("{}", "var x = 1;")))
            .push_migrate(Scripted::Status(500, "boom".into()));

        let (ok, events) = collect(backend, write_source(&dir), true).await;

        assert!(!ok);
        assert!(events.iter().any(|e| matches!(
            e,
            HeadlessEvent::Error { stage: Some(Stage::Migrate), .. }
        )));
        assert!(matches!(
            events.last(),
            Some(HeadlessEvent::Finished { success: false, .. })
        ));
    }
}
