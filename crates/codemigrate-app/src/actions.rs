//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every backend call runs on its own tokio task and reports back with a
//! completion or failure message carrying the request token it was issued.

use std::sync::Arc;

use codemigrate_api::{MigrationBackend, UploadedFile};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action<B>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    backend: Arc<B>,
) -> JoinHandle<()>
where
    B: MigrationBackend + Sync + 'static,
{
    match action {
        UpdateAction::Analyze { path, token } => tokio::spawn(async move {
            let result = match UploadedFile::read(&path).await {
                Ok(file) => backend.analyze(file).await,
                Err(e) => Err(e),
            };
            let msg = match result {
                Ok(response) => Message::AnalyzeCompleted { token, response },
                Err(e) => {
                    error!("Analyze {} failed: {}", token, e);
                    Message::AnalyzeFailed {
                        token,
                        error: e.to_string(),
                    }
                }
            };
            send(&msg_tx, msg).await;
        }),

        UpdateAction::Migrate {
            code,
            target_lang,
            token,
        } => tokio::spawn(async move {
            let msg = match backend.migrate(code, target_lang).await {
                Ok(response) => Message::MigrateCompleted { token, response },
                Err(e) => {
                    error!("Migrate {} failed: {}", token, e);
                    Message::MigrateFailed {
                        token,
                        error: e.to_string(),
                    }
                }
            };
            send(&msg_tx, msg).await;
        }),

        UpdateAction::GenerateTests {
            migrated_code,
            token,
        } => tokio::spawn(async move {
            let msg = match backend.generate_tests(migrated_code).await {
                Ok(test_code) => Message::TestsGenerated { token, test_code },
                Err(e) => {
                    error!("Generate tests {} failed: {}", token, e);
                    Message::TestsFailed {
                        token,
                        error: e.to_string(),
                    }
                }
            };
            send(&msg_tx, msg).await;
        }),

        UpdateAction::CheckBackend => tokio::spawn(async move {
            let msg = match backend.health().await {
                Ok(health) => Message::BackendChecked(health),
                Err(e) => Message::BackendUnreachable {
                    error: e.to_string(),
                },
            };
            send(&msg_tx, msg).await;
        }),
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        // Receiver dropped: the app is shutting down
        debug!("Message channel closed, dropping backend result");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codemigrate_api::test_utils::{
        analyze_reply, health_reply, migrate_reply, MockBackend, RecordedCall, Scripted,
    };
    use crate::requests::RequestToken;

    fn channel() -> (mpsc::Sender<Message>, mpsc::Receiver<Message>) {
        mpsc::channel(8)
    }

    #[tokio::test]
    async fn test_analyze_reads_file_and_reports_completion() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.js");
        std::fs::write(&path, "var a = 1;").unwrap();

        let backend = Arc::new(MockBackend::new());
        backend.push_analyze(Scripted::Reply(analyze_reply(
            r#"{"language":"JavaScript"}"#,
            "var a = 1;",
        )));
        let (tx, mut rx) = channel();

        let action = UpdateAction::Analyze {
            path,
            token: RequestToken(7),
        };
        handle_action(action, tx, backend.clone()).await.unwrap();

        match rx.recv().await {
            Some(Message::AnalyzeCompleted { token, response }) => {
                assert_eq!(token, RequestToken(7));
                assert_eq!(response.analysis.language(), "JavaScript");
            }
            other => panic!("expected AnalyzeCompleted, got {:?}", other),
        }
        assert_eq!(
            backend.calls(),
            vec![RecordedCall::Analyze {
                file_name: "legacy.js".into(),
                len: 10
            }]
        );
    }

    #[tokio::test]
    async fn test_analyze_missing_file_fails_without_request() {
        let backend = Arc::new(MockBackend::new());
        let (tx, mut rx) = channel();

        let action = UpdateAction::Analyze {
            path: "/no/such/file.js".into(),
            token: RequestToken(1),
        };
        handle_action(action, tx, backend.clone()).await.unwrap();

        assert!(matches!(
            rx.recv().await,
            Some(Message::AnalyzeFailed { token: RequestToken(1), .. })
        ));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_migrate_failure_reports_status() {
        let backend = Arc::new(MockBackend::new());
        backend.push_migrate(Scripted::Status(500, "AI service failed".into()));
        let (tx, mut rx) = channel();

        let action = UpdateAction::Migrate {
            code: "x".into(),
            target_lang: "Python 3".into(),
            token: RequestToken(2),
        };
        handle_action(action, tx, backend).await.unwrap();

        match rx.recv().await {
            Some(Message::MigrateFailed { token, error }) => {
                assert_eq!(token, RequestToken(2));
                assert!(error.contains("500"));
            }
            other => panic!("expected MigrateFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_migrate_success() {
        let backend = Arc::new(MockBackend::new());
        backend.push_migrate(Scripted::Reply(migrate_reply("y", &["step"])));
        let (tx, mut rx) = channel();

        let action = UpdateAction::Migrate {
            code: "x".into(),
            target_lang: "Vue.js 3".into(),
            token: RequestToken(3),
        };
        handle_action(action, tx, backend).await.unwrap();

        assert!(matches!(
            rx.recv().await,
            Some(Message::MigrateCompleted { token: RequestToken(3), .. })
        ));
    }

    #[tokio::test]
    async fn test_generate_tests_success() {
        let backend = Arc::new(MockBackend::new());
        backend.push_generate_tests(Scripted::Reply("test()".into()));
        let (tx, mut rx) = channel();

        let action = UpdateAction::GenerateTests {
            migrated_code: "y".into(),
            token: RequestToken(4),
        };
        handle_action(action, tx, backend).await.unwrap();

        match rx.recv().await {
            Some(Message::TestsGenerated { test_code, .. }) => assert_eq!(test_code, "test()"),
            other => panic!("expected TestsGenerated, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_check_backend() {
        let backend = Arc::new(MockBackend::new());
        backend.push_health(Scripted::Reply(health_reply("Online")));
        let (tx, mut rx) = channel();

        handle_action(UpdateAction::CheckBackend, tx.clone(), backend.clone()).await.unwrap();
        assert!(matches!(rx.recv().await, Some(Message::BackendChecked(_))));

        // Nothing scripted the second time
        handle_action(UpdateAction::CheckBackend, tx, backend).await.unwrap();
        assert!(matches!(
            rx.recv().await,
            Some(Message::BackendUnreachable { .. })
        ));
    }

    #[tokio::test]
    async fn test_closed_channel_does_not_panic() {
        let backend = Arc::new(MockBackend::new());
        backend.push_health(Scripted::Reply(health_reply("Online")));
        let (tx, rx) = channel();
        drop(rx);

        let handle = handle_action(UpdateAction::CheckBackend, tx, backend);
        assert!(handle.await.is_ok());
    }
}
