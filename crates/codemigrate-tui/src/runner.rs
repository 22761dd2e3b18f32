//! Main TUI runner - entry point and event loop

use std::path::PathBuf;
use std::sync::Arc;

use codemigrate_api::MigrationBackend;
use codemigrate_app::config::Settings;
use codemigrate_app::signals;
use codemigrate_app::{process_message, AppState, Message};
use codemigrate_core::prelude::*;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Run the TUI until the user quits
///
/// Probes the backend once at startup; `initial_file`, when given, is
/// uploaded for analysis straight away.
pub async fn run<B>(settings: Settings, backend: Arc<B>, initial_file: Option<PathBuf>) -> Result<()>
where
    B: MigrationBackend + Sync + 'static,
{
    terminal::install_panic_hook();

    info!("Starting TUI against {}", settings.api.base_url);

    let mut term = ratatui::init();
    let mut state = AppState::with_settings(settings);

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    process_message(&mut state, Message::CheckBackend, &msg_tx, &backend);
    if let Some(path) = initial_file {
        process_message(&mut state, Message::UploadFile { path }, &msg_tx, &backend);
    }

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, backend);

    ratatui::restore();

    if let Err(e) = &result {
        error!("TUI exited with error: {}", e);
    }
    result
}

/// Main event loop
fn run_loop<B>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    backend: Arc<B>,
) -> Result<()>
where
    B: MigrationBackend + Sync + 'static,
{
    while !state.should_quit {
        // Backend completions and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &backend);
        }

        let frame = terminal.draw(|frame| render::view(frame, state))?;
        let metrics = render::measure(state, frame.area);
        if state.content_metrics != Some(metrics) {
            process_message(state, Message::ContentMeasured(metrics), &msg_tx, &backend);
        }

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &backend);
        }
    }

    Ok(())
}
