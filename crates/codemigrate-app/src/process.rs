//! Message processing
//!
//! Runs a message through the TEA update function, follows up on chained
//! messages and dispatches any resulting action.

use std::sync::Arc;

use codemigrate_api::MigrationBackend;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<B>,
) where
    B: MigrationBackend + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            // Completion arrives later as a message on msg_tx
            let _ = handle_action(action, msg_tx.clone(), Arc::clone(backend));
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
