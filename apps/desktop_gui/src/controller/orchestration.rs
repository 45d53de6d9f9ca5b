//! Command orchestration helpers from UI actions to backend command queue.

use client_core::{ClientError, StateController};
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), ClientError> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err(ClientError::NetworkError("command queue is full".to_string()))
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(command = cmd_name, "backend worker is not running");
            Err(ClientError::NetworkError("backend worker is not running".to_string()))
        }
    }
}

/// Validates and queues a check. The controller stays in `Loading` until the
/// backend answers; a queueing failure resolves it immediately.
pub fn submit_check(
    controller: &mut StateController,
    cmd_tx: &Sender<BackendCommand>,
    email: &str,
) {
    let Some(request) = controller.begin(email) else {
        return;
    };
    if let Err(err) = dispatch_backend_command(cmd_tx, BackendCommand::CheckAccess { request }) {
        controller.complete(Err(err));
    }
}

pub fn apply_event(controller: &mut StateController, event: UiEvent) {
    match event {
        UiEvent::AccessChecked(outcome) => controller.complete(outcome),
    }
}
