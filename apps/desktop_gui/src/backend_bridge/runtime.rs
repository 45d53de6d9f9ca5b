//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use anyhow::{Context, Result};
use client_core::{AccessCheckClient, HttpAccessCheckClient};
use crossbeam_channel::{Receiver, Sender};
use tokio::runtime::Runtime;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Everything the worker needs, built before the window opens so that a bad
/// service URL fails startup instead of stranding a queued check.
pub fn build(server_url: &str) -> Result<(Runtime, HttpAccessCheckClient)> {
    let client = HttpAccessCheckClient::new(server_url)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build backend runtime")?;
    Ok((runtime, client))
}

pub fn launch<C>(
    runtime: Runtime,
    client: C,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) where
    C: AccessCheckClient + 'static,
{
    thread::spawn(move || {
        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::CheckAccess { request } => {
                        let outcome = client.check(&request).await;
                        if ui_tx.send(UiEvent::AccessChecked(outcome)).is_err() {
                            tracing::debug!("ui event receiver dropped; stopping backend worker");
                            break;
                        }
                    }
                }
            }
        });
    });
}
