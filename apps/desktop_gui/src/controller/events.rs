//! Events delivered from the backend worker to the UI thread.

use client_core::ClientError;
use shared::protocol::AccessCheckResponse;

#[derive(Debug)]
pub enum UiEvent {
    AccessChecked(Result<AccessCheckResponse, ClientError>),
}
