//! Single owner of the checker's UI phase.
//!
//! The controller can be driven in one step with [`StateController::submit`],
//! or split around a background call with [`StateController::begin`] and
//! [`StateController::complete`].

use shared::protocol::{AccessCheckRequest, AccessCheckResponse};
use tracing::{info, warn};

use crate::{
    client::{AccessCheckClient, ClientError},
    validation::validate,
};

pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to check access";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success(AccessCheckResponse),
    Error(String),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }
}

pub fn message_of(err: &ClientError) -> String {
    err.user_message()
        .unwrap_or(GENERIC_FAILURE_MESSAGE)
        .to_string()
}

#[derive(Debug, Default)]
pub struct StateController {
    state: UiState,
}

impl StateController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Validates `email` and, if it passes, enters `Loading` and returns the
    /// request to dispatch. Returns `None` when validation fails (state is
    /// `Error`) or a request is already in flight (state is unchanged).
    pub fn begin(&mut self, email: &str) -> Option<AccessCheckRequest> {
        if self.is_loading() {
            warn!("access check: submission ignored while a request is in flight");
            return None;
        }

        if let Err(err) = validate(email) {
            info!("access check: rejected before dispatch: {err}");
            self.state = UiState::Error(err.to_string());
            return None;
        }

        self.state = UiState::Loading;
        Some(AccessCheckRequest::production(email))
    }

    /// Applies the outcome of the request returned by the last [`begin`](Self::begin).
    pub fn complete(&mut self, outcome: Result<AccessCheckResponse, ClientError>) {
        if !self.is_loading() {
            warn!("access check: dropping outcome received outside of Loading");
            return;
        }

        self.state = match outcome {
            Ok(response) => UiState::Success(response),
            Err(err) => {
                warn!("access check failed: {err}");
                UiState::Error(message_of(&err))
            }
        };
    }

    pub async fn submit<C>(&mut self, client: &C, email: &str) -> &UiState
    where
        C: AccessCheckClient + ?Sized,
    {
        if let Some(request) = self.begin(email) {
            let outcome = client.check(&request).await;
            self.complete(outcome);
        }
        &self.state
    }

    /// Clears any result or error. Has no effect while a request is in flight.
    pub fn reset(&mut self) {
        if self.is_loading() {
            warn!("access check: reset ignored while a request is in flight");
            return;
        }
        self.state = UiState::Idle;
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
