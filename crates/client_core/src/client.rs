//! HTTP client for the access verification service.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::ErrorBody,
    protocol::{AccessCheckRequest, AccessCheckResponse, CHECK_ACCESS_PATH},
};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

/// Surfaced when a structured error body carries an empty `error` string.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";
/// Surfaced when a non-2xx response has no body at all.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// No response was obtained; carries the transport diagnostic.
    #[error("failed to reach access service: {0}")]
    NetworkError(String),
    #[error("{message}")]
    ServerError { status: u16, message: String },
    /// A 2xx body that does not match the response schema.
    #[error("malformed access check response: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// Message intended for the person at the form, if the error carries one.
    ///
    /// Transport and schema diagnostics are for logs only.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            ClientError::ServerError { message, .. } if !message.is_empty() => {
                Some(message.as_str())
            }
            ClientError::ServerError { .. }
            | ClientError::NetworkError(_)
            | ClientError::MalformedResponse(_) => None,
        }
    }
}

#[async_trait]
pub trait AccessCheckClient: Send + Sync {
    async fn check(
        &self,
        request: &AccessCheckRequest,
    ) -> std::result::Result<AccessCheckResponse, ClientError>;
}

pub struct HttpAccessCheckClient {
    http: Client,
    endpoint: Url,
}

impl HttpAccessCheckClient {
    pub fn new(server_url: &str) -> Result<Self> {
        Self::with_http_client(Client::new(), server_url)
    }

    pub fn with_http_client(http: Client, server_url: &str) -> Result<Self> {
        let base = Url::parse(server_url.trim())
            .with_context(|| format!("invalid access service url '{server_url}'"))?;
        let endpoint = base
            .join(CHECK_ACCESS_PATH)
            .with_context(|| format!("failed to build access check endpoint from '{base}'"))?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl AccessCheckClient for HttpAccessCheckClient {
    async fn check(
        &self,
        request: &AccessCheckRequest,
    ) -> std::result::Result<AccessCheckResponse, ClientError> {
        debug!(
            email = %request.email,
            environment = %request.environment,
            endpoint = %self.endpoint,
            "access check: sending request"
        );
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|err| ClientError::NetworkError(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ClientError::NetworkError(err.to_string()))?;
        debug!(status = status.as_u16(), body = %body, "access check: received response");

        if !status.is_success() {
            let err = server_error(status.as_u16(), &body);
            warn!(status = status.as_u16(), "access check: service returned an error: {err}");
            return Err(err);
        }

        let parsed = parse_success(&body)?;
        info!(
            email = %request.email,
            missing_groups = parsed.missing_groups.len(),
            profile = %parsed.current_profile,
            "access check: completed"
        );
        Ok(parsed)
    }
}

fn parse_success(body: &str) -> std::result::Result<AccessCheckResponse, ClientError> {
    serde_json::from_str(body).map_err(|err| ClientError::MalformedResponse(err.to_string()))
}

/// Structured body first, raw text second. Never fails in its own right.
fn server_error(status: u16, body: &str) -> ClientError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if parsed.error.is_empty() => UNKNOWN_ERROR_MESSAGE.to_string(),
        Ok(parsed) => parsed.error,
        Err(_) if body.is_empty() => REQUEST_FAILED_MESSAGE.to_string(),
        Err(_) => body.to_string(),
    };
    ClientError::ServerError { status, message }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
