use serde::{Deserialize, Serialize};

use crate::domain::{Environment, PRODUCTION_PROFILE};

/// Path of the access check endpoint, relative to the service base URL.
pub const CHECK_ACCESS_PATH: &str = "/api/check-access";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessCheckRequest {
    pub email: String,
    pub environment: Environment,
}

impl AccessCheckRequest {
    pub fn production(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            environment: Environment::Production,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessCheckResponse {
    pub vpn: bool,
    pub production: bool,
    pub config_tool: bool,
    pub current_profile: String,
    pub missing_groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_arn: Option<String>,
    /// Expiry of granted production access, as sent by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

impl AccessCheckResponse {
    pub fn has_all_groups(&self) -> bool {
        self.missing_groups.is_empty()
    }

    pub fn uses_production_profile(&self) -> bool {
        self.current_profile == PRODUCTION_PROFILE
    }
}
