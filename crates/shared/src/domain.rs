use std::fmt;

use serde::{Deserialize, Serialize};

/// Deployment environment an access check is evaluated against.
///
/// Only production is checked today; the selector in the front ends is shown
/// but disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Environment {
    #[default]
    Production,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Production => "Production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile name the checker expects to be active once access is granted.
pub const PRODUCTION_PROFILE: &str = "prod";
