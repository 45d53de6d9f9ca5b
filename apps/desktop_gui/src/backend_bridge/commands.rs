//! Backend commands queued from UI to backend worker.

use shared::protocol::AccessCheckRequest;

pub enum BackendCommand {
    CheckAccess { request: AccessCheckRequest },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::CheckAccess { .. } => "check_access",
        }
    }
}
