//! Pure mapping from [`UiState`] to what the front ends display.

use shared::{
    domain::{Environment, PRODUCTION_PROFILE},
    protocol::AccessCheckResponse,
};

use crate::controller::UiState;

pub const ALL_GROUPS_MESSAGE: &str = "You have all the required group accesses.";
const REQUEST_GROUPS_PREFIX: &str = "Please go to the access management tool and request your ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Caution,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub label: &'static str,
    pub granted: bool,
}

impl Indicator {
    pub fn tone(&self) -> Tone {
        if self.granted {
            Tone::Success
        } else {
            Tone::Failure
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub tone: Tone,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    pub vpn: Indicator,
    pub production: Indicator,
    pub config_tool: Indicator,
    pub groups: StatusLine,
    pub profile: StatusLine,
    pub profile_arn: Option<String>,
    pub valid_until: Option<String>,
}

impl Checklist {
    pub fn indicators(&self) -> [&Indicator; 3] {
        [&self.vpn, &self.production, &self.config_tool]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: &'static str,
    pub enabled: bool,
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub environment: Environment,
    pub submit: SubmitControl,
    pub error: Option<String>,
    pub checklist: Option<Checklist>,
}

pub fn render(state: &UiState) -> View {
    let busy = state.is_loading();
    let submit = SubmitControl {
        label: if busy { "Checking..." } else { "Check" },
        enabled: !busy,
        busy,
    };
    let (error, checklist) = match state {
        UiState::Idle | UiState::Loading => (None, None),
        UiState::Error(message) => (Some(message.clone()), None),
        UiState::Success(response) => (None, Some(checklist(response))),
    };
    View {
        environment: Environment::Production,
        submit,
        error,
        checklist,
    }
}

pub fn checklist(response: &AccessCheckResponse) -> Checklist {
    Checklist {
        vpn: Indicator {
            label: "VPN",
            granted: response.vpn,
        },
        production: Indicator {
            label: "Production Group",
            granted: response.production,
        },
        config_tool: Indicator {
            label: "Config Tool",
            granted: response.config_tool,
        },
        groups: group_message(&response.missing_groups),
        profile: profile_message(&response.current_profile),
        profile_arn: response.profile_arn.clone(),
        valid_until: response
            .valid_until
            .as_deref()
            .map(|at| format!("Production access valid until {at}")),
    }
}

pub fn group_message(missing_groups: &[String]) -> StatusLine {
    if missing_groups.is_empty() {
        StatusLine {
            tone: Tone::Success,
            text: ALL_GROUPS_MESSAGE.to_string(),
        }
    } else {
        StatusLine {
            tone: Tone::Failure,
            text: format!("{REQUEST_GROUPS_PREFIX}{}", missing_groups.join(", ")),
        }
    }
}

pub fn profile_message(current_profile: &str) -> StatusLine {
    if current_profile == PRODUCTION_PROFILE {
        StatusLine {
            tone: Tone::Success,
            text: format!("You are currently using the correct AWS profile - {PRODUCTION_PROFILE}"),
        }
    } else {
        StatusLine {
            tone: Tone::Caution,
            text: format!(
                "You are currently using the {current_profile} profile. Once access is granted, please switch to {PRODUCTION_PROFILE}"
            ),
        }
    }
}
