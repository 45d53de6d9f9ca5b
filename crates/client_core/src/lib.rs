//! Client side of the on-call access checker: email validation, the access
//! check call, the UI state machine and the checklist view model.

pub mod client;
pub mod controller;
pub mod render;
pub mod settings;
pub mod validation;

pub use client::{AccessCheckClient, ClientError, HttpAccessCheckClient};
pub use controller::{message_of, StateController, UiState, GENERIC_FAILURE_MESSAGE};
pub use render::{render, Checklist, Indicator, StatusLine, SubmitControl, Tone, View};
pub use settings::{load_settings, Settings};
pub use validation::{validate, ValidationError};
