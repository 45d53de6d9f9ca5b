//! Background worker that performs access checks off the UI thread.

pub mod commands;
pub mod runtime;
