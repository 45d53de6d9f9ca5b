//! Controller layer: UI events and command orchestration around the access check state machine.

pub mod events;
pub mod orchestration;
