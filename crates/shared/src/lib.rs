//! Wire types shared between the access checker front ends and the verification service.

pub mod domain;
pub mod error;
pub mod protocol;
