//! Data models for the employee gateway.
//!
//! These models define the caller-facing resource shape; the upstream wire
//! shapes live with the upstream client.

mod employee;

pub use employee::*;
