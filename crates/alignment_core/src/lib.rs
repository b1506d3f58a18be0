//! Shared alignment-session domain primitives.
//!
//! This crate owns the create-payload validation pipeline and the
//! request/response contracts. It intentionally excludes AWS SDK and Lambda
//! runtime concerns.

pub mod contract;
pub mod validate;
