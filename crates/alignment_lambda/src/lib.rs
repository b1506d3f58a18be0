//! AWS-oriented adapters and handlers for the alignment-session API.
//!
//! This crate owns runtime integration details (Lambda handlers, the session
//! storage seam, and the DynamoDB adapter) and exposes a single runtime
//! module boundary for the shared contract and validation primitives.

pub mod adapters;
pub mod handlers;
pub mod runtime;
