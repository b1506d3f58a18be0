//! Runtime module boundary over the shared alignment-session core.

pub use alignment_core::contract;
pub use alignment_core::validate;
