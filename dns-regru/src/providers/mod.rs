//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

pub(crate) mod regru;

pub use regru::{RegRuClient, RegRuClientBuilder};
