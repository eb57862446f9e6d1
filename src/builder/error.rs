//! Configuration and build errors.

use thiserror::Error;

/// A single problem found while validating a [`MachineConfig`](super::MachineConfig).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("initial cash must not be negative (got {value})")]
    NegativeCash { value: i64 },

    #[error("pin must have at most four digits (got {value})")]
    PinOutOfRange { value: u32 },

    #[error("history capacity must be at least 1")]
    ZeroHistoryCapacity,
}

/// Errors that can occur when building a terminal.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid configuration: {}", summarize(.0))]
    InvalidConfig(Vec<ConfigViolation>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn summarize(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
