//! Controller error types.

use crate::core::{AtmState, Operation};
use thiserror::Error;

/// Errors raised by the terminal controller.
///
/// Business refusals (wrong PIN, insufficient funds) are not errors; see
/// [`Outcome`](crate::core::Outcome).
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("illegal operation: cannot {operation} in state '{state}'")]
    IllegalOperation {
        state: AtmState,
        operation: Operation,
    },
}

impl MachineError {
    /// Returns an error code suitable for driver responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            MachineError::IllegalOperation { .. } => "ILLEGAL_OPERATION",
        }
    }

    /// State the terminal was in when the operation was refused.
    pub fn state(&self) -> AtmState {
        match self {
            MachineError::IllegalOperation { state, .. } => *state,
        }
    }
}
