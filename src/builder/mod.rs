//! Builder API for configuring terminals.
//!
//! [`MachineBuilder`] collects settings fluently, validates them through
//! [`MachineConfig::validate`] and produces a [`Machine`].

pub mod config;
pub mod error;

pub use config::{MachineConfig, DEFAULT_HISTORY_CAPACITY, DEFAULT_INITIAL_CASH, MAX_PIN};
pub use error::{BuildError, ConfigViolation};

use crate::core::Pin;
use crate::machine::{Machine, SharedMachine};

/// Builder for constructing terminals with a fluent API.
///
/// # Example
///
/// ```rust
/// use cashpoint::builder::MachineBuilder;
/// use cashpoint::core::AtmState;
///
/// let atm = MachineBuilder::new().initial_cash(0).pin(4321).build().unwrap();
/// assert_eq!(atm.state(), AtmState::OutOfService);
///
/// assert!(MachineBuilder::new().initial_cash(-10).build().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    config: MachineConfig,
}

impl MachineBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all settings with `config`.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn initial_cash(mut self, cash: i64) -> Self {
        self.config.initial_cash = cash;
        self
    }

    pub fn pin(mut self, pin: Pin) -> Self {
        self.config.pin = pin;
        self
    }

    /// Number of transitions the audit history retains.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Build the terminal.
    /// Returns every configuration violation if validation fails.
    pub fn build(self) -> Result<Machine, BuildError> {
        self.config.check()?;
        let MachineConfig {
            initial_cash,
            pin,
            history_capacity,
        } = self.config;
        // non-negative once checked
        Ok(Machine::configured(
            initial_cash.unsigned_abs(),
            pin,
            history_capacity,
        ))
    }

    /// Build a terminal behind a [`SharedMachine`] handle.
    pub fn build_shared(self) -> Result<SharedMachine, BuildError> {
        self.build().map(SharedMachine::new)
    }
}
