//! Terminal configuration and its validation.
//!
//! Validation uses Stillwater's `Validation` type so that every problem in a
//! configuration is reported at once instead of stopping at the first one.

use crate::builder::error::{BuildError, ConfigViolation};
use crate::core::Pin;
use crate::machine::DEFAULT_PIN;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Cash loaded into a terminal when none is configured.
pub const DEFAULT_INITIAL_CASH: i64 = 2000;

/// Largest PIN a four-digit keypad can produce.
pub const MAX_PIN: Pin = 9999;

/// Transitions a terminal's audit history retains when none is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10_000;

/// Settings for one terminal.
///
/// `initial_cash` is signed so that a negative value coming from a config
/// file is reported rather than failing to parse.
///
/// # Example
///
/// ```rust
/// use cashpoint::builder::MachineConfig;
///
/// let config = MachineConfig::from_json(r#"{ "initial_cash": 500 }"#).unwrap();
/// assert_eq!(config.initial_cash, 500);
/// assert_eq!(config.pin, 1234);
/// assert_eq!(config.history_capacity, 10_000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub initial_cash: i64,
    pub pin: Pin,
    pub history_capacity: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            initial_cash: DEFAULT_INITIAL_CASH,
            pin: DEFAULT_PIN,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl MachineConfig {
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks = vec![
            self.check_cash(),
            check_pin(self.pin),
            self.check_history_capacity(),
        ];
        Validation::all_vec(checks).map(|_| ())
    }

    /// Like [`validate`](Self::validate), as a `Result`.
    pub fn check(&self) -> Result<(), BuildError> {
        into_result(self.validate())
    }

    fn check_cash(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        if self.initial_cash < 0 {
            Validation::fail(ConfigViolation::NegativeCash {
                value: self.initial_cash,
            })
        } else {
            Validation::success(())
        }
    }

    fn check_history_capacity(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        if self.history_capacity == 0 {
            Validation::fail(ConfigViolation::ZeroHistoryCapacity)
        } else {
            Validation::success(())
        }
    }
}

pub(crate) fn check_pin(pin: Pin) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if pin > MAX_PIN {
        Validation::fail(ConfigViolation::PinOutOfRange { value: pin })
    } else {
        Validation::success(())
    }
}

pub(crate) fn into_result(
    validation: Validation<(), NonEmptyVec<ConfigViolation>>,
) -> Result<(), BuildError> {
    match validation {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => {
            Err(BuildError::InvalidConfig(errors.iter().cloned().collect()))
        }
    }
}
