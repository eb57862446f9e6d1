//! Core State trait and the terminal's four states.
//!
//! States are plain tags. All behavior lives in the transition function,
//! so a state value carries no data and is freely copyable.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States represent immutable
/// values that describe the current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for audit trails
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (absorbing) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// The phase of a terminal's transaction.
///
/// `OutOfService` is absorbing: once entered, every operation is rejected.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::{AtmState, State};
///
/// assert_eq!(AtmState::HasPin.name(), "HasPin");
/// assert!(AtmState::OutOfService.is_final());
/// assert!(!AtmState::NoCard.is_final());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum AtmState {
    /// Idle, waiting for a card.
    NoCard,
    /// Card inserted, PIN not yet verified.
    HasCard,
    /// PIN verified, ready to dispense.
    HasPin,
    /// Cash exhausted.
    OutOfService,
}

impl AtmState {
    /// Every state, in transaction order.
    pub const ALL: [AtmState; 4] = [
        AtmState::NoCard,
        AtmState::HasCard,
        AtmState::HasPin,
        AtmState::OutOfService,
    ];

    /// Initial state for a terminal loaded with `cash`.
    pub fn initial(cash: u64) -> Self {
        if cash == 0 {
            AtmState::OutOfService
        } else {
            AtmState::NoCard
        }
    }

    /// Whether a card is physically inside the terminal.
    pub fn holds_card(&self) -> bool {
        matches!(self, AtmState::HasCard | AtmState::HasPin)
    }
}

impl State for AtmState {
    fn name(&self) -> &str {
        match self {
            Self::NoCard => "NoCard",
            Self::HasCard => "HasCard",
            Self::HasPin => "HasPin",
            Self::OutOfService => "OutOfService",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::OutOfService)
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::OutOfService)
    }
}

impl fmt::Display for AtmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
