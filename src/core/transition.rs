//! The terminal's transition table as a pure function.
//!
//! `transition` never touches the machine. It reads the fields it needs from
//! [`Ledger`] and returns the next state, the new cash level and the outcome,
//! or an [`MachineError::IllegalOperation`] when the current state does not
//! accept the event.

use super::event::{Event, Outcome, Pin};
use super::state::AtmState;
use crate::error::MachineError;

/// Machine fields the transition table reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ledger {
    pub cash_available: u64,
    pub expected_pin: Pin,
}

/// Computed effect of one accepted event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub next: AtmState,
    pub cash_available: u64,
    pub outcome: Outcome,
}

/// Apply `event` to a terminal in `state`.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::{transition, AtmState, Event, Ledger, Outcome};
///
/// let ledger = Ledger { cash_available: 500, expected_pin: 1234 };
///
/// let step = transition(AtmState::HasPin, Event::RequestCash(600), ledger).unwrap();
/// assert_eq!(step.next, AtmState::NoCard);
/// assert_eq!(step.cash_available, 500);
/// assert!(step.outcome.is_rejection());
///
/// assert!(transition(AtmState::NoCard, Event::EjectCard, ledger).is_err());
/// ```
pub fn transition(state: AtmState, event: Event, ledger: Ledger) -> Result<Step, MachineError> {
    let cash = ledger.cash_available;
    let stay = |next: AtmState, outcome: Outcome| Step {
        next,
        cash_available: cash,
        outcome,
    };

    match (state, event) {
        (AtmState::NoCard, Event::InsertCard) => {
            Ok(stay(AtmState::HasCard, Outcome::CardInserted))
        }

        (AtmState::HasCard | AtmState::HasPin, Event::EjectCard) => {
            Ok(stay(AtmState::NoCard, Outcome::CardEjected))
        }

        (AtmState::HasCard, Event::EnterPin(pin)) if pin == ledger.expected_pin => {
            Ok(stay(AtmState::HasPin, Outcome::CorrectPin))
        }
        (AtmState::HasCard, Event::EnterPin(_)) => {
            Ok(stay(AtmState::HasCard, Outcome::IncorrectPin))
        }

        (AtmState::HasPin, Event::RequestCash(amount)) => Ok(withdraw(amount, cash)),

        (state, event) => Err(MachineError::IllegalOperation {
            state,
            operation: event.operation(),
        }),
    }
}

fn withdraw(amount: u64, cash: u64) -> Step {
    match cash.checked_sub(amount) {
        Some(remaining) => Step {
            next: AtmState::initial(remaining),
            cash_available: remaining,
            outcome: Outcome::Dispensed { amount },
        },
        None => Step {
            next: AtmState::NoCard,
            cash_available: cash,
            outcome: Outcome::InsufficientFunds {
                requested: amount,
                available: cash,
            },
        },
    }
}
