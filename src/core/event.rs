//! Events a terminal accepts and the business outcomes they produce.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A PIN as typed on the keypad.
pub type Pin = u32;

/// An input to the terminal.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Event {
    InsertCard,
    EjectCard,
    EnterPin(Pin),
    RequestCash(u64),
}

/// The operation an event invokes, without its payload.
///
/// Used in errors and history so that PINs never end up in logs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operation {
    InsertCard,
    EjectCard,
    EnterPin,
    RequestCash,
}

impl Event {
    /// The operation this event invokes, with any PIN or amount dropped.
    pub fn operation(&self) -> Operation {
        match self {
            Event::InsertCard => Operation::InsertCard,
            Event::EjectCard => Operation::EjectCard,
            Event::EnterPin(_) => Operation::EnterPin,
            Event::RequestCash(_) => Operation::RequestCash,
        }
    }
}

impl Operation {
    /// Snake-case name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::InsertCard => "insert_card",
            Operation::EjectCard => "eject_card",
            Operation::EnterPin => "enter_pin",
            Operation::RequestCash => "request_cash",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a correctly sequenced operation.
///
/// Wrong PINs and insufficient funds are outcomes, not errors: they are
/// expected and each drives a defined next state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Outcome {
    CardInserted,
    CardEjected,
    CorrectPin,
    IncorrectPin,
    Dispensed { amount: u64 },
    InsufficientFunds { requested: u64, available: u64 },
}

impl Outcome {
    /// True for outcomes where the customer's request was refused.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Outcome::IncorrectPin | Outcome::InsufficientFunds { .. }
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::CardInserted => f.write_str("card inserted"),
            Outcome::CardEjected => f.write_str("card ejected"),
            Outcome::CorrectPin => f.write_str("correct pin"),
            Outcome::IncorrectPin => f.write_str("incorrect pin, retry"),
            Outcome::Dispensed { amount } => write!(f, "dispensing {amount} cash"),
            Outcome::InsufficientFunds { .. } => f.write_str("insufficient funds"),
        }
    }
}
