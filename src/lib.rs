//! Cashpoint: a finite-state transaction controller for cash terminals
//!
//! A terminal moves through four states while a customer inserts a card,
//! enters a PIN, withdraws cash and takes the card back. Operations that the
//! current state does not accept fail with [`MachineError::IllegalOperation`];
//! wrong PINs and insufficient funds are ordinary [`Outcome`](crate::core::Outcome)s.
//!
//! # Core Concepts
//!
//! - **State**: the `AtmState` tag, one of `NoCard`, `HasCard`, `HasPin`,
//!   `OutOfService`
//! - **Transition**: a pure function from (state, event, ledger) to a step
//! - **Machine**: the context that applies steps and keeps an audit history
//!
//! # Example
//!
//! ```rust
//! use cashpoint::core::{AtmState, Outcome};
//! use cashpoint::Machine;
//!
//! let mut atm = Machine::new(500);
//! atm.insert_card()?;
//! assert_eq!(atm.enter_pin(9999)?, Outcome::IncorrectPin);
//! assert_eq!(atm.enter_pin(1234)?, Outcome::CorrectPin);
//!
//! let outcome = atm.request_cash(600)?;
//! assert_eq!(outcome.to_string(), "insufficient funds");
//! assert_eq!(atm.cash_available(), 500);
//! assert_eq!(atm.state(), AtmState::NoCard);
//! # Ok::<(), cashpoint::MachineError>(())
//! ```

pub mod builder;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder, MachineConfig};
pub use crate::core::{AtmState, Event, Outcome, State};
pub use error::MachineError;
pub use machine::{Machine, SharedMachine, DEFAULT_PIN};
