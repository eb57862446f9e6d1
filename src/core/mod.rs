//! Core state machine types and logic.
//!
//! This module contains the pure core of the terminal:
//! - The four states via `AtmState` and the `State` trait
//! - Events, operations and business outcomes
//! - The transition table as a pure function
//! - Immutable history tracking
//!
//! Nothing in this module mutates a machine; `crate::machine` applies
//! the steps computed here.

mod event;
mod history;
mod state;
mod transition;

pub use event::{Event, Operation, Outcome, Pin};
pub use history::{StateHistory, StateTransition};
pub use state::{AtmState, State};
pub use transition::{transition, Ledger, Step};
