//! The terminal context.
//!
//! A [`Machine`] owns the current state tag, the cash counter and the
//! expected PIN. Every operation is handed to the pure
//! [`transition`](crate::core::transition) function and the resulting step
//! is applied here.

mod shared;

pub use shared::SharedMachine;

use crate::core::{
    transition, AtmState, Event, Ledger, Outcome, Pin, State, StateHistory, StateTransition,
    Step,
};
use crate::builder::config::{check_pin, into_result};
use crate::builder::{BuildError, DEFAULT_HISTORY_CAPACITY};
use crate::error::MachineError;
use chrono::Utc;
use uuid::Uuid;

/// PIN accepted when none is configured.
pub const DEFAULT_PIN: Pin = 1234;

/// A single cash-dispensing terminal.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::{AtmState, Outcome};
/// use cashpoint::Machine;
///
/// let mut atm = Machine::new(1000);
/// atm.insert_card()?;
/// atm.enter_pin(1234)?;
/// assert_eq!(atm.request_cash(1000)?, Outcome::Dispensed { amount: 1000 });
///
/// assert_eq!(atm.state(), AtmState::OutOfService);
/// assert!(atm.insert_card().is_err());
/// # Ok::<(), cashpoint::MachineError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Machine {
    state: AtmState,
    cash_available: u64,
    expected_pin: Pin,
    session: Option<Uuid>,
    pin_attempts: u32,
    history: StateHistory<AtmState>,
}

impl Machine {
    /// Create a terminal loaded with `initial_cash` that accepts [`DEFAULT_PIN`].
    ///
    /// Starts in `OutOfService` when `initial_cash` is zero. The history
    /// keeps the last [`DEFAULT_HISTORY_CAPACITY`] transitions.
    pub fn new(initial_cash: u64) -> Self {
        Self::configured(initial_cash, DEFAULT_PIN, DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a terminal with an explicit PIN.
    ///
    /// The PIN is checked against the same rule as
    /// [`MachineConfig`](crate::MachineConfig): at most four digits.
    pub fn with_pin(initial_cash: u64, expected_pin: Pin) -> Result<Self, BuildError> {
        into_result(check_pin(expected_pin))?;
        Ok(Self::configured(
            initial_cash,
            expected_pin,
            DEFAULT_HISTORY_CAPACITY,
        ))
    }

    pub(crate) fn configured(
        initial_cash: u64,
        expected_pin: Pin,
        history_capacity: usize,
    ) -> Self {
        let state = AtmState::initial(initial_cash);
        tracing::debug!(cash = initial_cash, state = state.name(), "terminal created");
        Self {
            state,
            cash_available: initial_cash,
            expected_pin,
            session: None,
            pin_attempts: 0,
            history: StateHistory::bounded(history_capacity),
        }
    }

    pub fn insert_card(&mut self) -> Result<Outcome, MachineError> {
        self.handle(Event::InsertCard)
    }

    pub fn eject_card(&mut self) -> Result<Outcome, MachineError> {
        self.handle(Event::EjectCard)
    }

    pub fn enter_pin(&mut self, pin: Pin) -> Result<Outcome, MachineError> {
        self.handle(Event::EnterPin(pin))
    }

    pub fn request_cash(&mut self, amount: u64) -> Result<Outcome, MachineError> {
        self.handle(Event::RequestCash(amount))
    }

    /// Dispatch an event to the current state.
    ///
    /// On `Err` the machine is left exactly as it was.
    pub fn handle(&mut self, event: Event) -> Result<Outcome, MachineError> {
        let ledger = Ledger {
            cash_available: self.cash_available,
            expected_pin: self.expected_pin,
        };

        let step = transition(self.state, event, ledger).inspect_err(|err| {
            tracing::warn!(
                state = self.state.name(),
                operation = event.operation().name(),
                "{err}"
            );
        })?;

        self.apply(event, step);
        Ok(step.outcome)
    }

    fn apply(&mut self, event: Event, step: Step) {
        match event {
            Event::InsertCard => {
                self.session = Some(Uuid::new_v4());
                self.pin_attempts = 0;
            }
            Event::EnterPin(_) => self.pin_attempts += 1,
            Event::EjectCard | Event::RequestCash(_) => {}
        }

        tracing::info!(
            session = ?self.session,
            from = self.state.name(),
            to = step.next.name(),
            "{}",
            step.outcome
        );

        self.history.push(StateTransition {
            from: self.state,
            to: step.next,
            operation: event.operation(),
            outcome: step.outcome,
            session: self.session,
            timestamp: Utc::now(),
            attempt: self.pin_attempts,
        });

        self.cash_available = step.cash_available;
        self.set_state(step.next);

        if !self.state.holds_card() {
            self.session = None;
            self.pin_attempts = 0;
        }
        if self.state.is_final() {
            tracing::warn!("terminal out of cash, now out of service");
        }
    }

    fn set_state(&mut self, next: AtmState) {
        self.state = next;
    }

    pub fn state(&self) -> AtmState {
        self.state
    }

    pub fn cash_available(&self) -> u64 {
        self.cash_available
    }

    pub fn is_out_of_service(&self) -> bool {
        self.state.is_final()
    }

    /// Id of the card session in progress, if a card is inserted.
    pub fn session_id(&self) -> Option<Uuid> {
        self.session
    }

    /// PIN entries made in the current session.
    pub fn pin_attempts(&self) -> u32 {
        self.pin_attempts
    }

    pub fn history(&self) -> &StateHistory<AtmState> {
        &self.history
    }
}
