//! Serialized access to one terminal from several callers.

use super::Machine;
use crate::core::{AtmState, Event, Outcome, Pin, StateHistory};
use crate::error::MachineError;
use parking_lot::Mutex;
use std::sync::Arc;

/// A cloneable handle to one [`Machine`].
///
/// Each operation holds the lock for its whole read-modify-write, so the
/// state and cash counter always change together. Clones drive the same
/// terminal.
#[derive(Clone, Debug)]
pub struct SharedMachine {
    inner: Arc<Mutex<Machine>>,
}

impl SharedMachine {
    pub fn new(machine: Machine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    pub fn handle(&self, event: Event) -> Result<Outcome, MachineError> {
        self.inner.lock().handle(event)
    }

    pub fn insert_card(&self) -> Result<Outcome, MachineError> {
        self.handle(Event::InsertCard)
    }

    pub fn eject_card(&self) -> Result<Outcome, MachineError> {
        self.handle(Event::EjectCard)
    }

    pub fn enter_pin(&self, pin: Pin) -> Result<Outcome, MachineError> {
        self.handle(Event::EnterPin(pin))
    }

    pub fn request_cash(&self, amount: u64) -> Result<Outcome, MachineError> {
        self.handle(Event::RequestCash(amount))
    }

    pub fn state(&self) -> AtmState {
        self.inner.lock().state()
    }

    pub fn cash_available(&self) -> u64 {
        self.inner.lock().cash_available()
    }

    /// Snapshot of the history at the time of the call.
    pub fn history(&self) -> StateHistory<AtmState> {
        self.inner.lock().history().clone()
    }

    /// Run several operations without another caller interleaving.
    pub fn with<R>(&self, f: impl FnOnce(&mut Machine) -> R) -> R {
        f(&mut *self.inner.lock())
    }
}

impl From<Machine> for SharedMachine {
    fn from(machine: Machine) -> Self {
        Self::new(machine)
    }
}
