//! State transition history tracking.
//!
//! Provides an in-memory audit trail of the events a terminal accepted,
//! optionally bounded to the most recent transitions. Nothing here is
//! persisted.

use super::event::{Operation, Outcome};
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;
use uuid::Uuid;

/// Record of a single accepted event.
///
/// Self-loops (a wrong PIN keeps the card in `HasCard`) are recorded too,
/// so `from == to` is valid.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Operation that triggered the transition
    pub operation: Operation,
    /// What the customer saw
    pub outcome: Outcome,
    /// Card session the event belonged to
    pub session: Option<Uuid>,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// PIN entries so far in this session (0 before the first entry)
    pub attempt: u32,
}

/// Ordered history of state transitions.
///
/// `record` returns a new history with the transition added; `push`
/// appends in place. A bounded history keeps only the most recent
/// transitions.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::{AtmState, Operation, Outcome, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: AtmState::NoCard,
///     to: AtmState::HasCard,
///     operation: Operation::InsertCard,
///     outcome: Outcome::CardInserted,
///     session: None,
///     timestamp: Utc::now(),
///     attempt: 0,
/// });
///
/// assert_eq!(history.get_path(), vec![&AtmState::NoCard, &AtmState::HasCard]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    capacity: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            capacity: None,
        }
    }

    /// Create a history that keeps at most `capacity` transitions.
    ///
    /// Once full, recording a transition drops the oldest one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cashpoint::core::{AtmState, Operation, Outcome, StateHistory, StateTransition};
    /// use chrono::Utc;
    ///
    /// let mut history = StateHistory::bounded(2);
    /// for outcome in [Outcome::IncorrectPin, Outcome::IncorrectPin, Outcome::CorrectPin] {
    ///     history.push(StateTransition {
    ///         from: AtmState::HasCard,
    ///         to: AtmState::HasCard,
    ///         operation: Operation::EnterPin,
    ///         outcome,
    ///         session: None,
    ///         timestamp: Utc::now(),
    ///         attempt: 1,
    ///     });
    /// }
    ///
    /// assert_eq!(history.len(), 2);
    /// assert_eq!(history.last().unwrap().outcome, Outcome::CorrectPin);
    /// ```
    pub fn bounded(capacity: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            capacity: Some(capacity),
        }
    }

    /// Maximum number of retained transitions, if bounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Append a transition in place, evicting the oldest when full.
    pub fn push(&mut self, transition: StateTransition<S>) {
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return;
            }
            while self.transitions.len() >= capacity {
                self.transitions.pop_front();
            }
        }
        self.transitions.push_back(transition);
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched. Use [`push`](Self::push)
    /// to append without copying.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` of the oldest
    /// retained transition, then the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Transitions belonging to one card session.
    pub fn session(&self, id: Uuid) -> impl Iterator<Item = &StateTransition<S>> + '_ {
        self.transitions
            .iter()
            .filter(move |t| t.session == Some(id))
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all retained transitions, oldest first.
    pub fn transitions(&self) -> &VecDeque<StateTransition<S>> {
        &self.transitions
    }

    /// Most recent transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
