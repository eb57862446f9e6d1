//! Property-based tests for the terminal controller.
//!
//! These tests use proptest to verify the transition table's properties
//! across many randomly generated event sequences.

use cashpoint::core::{transition, AtmState, Event, Ledger, Outcome, State};
use cashpoint::{Machine, MachineError, DEFAULT_PIN};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_state()(variant in 0..4usize) -> AtmState {
        AtmState::ALL[variant]
    }
}

fn arbitrary_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::InsertCard),
        Just(Event::EjectCard),
        prop_oneof![Just(DEFAULT_PIN), 0..10_000u32].prop_map(Event::EnterPin),
        (0..1_500u64).prop_map(Event::RequestCash),
    ]
}

fn wrong_pin() -> impl Strategy<Value = u32> {
    (0..10_000u32).prop_filter("must differ from the accepted pin", |p| *p != DEFAULT_PIN)
}

fn authenticated(cash: u64) -> Machine {
    let mut atm = Machine::new(cash);
    atm.insert_card().unwrap();
    atm.enter_pin(DEFAULT_PIN).unwrap();
    atm
}

proptest! {
    #[test]
    fn initial_state_follows_cash(cash in 0..10_000u64) {
        let atm = Machine::new(cash);
        let expected = if cash == 0 { AtmState::OutOfService } else { AtmState::NoCard };
        prop_assert_eq!(atm.state(), expected);
        prop_assert_eq!(atm.cash_available(), cash);
    }

    #[test]
    fn transition_is_deterministic(
        state in arbitrary_state(),
        event in arbitrary_event(),
        cash in 0..2_000u64,
    ) {
        let ledger = Ledger { cash_available: cash, expected_pin: DEFAULT_PIN };
        prop_assert_eq!(transition(state, event, ledger), transition(state, event, ledger));
    }

    #[test]
    fn wrong_pins_then_correct_pin_reaches_has_pin(
        wrong in prop::collection::vec(wrong_pin(), 0..20)
    ) {
        let mut atm = Machine::new(100);
        atm.insert_card().unwrap();

        for pin in wrong {
            prop_assert_eq!(atm.enter_pin(pin).unwrap(), Outcome::IncorrectPin);
            prop_assert_eq!(atm.state(), AtmState::HasCard);
        }

        prop_assert_eq!(atm.enter_pin(DEFAULT_PIN).unwrap(), Outcome::CorrectPin);
        prop_assert_eq!(atm.state(), AtmState::HasPin);
    }

    #[test]
    fn covered_withdrawal_debits_exact_amount(cash in 1..5_000u64, pick in any::<prop::sample::Index>()) {
        let amount = pick.index(cash as usize + 1) as u64;
        let mut atm = authenticated(cash);

        prop_assert_eq!(atm.request_cash(amount).unwrap(), Outcome::Dispensed { amount });
        prop_assert_eq!(atm.cash_available(), cash - amount);

        let expected = if cash == amount { AtmState::OutOfService } else { AtmState::NoCard };
        prop_assert_eq!(atm.state(), expected);
    }

    #[test]
    fn overdraw_leaves_cash_unchanged(cash in 1..5_000u64, excess in 1..5_000u64) {
        let mut atm = authenticated(cash);
        let outcome = atm.request_cash(cash + excess).unwrap();

        prop_assert!(outcome.is_rejection());
        prop_assert_eq!(atm.cash_available(), cash);
        prop_assert_eq!(atm.state(), AtmState::NoCard);
    }

    #[test]
    fn eject_legal_only_with_card(state in arbitrary_state(), cash in 1..2_000u64) {
        let ledger = Ledger { cash_available: cash, expected_pin: DEFAULT_PIN };
        let result = transition(state, Event::EjectCard, ledger);

        if state.holds_card() {
            let step = result.unwrap();
            prop_assert_eq!(step.next, AtmState::NoCard);
            prop_assert_eq!(step.cash_available, cash);
        } else {
            let is_illegal = matches!(result, Err(MachineError::IllegalOperation { .. }));
            prop_assert!(is_illegal);
        }
    }

    #[test]
    fn out_of_service_is_absorbing(events in prop::collection::vec(arbitrary_event(), 1..30)) {
        let mut atm = Machine::new(0);
        for event in events {
            prop_assert!(atm.handle(event).is_err());
            prop_assert_eq!(atm.state(), AtmState::OutOfService);
        }
        prop_assert!(atm.history().is_empty());
    }

    #[test]
    fn invariants_hold_for_any_event_sequence(
        cash in 0..2_000u64,
        events in prop::collection::vec(arbitrary_event(), 0..60),
    ) {
        let mut atm = Machine::new(cash);
        let mut previous_cash = cash;

        for event in events {
            let before = atm.state();
            let result = atm.handle(event);

            if result.is_err() {
                prop_assert_eq!(atm.state(), before);
                prop_assert_eq!(atm.cash_available(), previous_cash);
            }
            if before.is_final() {
                prop_assert!(result.is_err());
            }

            // cash never grows, and only a dispense lowers it
            prop_assert!(atm.cash_available() <= previous_cash);
            if atm.cash_available() < previous_cash {
                let dispensed = matches!(result, Ok(Outcome::Dispensed { .. }));
                prop_assert!(dispensed);
            }
            prop_assert_eq!(
                atm.is_out_of_service(),
                atm.cash_available() == 0
            );
            prop_assert_eq!(atm.session_id().is_some(), atm.state().holds_card());

            previous_cash = atm.cash_available();
        }
    }

    #[test]
    fn history_roundtrip_serialization(events in prop::collection::vec(arbitrary_event(), 0..20)) {
        let mut atm = Machine::new(1_000);
        for event in events {
            let _ = atm.handle(event);
        }

        let json = serde_json::to_string(atm.history()).unwrap();
        let deserialized: cashpoint::core::StateHistory<AtmState> =
            serde_json::from_str(&json).unwrap();

        prop_assert_eq!(atm.history().len(), deserialized.len());
    }
}
