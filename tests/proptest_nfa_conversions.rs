//! Property-based tests for the NFA conversions.
//!
//! Each conversion claims to preserve the recognized language; the original
//! automaton's own acceptance check is the oracle. Random automata include
//! epsilon transitions (and therefore epsilon cycles), multiple initial
//! states, and unreachable states.

use libchomsky::prelude::*;
use proptest::prelude::*;

const SYMBOLS: [char; 2] = ['a', 'b'];

/// Random NFAs over {a, b} with up to five states. Transitions may be
/// epsilon, so cycles of silent moves arise regularly.
fn arb_nfa() -> impl Strategy<Value = Nfa<u32, char>> {
    (1u32..=5).prop_flat_map(|n| {
        let transitions =
            prop::collection::vec((0..n, prop::option::of(0usize..SYMBOLS.len()), 0..n), 0..14);
        let initial = prop::collection::vec(0..n, 1..=2);
        let accepting = prop::collection::vec(0..n, 0..=3);
        (Just(n), transitions, initial, accepting).prop_map(
            |(n, transitions, initial, accepting)| {
                let mut builder = NfaBuilder::new().with_states(0..n).with_symbols(SYMBOLS);
                for state in initial {
                    builder = builder.with_initial(state);
                }
                for state in accepting {
                    builder = builder.with_accepting(state);
                }
                for (from, symbol, to) in transitions {
                    builder = match symbol {
                        Some(i) => builder.with_transition(from, SYMBOLS[i], to),
                        None => builder.with_epsilon_transition(from, to),
                    };
                }
                builder.build().unwrap()
            },
        )
    })
}

fn arb_word() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(SYMBOLS.to_vec()), 0..=6)
}

proptest! {
    #[test]
    fn epsilon_removal_preserves_the_language(nfa in arb_nfa(), word in arb_word()) {
        let converted = EpsilonRemoval::new().apply(&nfa);
        prop_assert!(converted.transitions().all(|(_, t)| !t.is_epsilon()));
        prop_assert_eq!(converted.accepts(&word), nfa.accepts(&word));
    }

    #[test]
    fn power_set_construction_preserves_the_language(nfa in arb_nfa(), word in arb_word()) {
        let dfa = PowerSetConstruction::new().apply(&nfa);
        prop_assert!(dfa.is_deterministic());
        prop_assert!(dfa.is_total());
        prop_assert_eq!(dfa.accepts(&word), nfa.accepts(&word));
    }

    #[test]
    fn single_initial_state_preserves_the_language(nfa in arb_nfa(), word in arb_word()) {
        let converted = SingleInitialState::new().apply(&nfa.labeled());
        prop_assert_eq!(converted.initial_states().len(), 1);
        prop_assert_eq!(converted.accepts(&word), nfa.accepts(&word));
    }

    #[test]
    fn reachability_pruning_preserves_the_language(nfa in arb_nfa(), word in arb_word()) {
        let converted = ReachableOnly::new().apply(&nfa);
        prop_assert_eq!(converted.reachable_states().len(), converted.states().len());
        prop_assert_eq!(converted.accepts(&word), nfa.accepts(&word));
    }

    #[test]
    fn minimization_preserves_the_language_of_determinized_input(
        nfa in arb_nfa(),
        word in arb_word(),
    ) {
        // The subset construction guarantees the precondition.
        let dfa = PowerSetConstruction::new().apply(&nfa);
        let minimal = Minimization::new().apply(&dfa).unwrap();
        prop_assert!(minimal.states().len() <= dfa.states().len());
        prop_assert_eq!(minimal.accepts(&word), nfa.accepts(&word));
    }

    #[test]
    fn minimization_is_idempotent(nfa in arb_nfa()) {
        let dfa = PowerSetConstruction::new().apply(&nfa);
        let once = Minimization::new().apply(&dfa).unwrap();
        let conversion = Minimization::new();
        prop_assert!(conversion.is_redundant(&once));
        prop_assert_eq!(conversion.apply(&once).unwrap(), once);
    }

    #[test]
    fn executor_and_stepper_agree(nfa in arb_nfa(), word in arb_word()) {
        let eager = Executor::new(&nfa, &word).run();
        let bounded = AutomatonStepper::new(&nfa, &word).run(10_000);
        prop_assert_eq!(bounded, Some(eager));
    }

    #[test]
    fn determinacy_faults_are_complete(nfa in arb_nfa()) {
        // A fault-free report means every (state, symbol) pair has exactly
        // one successor and there are no epsilon transitions.
        let faults = nfa.check_determinacy();
        if faults.is_empty() {
            prop_assert!(nfa.transitions().all(|(_, t)| !t.is_epsilon()));
            for state in nfa.states() {
                for symbol in nfa.alphabet() {
                    let count = nfa
                        .transitions_from(state)
                        .iter()
                        .filter(|t| t.symbol() == Some(symbol))
                        .count();
                    prop_assert_eq!(count, 1);
                }
            }
        }
    }
}
