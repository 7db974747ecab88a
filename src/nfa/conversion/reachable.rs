//! Reachable-states-only conversion.
//!
//! Computes the reachable state set once, then keeps only those states,
//! the transitions between them, and the accepting states restricted to the
//! reachable subset. Unreachable states contribute nothing to any run, so
//! the language is unchanged.

use crate::automaton::{Automaton, StateId, SymbolId};
use crate::conversion::Conversion;
use crate::nfa::{Nfa, NfaTransition};
use indexmap::IndexMap;
use std::marker::PhantomData;

/// Rewrites an NFA so that every state is reachable.
#[derive(Debug, Default)]
pub struct ReachableOnly<S, A> {
    _marker: PhantomData<(S, A)>,
}

impl<S, A> ReachableOnly<S, A> {
    /// Create the conversion.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S: StateId, A: SymbolId> Conversion for ReachableOnly<S, A> {
    type Input = Nfa<S, A>;
    type Output = Nfa<S, A>;

    fn is_redundant(&self, nfa: &Self::Input) -> bool {
        nfa.reachable_states().len() == nfa.states().len()
    }

    fn identity(&self, nfa: &Self::Input) -> Self::Output {
        nfa.clone()
    }

    fn convert(&self, nfa: &Self::Input) -> Self::Output {
        let reachable = nfa.reachable_states();
        let table: IndexMap<S, Vec<NfaTransition<S, A>>> = reachable
            .iter()
            .map(|s| (s.clone(), nfa.transitions_from(s).to_vec()))
            .collect();
        // Targets of reachable states are reachable by definition, so the
        // table needs no further filtering.
        Nfa::from_parts(
            reachable.clone(),
            nfa.alphabet().clone(),
            nfa.initial_states().clone(),
            nfa.accepting_states()
                .iter()
                .filter(|s| reachable.contains(*s))
                .cloned()
                .collect(),
            table,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nfa::NfaBuilder;

    #[test]
    fn drops_unreachable_states_and_their_transitions() {
        let nfa: Nfa<u32, char> = NfaBuilder::new()
            .with_states([0, 1, 2, 3])
            .with_symbols(['a'])
            .with_initial(0)
            .with_accepting(1)
            .with_accepting(3)
            .with_transition(0, 'a', 1)
            .with_transition(2, 'a', 3)
            .build()
            .unwrap();
        let converted = ReachableOnly::new().apply(&nfa);
        assert_eq!(converted.states().len(), 2);
        assert!(!converted.states().contains(&2));
        assert!(!converted.accepting_states().contains(&3));
        assert!(converted.accepts(&['a']));
        // Postcondition: everything that remains is reachable.
        assert_eq!(converted.reachable_states(), *converted.states());
    }

    #[test]
    fn fully_reachable_input_is_redundant() {
        let nfa: Nfa<u32, char> = NfaBuilder::new()
            .with_states([0, 1])
            .with_symbols(['a'])
            .with_initial(0)
            .with_transition(0, 'a', 1)
            .build()
            .unwrap();
        let conversion = ReachableOnly::new();
        assert!(conversion.is_redundant(&nfa));
        assert_eq!(conversion.apply(&nfa), nfa);
    }
}
