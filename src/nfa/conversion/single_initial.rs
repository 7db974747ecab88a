//! Single-initial-state conversion.
//!
//! Introduces one generated state as the sole initial state, wired to every
//! original initial state by an epsilon transition. The language is
//! preserved because the epsilon closure of the new state is exactly the
//! union of the closures of the originals.
//!
//! The conversion operates on [`MaybeFresh`]-labeled automata so that it
//! composes with other fresh-state-generating stages without nesting; use
//! [`Nfa::labeled`] to enter the labeled world.

use crate::automaton::{Automaton, StateId, SymbolId};
use crate::conversion::Conversion;
use crate::fresh::{FreshIdAllocator, MaybeFresh};
use crate::nfa::{Nfa, NfaTransition};
use indexmap::IndexMap;
use std::marker::PhantomData;

/// Provenance tag of states generated by this conversion.
const STAGE: &str = "single-initial";

/// Rewrites an NFA so that it has exactly one initial state.
#[derive(Debug, Default)]
pub struct SingleInitialState<S, A> {
    _marker: PhantomData<(S, A)>,
}

impl<S, A> SingleInitialState<S, A> {
    /// Create the conversion.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S: StateId, A: SymbolId> Conversion for SingleInitialState<S, A> {
    type Input = Nfa<MaybeFresh<S>, A>;
    type Output = Nfa<MaybeFresh<S>, A>;

    fn is_redundant(&self, nfa: &Self::Input) -> bool {
        nfa.initial_states().len() == 1
    }

    fn identity(&self, nfa: &Self::Input) -> Self::Output {
        nfa.clone()
    }

    fn convert(&self, nfa: &Self::Input) -> Self::Output {
        let mut allocator = FreshIdAllocator::seeded(STAGE, nfa.states().iter());
        let start: MaybeFresh<S> = allocator.fresh_value();

        let mut states = nfa.states().clone();
        states.insert(start.clone());

        let mut table: IndexMap<MaybeFresh<S>, Vec<NfaTransition<MaybeFresh<S>, A>>> = nfa
            .states()
            .iter()
            .map(|s| (s.clone(), nfa.transitions_from(s).to_vec()))
            .collect();
        table.insert(
            start.clone(),
            nfa.initial_states()
                .iter()
                .map(|initial| NfaTransition::Epsilon {
                    target: initial.clone(),
                })
                .collect(),
        );

        let mut initial = indexmap::IndexSet::new();
        initial.insert(start);

        Nfa::from_parts(
            states,
            nfa.alphabet().clone(),
            initial,
            nfa.accepting_states().clone(),
            table,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nfa::NfaBuilder;

    #[test]
    fn merges_two_initial_states_behind_one_generated_state() {
        // Initial {0, 1}: 0 accepts "a", 1 accepts "b".
        let nfa: Nfa<u32, char> = NfaBuilder::new()
            .with_states([0, 1, 2])
            .with_symbols(['a', 'b'])
            .with_initial(0)
            .with_initial(1)
            .with_accepting(2)
            .with_transition(0, 'a', 2)
            .with_transition(1, 'b', 2)
            .build()
            .unwrap();
        let converted = SingleInitialState::new().apply(&nfa.labeled());
        assert_eq!(converted.initial_states().len(), 1);
        assert!(converted.initial_states()[0].is_generated());
        assert!(converted.accepts(&['a']));
        assert!(converted.accepts(&['b']));
        assert!(!converted.accepts(&['a', 'b']));
    }

    #[test]
    fn single_initial_input_is_redundant() {
        let nfa: Nfa<u32, char> = NfaBuilder::new()
            .with_states([0])
            .with_symbols(['a'])
            .with_initial(0)
            .build()
            .unwrap();
        let conversion = SingleInitialState::new();
        let labeled = nfa.labeled();
        assert!(conversion.is_redundant(&labeled));
        let converted = conversion.apply(&labeled);
        assert_eq!(converted, labeled);
        assert!(converted.states().iter().all(|s| !s.is_generated()));
    }
}
