//! Single-initial-state conversion for PDAs.
//!
//! Introduces one generated state as the sole initial state, wired to every
//! original initial state by an epsilon transition that leaves the stack
//! unchanged (pop the wildcard, re-push it). Each original run gains one
//! silent prefix step and is otherwise untouched.

use crate::automaton::{Automaton, StateId, SymbolId};
use crate::conversion::Conversion;
use crate::fresh::{FreshIdAllocator, MaybeFresh};
use crate::pda::{Pda, PdaTransition, StackGuard};
use indexmap::IndexMap;
use std::marker::PhantomData;

/// Provenance tag of states generated by this conversion.
const STAGE: &str = "single-initial";

/// Rewrites a PDA so that it has exactly one initial state.
#[derive(Debug, Default)]
pub struct PdaSingleInitialState<S, A, G> {
    _marker: PhantomData<(S, A, G)>,
}

impl<S, A, G> PdaSingleInitialState<S, A, G> {
    /// Create the conversion.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S: StateId, A: SymbolId, G: SymbolId> Conversion for PdaSingleInitialState<S, A, G> {
    type Input = Pda<MaybeFresh<S>, A, MaybeFresh<G>>;
    type Output = Pda<MaybeFresh<S>, A, MaybeFresh<G>>;

    fn is_redundant(&self, pda: &Self::Input) -> bool {
        pda.initial_states().len() == 1
    }

    fn identity(&self, pda: &Self::Input) -> Self::Output {
        pda.clone()
    }

    fn convert(&self, pda: &Self::Input) -> Self::Output {
        let mut allocator = FreshIdAllocator::seeded(STAGE, pda.states().iter());
        let start: MaybeFresh<S> = allocator.fresh_value();

        let mut states = pda.states().clone();
        states.insert(start.clone());

        let mut table: IndexMap<MaybeFresh<S>, Vec<PdaTransition<MaybeFresh<S>, A, MaybeFresh<G>>>> =
            pda.states()
                .iter()
                .map(|s| (s.clone(), pda.transitions_from(s).to_vec()))
                .collect();
        table.insert(
            start.clone(),
            pda.initial_states()
                .iter()
                .map(|initial| PdaTransition {
                    input: None,
                    pop: StackGuard::Any,
                    push: vec![StackGuard::Any],
                    target: initial.clone(),
                })
                .collect(),
        );

        let mut initial = indexmap::IndexSet::new();
        initial.insert(start);

        Pda::from_parts(
            states,
            pda.alphabet().clone(),
            pda.stack_alphabet().clone(),
            initial,
            pda.accepting_states().clone(),
            pda.initial_stack_symbol().clone(),
            pda.acceptance(),
            table,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pda::{AcceptanceStrategy, PdaBuilder};

    #[test]
    fn merges_two_initial_states_behind_one_generated_state() {
        // Initial {0, 1}: 0 accepts "a", 1 accepts "b", by accepting state.
        let pda: Pda<u32, char, char> = PdaBuilder::new()
            .with_states([0, 1, 2])
            .with_symbols(['a', 'b'])
            .with_stack_symbols(['Z'])
            .with_initial(0)
            .with_initial(1)
            .with_accepting(2)
            .with_initial_stack_symbol('Z')
            .with_acceptance(AcceptanceStrategy::AcceptingStates)
            .with_transition(0, Some('a'), StackGuard::Symbol('Z'), vec![StackGuard::Any], 2)
            .with_transition(1, Some('b'), StackGuard::Symbol('Z'), vec![StackGuard::Any], 2)
            .build()
            .unwrap();
        let converted = PdaSingleInitialState::new().apply(&pda.labeled());
        assert_eq!(converted.initial_states().len(), 1);
        assert!(converted.initial_states()[0].is_generated());
        assert_eq!(converted.accepts_within(&['a'], 50), Some(true));
        assert_eq!(converted.accepts_within(&['b'], 50), Some(true));
        assert_eq!(converted.accepts_within(&['a', 'b'], 50), Some(false));
    }

    #[test]
    fn single_initial_input_is_redundant() {
        let pda = crate::pda::tests::anbn();
        let conversion = PdaSingleInitialState::new();
        let labeled = pda.labeled();
        assert!(conversion.is_redundant(&labeled));
        assert_eq!(conversion.apply(&labeled), labeled);
    }
}
