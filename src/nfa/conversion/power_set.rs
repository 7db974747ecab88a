//! Power-set (subset) construction: determinization.
//!
//! Produces a deterministic, total automaton whose states are sets of
//! original states. The input is first brought into epsilon-free form; the
//! construction then explores subsets breadth-first from the set of initial
//! states, always defining a successor for every symbol (the empty subset
//! acts as the sink), so the output has no missing and no ambiguous
//! transitions by construction.
//!
//! Subset states are `BTreeSet`s, which keeps them hashable and ordered;
//! this is why the state type additionally requires `Ord`.

use crate::automaton::{Automaton, StateId, SymbolId, Transition};
use crate::conversion::Conversion;
use crate::nfa::conversion::EpsilonRemoval;
use crate::nfa::{Nfa, NfaTransition};
use indexmap::{IndexMap, IndexSet};
use std::collections::{BTreeSet, VecDeque};
use std::marker::PhantomData;

/// Determinizes an NFA via the subset construction.
#[derive(Debug, Default)]
pub struct PowerSetConstruction<S, A> {
    _marker: PhantomData<(S, A)>,
}

impl<S, A> PowerSetConstruction<S, A> {
    /// Create the conversion.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S: StateId + Ord, A: SymbolId> Conversion for PowerSetConstruction<S, A> {
    type Input = Nfa<S, A>;
    type Output = Nfa<BTreeSet<S>, A>;

    fn is_redundant(&self, nfa: &Self::Input) -> bool {
        let faults = nfa.check_determinacy();
        faults.is_deterministic() && faults.is_total()
    }

    fn identity(&self, nfa: &Self::Input) -> Self::Output {
        nfa.map_states(|s| BTreeSet::from([s.clone()]))
    }

    fn convert(&self, nfa: &Self::Input) -> Self::Output {
        let epsilon_free = EpsilonRemoval::new().apply(nfa);

        let start: BTreeSet<S> = epsilon_free.initial_states().iter().cloned().collect();
        let mut states: IndexSet<BTreeSet<S>> = IndexSet::new();
        states.insert(start.clone());
        let mut table: IndexMap<BTreeSet<S>, Vec<NfaTransition<BTreeSet<S>, A>>> =
            IndexMap::new();

        let mut queue: VecDeque<BTreeSet<S>> = VecDeque::new();
        queue.push_back(start.clone());
        while let Some(subset) = queue.pop_front() {
            let mut outgoing = Vec::new();
            for symbol in epsilon_free.alphabet() {
                let successor: BTreeSet<S> = subset
                    .iter()
                    .flat_map(|state| {
                        epsilon_free
                            .transitions_from(state)
                            .iter()
                            .filter(|t| t.symbol() == Some(symbol))
                            .map(|t| t.target().clone())
                    })
                    .collect();
                if states.insert(successor.clone()) {
                    queue.push_back(successor.clone());
                }
                outgoing.push(NfaTransition::Symbol {
                    symbol: symbol.clone(),
                    target: successor,
                });
            }
            table.insert(subset, outgoing);
        }

        let accepting: IndexSet<BTreeSet<S>> = states
            .iter()
            .filter(|subset| {
                subset
                    .iter()
                    .any(|state| epsilon_free.accepting_states().contains(state))
            })
            .cloned()
            .collect();

        let mut initial = IndexSet::new();
        initial.insert(start);

        Nfa::from_parts(
            states,
            epsilon_free.alphabet().clone(),
            initial,
            accepting,
            table,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nfa::NfaBuilder;

    #[test]
    fn determinized_automaton_is_deterministic_and_total() {
        // States {0,1} over {a,b}, transitions (0,a,0) and (0,a,1),
        // accepting {1}. Language: words ending in 'a'.
        let nfa: Nfa<u32, char> = NfaBuilder::new()
            .with_states([0, 1])
            .with_symbols(['a', 'b'])
            .with_initial(0)
            .with_accepting(1)
            .with_transition(0, 'a', 0)
            .with_transition(0, 'a', 1)
            .build()
            .unwrap();
        assert!(!nfa.is_deterministic());

        let dfa = PowerSetConstruction::new().apply(&nfa);
        assert!(dfa.is_deterministic());
        assert!(dfa.is_total());
        // Original language: only "a" and nothing after a 'b'... precisely:
        // every accepted word is a nonempty run of 'a'-moves ending in state 1.
        assert!(dfa.accepts(&['a']));
        assert!(dfa.accepts(&['a', 'a']));
        assert!(!dfa.accepts(&[]));
        assert!(!dfa.accepts(&['b']));
        assert!(!dfa.accepts(&['a', 'b']));
    }

    #[test]
    fn epsilon_transitions_are_folded_away_first() {
        let nfa: Nfa<u32, char> = NfaBuilder::new()
            .with_states([0, 1, 2])
            .with_symbols(['a'])
            .with_initial(0)
            .with_accepting(2)
            .with_epsilon_transition(0, 1)
            .with_transition(1, 'a', 2)
            .build()
            .unwrap();
        let dfa = PowerSetConstruction::new().apply(&nfa);
        assert!(dfa.is_deterministic());
        assert!(dfa.accepts(&['a']));
        assert!(!dfa.accepts(&[]));
    }

    #[test]
    fn deterministic_total_input_maps_to_singleton_subsets() {
        let dfa: Nfa<u32, char> = NfaBuilder::new()
            .with_states([0, 1])
            .with_symbols(['a'])
            .with_initial(0)
            .with_accepting(1)
            .with_transition(0, 'a', 1)
            .with_transition(1, 'a', 1)
            .build()
            .unwrap();
        let conversion = PowerSetConstruction::new();
        assert!(conversion.is_redundant(&dfa));
        let mapped = conversion.apply(&dfa);
        assert!(mapped.states().iter().all(|subset| subset.len() == 1));
        assert!(mapped.accepts(&['a']));
    }
}
