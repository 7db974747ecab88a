//! Epsilon-transition removal.
//!
//! Drains a work queue of epsilon transitions. Processing the transition
//! `p --ε--> q` duplicates every outgoing transition of `q` onto `p`
//! (re-enqueueing duplicated epsilon transitions under their new origin so
//! the fixpoint keeps draining), marks `p` accepting if `q` is, propagates
//! initiality from `p` to `q`, and finally deletes the epsilon transition
//! itself. An epsilon transition whose origin equals its destination is
//! semantically void and is deleted immediately without enqueueing —
//! processing it would re-create itself forever.
//!
//! Termination: duplication only ever adds transitions from the finite
//! universe `S × (Σ ∪ {ε}) × S` and duplicates are never added twice, so
//! the table grows to a fixpoint; after that every queued entry only
//! deletes. The language is preserved because each duplication makes the
//! moves reachable through `q` directly available at `p` before the edge
//! between them disappears.

use crate::automaton::{Automaton, StateId, SymbolId, Transition};
use crate::conversion::Conversion;
use crate::nfa::{Nfa, NfaTransition};
use indexmap::IndexMap;
use std::collections::VecDeque;
use std::marker::PhantomData;

/// Rewrites an NFA into an equivalent one without epsilon transitions.
#[derive(Debug, Default)]
pub struct EpsilonRemoval<S, A> {
    _marker: PhantomData<(S, A)>,
}

impl<S, A> EpsilonRemoval<S, A> {
    /// Create the conversion.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S: StateId, A: SymbolId> Conversion for EpsilonRemoval<S, A> {
    type Input = Nfa<S, A>;
    type Output = Nfa<S, A>;

    fn is_redundant(&self, nfa: &Self::Input) -> bool {
        nfa.transitions().all(|(_, t)| !t.is_epsilon())
    }

    fn identity(&self, nfa: &Self::Input) -> Self::Output {
        nfa.clone()
    }

    fn convert(&self, nfa: &Self::Input) -> Self::Output {
        let mut table: IndexMap<S, Vec<NfaTransition<S, A>>> = nfa
            .states()
            .iter()
            .map(|s| (s.clone(), nfa.transitions_from(s).to_vec()))
            .collect();
        let mut initial = nfa.initial_states().clone();
        let mut accepting = nfa.accepting_states().clone();

        // Seed the queue; self-loops are dropped on the spot.
        let mut queue: VecDeque<(S, S)> = VecDeque::new();
        for (source, outgoing) in table.iter_mut() {
            outgoing.retain(|t| {
                if t.is_epsilon() && t.target() == source {
                    return false;
                }
                true
            });
            for transition in outgoing.iter() {
                if transition.is_epsilon() {
                    queue.push_back((source.clone(), transition.target().clone()));
                }
            }
        }

        while let Some((origin, destination)) = queue.pop_front() {
            let edge = NfaTransition::Epsilon {
                target: destination.clone(),
            };
            // Skip entries whose edge has already been deleted.
            if !table[&origin].contains(&edge) {
                continue;
            }

            let duplicates: Vec<NfaTransition<S, A>> =
                table.get(&destination).cloned().unwrap_or_default();
            let Some(outgoing) = table.get_mut(&origin) else {
                continue;
            };
            outgoing.retain(|t| *t != edge);
            for duplicate in duplicates {
                if duplicate.is_epsilon() && *duplicate.target() == origin {
                    continue; // would be a void self-loop at `origin`
                }
                if outgoing.contains(&duplicate) {
                    continue;
                }
                if duplicate.is_epsilon() {
                    queue.push_back((origin.clone(), duplicate.target().clone()));
                }
                outgoing.push(duplicate);
            }

            if accepting.contains(&destination) {
                accepting.insert(origin.clone());
            }
            if initial.contains(&origin) {
                initial.insert(destination.clone());
            }
        }

        Nfa::from_parts(
            nfa.states().clone(),
            nfa.alphabet().clone(),
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

    fn epsilon_free<S: StateId, A: SymbolId>(nfa: &Nfa<S, A>) -> bool {
        nfa.transitions().all(|(_, t)| !t.is_epsilon())
    }

    #[test]
    fn removes_a_simple_epsilon_edge() {
        // 0 --ε--> 1 --a--> 2 accepts "a".
        let nfa: Nfa<u32, char> = NfaBuilder::new()
            .with_states([0, 1, 2])
            .with_symbols(['a'])
            .with_initial(0)
            .with_accepting(2)
            .with_epsilon_transition(0, 1)
            .with_transition(1, 'a', 2)
            .build()
            .unwrap();
        let converted = EpsilonRemoval::new().apply(&nfa);
        assert!(epsilon_free(&converted));
        assert!(converted.accepts(&['a']));
        assert!(!converted.accepts(&[]));
    }

    #[test]
    fn accepting_status_propagates_to_the_origin() {
        // 0 --ε--> 1 (accepting): the empty word must stay accepted.
        let nfa: Nfa<u32, char> = NfaBuilder::new()
            .with_states([0, 1])
            .with_symbols(['a'])
            .with_initial(0)
            .with_accepting(1)
            .with_epsilon_transition(0, 1)
            .build()
            .unwrap();
        let converted = EpsilonRemoval::new().apply(&nfa);
        assert!(epsilon_free(&converted));
        assert!(converted.accepts(&[]));
    }

    #[test]
    fn self_loop_epsilon_is_deleted_without_looping() {
        let nfa: Nfa<u32, char> = NfaBuilder::new()
            .with_states([0])
            .with_symbols(['a'])
            .with_initial(0)
            .with_accepting(0)
            .with_epsilon_transition(0, 0)
            .with_transition(0, 'a', 0)
            .build()
            .unwrap();
        let converted = EpsilonRemoval::new().apply(&nfa);
        assert!(epsilon_free(&converted));
        assert!(converted.accepts(&[]));
        assert!(converted.accepts(&['a', 'a']));
    }

    #[test]
    fn epsilon_cycle_of_length_two_terminates() {
        // 0 --ε--> 1, 1 --ε--> 0, 1 --a--> 2 (accepting).
        let nfa: Nfa<u32, char> = NfaBuilder::new()
            .with_states([0, 1, 2])
            .with_symbols(['a'])
            .with_initial(0)
            .with_accepting(2)
            .with_epsilon_transition(0, 1)
            .with_epsilon_transition(1, 0)
            .with_transition(1, 'a', 2)
            .build()
            .unwrap();
        let converted = EpsilonRemoval::new().apply(&nfa);
        assert!(epsilon_free(&converted));
        assert!(converted.accepts(&['a']));
        assert!(!converted.accepts(&['a', 'a']));
    }

    #[test]
    fn redundant_application_returns_a_fresh_equal_value() {
        let nfa: Nfa<u32, char> = NfaBuilder::new()
            .with_states([0])
            .with_symbols(['a'])
            .with_initial(0)
            .with_transition(0, 'a', 0)
            .build()
            .unwrap();
        let conversion = EpsilonRemoval::new();
        assert!(conversion.is_redundant(&nfa));
        let converted = conversion.apply(&nfa);
        assert_eq!(converted, nfa);
    }
}
