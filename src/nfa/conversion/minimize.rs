//! DFA minimization via bisimulation.
//!
//! Defined only for deterministic, total automata: on nondeterministic
//! input the quotient construction below is not well-defined, so the
//! conversion validates its input and reports the determinacy faults as a
//! user error instead of producing a wrong automaton.
//!
//! The algorithm prunes to reachable states, then computes the coarsest
//! bisimulation over the automaton's graph view with two comparators —
//! vertices are equivalent iff they agree on acceptance, edges iff they
//! carry the same symbol — using the generic partition-refinement engine.
//! Each equivalence class collapses onto its first-seen representative; any
//! member's outgoing transitions determine the class's transitions, which
//! is well-defined precisely because bisimilar states behave identically.

use crate::automaton::{Automaton, StateId, SymbolId};
use crate::conversion::Conversion;
use crate::fault::FaultCollection;
use crate::graph::bisimulation;
use crate::nfa::conversion::ReachableOnly;
use crate::nfa::{Nfa, NfaDeterminacyFault, NfaTransition};
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap;
use std::marker::PhantomData;

/// Minimizes a deterministic, total finite automaton.
#[derive(Debug, Default)]
pub struct Minimization<S, A> {
    _marker: PhantomData<(S, A)>,
}

impl<S, A> Minimization<S, A> {
    /// Create the conversion.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S: StateId, A: SymbolId> Minimization<S, A> {
    fn quotient(nfa: &Nfa<S, A>) -> Nfa<S, A> {
        let pruned = ReachableOnly::new().apply(nfa);
        let graph = pruned.as_graph();
        let classes = bisimulation(
            &graph,
            |left, right| {
                pruned.accepting_states().contains(left)
                    == pruned.accepting_states().contains(right)
            },
            |left: &Option<A>, right| left == right,
        );

        let mut representative: FxHashMap<S, S> = FxHashMap::default();
        for class in &classes {
            for member in class {
                representative.insert(member.clone(), class[0].clone());
            }
        }

        let states: IndexSet<S> = classes.iter().map(|class| class[0].clone()).collect();
        let table: IndexMap<S, Vec<NfaTransition<S, A>>> = states
            .iter()
            .map(|rep| {
                let outgoing = pruned
                    .transitions_from(rep)
                    .iter()
                    .map(|t| match t {
                        NfaTransition::Symbol { symbol, target } => NfaTransition::Symbol {
                            symbol: symbol.clone(),
                            target: representative[target].clone(),
                        },
                        NfaTransition::Epsilon { target } => NfaTransition::Epsilon {
                            target: representative[target].clone(),
                        },
                    })
                    .collect();
                (rep.clone(), outgoing)
            })
            .collect();

        let initial: IndexSet<S> = pruned
            .initial_states()
            .iter()
            .map(|s| representative[s].clone())
            .collect();
        let accepting: IndexSet<S> = pruned
            .accepting_states()
            .iter()
            .map(|s| representative[s].clone())
            .collect();

        Nfa::from_parts(states, pruned.alphabet().clone(), initial, accepting, table)
    }
}

impl<S: StateId, A: SymbolId> Conversion for Minimization<S, A> {
    type Input = Nfa<S, A>;
    type Output = Result<Nfa<S, A>, FaultCollection<NfaDeterminacyFault<S, A>>>;

    fn is_redundant(&self, nfa: &Self::Input) -> bool {
        let faults = nfa.check_determinacy();
        if !faults.is_deterministic() || !faults.is_total() {
            return false;
        }
        if nfa.reachable_states().len() != nfa.states().len() {
            return false;
        }
        let quotient = Self::quotient(nfa);
        quotient.states().len() == nfa.states().len()
    }

    fn identity(&self, nfa: &Self::Input) -> Self::Output {
        Ok(nfa.clone())
    }

    fn convert(&self, nfa: &Self::Input) -> Self::Output {
        let faults = nfa.check_determinacy();
        if !faults.is_deterministic() || !faults.is_total() {
            return Err(faults);
        }
        Ok(Self::quotient(nfa))
    }
}
