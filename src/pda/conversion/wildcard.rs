//! Wildcard elimination.
//!
//! Rewrites every transition that mentions [`StackGuard::Any`] into
//! equivalent wildcard-free transitions. A wildcard pop guard becomes one
//! copy of the transition per stack symbol, with the matched symbol
//! substituted for every wildcard in the push word; a wildcard in the push
//! word of a transition with a concrete pop guard simply re-pushes that
//! guard's symbol.
//!
//! Several other conversions rely on this one: a surviving wildcard guard
//! would also match stack symbols generated by a later stage (such as a
//! bottom-of-stack marker) and silently change the language.

use crate::automaton::{Automaton, StateId, SymbolId};
use crate::conversion::Conversion;
use crate::pda::{Pda, PdaTransition, StackGuard};
use indexmap::IndexMap;
use std::marker::PhantomData;

/// Rewrites a PDA into an equivalent one without wildcard stack guards.
#[derive(Debug, Default)]
pub struct WildcardElimination<S, A, G> {
    _marker: PhantomData<(S, A, G)>,
}

impl<S, A, G> WildcardElimination<S, A, G> {
    /// Create the conversion.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

fn substitute<G: SymbolId>(push: &[StackGuard<G>], matched: &G) -> Vec<StackGuard<G>> {
    push.iter()
        .map(|element| match element {
            StackGuard::Symbol(symbol) => StackGuard::Symbol(symbol.clone()),
            StackGuard::Any => StackGuard::Symbol(matched.clone()),
        })
        .collect()
}

impl<S: StateId, A: SymbolId, G: SymbolId> Conversion for WildcardElimination<S, A, G> {
    type Input = Pda<S, A, G>;
    type Output = Pda<S, A, G>;

    fn is_redundant(&self, pda: &Self::Input) -> bool {
        pda.transitions().all(|(_, t)| {
            t.pop != StackGuard::Any && t.push.iter().all(|g| *g != StackGuard::Any)
        })
    }

    fn identity(&self, pda: &Self::Input) -> Self::Output {
        pda.clone()
    }

    fn convert(&self, pda: &Self::Input) -> Self::Output {
        let mut table: IndexMap<S, Vec<PdaTransition<S, A, G>>> = pda
            .states()
            .iter()
            .map(|s| (s.clone(), Vec::new()))
            .collect();

        for (source, transition) in pda.transitions() {
            let expanded: Vec<PdaTransition<S, A, G>> = match &transition.pop {
                StackGuard::Symbol(matched) => vec![PdaTransition {
                    input: transition.input.clone(),
                    pop: transition.pop.clone(),
                    push: substitute(&transition.push, matched),
                    target: transition.target.clone(),
                }],
                StackGuard::Any => pda
                    .stack_alphabet()
                    .iter()
                    .map(|matched| PdaTransition {
                        input: transition.input.clone(),
                        pop: StackGuard::Symbol(matched.clone()),
                        push: substitute(&transition.push, matched),
                        target: transition.target.clone(),
                    })
                    .collect(),
            };
            let outgoing = table.entry(source.clone()).or_default();
            for t in expanded {
                if !outgoing.contains(&t) {
                    outgoing.push(t);
                }
            }
        }

        Pda::from_parts(
            pda.states().clone(),
            pda.alphabet().clone(),
            pda.stack_alphabet().clone(),
            pda.initial_states().clone(),
            pda.accepting_states().clone(),
            pda.initial_stack_symbol().clone(),
            pda.acceptance(),
            table,
        )
    }
}
