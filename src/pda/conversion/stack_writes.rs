//! Stack-write limiting.
//!
//! Rewrites every transition that pushes more than two symbols into a chain
//! of transitions that each push at most two, threaded through generated
//! intermediate states. The first link of the chain consumes the original
//! input symbol and pops the original guard; every later link is an epsilon
//! transition that pops the symbol the previous link left on top and pushes
//! the next two symbols of the original push word. No other transition
//! leaves an intermediate state, so a run entering the chain either
//! completes all of it or dies, and the language is preserved.
//!
//! Wildcards in an affected transition are resolved first (a chain link
//! needs a concrete symbol to use as its pop guard); transitions that
//! already push at most two symbols pass through untouched, wildcards and
//! all.

use crate::automaton::{Automaton, StateId, SymbolId};
use crate::conversion::Conversion;
use crate::fresh::{FreshIdAllocator, MaybeFresh};
use crate::pda::{Pda, PdaTransition, StackGuard};
use indexmap::{IndexMap, IndexSet};
use std::marker::PhantomData;

/// Provenance tag of states generated by this conversion.
const STAGE: &str = "stack-writes";

/// Rewrites a PDA so that every transition pushes at most two symbols.
#[derive(Debug, Default)]
pub struct StackWriteLimit<S, A, G> {
    _marker: PhantomData<(S, A, G)>,
}

impl<S, A, G> StackWriteLimit<S, A, G> {
    /// Create the conversion.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

type FreshPda<S, A, G> = Pda<MaybeFresh<S>, A, MaybeFresh<G>>;
type FreshTransition<S, A, G> = PdaTransition<MaybeFresh<S>, A, MaybeFresh<G>>;

impl<S: StateId, A: SymbolId, G: SymbolId> StackWriteLimit<S, A, G> {
    /// Resolve wildcards in `push` against the concrete popped symbol.
    fn concretize(
        push: &[StackGuard<MaybeFresh<G>>],
        matched: &MaybeFresh<G>,
    ) -> Vec<MaybeFresh<G>> {
        push.iter()
            .map(|element| match element {
                StackGuard::Symbol(symbol) => symbol.clone(),
                StackGuard::Any => matched.clone(),
            })
            .collect()
    }

    /// Emit the chain for one transition with a concrete pop guard and a
    /// fully concrete push word of length greater than two.
    fn decompose(
        source: &MaybeFresh<S>,
        input: &Option<A>,
        pop: MaybeFresh<G>,
        push: &[MaybeFresh<G>],
        target: &MaybeFresh<S>,
        allocator: &mut FreshIdAllocator,
        states: &mut IndexSet<MaybeFresh<S>>,
        table: &mut IndexMap<MaybeFresh<S>, Vec<FreshTransition<S, A, G>>>,
    ) {
        let k = push.len();
        let intermediates: Vec<MaybeFresh<S>> =
            (0..k - 2).map(|_| allocator.fresh_value()).collect();
        for state in &intermediates {
            states.insert(state.clone());
            table.entry(state.clone()).or_default();
        }

        let pair = |top: usize| {
            vec![
                StackGuard::Symbol(push[top].clone()),
                StackGuard::Symbol(push[top + 1].clone()),
            ]
        };

        table
            .entry(source.clone())
            .or_default()
            .push(PdaTransition {
                input: input.clone(),
                pop: StackGuard::Symbol(pop),
                push: pair(k - 2),
                target: intermediates[0].clone(),
            });
        for j in 1..k - 1 {
            let from = intermediates[j - 1].clone();
            let to = if j == k - 2 {
                target.clone()
            } else {
                intermediates[j].clone()
            };
            table.entry(from).or_default().push(PdaTransition {
                input: None,
                pop: StackGuard::Symbol(push[k - 1 - j].clone()),
                push: pair(k - 2 - j),
                target: to,
            });
        }
    }
}

impl<S: StateId, A: SymbolId, G: SymbolId> Conversion for StackWriteLimit<S, A, G> {
    type Input = FreshPda<S, A, G>;
    type Output = FreshPda<S, A, G>;

    fn is_redundant(&self, pda: &Self::Input) -> bool {
        pda.transitions().all(|(_, t)| t.push.len() <= 2)
    }

    fn identity(&self, pda: &Self::Input) -> Self::Output {
        pda.clone()
    }

    fn convert(&self, pda: &Self::Input) -> Self::Output {
        let mut allocator = FreshIdAllocator::seeded(STAGE, pda.states().iter());
        let mut states = pda.states().clone();
        let mut table: IndexMap<MaybeFresh<S>, Vec<FreshTransition<S, A, G>>> = pda
            .states()
            .iter()
            .map(|s| (s.clone(), Vec::new()))
            .collect();

        for (source, transition) in pda.transitions() {
            if transition.push.len() <= 2 {
                table
                    .entry(source.clone())
                    .or_default()
                    .push(transition.clone());
                continue;
            }
            match &transition.pop {
                StackGuard::Symbol(matched) => {
                    let push = Self::concretize(&transition.push, matched);
                    Self::decompose(
                        source,
                        &transition.input,
                        matched.clone(),
                        &push,
                        &transition.target,
                        &mut allocator,
                        &mut states,
                        &mut table,
                    );
                }
                StackGuard::Any => {
                    for matched in pda.stack_alphabet() {
                        let push = Self::concretize(&transition.push, matched);
                        Self::decompose(
                            source,
                            &transition.input,
                            matched.clone(),
                            &push,
                            &transition.target,
                            &mut allocator,
                            &mut states,
                            &mut table,
                        );
                    }
                }
            }
        }

        Pda::from_parts(
            states,
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
