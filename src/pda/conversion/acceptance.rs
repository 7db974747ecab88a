//! Acceptance-strategy conversions.
//!
//! Both directions follow the textbook construction built around a
//! generated bottom-of-stack marker: the new initial state plants the
//! original initial stack symbol on top of the marker and hands control to
//! the original machine, which then runs unmodified above the marker.
//!
//! * [`AcceptingStatesToEmptyStack`] adds a drain state that, entered from
//!   any original accepting state, pops the remaining stack (marker
//!   included) with epsilon moves.
//! * [`EmptyStackToAcceptingStates`] adds one generated accepting state,
//!   entered from any original state the moment the marker surfaces, which
//!   happens exactly when the original machine has emptied its stack.
//!
//! Both conversions first funnel the input through
//! [`PdaSingleInitialState`] and [`WildcardElimination`]: a single initial
//! state keeps the marker wiring to one place, and wildcard guards must be
//! gone before the marker exists, or an original transition could match the
//! marker and leave the machine running where the original would have
//! halted.

use crate::automaton::{Automaton, StateId, SymbolId};
use crate::conversion::Conversion;
use crate::fresh::{FreshIdAllocator, MaybeFresh};
use crate::pda::conversion::{PdaSingleInitialState, WildcardElimination};
use crate::pda::{AcceptanceStrategy, Pda, PdaTransition, StackGuard};
use indexmap::{IndexMap, IndexSet};
use std::marker::PhantomData;

/// Provenance tag of this conversion direction.
const TO_EMPTY_STACK: &str = "empty-stack";
/// Provenance tag of this conversion direction.
const TO_ACCEPTING: &str = "accepting-states";

type FreshPda<S, A, G> = Pda<MaybeFresh<S>, A, MaybeFresh<G>>;
type FreshTable<S, A, G> =
    IndexMap<MaybeFresh<S>, Vec<PdaTransition<MaybeFresh<S>, A, MaybeFresh<G>>>>;

/// Normalize to a single initial state and wildcard-free transitions, then
/// generate the marker wiring shared by both directions: a fresh bottom
/// marker and a fresh start state that plants the original initial stack
/// symbol on top of it.
fn marker_wiring<S: StateId, A: SymbolId, G: SymbolId>(
    pda: &FreshPda<S, A, G>,
    stage: &'static str,
) -> (
    FreshPda<S, A, G>,
    MaybeFresh<S>,
    MaybeFresh<G>,
    FreshIdAllocator,
    FreshTable<S, A, G>,
) {
    let normalized = WildcardElimination::new().apply(&PdaSingleInitialState::new().apply(pda));

    let mut state_allocator = FreshIdAllocator::seeded(stage, normalized.states().iter());
    let mut symbol_allocator = FreshIdAllocator::seeded(stage, normalized.stack_alphabet().iter());
    let start: MaybeFresh<S> = state_allocator.fresh_value();
    let marker: MaybeFresh<G> = symbol_allocator.fresh_value();

    let mut table: FreshTable<S, A, G> = normalized
        .states()
        .iter()
        .map(|s| (s.clone(), normalized.transitions_from(s).to_vec()))
        .collect();
    table.insert(
        start.clone(),
        vec![PdaTransition {
            input: None,
            pop: StackGuard::Symbol(marker.clone()),
            push: vec![
                StackGuard::Symbol(normalized.initial_stack_symbol().clone()),
                StackGuard::Symbol(marker.clone()),
            ],
            target: normalized.initial_states()[0].clone(),
        }],
    );

    (normalized, start, marker, state_allocator, table)
}

/// Rewrites an accepting-states PDA into an equivalent empty-stack PDA.
#[derive(Debug, Default)]
pub struct AcceptingStatesToEmptyStack<S, A, G> {
    _marker: PhantomData<(S, A, G)>,
}

impl<S, A, G> AcceptingStatesToEmptyStack<S, A, G> {
    /// Create the conversion.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S: StateId, A: SymbolId, G: SymbolId> Conversion for AcceptingStatesToEmptyStack<S, A, G> {
    type Input = FreshPda<S, A, G>;
    type Output = FreshPda<S, A, G>;

    fn is_redundant(&self, pda: &Self::Input) -> bool {
        pda.acceptance() == AcceptanceStrategy::EmptyStack
    }

    fn identity(&self, pda: &Self::Input) -> Self::Output {
        pda.clone()
    }

    fn convert(&self, pda: &Self::Input) -> Self::Output {
        let (normalized, start, marker, mut state_allocator, mut table) =
            marker_wiring(pda, TO_EMPTY_STACK);
        let drain: MaybeFresh<S> = state_allocator.fresh_value();

        // From every accepting state the drain pops the whole stack,
        // marker included, with epsilon moves. These wildcards are the
        // only ones in the output and match the marker on purpose.
        for accepting in normalized.accepting_states() {
            table
                .entry(accepting.clone())
                .or_default()
                .push(PdaTransition {
                    input: None,
                    pop: StackGuard::Any,
                    push: vec![],
                    target: drain.clone(),
                });
        }
        table.insert(
            drain.clone(),
            vec![PdaTransition {
                input: None,
                pop: StackGuard::Any,
                push: vec![],
                target: drain.clone(),
            }],
        );

        let mut states = normalized.states().clone();
        states.insert(start.clone());
        states.insert(drain);
        let mut stack_alphabet = normalized.stack_alphabet().clone();
        stack_alphabet.insert(marker.clone());
        let mut initial = IndexSet::new();
        initial.insert(start);

        Pda::from_parts(
            states,
            normalized.alphabet().clone(),
            stack_alphabet,
            initial,
            IndexSet::new(),
            marker,
            AcceptanceStrategy::EmptyStack,
            table,
        )
    }
}

/// Rewrites an empty-stack PDA into an equivalent accepting-states PDA.
#[derive(Debug, Default)]
pub struct EmptyStackToAcceptingStates<S, A, G> {
    _marker: PhantomData<(S, A, G)>,
}

impl<S, A, G> EmptyStackToAcceptingStates<S, A, G> {
    /// Create the conversion.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S: StateId, A: SymbolId, G: SymbolId> Conversion for EmptyStackToAcceptingStates<S, A, G> {
    type Input = FreshPda<S, A, G>;
    type Output = FreshPda<S, A, G>;

    fn is_redundant(&self, pda: &Self::Input) -> bool {
        pda.acceptance() == AcceptanceStrategy::AcceptingStates
    }

    fn identity(&self, pda: &Self::Input) -> Self::Output {
        pda.clone()
    }

    fn convert(&self, pda: &Self::Input) -> Self::Output {
        let (normalized, start, marker, mut state_allocator, mut table) =
            marker_wiring(pda, TO_ACCEPTING);
        let accept: MaybeFresh<S> = state_allocator.fresh_value();

        // The marker surfaces exactly when the original machine has
        // emptied its stack; seeing it, any original state may move to the
        // generated accepting state.
        for state in normalized.states() {
            table.entry(state.clone()).or_default().push(PdaTransition {
                input: None,
                pop: StackGuard::Symbol(marker.clone()),
                push: vec![],
                target: accept.clone(),
            });
        }
        table.insert(accept.clone(), vec![]);

        let mut states = normalized.states().clone();
        states.insert(start.clone());
        states.insert(accept.clone());
        let mut stack_alphabet = normalized.stack_alphabet().clone();
        stack_alphabet.insert(marker.clone());
        let mut initial = IndexSet::new();
        initial.insert(start);
        let mut accepting = IndexSet::new();
        accepting.insert(accept);

        Pda::from_parts(
            states,
            normalized.alphabet().clone(),
            stack_alphabet,
            initial,
            accepting,
            marker,
            AcceptanceStrategy::AcceptingStates,
            table,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pda::PdaBuilder;

    /// aⁿbⁿ (n ≥ 1) accepting by accepting state.
    fn anbn_by_state() -> Pda<u32, char, char> {
        PdaBuilder::new()
            .with_states([0, 1, 2])
            .with_symbols(['a', 'b'])
            .with_stack_symbols(['Z', 'X'])
            .with_initial(0)
            .with_accepting(2)
            .with_initial_stack_symbol('Z')
            .with_acceptance(AcceptanceStrategy::AcceptingStates)
            .with_transition(
                0,
                Some('a'),
                StackGuard::Symbol('Z'),
                vec![StackGuard::Symbol('X'), StackGuard::Symbol('Z')],
                0,
            )
            .with_transition(
                0,
                Some('a'),
                StackGuard::Symbol('X'),
                vec![StackGuard::Symbol('X'), StackGuard::Symbol('X')],
                0,
            )
            .with_transition(0, Some('b'), StackGuard::Symbol('X'), vec![], 1)
            .with_transition(1, Some('b'), StackGuard::Symbol('X'), vec![], 1)
            .with_epsilon_transition(1, StackGuard::Symbol('Z'), vec![StackGuard::Symbol('Z')], 2)
            .build()
            .unwrap()
    }

    #[test]
    fn accepting_states_to_empty_stack_preserves_the_language() {
        let pda = anbn_by_state();
        let converted = AcceptingStatesToEmptyStack::new().apply(&pda.labeled());

        assert_eq!(converted.acceptance(), AcceptanceStrategy::EmptyStack);
        assert!(converted.accepting_states().is_empty());
        assert!(converted.initial_stack_symbol().is_generated());

        for word in [&['a', 'b'][..], &['a', 'a', 'b', 'b'][..]] {
            assert_eq!(pda.accepts_within(word, 500), Some(true));
            assert_eq!(converted.accepts_within(word, 500), Some(true));
        }
        for word in [&[][..], &['a'][..], &['a', 'a', 'b'][..], &['b', 'a'][..]] {
            assert_eq!(pda.accepts_within(word, 500), Some(false));
            assert_eq!(converted.accepts_within(word, 500), Some(false));
        }
    }

    #[test]
    fn empty_stack_to_accepting_states_preserves_the_language() {
        let pda = crate::pda::tests::anbn();
        let converted = EmptyStackToAcceptingStates::new().apply(&pda.labeled());

        assert_eq!(converted.acceptance(), AcceptanceStrategy::AcceptingStates);
        assert_eq!(converted.accepting_states().len(), 1);
        assert!(converted.accepting_states()[0].is_generated());

        for word in [&[][..], &['a', 'b'][..], &['a', 'a', 'b', 'b'][..]] {
            assert_eq!(converted.accepts_within(word, 500), Some(true));
        }
        for word in [&['a'][..], &['a', 'b', 'b'][..], &['b'][..]] {
            assert_eq!(converted.accepts_within(word, 500), Some(false));
        }
    }

    #[test]
    fn matching_strategy_is_redundant() {
        let by_state = anbn_by_state().labeled();
        let by_stack = crate::pda::tests::anbn().labeled();
        assert!(EmptyStackToAcceptingStates::new().is_redundant(&by_state));
        assert!(AcceptingStatesToEmptyStack::new().is_redundant(&by_stack));
        assert_eq!(
            AcceptingStatesToEmptyStack::new().apply(&by_stack),
            by_stack
        );
    }

    #[test]
    fn drain_never_accepts_with_input_remaining() {
        // "ab" followed by junk must stay rejected after the conversion.
        let converted =
            AcceptingStatesToEmptyStack::new().apply(&anbn_by_state().labeled());
        assert_eq!(
            converted.accepts_within(&['a', 'b', 'a'], 500),
            Some(false)
        );
    }
}
