//! The abstract automaton core: trait bundle and generic algorithms.
//!
//! An automaton kind is described by a bundle of three associated types —
//! state, transition, configuration — tied together by the [`Automaton`]
//! trait. The engine treats states and symbols as opaque values (anything
//! `Clone + Eq + Hash + Debug`); all structure lives in the transition
//! table and in the model-specific acceptance and halting predicates.
//!
//! Generic algorithms operate over the bundle: [`reachable_states`] walks
//! the transition graph, [`applicable_transitions`] filters a
//! configuration's outgoing transitions, and the execution engines
//! ([`Executor`], [`AutomatonStepper`]) decide acceptance.

mod determinacy;
mod executor;
mod stepper;

pub use determinacy::{DeterminacyFault, DeterminacyReason};
pub use executor::Executor;
pub use stepper::AutomatonStepper;

use indexmap::IndexSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Bound bundle for state values: opaque, equality- and hash-comparable.
pub trait StateId: Clone + Eq + Hash + Debug {}
impl<T: Clone + Eq + Hash + Debug> StateId for T {}

/// Bound bundle for alphabet symbols.
pub trait SymbolId: Clone + Eq + Hash + Debug {}
impl<T: Clone + Eq + Hash + Debug> SymbolId for T {}

/// A snapshot of a run: at minimum a current state; concrete models add the
/// input word, the read position, and (for pushdown automata) a stack.
pub trait Configuration: Clone + Eq + Hash {
    /// State type of the owning automaton.
    type State: StateId;

    /// The current state.
    fn state(&self) -> &Self::State;

    /// Whether any of the input word remains unread.
    fn has_remaining_input(&self) -> bool;
}

/// A transition: a capability to move from one configuration to a successor.
///
/// Applicability is a predicate over the configuration only; it must not
/// inspect the source state, because the transition table already guarantees
/// a transition is only ever consulted from its registered source.
pub trait Transition {
    /// Configuration type this transition operates on.
    type Config: Configuration;

    /// Whether this transition can fire from `config`.
    fn is_applicable(&self, config: &Self::Config) -> bool;

    /// Fire the transition, producing the successor configuration.
    ///
    /// Only meaningful when [`Transition::is_applicable`] holds.
    fn fire(&self, config: &Self::Config) -> Self::Config;

    /// Whether firing consumes no input.
    fn is_epsilon(&self) -> bool;

    /// The destination state.
    fn target(&self) -> &<Self::Config as Configuration>::State;
}

/// State type of an automaton, extracted from its configuration type.
pub type StateOf<M> = <<M as Automaton>::Config as Configuration>::State;

/// The abstract automaton: state set, alphabet, initial states, transition
/// table, and the model-specific acceptance/halting predicates.
///
/// Implementations are immutable value objects; the transition table never
/// changes after construction, which is what lets the engines treat
/// transition lookups as pure.
pub trait Automaton {
    /// Input symbol type.
    type Symbol: SymbolId;
    /// Configuration type.
    type Config: Configuration;
    /// Transition type.
    type Transition: Transition<Config = Self::Config>;

    /// The full state set.
    fn states(&self) -> &IndexSet<StateOf<Self>>;

    /// The initial-state subset. Invariant: a subset of [`Automaton::states`].
    fn initial_states(&self) -> &IndexSet<StateOf<Self>>;

    /// Outgoing transitions of `state` (empty for unknown states).
    fn transitions_from(&self, state: &StateOf<Self>) -> &[Self::Transition];

    /// The configurations a run of `word` starts from, one per initial
    /// state.
    fn initial_configurations(&self, word: &[Self::Symbol]) -> Vec<Self::Config>;

    /// Whether `config` is accepting (model-specific; includes the
    /// end-of-input condition).
    fn is_accepting(&self, config: &Self::Config) -> bool;

    /// Whether `config` is halting: the run cannot or need not continue
    /// from it (for finite automata: no remaining input).
    fn is_halting(&self, config: &Self::Config) -> bool;
}

/// The transitions of `config`'s state that can fire from `config`.
pub fn applicable_transitions<'a, M: Automaton>(
    automaton: &'a M,
    config: &M::Config,
) -> Vec<&'a M::Transition> {
    automaton
        .transitions_from(config.state())
        .iter()
        .filter(|transition| transition.is_applicable(config))
        .collect()
}

/// The states reachable from the initial states across the transition
/// graph, ignoring applicability (a structural walk, not a run).
///
/// Short-circuits as soon as every state has been marked reachable.
pub fn reachable_states<M: Automaton>(automaton: &M) -> IndexSet<StateOf<M>> {
    let total = automaton.states().len();
    let mut reachable: IndexSet<StateOf<M>> = automaton.initial_states().clone();
    let mut queue: std::collections::VecDeque<StateOf<M>> =
        reachable.iter().cloned().collect();

    while let Some(state) = queue.pop_front() {
        if reachable.len() == total {
            break;
        }
        for transition in automaton.transitions_from(&state) {
            let target = transition.target().clone();
            if reachable.insert(target.clone()) {
                queue.push_back(target);
            }
        }
    }
    reachable
}
