//! Transition-at-a-time execution.
//!
//! A *step* here fires one transition — epsilon or not — which is the right
//! granularity when the epsilon closure of a configuration may be infinite
//! (a pushdown automaton can feed its own stack through epsilon moves
//! forever). The [`Executor`](super::Executor) would eagerly close such a
//! configuration and never return; the stepper instead explores a bounded
//! number of transition firings.

use super::{applicable_transitions, Automaton, Transition};
use indexmap::IndexSet;
use rustc_hash::FxHashSet;

/// Bounded, transition-granular execution engine.
///
/// Like the executor, steppers are immutable: stepping returns a new
/// stepper over the successor configuration set.
#[derive(Debug)]
pub struct AutomatonStepper<'a, M: Automaton> {
    automaton: &'a M,
    configurations: IndexSet<M::Config>,
}

impl<M: Automaton> Clone for AutomatonStepper<'_, M> {
    fn clone(&self) -> Self {
        Self {
            automaton: self.automaton,
            configurations: self.configurations.clone(),
        }
    }
}

impl<'a, M: Automaton> AutomatonStepper<'a, M> {
    /// Start a run of `word`, one configuration per initial state.
    ///
    /// No epsilon closure is taken; epsilon transitions fire as ordinary
    /// steps.
    pub fn new(automaton: &'a M, word: &[M::Symbol]) -> Self {
        Self {
            automaton,
            configurations: automaton.initial_configurations(word).into_iter().collect(),
        }
    }

    /// The configurations the run is currently in.
    pub fn configurations(&self) -> impl Iterator<Item = &M::Config> {
        self.configurations.iter()
    }

    /// Whether any current configuration is accepting.
    pub fn is_accepting(&self) -> bool {
        self.configurations
            .iter()
            .any(|config| self.automaton.is_accepting(config))
    }

    /// Fire every applicable transition once in every configuration.
    ///
    /// Configurations with no applicable transition are dead ends and are
    /// dropped; check [`AutomatonStepper::is_accepting`] before stepping if
    /// their acceptance matters.
    pub fn step(&self) -> Self {
        let mut next: IndexSet<M::Config> = IndexSet::new();
        for config in &self.configurations {
            for transition in applicable_transitions(self.automaton, config) {
                next.insert(transition.fire(config));
            }
        }
        Self {
            automaton: self.automaton,
            configurations: next,
        }
    }

    /// Fire `n` rounds of transitions.
    pub fn step_n(&self, n: usize) -> Self {
        let mut current = self.clone();
        for _ in 0..n {
            current = current.step();
        }
        current
    }

    /// Bounded breadth-first acceptance search.
    ///
    /// Explores at most `max_steps` transition-firing rounds. Returns
    /// `Some(true)` as soon as an accepting configuration is reached,
    /// `Some(false)` when every run has halted without acceptance, and
    /// `None` when the step budget is exhausted with runs still live.
    pub fn run(&self, max_steps: usize) -> Option<bool> {
        let mut visited: FxHashSet<M::Config> = self.configurations.iter().cloned().collect();
        let mut front: Vec<M::Config> = self.configurations.iter().cloned().collect();

        for _ in 0..=max_steps {
            if front
                .iter()
                .any(|config| self.automaton.is_accepting(config))
            {
                return Some(true);
            }
            let mut next: Vec<M::Config> = Vec::new();
            for config in &front {
                for transition in applicable_transitions(self.automaton, config) {
                    let successor = transition.fire(config);
                    if visited.insert(successor.clone()) {
                        next.push(successor);
                    }
                }
            }
            if next.is_empty() {
                return Some(false);
            }
            front = next;
        }
        None
    }
}
