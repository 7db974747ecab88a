//! Symbol-at-a-time execution with eager epsilon closure.
//!
//! The [`Executor`] models every configuration a nondeterministic run could
//! simultaneously be in. One step consumes one input symbol per
//! configuration and then closes the result under epsilon transitions, so
//! between steps the configuration set is always epsilon-closed.
//!
//! Termination caveat: the eager closure is only guaranteed to terminate
//! when the epsilon closure of every configuration is finite. That holds
//! for finite automata; for models with unbounded auxiliary state (a
//! pushdown stack growing under epsilon self-feeding) use the
//! transition-bounded [`AutomatonStepper`](super::AutomatonStepper)
//! instead.

use super::{applicable_transitions, Automaton, Configuration, Transition};
use indexmap::IndexSet;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Nondeterministic execution engine over an immutable automaton.
///
/// Executors are immutable: [`Executor::next_step`] returns a new executor
/// wrapping the updated configuration set. The automaton itself is only
/// borrowed.
#[derive(Debug)]
pub struct Executor<'a, M: Automaton> {
    automaton: &'a M,
    configurations: IndexSet<M::Config>,
}

impl<M: Automaton> Clone for Executor<'_, M> {
    fn clone(&self) -> Self {
        Self {
            automaton: self.automaton,
            configurations: self.configurations.clone(),
        }
    }
}

impl<M: Automaton> PartialEq for Executor<'_, M> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.automaton, other.automaton)
            && self.configurations == other.configurations
    }
}

impl<'a, M: Automaton> Executor<'a, M> {
    /// Start a run of `word`: one configuration per initial state, closed
    /// under epsilon transitions.
    pub fn new(automaton: &'a M, word: &[M::Symbol]) -> Self {
        let mut configurations = IndexSet::new();
        for config in automaton.initial_configurations(word) {
            configurations.extend(epsilon_closure(automaton, config));
        }
        Self {
            automaton,
            configurations,
        }
    }

    /// The configurations the run is currently in.
    pub fn configurations(&self) -> impl Iterator<Item = &M::Config> {
        self.configurations.iter()
    }

    /// Whether every current configuration is halting.
    pub fn is_halted(&self) -> bool {
        self.configurations
            .iter()
            .all(|config| self.automaton.is_halting(config))
    }

    /// Whether any current configuration is accepting.
    pub fn is_accepting(&self) -> bool {
        self.configurations
            .iter()
            .any(|config| self.automaton.is_accepting(config))
    }

    /// Consume one input symbol in every configuration.
    ///
    /// Configurations that have already consumed all input are carried
    /// forward unchanged (their closure is themselves). For every other
    /// configuration, all applicable non-epsilon transitions fire, and each
    /// successor contributes its full epsilon closure.
    ///
    /// If the configuration set does not change and the executor is halted,
    /// the step is a no-op and an equal executor is returned.
    pub fn next_step(&self) -> Self {
        let mut next: IndexSet<M::Config> = IndexSet::new();
        for config in &self.configurations {
            if !config.has_remaining_input() {
                next.insert(config.clone());
                continue;
            }
            for transition in applicable_transitions(self.automaton, config) {
                if transition.is_epsilon() {
                    continue;
                }
                next.extend(epsilon_closure(self.automaton, transition.fire(config)));
            }
        }
        if next == self.configurations && self.is_halted() {
            return self.clone();
        }
        Self {
            automaton: self.automaton,
            configurations: next,
        }
    }

    /// Decide nondeterministic acceptance.
    ///
    /// A fixpoint search over three sets — previously reached, current
    /// front, newly reached — that never recomputes the closure of a
    /// configuration it has already seen. Returns `true` as soon as any
    /// configuration in the front is accepting, `false` once no new
    /// configuration is discoverable.
    ///
    /// Terminates for every finite automaton (the configuration space is
    /// finite); for automaton models with unbounded auxiliary state this is
    /// a semi-decision procedure and may not return.
    pub fn run(&self) -> bool {
        let mut reached: FxHashSet<M::Config> = self.configurations.iter().cloned().collect();
        let mut front: Vec<M::Config> = self.configurations.iter().cloned().collect();

        loop {
            if front
                .iter()
                .any(|config| self.automaton.is_accepting(config))
            {
                return true;
            }
            let mut newly: Vec<M::Config> = Vec::new();
            for config in &front {
                if !config.has_remaining_input() {
                    continue;
                }
                for transition in applicable_transitions(self.automaton, config) {
                    if transition.is_epsilon() {
                        continue;
                    }
                    for successor in epsilon_closure(self.automaton, transition.fire(config)) {
                        if reached.insert(successor.clone()) {
                            newly.push(successor);
                        }
                    }
                }
            }
            if newly.is_empty() {
                return false;
            }
            front = newly;
        }
    }
}

/// The epsilon closure of `start`: every configuration reachable using only
/// epsilon transitions, inclusive of `start` itself.
///
/// A breadth-first search that never enqueues a configuration twice, so it
/// terminates even when the epsilon transitions form cycles — provided the
/// closure itself is finite.
pub(crate) fn epsilon_closure<M: Automaton>(
    automaton: &M,
    start: M::Config,
) -> IndexSet<M::Config> {
    let mut closed: IndexSet<M::Config> = IndexSet::new();
    let mut queue: VecDeque<M::Config> = VecDeque::new();
    closed.insert(start.clone());
    queue.push_back(start);

    while let Some(config) = queue.pop_front() {
        for transition in applicable_transitions(automaton, &config) {
            if !transition.is_epsilon() {
                continue;
            }
            let successor = transition.fire(&config);
            if closed.insert(successor.clone()) {
                queue.push_back(successor);
            }
        }
    }
    closed
}
