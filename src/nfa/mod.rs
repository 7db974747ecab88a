//! Nondeterministic finite automata.
//!
//! An [`Nfa`] is an immutable value object: state set, alphabet, initial
//! and accepting subsets, and a transition table mapping each source state
//! to its outgoing transitions. Construction goes through [`NfaBuilder`],
//! which validates every reference (unknown states or symbols are reported
//! as a [`FaultCollection`], all at once) so the automaton itself never has
//! to re-check its own invariants at runtime.
//!
//! A *deterministic* finite automaton is not a separate type: determinism
//! is a property diagnosed by [`Nfa::check_determinacy`], and conversions
//! such as [`conversion::PowerSetConstruction`] establish it.

pub mod conversion;

use crate::alphabet::Alphabet;
use crate::automaton::{
    Automaton, Configuration, DeterminacyFault, DeterminacyReason, StateId, SymbolId, Transition,
};
use crate::fault::FaultCollection;
use crate::fresh::MaybeFresh;
use crate::graph::LabeledGraph;
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use std::rc::Rc;

/// A transition of a finite automaton: consume one symbol, or none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NfaTransition<S, A> {
    /// Consume `symbol` and move to `target`.
    Symbol {
        /// The input symbol consumed.
        symbol: A,
        /// The destination state.
        target: S,
    },
    /// Move to `target` without consuming input.
    Epsilon {
        /// The destination state.
        target: S,
    },
}

impl<S, A> NfaTransition<S, A> {
    /// The consumed symbol, or `None` for an epsilon transition.
    pub fn symbol(&self) -> Option<&A> {
        match self {
            NfaTransition::Symbol { symbol, .. } => Some(symbol),
            NfaTransition::Epsilon { .. } => None,
        }
    }
}

impl<S: StateId, A: SymbolId> Transition for NfaTransition<S, A> {
    type Config = NfaConfiguration<S, A>;

    fn is_applicable(&self, config: &Self::Config) -> bool {
        match self {
            NfaTransition::Symbol { symbol, .. } => config.remaining_input().first() == Some(symbol),
            NfaTransition::Epsilon { .. } => true,
        }
    }

    fn fire(&self, config: &Self::Config) -> Self::Config {
        match self {
            NfaTransition::Symbol { target, .. } => NfaConfiguration {
                state: target.clone(),
                word: Rc::clone(&config.word),
                position: config.position + 1,
            },
            NfaTransition::Epsilon { target } => NfaConfiguration {
                state: target.clone(),
                word: Rc::clone(&config.word),
                position: config.position,
            },
        }
    }

    fn is_epsilon(&self) -> bool {
        matches!(self, NfaTransition::Epsilon { .. })
    }

    fn target(&self) -> &S {
        match self {
            NfaTransition::Symbol { target, .. } => target,
            NfaTransition::Epsilon { target } => target,
        }
    }
}

/// A finite-automaton configuration: current state, input word, read
/// position. The word is shared, so cloning a configuration is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NfaConfiguration<S, A> {
    state: S,
    word: Rc<[A]>,
    position: usize,
}

impl<S: StateId, A: SymbolId> NfaConfiguration<S, A> {
    /// Create a configuration at `position` of `word`.
    pub fn new(state: S, word: Rc<[A]>, position: usize) -> Self {
        Self {
            state,
            word,
            position,
        }
    }

    /// The unread remainder of the input word.
    pub fn remaining_input(&self) -> &[A] {
        &self.word[self.position..]
    }

    /// The read position within the input word.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<S: StateId, A: SymbolId> Configuration for NfaConfiguration<S, A> {
    type State = S;

    fn state(&self) -> &S {
        &self.state
    }

    fn has_remaining_input(&self) -> bool {
        self.position < self.word.len()
    }
}

/// Detail payload of an NFA determinacy fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NfaDeterminacyDetail<S, A> {
    /// The symbol involved, or `None` for an epsilon transition (and for
    /// the multiple-initial-states fault).
    pub symbol: Option<A>,
    /// The states reached by the ambiguous transitions (empty for a
    /// missing transition; the full initial set for multiple initial
    /// states).
    pub states: Vec<S>,
}

impl<S: fmt::Debug, A: fmt::Debug> fmt::Display for NfaDeterminacyDetail<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "symbol {:?} reaching {:?}", symbol, self.states),
            None => write!(f, "epsilon/none, states {:?}", self.states),
        }
    }
}

/// Determinacy fault specialized to NFAs.
pub type NfaDeterminacyFault<S, A> = DeterminacyFault<S, NfaDeterminacyDetail<S, A>>;

/// A nondeterministic finite automaton over states `S` and symbols `A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa<S: StateId, A: SymbolId> {
    states: IndexSet<S>,
    alphabet: Alphabet<A>,
    initial: IndexSet<S>,
    accepting: IndexSet<S>,
    transitions: IndexMap<S, Vec<NfaTransition<S, A>>>,
}

impl<S: StateId, A: SymbolId> Nfa<S, A> {
    /// Construct from validated parts. Builders and conversions are the
    /// only callers; both maintain the known-state/known-symbol invariant
    /// by construction.
    pub(crate) fn from_parts(
        states: IndexSet<S>,
        alphabet: Alphabet<A>,
        initial: IndexSet<S>,
        accepting: IndexSet<S>,
        transitions: IndexMap<S, Vec<NfaTransition<S, A>>>,
    ) -> Self {
        Self {
            states,
            alphabet,
            initial,
            accepting,
            transitions,
        }
    }

    /// The alphabet.
    pub fn alphabet(&self) -> &Alphabet<A> {
        &self.alphabet
    }

    /// The accepting-state subset.
    pub fn accepting_states(&self) -> &IndexSet<S> {
        &self.accepting
    }

    /// All transitions, as `(source, transition)` pairs.
    pub fn transitions(&self) -> impl Iterator<Item = (&S, &NfaTransition<S, A>)> {
        self.transitions
            .iter()
            .flat_map(|(source, outgoing)| outgoing.iter().map(move |t| (source, t)))
    }

    /// Decide whether this automaton accepts `word`.
    pub fn accepts(&self, word: &[A]) -> bool {
        crate::automaton::Executor::new(self, word).run()
    }

    /// Structure-preserving state homomorphism.
    ///
    /// `f` should be injective; a non-injective map merges states, which
    /// generally changes the language.
    pub fn map_states<S2: StateId>(&self, mut f: impl FnMut(&S) -> S2) -> Nfa<S2, A> {
        let mut transitions: IndexMap<S2, Vec<NfaTransition<S2, A>>> = IndexMap::new();
        for (source, outgoing) in &self.transitions {
            let entry = transitions.entry(f(source)).or_default();
            for transition in outgoing {
                let mapped = match transition {
                    NfaTransition::Symbol { symbol, target } => NfaTransition::Symbol {
                        symbol: symbol.clone(),
                        target: f(target),
                    },
                    NfaTransition::Epsilon { target } => NfaTransition::Epsilon { target: f(target) },
                };
                if !entry.contains(&mapped) {
                    entry.push(mapped);
                }
            }
        }
        Nfa {
            states: self.states.iter().map(&mut f).collect(),
            alphabet: self.alphabet.clone(),
            initial: self.initial.iter().map(&mut f).collect(),
            accepting: self.accepting.iter().map(&mut f).collect(),
            transitions,
        }
    }

    /// Structure-preserving symbol homomorphism. `f` should be injective.
    pub fn map_alphabet<A2: SymbolId>(&self, mut f: impl FnMut(&A) -> A2) -> Nfa<S, A2> {
        let transitions = self
            .transitions
            .iter()
            .map(|(source, outgoing)| {
                let mapped = outgoing
                    .iter()
                    .map(|transition| match transition {
                        NfaTransition::Symbol { symbol, target } => NfaTransition::Symbol {
                            symbol: f(symbol),
                            target: target.clone(),
                        },
                        NfaTransition::Epsilon { target } => NfaTransition::Epsilon {
                            target: target.clone(),
                        },
                    })
                    .collect();
                (source.clone(), mapped)
            })
            .collect();
        Nfa {
            states: self.states.clone(),
            alphabet: self.alphabet.map(&mut f),
            initial: self.initial.clone(),
            accepting: self.accepting.clone(),
            transitions,
        }
    }

    /// Wrap every state as [`MaybeFresh::Input`], the entry point into the
    /// conversion stages that generate fresh states.
    pub fn labeled(&self) -> Nfa<MaybeFresh<S>, A> {
        self.map_states(|state| MaybeFresh::Input(state.clone()))
    }

    /// The graph view: states as vertices, transitions as edges labeled
    /// with `Some(symbol)` or `None` for epsilon.
    pub fn as_graph(&self) -> LabeledGraph<S, Option<A>> {
        let mut graph = LabeledGraph::new();
        for state in &self.states {
            graph.add_vertex(state.clone());
        }
        for (source, transition) in self.transitions() {
            graph.add_edge(
                source.clone(),
                transition.symbol().cloned(),
                transition.target().clone(),
            );
        }
        graph
    }

    /// Diagnose every determinism and totality violation.
    ///
    /// Epsilon transitions are unconditionally ambiguous: a transition
    /// usable without consuming input already violates determinism.
    pub fn check_determinacy(&self) -> FaultCollection<NfaDeterminacyFault<S, A>> {
        let mut faults = FaultCollection::new();

        if self.initial.len() > 1 {
            faults.push(DeterminacyFault {
                reason: DeterminacyReason::MultipleInitialStates,
                state: self.initial[0].clone(),
                detail: NfaDeterminacyDetail {
                    symbol: None,
                    states: self.initial.iter().cloned().collect(),
                },
            });
        }

        for state in &self.states {
            let outgoing = self.transitions_from(state);
            for transition in outgoing.iter().filter(|t| t.is_epsilon()) {
                faults.push(DeterminacyFault {
                    reason: DeterminacyReason::AmbiguousTransition,
                    state: state.clone(),
                    detail: NfaDeterminacyDetail {
                        symbol: None,
                        states: vec![transition.target().clone()],
                    },
                });
            }
            for symbol in &self.alphabet {
                let targets: Vec<S> = outgoing
                    .iter()
                    .filter(|t| t.symbol() == Some(symbol))
                    .map(|t| t.target().clone())
                    .collect();
                if targets.len() > 1 {
                    faults.push(DeterminacyFault {
                        reason: DeterminacyReason::AmbiguousTransition,
                        state: state.clone(),
                        detail: NfaDeterminacyDetail {
                            symbol: Some(symbol.clone()),
                            states: targets,
                        },
                    });
                } else if targets.is_empty() {
                    faults.push(DeterminacyFault {
                        reason: DeterminacyReason::MissingTransition,
                        state: state.clone(),
                        detail: NfaDeterminacyDetail {
                            symbol: Some(symbol.clone()),
                            states: Vec::new(),
                        },
                    });
                }
            }
        }
        faults
    }

    /// Derived from the determinacy faults: no ambiguous transition, one
    /// initial state.
    pub fn is_deterministic(&self) -> bool {
        self.check_determinacy().is_deterministic()
    }

    /// Derived from the determinacy faults: no missing transition.
    pub fn is_total(&self) -> bool {
        self.check_determinacy().is_total()
    }

    /// The states reachable from the initial states.
    pub fn reachable_states(&self) -> IndexSet<S> {
        crate::automaton::reachable_states(self)
    }
}

impl<S: StateId, A: SymbolId> Automaton for Nfa<S, A> {
    type Symbol = A;
    type Config = NfaConfiguration<S, A>;
    type Transition = NfaTransition<S, A>;

    fn states(&self) -> &IndexSet<S> {
        &self.states
    }

    fn initial_states(&self) -> &IndexSet<S> {
        &self.initial
    }

    fn transitions_from(&self, state: &S) -> &[NfaTransition<S, A>] {
        self.transitions
            .get(state)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn initial_configurations(&self, word: &[A]) -> Vec<NfaConfiguration<S, A>> {
        let shared: Rc<[A]> = Rc::from(word);
        self.initial
            .iter()
            .map(|state| NfaConfiguration::new(state.clone(), Rc::clone(&shared), 0))
            .collect()
    }

    fn is_accepting(&self, config: &NfaConfiguration<S, A>) -> bool {
        !config.has_remaining_input() && self.accepting.contains(&config.state)
    }

    fn is_halting(&self, config: &NfaConfiguration<S, A>) -> bool {
        !config.has_remaining_input()
    }
}

/// A fault discovered while building an NFA.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NfaBuildFault<S, A> {
    /// A transition references a state not in the declared state set.
    #[error("transition references unknown state {0:?}")]
    UnknownState(S),
    /// A transition consumes a symbol not in the declared alphabet.
    #[error("transition references unknown symbol {0:?}")]
    UnknownSymbol(A),
    /// An initial state is not in the declared state set.
    #[error("initial state {0:?} is not a declared state")]
    UnknownInitialState(S),
    /// An accepting state is not in the declared state set.
    #[error("accepting state {0:?} is not a declared state")]
    UnknownAcceptingState(S),
    /// No initial state was declared.
    #[error("no initial state was declared")]
    MissingInitialState,
}

/// Fluent, fault-accumulating builder for [`Nfa`].
///
/// The builder is the only mutable stage of an automaton's life; it is
/// consumed by [`NfaBuilder::build`], which either returns the immutable
/// automaton or the full enumeration of construction faults.
#[derive(Debug, Clone)]
pub struct NfaBuilder<S: StateId, A: SymbolId> {
    states: IndexSet<S>,
    alphabet: Alphabet<A>,
    initial: IndexSet<S>,
    accepting: IndexSet<S>,
    transitions: Vec<(S, Option<A>, S)>,
}

impl<S: StateId, A: SymbolId> NfaBuilder<S, A> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            states: IndexSet::new(),
            alphabet: Alphabet::new(),
            initial: IndexSet::new(),
            accepting: IndexSet::new(),
            transitions: Vec::new(),
        }
    }

    /// Declare states.
    pub fn with_states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    /// Declare alphabet symbols.
    pub fn with_symbols(mut self, symbols: impl IntoIterator<Item = A>) -> Self {
        for symbol in symbols {
            self.alphabet.insert(symbol);
        }
        self
    }

    /// Declare an initial state.
    pub fn with_initial(mut self, state: S) -> Self {
        self.initial.insert(state);
        self
    }

    /// Declare an accepting state.
    pub fn with_accepting(mut self, state: S) -> Self {
        self.accepting.insert(state);
        self
    }

    /// Add a symbol-consuming transition.
    pub fn with_transition(mut self, from: S, symbol: A, to: S) -> Self {
        self.transitions.push((from, Some(symbol), to));
        self
    }

    /// Add an epsilon transition.
    pub fn with_epsilon_transition(mut self, from: S, to: S) -> Self {
        self.transitions.push((from, None, to));
        self
    }

    /// Validate and build. All faults are reported at once.
    pub fn build(self) -> Result<Nfa<S, A>, FaultCollection<NfaBuildFault<S, A>>> {
        let mut faults = FaultCollection::new();

        if self.initial.is_empty() {
            faults.push(NfaBuildFault::MissingInitialState);
        }
        for state in &self.initial {
            if !self.states.contains(state) {
                faults.push(NfaBuildFault::UnknownInitialState(state.clone()));
            }
        }
        for state in &self.accepting {
            if !self.states.contains(state) {
                faults.push(NfaBuildFault::UnknownAcceptingState(state.clone()));
            }
        }
        for (from, symbol, to) in &self.transitions {
            if !self.states.contains(from) {
                faults.push(NfaBuildFault::UnknownState(from.clone()));
            }
            if !self.states.contains(to) {
                faults.push(NfaBuildFault::UnknownState(to.clone()));
            }
            if let Some(symbol) = symbol {
                if !self.alphabet.contains(symbol) {
                    faults.push(NfaBuildFault::UnknownSymbol(symbol.clone()));
                }
            }
        }

        let mut transitions: IndexMap<S, Vec<NfaTransition<S, A>>> = IndexMap::new();
        for (from, symbol, to) in self.transitions {
            let transition = match symbol {
                Some(symbol) => NfaTransition::Symbol { symbol, target: to },
                None => NfaTransition::Epsilon { target: to },
            };
            let entry = transitions.entry(from).or_default();
            if !entry.contains(&transition) {
                entry.push(transition);
            }
        }

        faults.into_result(Nfa {
            states: self.states,
            alphabet: self.alphabet,
            initial: self.initial,
            accepting: self.accepting,
            transitions,
        })
    }
}

impl<S: StateId, A: SymbolId> Default for NfaBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
