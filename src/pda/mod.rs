//! Pushdown automata.
//!
//! A [`Pda`] extends the finite-automaton shape with a stack alphabet, an
//! initial stack symbol, and an acceptance strategy: a run accepts either
//! by ending in an accepting state or by emptying its stack (both after
//! consuming the whole input word). Every transition pops the current top
//! of stack — guarded by a concrete symbol or by the [`StackGuard::Any`]
//! wildcard — and pushes a (possibly empty) word whose leftmost symbol
//! becomes the new top.
//!
//! Acceptance for PDAs is decided with the transition-bounded
//! [`AutomatonStepper`](crate::automaton::AutomatonStepper) (see
//! [`Pda::accepts_within`]): the eager
//! [`Executor`](crate::automaton::Executor) may not terminate on a PDA
//! whose epsilon transitions grow the stack without bound.

pub mod conversion;

use crate::alphabet::Alphabet;
use crate::automaton::{
    Automaton, Configuration, DeterminacyFault, DeterminacyReason, StateId, SymbolId, Transition,
};
use crate::fault::FaultCollection;
use crate::fresh::MaybeFresh;
use crate::graph::LabeledGraph;
use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;
use std::fmt;
use std::rc::Rc;

/// How a PDA decides acceptance (always after consuming the whole input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcceptanceStrategy {
    /// Accept when the current state is an accepting state.
    AcceptingStates,
    /// Accept when the stack is empty.
    EmptyStack,
}

/// Guard on (or element of) the stack: a concrete symbol or the wildcard.
///
/// As a pop guard, [`StackGuard::Any`] matches any top-of-stack symbol. In
/// a push word, [`StackGuard::Any`] re-pushes whatever symbol the pop
/// matched. Wildcards are eliminated by
/// [`conversion::WildcardElimination`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StackGuard<G> {
    /// A concrete stack symbol.
    Symbol(G),
    /// The wildcard: matches (or re-pushes) any symbol.
    Any,
}

impl<G: Eq> StackGuard<G> {
    /// Whether this guard matches the concrete top-of-stack symbol.
    pub fn matches(&self, top: &G) -> bool {
        match self {
            StackGuard::Symbol(symbol) => symbol == top,
            StackGuard::Any => true,
        }
    }

    /// The concrete symbol, if this is not the wildcard.
    pub fn as_symbol(&self) -> Option<&G> {
        match self {
            StackGuard::Symbol(symbol) => Some(symbol),
            StackGuard::Any => None,
        }
    }
}

/// A pushdown-automaton transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdaTransition<S, A, G> {
    /// Consumed input symbol; `None` makes this an epsilon transition.
    pub input: Option<A>,
    /// Guard on the popped top of stack.
    pub pop: StackGuard<G>,
    /// Pushed word; index 0 ends up as the new top of stack.
    pub push: Vec<StackGuard<G>>,
    /// Destination state.
    pub target: S,
}

impl<S: StateId, A: SymbolId, G: SymbolId> Transition for PdaTransition<S, A, G> {
    type Config = PdaConfiguration<S, A, G>;

    fn is_applicable(&self, config: &Self::Config) -> bool {
        let top = match config.stack.last() {
            Some(top) => top,
            None => return false,
        };
        if !self.pop.matches(top) {
            return false;
        }
        match &self.input {
            Some(symbol) => config.remaining_input().first() == Some(symbol),
            None => true,
        }
    }

    fn fire(&self, config: &Self::Config) -> Self::Config {
        let mut stack = config.stack.clone();
        let matched = stack.pop().unwrap_or_else(|| {
            unreachable!("fired a PDA transition on an empty stack")
        });
        for element in self.push.iter().rev() {
            match element {
                StackGuard::Symbol(symbol) => stack.push(symbol.clone()),
                StackGuard::Any => stack.push(matched.clone()),
            }
        }
        PdaConfiguration {
            state: self.target.clone(),
            word: Rc::clone(&config.word),
            position: config.position + usize::from(self.input.is_some()),
            stack,
        }
    }

    fn is_epsilon(&self) -> bool {
        self.input.is_none()
    }

    fn target(&self) -> &S {
        &self.target
    }
}

/// A pushdown-automaton configuration: state, input word, read position,
/// and the stack (top at the end of the `Vec`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PdaConfiguration<S, A, G> {
    state: S,
    word: Rc<[A]>,
    position: usize,
    stack: Vec<G>,
}

impl<S: StateId, A: SymbolId, G: SymbolId> PdaConfiguration<S, A, G> {
    /// Create a configuration.
    pub fn new(state: S, word: Rc<[A]>, position: usize, stack: Vec<G>) -> Self {
        Self {
            state,
            word,
            position,
            stack,
        }
    }

    /// The unread remainder of the input word.
    pub fn remaining_input(&self) -> &[A] {
        &self.word[self.position..]
    }

    /// The stack, top at the end.
    pub fn stack(&self) -> &[G] {
        &self.stack
    }
}

impl<S: StateId, A: SymbolId, G: SymbolId> Configuration for PdaConfiguration<S, A, G> {
    type State = S;

    fn state(&self) -> &S {
        &self.state
    }

    fn has_remaining_input(&self) -> bool {
        self.position < self.word.len()
    }
}

/// Detail payload of a PDA determinacy fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdaDeterminacyDetail<A, G> {
    /// The input symbol involved (`None` for epsilon or for the
    /// multiple-initial-states fault).
    pub input: Option<A>,
    /// The top-of-stack symbol analyzed (`None` for the
    /// multiple-initial-states fault).
    pub stack_symbol: Option<G>,
    /// The number of possible next configurations.
    pub successors: usize,
}

impl<A: fmt::Debug, G: fmt::Debug> fmt::Display for PdaDeterminacyDetail<A, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input {:?}, stack symbol {:?}, {} possible successor(s)",
            self.input, self.stack_symbol, self.successors
        )
    }
}

/// Determinacy fault specialized to PDAs.
pub type PdaDeterminacyFault<S, A, G> = DeterminacyFault<S, PdaDeterminacyDetail<A, G>>;

/// Edge label of the PDA graph view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdaEdgeLabel<A, G> {
    /// Consumed input symbol, if any.
    pub input: Option<A>,
    /// Pop guard.
    pub pop: StackGuard<G>,
    /// Push word.
    pub push: Vec<StackGuard<G>>,
}

/// A pushdown automaton over states `S`, input symbols `A`, and stack
/// symbols `G`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pda<S: StateId, A: SymbolId, G: SymbolId> {
    states: IndexSet<S>,
    alphabet: Alphabet<A>,
    stack_alphabet: Alphabet<G>,
    initial: IndexSet<S>,
    accepting: IndexSet<S>,
    initial_stack_symbol: G,
    acceptance: AcceptanceStrategy,
    transitions: IndexMap<S, Vec<PdaTransition<S, A, G>>>,
}

impl<S: StateId, A: SymbolId, G: SymbolId> Pda<S, A, G> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        states: IndexSet<S>,
        alphabet: Alphabet<A>,
        stack_alphabet: Alphabet<G>,
        initial: IndexSet<S>,
        accepting: IndexSet<S>,
        initial_stack_symbol: G,
        acceptance: AcceptanceStrategy,
        transitions: IndexMap<S, Vec<PdaTransition<S, A, G>>>,
    ) -> Self {
        Self {
            states,
            alphabet,
            stack_alphabet,
            initial,
            accepting,
            initial_stack_symbol,
            acceptance,
            transitions,
        }
    }

    /// The input alphabet.
    pub fn alphabet(&self) -> &Alphabet<A> {
        &self.alphabet
    }

    /// The stack alphabet.
    pub fn stack_alphabet(&self) -> &Alphabet<G> {
        &self.stack_alphabet
    }

    /// The accepting-state subset.
    pub fn accepting_states(&self) -> &IndexSet<S> {
        &self.accepting
    }

    /// The symbol the stack starts with.
    pub fn initial_stack_symbol(&self) -> &G {
        &self.initial_stack_symbol
    }

    /// The declared acceptance strategy.
    pub fn acceptance(&self) -> AcceptanceStrategy {
        self.acceptance
    }

    /// All transitions, as `(source, transition)` pairs.
    pub fn transitions(&self) -> impl Iterator<Item = (&S, &PdaTransition<S, A, G>)> {
        self.transitions
            .iter()
            .flat_map(|(source, outgoing)| outgoing.iter().map(move |t| (source, t)))
    }

    /// Bounded acceptance: breadth-first search over at most `max_steps`
    /// transition firings. `None` means the budget ran out undecided.
    pub fn accepts_within(&self, word: &[A], max_steps: usize) -> Option<bool> {
        crate::automaton::AutomatonStepper::new(self, word).run(max_steps)
    }

    /// Structure-preserving state homomorphism (`f` should be injective).
    pub fn map_states<S2: StateId>(&self, mut f: impl FnMut(&S) -> S2) -> Pda<S2, A, G> {
        let transitions = self
            .transitions
            .iter()
            .map(|(source, outgoing)| {
                let mapped = outgoing
                    .iter()
                    .map(|t| PdaTransition {
                        input: t.input.clone(),
                        pop: t.pop.clone(),
                        push: t.push.clone(),
                        target: f(&t.target),
                    })
                    .collect();
                (f(source), mapped)
            })
            .collect();
        Pda {
            states: self.states.iter().map(&mut f).collect(),
            alphabet: self.alphabet.clone(),
            stack_alphabet: self.stack_alphabet.clone(),
            initial: self.initial.iter().map(&mut f).collect(),
            accepting: self.accepting.iter().map(&mut f).collect(),
            initial_stack_symbol: self.initial_stack_symbol.clone(),
            acceptance: self.acceptance,
            transitions,
        }
    }

    /// Structure-preserving input-symbol homomorphism (`f` should be
    /// injective).
    pub fn map_alphabet<A2: SymbolId>(&self, mut f: impl FnMut(&A) -> A2) -> Pda<S, A2, G> {
        let transitions = self
            .transitions
            .iter()
            .map(|(source, outgoing)| {
                let mapped = outgoing
                    .iter()
                    .map(|t| PdaTransition {
                        input: t.input.as_ref().map(&mut f),
                        pop: t.pop.clone(),
                        push: t.push.clone(),
                        target: t.target.clone(),
                    })
                    .collect();
                (source.clone(), mapped)
            })
            .collect();
        Pda {
            states: self.states.clone(),
            alphabet: self.alphabet.map(&mut f),
            stack_alphabet: self.stack_alphabet.clone(),
            initial: self.initial.clone(),
            accepting: self.accepting.clone(),
            initial_stack_symbol: self.initial_stack_symbol.clone(),
            acceptance: self.acceptance,
            transitions,
        }
    }

    /// Structure-preserving stack-symbol homomorphism (`f` should be
    /// injective).
    pub fn map_stack_alphabet<G2: SymbolId>(&self, mut f: impl FnMut(&G) -> G2) -> Pda<S, A, G2> {
        let map_guard = |guard: &StackGuard<G>, f: &mut dyn FnMut(&G) -> G2| match guard {
            StackGuard::Symbol(symbol) => StackGuard::Symbol(f(symbol)),
            StackGuard::Any => StackGuard::Any,
        };
        let transitions = self
            .transitions
            .iter()
            .map(|(source, outgoing)| {
                let mapped = outgoing
                    .iter()
                    .map(|t| PdaTransition {
                        input: t.input.clone(),
                        pop: map_guard(&t.pop, &mut f),
                        push: t.push.iter().map(|g| map_guard(g, &mut f)).collect(),
                        target: t.target.clone(),
                    })
                    .collect();
                (source.clone(), mapped)
            })
            .collect();
        Pda {
            states: self.states.clone(),
            alphabet: self.alphabet.clone(),
            stack_alphabet: self.stack_alphabet.map(&mut f),
            initial: self.initial.clone(),
            accepting: self.accepting.clone(),
            initial_stack_symbol: f(&self.initial_stack_symbol),
            acceptance: self.acceptance,
            transitions,
        }
    }

    /// Wrap states and stack symbols as [`MaybeFresh::Input`], the entry
    /// point into the fresh-state-generating conversion stages.
    pub fn labeled(&self) -> Pda<MaybeFresh<S>, A, MaybeFresh<G>> {
        self.map_states(|s| MaybeFresh::Input(s.clone()))
            .map_stack_alphabet(|g| MaybeFresh::Input(g.clone()))
    }

    /// The graph view: states as vertices, transitions as edges labeled
    /// with input, pop guard, and push word.
    pub fn as_graph(&self) -> LabeledGraph<S, PdaEdgeLabel<A, G>> {
        let mut graph = LabeledGraph::new();
        for state in &self.states {
            graph.add_vertex(state.clone());
        }
        for (source, t) in self.transitions() {
            graph.add_edge(
                source.clone(),
                PdaEdgeLabel {
                    input: t.input.clone(),
                    pop: t.pop.clone(),
                    push: t.push.clone(),
                },
                t.target.clone(),
            );
        }
        graph
    }

    /// Diagnose every determinism and totality violation.
    ///
    /// The determinism rule per state `s`, input symbol `a`, and
    /// top-of-stack `g` is the DPDA rule `|δ(s,a,g)| + |δ(s,ε,g)| ≤ 1`;
    /// wildcard guards count for every `g` they match.
    pub fn check_determinacy(&self) -> FaultCollection<PdaDeterminacyFault<S, A, G>> {
        let mut faults = FaultCollection::new();

        if self.initial.len() > 1 {
            faults.push(DeterminacyFault {
                reason: DeterminacyReason::MultipleInitialStates,
                state: self.initial[0].clone(),
                detail: PdaDeterminacyDetail {
                    input: None,
                    stack_symbol: None,
                    successors: self.initial.len(),
                },
            });
        }

        for state in &self.states {
            let outgoing = self.transitions_from(state);
            for stack_symbol in &self.stack_alphabet {
                let epsilon: SmallVec<[&PdaTransition<S, A, G>; 4]> = outgoing
                    .iter()
                    .filter(|t| t.input.is_none() && t.pop.matches(stack_symbol))
                    .collect();
                if epsilon.len() > 1 {
                    faults.push(DeterminacyFault {
                        reason: DeterminacyReason::AmbiguousTransition,
                        state: state.clone(),
                        detail: PdaDeterminacyDetail {
                            input: None,
                            stack_symbol: Some(stack_symbol.clone()),
                            successors: epsilon.len(),
                        },
                    });
                }
                for input in &self.alphabet {
                    let consuming = outgoing
                        .iter()
                        .filter(|t| t.input.as_ref() == Some(input) && t.pop.matches(stack_symbol))
                        .count();
                    if consuming >= 1 && consuming + epsilon.len() > 1 {
                        faults.push(DeterminacyFault {
                            reason: DeterminacyReason::AmbiguousTransition,
                            state: state.clone(),
                            detail: PdaDeterminacyDetail {
                                input: Some(input.clone()),
                                stack_symbol: Some(stack_symbol.clone()),
                                successors: consuming + epsilon.len(),
                            },
                        });
                    }
                    if consuming + epsilon.len() == 0 {
                        faults.push(DeterminacyFault {
                            reason: DeterminacyReason::MissingTransition,
                            state: state.clone(),
                            detail: PdaDeterminacyDetail {
                                input: Some(input.clone()),
                                stack_symbol: Some(stack_symbol.clone()),
                                successors: 0,
                            },
                        });
                    }
                }
            }
        }
        faults
    }

    /// Derived from the determinacy faults.
    pub fn is_deterministic(&self) -> bool {
        self.check_determinacy().is_deterministic()
    }

    /// Derived from the determinacy faults.
    pub fn is_total(&self) -> bool {
        self.check_determinacy().is_total()
    }

    /// The states reachable from the initial states.
    pub fn reachable_states(&self) -> IndexSet<S> {
        crate::automaton::reachable_states(self)
    }
}

impl<S: StateId, A: SymbolId, G: SymbolId> Automaton for Pda<S, A, G> {
    type Symbol = A;
    type Config = PdaConfiguration<S, A, G>;
    type Transition = PdaTransition<S, A, G>;

    fn states(&self) -> &IndexSet<S> {
        &self.states
    }

    fn initial_states(&self) -> &IndexSet<S> {
        &self.initial
    }

    fn transitions_from(&self, state: &S) -> &[PdaTransition<S, A, G>] {
        self.transitions
            .get(state)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn initial_configurations(&self, word: &[A]) -> Vec<PdaConfiguration<S, A, G>> {
        let shared: Rc<[A]> = Rc::from(word);
        self.initial
            .iter()
            .map(|state| {
                PdaConfiguration::new(
                    state.clone(),
                    Rc::clone(&shared),
                    0,
                    vec![self.initial_stack_symbol.clone()],
                )
            })
            .collect()
    }

    fn is_accepting(&self, config: &PdaConfiguration<S, A, G>) -> bool {
        if config.has_remaining_input() {
            return false;
        }
        match self.acceptance {
            AcceptanceStrategy::AcceptingStates => self.accepting.contains(&config.state),
            AcceptanceStrategy::EmptyStack => config.stack.is_empty(),
        }
    }

    fn is_halting(&self, config: &PdaConfiguration<S, A, G>) -> bool {
        crate::automaton::applicable_transitions(self, config).is_empty()
    }
}

/// A fault discovered while building a PDA.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PdaBuildFault<S, A, G> {
    /// A transition references a state not in the declared state set.
    #[error("transition references unknown state {0:?}")]
    UnknownState(S),
    /// A transition consumes a symbol not in the declared input alphabet.
    #[error("transition references unknown input symbol {0:?}")]
    UnknownSymbol(A),
    /// A transition pops or pushes a symbol not in the declared stack
    /// alphabet.
    #[error("transition references unknown stack symbol {0:?}")]
    UnknownStackSymbol(G),
    /// An initial state is not in the declared state set.
    #[error("initial state {0:?} is not a declared state")]
    UnknownInitialState(S),
    /// An accepting state is not in the declared state set.
    #[error("accepting state {0:?} is not a declared state")]
    UnknownAcceptingState(S),
    /// No initial state was declared.
    #[error("no initial state was declared")]
    MissingInitialState,
    /// No acceptance strategy was declared.
    #[error("no acceptance strategy was declared")]
    MissingAcceptanceStrategy,
    /// No initial stack symbol was declared.
    #[error("no initial stack symbol was declared")]
    MissingInitialStackSymbol,
    /// The initial stack symbol is not in the declared stack alphabet.
    #[error("initial stack symbol {0:?} is not a declared stack symbol")]
    UnknownInitialStackSymbol(G),
}

/// Fluent, fault-accumulating builder for [`Pda`].
#[derive(Debug, Clone)]
pub struct PdaBuilder<S: StateId, A: SymbolId, G: SymbolId> {
    states: IndexSet<S>,
    alphabet: Alphabet<A>,
    stack_alphabet: Alphabet<G>,
    initial: IndexSet<S>,
    accepting: IndexSet<S>,
    initial_stack_symbol: Option<G>,
    acceptance: Option<AcceptanceStrategy>,
    transitions: Vec<(S, PdaTransition<S, A, G>)>,
}

impl<S: StateId, A: SymbolId, G: SymbolId> PdaBuilder<S, A, G> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            states: IndexSet::new(),
            alphabet: Alphabet::new(),
            stack_alphabet: Alphabet::new(),
            initial: IndexSet::new(),
            accepting: IndexSet::new(),
            initial_stack_symbol: None,
            acceptance: None,
            transitions: Vec::new(),
        }
    }

    /// Declare states.
    pub fn with_states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    /// Declare input symbols.
    pub fn with_symbols(mut self, symbols: impl IntoIterator<Item = A>) -> Self {
        for symbol in symbols {
            self.alphabet.insert(symbol);
        }
        self
    }

    /// Declare stack symbols.
    pub fn with_stack_symbols(mut self, symbols: impl IntoIterator<Item = G>) -> Self {
        for symbol in symbols {
            self.stack_alphabet.insert(symbol);
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

    /// Declare the initial stack symbol.
    pub fn with_initial_stack_symbol(mut self, symbol: G) -> Self {
        self.initial_stack_symbol = Some(symbol);
        self
    }

    /// Declare the acceptance strategy.
    pub fn with_acceptance(mut self, acceptance: AcceptanceStrategy) -> Self {
        self.acceptance = Some(acceptance);
        self
    }

    /// Add a transition.
    pub fn with_transition(
        mut self,
        from: S,
        input: Option<A>,
        pop: StackGuard<G>,
        push: Vec<StackGuard<G>>,
        to: S,
    ) -> Self {
        self.transitions.push((
            from,
            PdaTransition {
                input,
                pop,
                push,
                target: to,
            },
        ));
        self
    }

    /// Add an epsilon transition.
    pub fn with_epsilon_transition(
        self,
        from: S,
        pop: StackGuard<G>,
        push: Vec<StackGuard<G>>,
        to: S,
    ) -> Self {
        self.with_transition(from, None, pop, push, to)
    }

    /// Validate and build. All faults are reported at once.
    pub fn build(self) -> Result<Pda<S, A, G>, FaultCollection<PdaBuildFault<S, A, G>>> {
        let mut faults = FaultCollection::new();

        if self.initial.is_empty() {
            faults.push(PdaBuildFault::MissingInitialState);
        }
        if self.acceptance.is_none() {
            faults.push(PdaBuildFault::MissingAcceptanceStrategy);
        }
        match &self.initial_stack_symbol {
            None => faults.push(PdaBuildFault::MissingInitialStackSymbol),
            Some(symbol) if !self.stack_alphabet.contains(symbol) => {
                faults.push(PdaBuildFault::UnknownInitialStackSymbol(symbol.clone()));
            }
            Some(_) => {}
        }
        for state in &self.initial {
            if !self.states.contains(state) {
                faults.push(PdaBuildFault::UnknownInitialState(state.clone()));
            }
        }
        for state in &self.accepting {
            if !self.states.contains(state) {
                faults.push(PdaBuildFault::UnknownAcceptingState(state.clone()));
            }
        }
        for (from, transition) in &self.transitions {
            if !self.states.contains(from) {
                faults.push(PdaBuildFault::UnknownState(from.clone()));
            }
            if !self.states.contains(&transition.target) {
                faults.push(PdaBuildFault::UnknownState(transition.target.clone()));
            }
            if let Some(symbol) = &transition.input {
                if !self.alphabet.contains(symbol) {
                    faults.push(PdaBuildFault::UnknownSymbol(symbol.clone()));
                }
            }
            for guard in std::iter::once(&transition.pop).chain(transition.push.iter()) {
                if let Some(symbol) = guard.as_symbol() {
                    if !self.stack_alphabet.contains(symbol) {
                        faults.push(PdaBuildFault::UnknownStackSymbol(symbol.clone()));
                    }
                }
            }
        }

        let (initial_stack_symbol, acceptance) =
            match (self.initial_stack_symbol, self.acceptance) {
                (Some(symbol), Some(acceptance)) if faults.is_empty() => (symbol, acceptance),
                _ => return Err(faults),
            };

        let mut transitions: IndexMap<S, Vec<PdaTransition<S, A, G>>> = IndexMap::new();
        for (from, transition) in self.transitions {
            let entry = transitions.entry(from).or_default();
            if !entry.contains(&transition) {
                entry.push(transition);
            }
        }

        Ok(Pda {
            states: self.states,
            alphabet: self.alphabet,
            stack_alphabet: self.stack_alphabet,
            initial: self.initial,
            accepting: self.accepting,
            initial_stack_symbol,
            acceptance,
            transitions,
        })
    }
}

impl<S: StateId, A: SymbolId, G: SymbolId> Default for PdaBuilder<S, A, G> {
    fn default() -> Self {
        Self::new()
    }
}
