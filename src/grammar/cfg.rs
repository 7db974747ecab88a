//! Context-free grammars.
//!
//! [`ContextFreeGrammar`] restricts production left-hand sides to a single
//! non-terminal structurally, so a value of this type is context-free by
//! construction rather than by classification. It is the grammar type the
//! PDA translations work with.

use crate::alphabet::Alphabet;
use crate::automaton::{StateId, SymbolId};
use crate::fault::FaultCollection;
use crate::grammar::{Grammar, GrammarBuilder, GrammarSymbol};
use indexmap::IndexSet;

/// A context-free rewrite rule: one non-terminal into a symbol string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CfgProduction<N, T> {
    /// The rewritten non-terminal.
    pub lhs: N,
    /// The replacement string; may be empty.
    pub rhs: Vec<GrammarSymbol<N, T>>,
}

/// A context-free grammar over non-terminals `N` and terminals `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextFreeGrammar<N: StateId, T: SymbolId> {
    non_terminals: IndexSet<N>,
    terminals: Alphabet<T>,
    start: N,
    productions: Vec<CfgProduction<N, T>>,
}

impl<N: StateId, T: SymbolId> ContextFreeGrammar<N, T> {
    /// The non-terminal set.
    pub fn non_terminals(&self) -> &IndexSet<N> {
        &self.non_terminals
    }

    /// The terminal alphabet.
    pub fn terminals(&self) -> &Alphabet<T> {
        &self.terminals
    }

    /// The start symbol.
    pub fn start_symbol(&self) -> &N {
        &self.start
    }

    /// The productions, in insertion order.
    pub fn productions(&self) -> &[CfgProduction<N, T>] {
        &self.productions
    }

    /// The productions rewriting `non_terminal`.
    pub fn productions_of<'a>(
        &'a self,
        non_terminal: &'a N,
    ) -> impl Iterator<Item = &'a CfgProduction<N, T>> {
        self.productions
            .iter()
            .filter(move |p| p.lhs == *non_terminal)
    }

    /// Structure-preserving non-terminal homomorphism (`f` should be
    /// injective).
    pub fn map_non_terminals<N2: StateId>(
        &self,
        mut f: impl FnMut(&N) -> N2,
    ) -> ContextFreeGrammar<N2, T> {
        let map_symbol = |s: &GrammarSymbol<N, T>, f: &mut dyn FnMut(&N) -> N2| match s {
            GrammarSymbol::NonTerminal(n) => GrammarSymbol::NonTerminal(f(n)),
            GrammarSymbol::Terminal(t) => GrammarSymbol::Terminal(t.clone()),
        };
        ContextFreeGrammar {
            non_terminals: self.non_terminals.iter().map(&mut f).collect(),
            terminals: self.terminals.clone(),
            start: f(&self.start),
            productions: self
                .productions
                .iter()
                .map(|p| CfgProduction {
                    lhs: f(&p.lhs),
                    rhs: p.rhs.iter().map(|s| map_symbol(s, &mut f)).collect(),
                })
                .collect(),
        }
    }

    /// Structure-preserving terminal homomorphism (`f` should be
    /// injective).
    pub fn map_terminals<T2: SymbolId>(
        &self,
        mut f: impl FnMut(&T) -> T2,
    ) -> ContextFreeGrammar<N, T2> {
        let map_symbol = |s: &GrammarSymbol<N, T>, f: &mut dyn FnMut(&T) -> T2| match s {
            GrammarSymbol::NonTerminal(n) => GrammarSymbol::NonTerminal(n.clone()),
            GrammarSymbol::Terminal(t) => GrammarSymbol::Terminal(f(t)),
        };
        ContextFreeGrammar {
            non_terminals: self.non_terminals.clone(),
            terminals: self.terminals.map(&mut f),
            start: self.start.clone(),
            productions: self
                .productions
                .iter()
                .map(|p| CfgProduction {
                    lhs: p.lhs.clone(),
                    rhs: p.rhs.iter().map(|s| map_symbol(s, &mut f)).collect(),
                })
                .collect(),
        }
    }

    /// View as an unrestricted [`Grammar`], e.g. for classification.
    pub fn to_grammar(&self) -> Grammar<N, T> {
        let builder = self
            .productions
            .iter()
            .fold(
                GrammarBuilder::new()
                    .with_non_terminals(self.non_terminals.iter().cloned())
                    .with_terminals(self.terminals.iter().cloned())
                    .with_start(self.start.clone()),
                |builder, p| {
                    builder.with_production(
                        vec![GrammarSymbol::NonTerminal(p.lhs.clone())],
                        p.rhs.clone(),
                    )
                },
            );
        // A structurally valid CFG is a valid unrestricted grammar.
        match builder.build() {
            Ok(grammar) => grammar,
            Err(_) => unreachable!("a built ContextFreeGrammar has no dangling symbols"),
        }
    }
}

/// A fault discovered while building a context-free grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CfgBuildFault<N, T> {
    /// A production rewrites a non-terminal that was not declared.
    #[error("production rewrites unknown non-terminal {0:?}")]
    UnknownLhs(N),
    /// A production right side references an undeclared non-terminal.
    #[error("production references unknown non-terminal {0:?}")]
    UnknownNonTerminal(N),
    /// A production right side references an undeclared terminal.
    #[error("production references unknown terminal {0:?}")]
    UnknownTerminal(T),
    /// No start symbol was declared.
    #[error("no start symbol was declared")]
    MissingStartSymbol,
    /// The start symbol is not a declared non-terminal.
    #[error("start symbol {0:?} is not a declared non-terminal")]
    UnknownStartSymbol(N),
}

/// Fluent, fault-accumulating builder for [`ContextFreeGrammar`].
#[derive(Debug, Clone)]
pub struct CfgBuilder<N: StateId, T: SymbolId> {
    non_terminals: IndexSet<N>,
    terminals: Alphabet<T>,
    start: Option<N>,
    productions: Vec<CfgProduction<N, T>>,
}

impl<N: StateId, T: SymbolId> CfgBuilder<N, T> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            non_terminals: IndexSet::new(),
            terminals: Alphabet::new(),
            start: None,
            productions: Vec::new(),
        }
    }

    /// Declare non-terminals.
    pub fn with_non_terminals(mut self, non_terminals: impl IntoIterator<Item = N>) -> Self {
        self.non_terminals.extend(non_terminals);
        self
    }

    /// Declare terminals.
    pub fn with_terminals(mut self, terminals: impl IntoIterator<Item = T>) -> Self {
        for terminal in terminals {
            self.terminals.insert(terminal);
        }
        self
    }

    /// Declare the start symbol.
    pub fn with_start(mut self, start: N) -> Self {
        self.start = Some(start);
        self
    }

    /// Add a production.
    pub fn with_production(mut self, lhs: N, rhs: Vec<GrammarSymbol<N, T>>) -> Self {
        self.productions.push(CfgProduction { lhs, rhs });
        self
    }

    /// Validate and build. All faults are reported at once.
    pub fn build(
        self,
    ) -> Result<ContextFreeGrammar<N, T>, FaultCollection<CfgBuildFault<N, T>>> {
        let mut faults = FaultCollection::new();

        match &self.start {
            None => faults.push(CfgBuildFault::MissingStartSymbol),
            Some(start) if !self.non_terminals.contains(start) => {
                faults.push(CfgBuildFault::UnknownStartSymbol(start.clone()));
            }
            Some(_) => {}
        }
        for production in &self.productions {
            if !self.non_terminals.contains(&production.lhs) {
                faults.push(CfgBuildFault::UnknownLhs(production.lhs.clone()));
            }
            for symbol in &production.rhs {
                match symbol {
                    GrammarSymbol::NonTerminal(n) if !self.non_terminals.contains(n) => {
                        faults.push(CfgBuildFault::UnknownNonTerminal(n.clone()));
                    }
                    GrammarSymbol::Terminal(t) if !self.terminals.contains(t) => {
                        faults.push(CfgBuildFault::UnknownTerminal(t.clone()));
                    }
                    _ => {}
                }
            }
        }

        match self.start {
            Some(start) if faults.is_empty() => Ok(ContextFreeGrammar {
                non_terminals: self.non_terminals,
                terminals: self.terminals,
                start,
                productions: self.productions,
            }),
            _ => Err(faults),
        }
    }
}

impl<N: StateId, T: SymbolId> Default for CfgBuilder<N, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A production violating Chomsky normal form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("production {lhs:?} → {rhs:?} is not in Chomsky normal form")]
pub struct CnfViolation<N, T>
where
    N: std::fmt::Debug,
    T: std::fmt::Debug,
{
    /// The offending production's left side.
    pub lhs: N,
    /// The offending production's right side.
    pub rhs: Vec<GrammarSymbol<N, T>>,
}

/// A context-free grammar validated to be in Chomsky normal form: every
/// right side is a single terminal or exactly two non-terminals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChomskyNormalFormGrammar<N: StateId, T: SymbolId> {
    grammar: ContextFreeGrammar<N, T>,
}

impl<N: StateId, T: SymbolId> ChomskyNormalFormGrammar<N, T> {
    /// Validate a context-free grammar as Chomsky normal form.
    pub fn new(
        grammar: ContextFreeGrammar<N, T>,
    ) -> Result<Self, FaultCollection<CnfViolation<N, T>>> {
        let violations: FaultCollection<CnfViolation<N, T>> = grammar
            .productions()
            .iter()
            .filter(|p| !Self::is_normal(&p.rhs))
            .map(|p| CnfViolation {
                lhs: p.lhs.clone(),
                rhs: p.rhs.clone(),
            })
            .collect();
        violations.into_result(Self { grammar })
    }

    fn is_normal(rhs: &[GrammarSymbol<N, T>]) -> bool {
        match rhs {
            [GrammarSymbol::Terminal(_)] => true,
            [GrammarSymbol::NonTerminal(_), GrammarSymbol::NonTerminal(_)] => true,
            _ => false,
        }
    }

    /// The validated grammar.
    pub fn grammar(&self) -> &ContextFreeGrammar<N, T> {
        &self.grammar
    }

    /// The productions, all in normal form.
    pub fn productions(&self) -> &[CfgProduction<N, T>] {
        self.grammar.productions()
    }

    /// The start symbol.
    pub fn start_symbol(&self) -> &N {
        self.grammar.start_symbol()
    }

    /// The non-terminal set.
    pub fn non_terminals(&self) -> &IndexSet<N> {
        self.grammar.non_terminals()
    }

    /// The terminal alphabet.
    pub fn terminals(&self) -> &Alphabet<T> {
        self.grammar.terminals()
    }
}
