//! Formal grammars and the Chomsky hierarchy.
//!
//! [`Grammar`] is the unrestricted (type-0) representation: productions
//! rewrite an arbitrary symbol string containing at least one non-terminal
//! into an arbitrary symbol string. [`Grammar::classify`] places a grammar
//! at the most restrictive level of the hierarchy its productions satisfy.
//!
//! Context-free grammars get the dedicated, structurally-restricted
//! [`cfg::ContextFreeGrammar`] type, which is what the PDA translations in
//! [`cfg_to_pda`] and [`pda_to_cfg`] operate on.

pub mod cfg;
pub mod cfg_to_pda;
pub mod pda_to_cfg;

use crate::alphabet::Alphabet;
use crate::automaton::{StateId, SymbolId};
use crate::fault::FaultCollection;
use indexmap::IndexSet;
use std::fmt;

/// A symbol of a sentential form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GrammarSymbol<N, T> {
    /// A non-terminal, subject to further rewriting.
    NonTerminal(N),
    /// A terminal of the generated language.
    Terminal(T),
}

impl<N, T> GrammarSymbol<N, T> {
    /// The non-terminal, if this is one.
    pub fn as_non_terminal(&self) -> Option<&N> {
        match self {
            GrammarSymbol::NonTerminal(n) => Some(n),
            GrammarSymbol::Terminal(_) => None,
        }
    }

    /// The terminal, if this is one.
    pub fn as_terminal(&self) -> Option<&T> {
        match self {
            GrammarSymbol::NonTerminal(_) => None,
            GrammarSymbol::Terminal(t) => Some(t),
        }
    }
}

impl<N: fmt::Display, T: fmt::Display> fmt::Display for GrammarSymbol<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarSymbol::NonTerminal(n) => n.fmt(f),
            GrammarSymbol::Terminal(t) => t.fmt(f),
        }
    }
}

/// An unrestricted rewrite rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production<N, T> {
    /// The rewritten string; contains at least one non-terminal.
    pub lhs: Vec<GrammarSymbol<N, T>>,
    /// The replacement string; may be empty.
    pub rhs: Vec<GrammarSymbol<N, T>>,
}

/// The levels of the Chomsky hierarchy, most restrictive first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarClass {
    /// Type 3: right-linear productions.
    Regular,
    /// Type 2: single non-terminal left-hand sides.
    ContextFree,
    /// Type 1: non-contracting productions (with the usual start-symbol
    /// epsilon exception).
    ContextSensitive,
    /// Type 0: no restriction.
    Unrestricted,
}

/// An unrestricted grammar over non-terminals `N` and terminals `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar<N: StateId, T: SymbolId> {
    non_terminals: IndexSet<N>,
    terminals: Alphabet<T>,
    start: N,
    productions: Vec<Production<N, T>>,
}

impl<N: StateId, T: SymbolId> Grammar<N, T> {
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
    pub fn productions(&self) -> &[Production<N, T>] {
        &self.productions
    }

    /// The most restrictive hierarchy level every production satisfies.
    pub fn classify(&self) -> GrammarClass {
        if self.productions.iter().all(|p| Self::is_right_linear(p)) {
            return GrammarClass::Regular;
        }
        if self.productions.iter().all(|p| Self::is_context_free(p)) {
            return GrammarClass::ContextFree;
        }
        if self.is_non_contracting() {
            return GrammarClass::ContextSensitive;
        }
        GrammarClass::Unrestricted
    }

    /// Single non-terminal on the left.
    fn is_context_free(production: &Production<N, T>) -> bool {
        production.lhs.len() == 1 && production.lhs[0].as_non_terminal().is_some()
    }

    /// Context-free, and the right side is terminals followed by at most
    /// one trailing non-terminal.
    fn is_right_linear(production: &Production<N, T>) -> bool {
        if !Self::is_context_free(production) {
            return false;
        }
        let non_terminal_positions: Vec<usize> = production
            .rhs
            .iter()
            .enumerate()
            .filter(|(_, s)| s.as_non_terminal().is_some())
            .map(|(i, _)| i)
            .collect();
        match non_terminal_positions.as_slice() {
            [] => true,
            [last] => *last == production.rhs.len() - 1,
            _ => false,
        }
    }

    /// No production shrinks the sentential form, except that the start
    /// symbol may derive epsilon when it never occurs on a right side.
    fn is_non_contracting(&self) -> bool {
        let start_lhs = [GrammarSymbol::NonTerminal(self.start.clone())];
        let start_erasable = self.productions.iter().all(|p| {
            !p.rhs
                .iter()
                .any(|s| s.as_non_terminal() == Some(&self.start))
        });
        self.productions.iter().all(|p| {
            if p.rhs.is_empty() && p.lhs == start_lhs {
                return start_erasable;
            }
            p.rhs.len() >= p.lhs.len()
        })
    }
}

/// A fault discovered while building a grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarBuildFault<N, T> {
    /// A production has an empty left-hand side.
    #[error("production has an empty left-hand side")]
    EmptyLhs,
    /// A production's left-hand side contains no non-terminal.
    #[error("production left-hand side {0:?} contains no non-terminal")]
    LhsWithoutNonTerminal(Vec<GrammarSymbol<N, T>>),
    /// A production references a non-terminal that was not declared.
    #[error("production references unknown non-terminal {0:?}")]
    UnknownNonTerminal(N),
    /// A production references a terminal that was not declared.
    #[error("production references unknown terminal {0:?}")]
    UnknownTerminal(T),
    /// No start symbol was declared.
    #[error("no start symbol was declared")]
    MissingStartSymbol,
    /// The start symbol is not a declared non-terminal.
    #[error("start symbol {0:?} is not a declared non-terminal")]
    UnknownStartSymbol(N),
}

/// Fluent, fault-accumulating builder for [`Grammar`].
#[derive(Debug, Clone)]
pub struct GrammarBuilder<N: StateId, T: SymbolId> {
    non_terminals: IndexSet<N>,
    terminals: Alphabet<T>,
    start: Option<N>,
    productions: Vec<Production<N, T>>,
}

impl<N: StateId, T: SymbolId> GrammarBuilder<N, T> {
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
    pub fn with_production(
        mut self,
        lhs: Vec<GrammarSymbol<N, T>>,
        rhs: Vec<GrammarSymbol<N, T>>,
    ) -> Self {
        self.productions.push(Production { lhs, rhs });
        self
    }

    /// Validate and build. All faults are reported at once.
    pub fn build(self) -> Result<Grammar<N, T>, FaultCollection<GrammarBuildFault<N, T>>> {
        let mut faults = FaultCollection::new();

        let known = |symbol: &GrammarSymbol<N, T>,
                     faults: &mut FaultCollection<GrammarBuildFault<N, T>>| {
            match symbol {
                GrammarSymbol::NonTerminal(n) if !self.non_terminals.contains(n) => {
                    faults.push(GrammarBuildFault::UnknownNonTerminal(n.clone()));
                }
                GrammarSymbol::Terminal(t) if !self.terminals.contains(t) => {
                    faults.push(GrammarBuildFault::UnknownTerminal(t.clone()));
                }
                _ => {}
            }
        };

        match &self.start {
            None => faults.push(GrammarBuildFault::MissingStartSymbol),
            Some(start) if !self.non_terminals.contains(start) => {
                faults.push(GrammarBuildFault::UnknownStartSymbol(start.clone()));
            }
            Some(_) => {}
        }
        for production in &self.productions {
            if production.lhs.is_empty() {
                faults.push(GrammarBuildFault::EmptyLhs);
            } else if !production
                .lhs
                .iter()
                .any(|s| s.as_non_terminal().is_some())
            {
                faults.push(GrammarBuildFault::LhsWithoutNonTerminal(
                    production.lhs.clone(),
                ));
            }
            for symbol in production.lhs.iter().chain(production.rhs.iter()) {
                known(symbol, &mut faults);
            }
        }

        match self.start {
            Some(start) if faults.is_empty() => Ok(Grammar {
                non_terminals: self.non_terminals,
                terminals: self.terminals,
                start,
                productions: self.productions,
            }),
            _ => Err(faults),
        }
    }
}

impl<N: StateId, T: SymbolId> Default for GrammarBuilder<N, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::GrammarSymbol::{NonTerminal, Terminal};
    use super::*;

    #[test]
    fn right_linear_grammar_classifies_as_regular() {
        // S → aS | b
        let grammar: Grammar<char, char> = GrammarBuilder::new()
            .with_non_terminals(['S'])
            .with_terminals(['a', 'b'])
            .with_start('S')
            .with_production(
                vec![NonTerminal('S')],
                vec![Terminal('a'), NonTerminal('S')],
            )
            .with_production(vec![NonTerminal('S')], vec![Terminal('b')])
            .build()
            .unwrap();
        assert_eq!(grammar.classify(), GrammarClass::Regular);
    }

    #[test]
    fn center_recursion_classifies_as_context_free() {
        // S → aSb | ε
        let grammar: Grammar<char, char> = GrammarBuilder::new()
            .with_non_terminals(['S'])
            .with_terminals(['a', 'b'])
            .with_start('S')
            .with_production(
                vec![NonTerminal('S')],
                vec![Terminal('a'), NonTerminal('S'), Terminal('b')],
            )
            .with_production(vec![NonTerminal('S')], vec![])
            .build()
            .unwrap();
        assert_eq!(grammar.classify(), GrammarClass::ContextFree);
    }

    #[test]
    fn non_contracting_multi_symbol_lhs_classifies_as_context_sensitive() {
        // AB → BA (plus S → AB so the start symbol exists meaningfully).
        let grammar: Grammar<char, char> = GrammarBuilder::new()
            .with_non_terminals(['S', 'A', 'B'])
            .with_terminals(['a'])
            .with_start('S')
            .with_production(
                vec![NonTerminal('S')],
                vec![NonTerminal('A'), NonTerminal('B')],
            )
            .with_production(
                vec![NonTerminal('A'), NonTerminal('B')],
                vec![NonTerminal('B'), NonTerminal('A')],
            )
            .with_production(vec![NonTerminal('A')], vec![Terminal('a')])
            .with_production(vec![NonTerminal('B')], vec![Terminal('a')])
            .build()
            .unwrap();
        assert_eq!(grammar.classify(), GrammarClass::ContextSensitive);
    }

    #[test]
    fn contracting_production_classifies_as_unrestricted() {
        // AB → A shrinks the sentential form.
        let grammar: Grammar<char, char> = GrammarBuilder::new()
            .with_non_terminals(['S', 'A', 'B'])
            .with_terminals(['a'])
            .with_start('S')
            .with_production(
                vec![NonTerminal('S')],
                vec![NonTerminal('A'), NonTerminal('B')],
            )
            .with_production(
                vec![NonTerminal('A'), NonTerminal('B')],
                vec![NonTerminal('A')],
            )
            .with_production(vec![NonTerminal('A')], vec![Terminal('a')])
            .build()
            .unwrap();
        assert_eq!(grammar.classify(), GrammarClass::Unrestricted);
    }

    #[test]
    fn builder_reports_every_fault_at_once() {
        let result: Result<Grammar<char, char>, _> = GrammarBuilder::new()
            .with_non_terminals(['S'])
            .with_terminals(['a'])
            .with_production(vec![], vec![Terminal('a')])
            .with_production(vec![Terminal('a')], vec![Terminal('a')])
            .with_production(vec![NonTerminal('X')], vec![Terminal('b')])
            .build();
        let faults = result.unwrap_err().into_vec();
        assert!(faults.contains(&GrammarBuildFault::MissingStartSymbol));
        assert!(faults.contains(&GrammarBuildFault::EmptyLhs));
        assert!(faults.contains(&GrammarBuildFault::UnknownNonTerminal('X')));
        assert!(faults.contains(&GrammarBuildFault::UnknownTerminal('b')));
        assert!(faults
            .iter()
            .any(|f| matches!(f, GrammarBuildFault::LhsWithoutNonTerminal(_))));
    }
}
