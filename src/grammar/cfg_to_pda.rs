//! Context-free grammar to pushdown automaton.
//!
//! The classic one-state construction: the stack holds the unexpanded
//! suffix of a leftmost derivation, with the next sentential-form symbol on
//! top. A non-terminal on top is expanded by an epsilon transition pushing
//! a production's right side; a terminal on top must match the next input
//! symbol and is popped while consuming it. The machine accepts by empty
//! stack, which happens exactly when a derivation of the whole input has
//! been replayed.

use crate::automaton::{StateId, SymbolId};
use crate::conversion::Conversion;
use crate::grammar::cfg::ContextFreeGrammar;
use crate::grammar::GrammarSymbol;
use crate::pda::{AcceptanceStrategy, Pda, PdaTransition, StackGuard};
use indexmap::{IndexMap, IndexSet};
use std::marker::PhantomData;

/// The single control state of the derivation machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeriveState;

/// Translates a context-free grammar into an equivalent PDA.
#[derive(Debug, Default)]
pub struct CfgToPda<N, T> {
    _marker: PhantomData<(N, T)>,
}

impl<N, T> CfgToPda<N, T> {
    /// Create the translation.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<N: StateId, T: SymbolId> Conversion for CfgToPda<N, T> {
    type Input = ContextFreeGrammar<N, T>;
    type Output = Pda<DeriveState, T, GrammarSymbol<N, T>>;

    /// The translation crosses representations, so it is never redundant.
    fn is_redundant(&self, _grammar: &Self::Input) -> bool {
        false
    }

    fn identity(&self, grammar: &Self::Input) -> Self::Output {
        self.convert(grammar)
    }

    fn convert(&self, grammar: &Self::Input) -> Self::Output {
        let mut stack_alphabet: IndexSet<GrammarSymbol<N, T>> = grammar
            .non_terminals()
            .iter()
            .map(|n| GrammarSymbol::NonTerminal(n.clone()))
            .collect();
        stack_alphabet.extend(
            grammar
                .terminals()
                .iter()
                .map(|t| GrammarSymbol::Terminal(t.clone())),
        );

        let mut outgoing: Vec<PdaTransition<DeriveState, T, GrammarSymbol<N, T>>> = Vec::new();
        for production in grammar.productions() {
            outgoing.push(PdaTransition {
                input: None,
                pop: StackGuard::Symbol(GrammarSymbol::NonTerminal(production.lhs.clone())),
                push: production
                    .rhs
                    .iter()
                    .map(|s| StackGuard::Symbol(s.clone()))
                    .collect(),
                target: DeriveState,
            });
        }
        for terminal in grammar.terminals() {
            outgoing.push(PdaTransition {
                input: Some(terminal.clone()),
                pop: StackGuard::Symbol(GrammarSymbol::Terminal(terminal.clone())),
                push: vec![],
                target: DeriveState,
            });
        }

        let mut states = IndexSet::new();
        states.insert(DeriveState);
        let mut table = IndexMap::new();
        table.insert(DeriveState, outgoing);

        Pda::from_parts(
            states.clone(),
            grammar.terminals().iter().cloned().collect(),
            stack_alphabet.into_iter().collect(),
            states.clone(),
            IndexSet::new(),
            GrammarSymbol::NonTerminal(grammar.start_symbol().clone()),
            AcceptanceStrategy::EmptyStack,
            table,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Automaton;
    use crate::grammar::cfg::CfgBuilder;
    use crate::grammar::GrammarSymbol::{NonTerminal, Terminal};

    #[test]
    fn anbn_grammar_translates_to_an_anbn_machine() {
        let pda = CfgToPda::new().apply(&crate::grammar::cfg::tests::anbn_cfg());
        assert_eq!(pda.acceptance(), AcceptanceStrategy::EmptyStack);
        assert_eq!(pda.states().len(), 1);

        assert_eq!(pda.accepts_within(&[], 200), Some(true));
        assert_eq!(pda.accepts_within(&['a', 'b'], 200), Some(true));
        assert_eq!(pda.accepts_within(&['a', 'a', 'b', 'b'], 500), Some(true));
        assert_eq!(pda.accepts_within(&['a'], 500), Some(false));
        assert_eq!(pda.accepts_within(&['b', 'a'], 500), Some(false));
        assert_eq!(pda.accepts_within(&['a', 'b', 'b'], 500), Some(false));
    }

    #[test]
    fn balanced_parentheses_round_trip_through_the_machine() {
        // S → (S)S | ε
        let grammar = CfgBuilder::new()
            .with_non_terminals(['S'])
            .with_terminals(['(', ')'])
            .with_start('S')
            .with_production(
                'S',
                vec![
                    Terminal('('),
                    NonTerminal('S'),
                    Terminal(')'),
                    NonTerminal('S'),
                ],
            )
            .with_production('S', vec![])
            .build()
            .unwrap();
        let pda = CfgToPda::new().apply(&grammar);

        assert_eq!(pda.accepts_within(&[], 500), Some(true));
        assert_eq!(pda.accepts_within(&['(', ')'], 500), Some(true));
        assert_eq!(
            pda.accepts_within(&['(', '(', ')', ')', '(', ')'], 2000),
            Some(true)
        );
        assert_eq!(pda.accepts_within(&['('], 500), Some(false));
        assert_eq!(pda.accepts_within(&[')', '('], 500), Some(false));
    }
}
