//! Pushdown automaton to context-free grammar.
//!
//! The triple construction. The input machine is first normalized by the
//! PDA conversion stages into the shape the construction needs: one
//! initial state, empty-stack acceptance, no wildcard guards, and no
//! transition pushing more than two symbols. A non-terminal
//! `[p, g, q]` then derives exactly the words the machine can read while
//! net-popping `g` on a path from `p` to `q`, and the start symbol derives
//! `[q0, z0, q]` for every state `q`.

use crate::automaton::{Automaton, StateId, SymbolId};
use crate::conversion::Conversion;
use crate::fresh::MaybeFresh;
use crate::grammar::cfg::{CfgBuilder, ContextFreeGrammar};
use crate::grammar::GrammarSymbol;
use crate::pda::conversion::{
    AcceptingStatesToEmptyStack, PdaSingleInitialState, StackWriteLimit, WildcardElimination,
};
use crate::pda::{AcceptanceStrategy, Pda, StackGuard};
use std::fmt;
use std::marker::PhantomData;

/// A non-terminal of the grammar extracted from a PDA.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PdaNonTerminal<S, G> {
    /// The start symbol.
    Start,
    /// Derives the words readable from `from` to `to` while net-popping
    /// `stack`.
    Triple {
        /// Path origin.
        from: S,
        /// The stack symbol consumed by the path.
        stack: G,
        /// Path destination.
        to: S,
    },
}

impl<S: fmt::Display, G: fmt::Display> fmt::Display for PdaNonTerminal<S, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdaNonTerminal::Start => write!(f, "S"),
            PdaNonTerminal::Triple { from, stack, to } => {
                write!(f, "[{from}, {stack}, {to}]")
            }
        }
    }
}

type TripleSymbol<S, A, G> =
    GrammarSymbol<PdaNonTerminal<MaybeFresh<S>, MaybeFresh<G>>, A>;

/// Translates a PDA into an equivalent context-free grammar.
#[derive(Debug, Default)]
pub struct PdaToCfg<S, A, G> {
    _marker: PhantomData<(S, A, G)>,
}

impl<S, A, G> PdaToCfg<S, A, G> {
    /// Create the translation.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S: StateId, A: SymbolId, G: SymbolId> Conversion for PdaToCfg<S, A, G> {
    type Input = Pda<S, A, G>;
    type Output = ContextFreeGrammar<PdaNonTerminal<MaybeFresh<S>, MaybeFresh<G>>, A>;

    /// The translation crosses representations, so it is never redundant.
    fn is_redundant(&self, _pda: &Self::Input) -> bool {
        false
    }

    fn identity(&self, pda: &Self::Input) -> Self::Output {
        self.convert(pda)
    }

    fn convert(&self, pda: &Self::Input) -> Self::Output {
        let normalized = PdaSingleInitialState::new().apply(&pda.labeled());
        let normalized = AcceptingStatesToEmptyStack::new().apply(&normalized);
        let normalized = WildcardElimination::new().apply(&normalized);
        let normalized = StackWriteLimit::new().apply(&normalized);

        // The stage chain above established the shape the construction
        // requires; a violation here is a bug in a stage, not user error.
        assert_eq!(normalized.initial_states().len(), 1);
        assert_eq!(normalized.acceptance(), AcceptanceStrategy::EmptyStack);
        assert!(normalized
            .transitions()
            .all(|(_, t)| t.pop != StackGuard::Any && t.push.len() <= 2));

        let triple = |from: &MaybeFresh<S>, stack: &MaybeFresh<G>, to: &MaybeFresh<S>| {
            PdaNonTerminal::Triple {
                from: from.clone(),
                stack: stack.clone(),
                to: to.clone(),
            }
        };

        let mut builder = CfgBuilder::new()
            .with_terminals(normalized.alphabet().iter().cloned())
            .with_non_terminals([PdaNonTerminal::Start])
            .with_start(PdaNonTerminal::Start);
        for from in normalized.states() {
            for stack in normalized.stack_alphabet() {
                for to in normalized.states() {
                    builder = builder.with_non_terminals([triple(from, stack, to)]);
                }
            }
        }

        let q0 = &normalized.initial_states()[0];
        let z0 = normalized.initial_stack_symbol();
        for q in normalized.states() {
            builder = builder.with_production(
                PdaNonTerminal::Start,
                vec![GrammarSymbol::NonTerminal(triple(q0, z0, q))],
            );
        }

        for (source, transition) in normalized.transitions() {
            let popped = match transition.pop.as_symbol() {
                Some(symbol) => symbol,
                None => unreachable!("wildcard guard survived elimination"),
            };
            let pushed: Vec<&MaybeFresh<G>> = transition
                .push
                .iter()
                .map(|guard| match guard.as_symbol() {
                    Some(symbol) => symbol,
                    None => unreachable!("wildcard push survived elimination"),
                })
                .collect();
            let read: Vec<TripleSymbol<S, A, G>> = transition
                .input
                .iter()
                .map(|a| GrammarSymbol::Terminal(a.clone()))
                .collect();

            match pushed.as_slice() {
                [] => {
                    builder = builder.with_production(
                        triple(source, popped, &transition.target),
                        read.clone(),
                    );
                }
                [g1] => {
                    for q in normalized.states() {
                        let mut rhs = read.clone();
                        rhs.push(GrammarSymbol::NonTerminal(triple(
                            &transition.target,
                            g1,
                            q,
                        )));
                        builder = builder.with_production(triple(source, popped, q), rhs);
                    }
                }
                [g1, g2] => {
                    for q1 in normalized.states() {
                        for q2 in normalized.states() {
                            let mut rhs = read.clone();
                            rhs.push(GrammarSymbol::NonTerminal(triple(
                                &transition.target,
                                g1,
                                q1,
                            )));
                            rhs.push(GrammarSymbol::NonTerminal(triple(q1, g2, q2)));
                            builder =
                                builder.with_production(triple(source, popped, q2), rhs);
                        }
                    }
                }
                _ => unreachable!("push longer than two survived the write limit"),
            }
        }

        match builder.build() {
            Ok(grammar) => grammar,
            Err(_) => unreachable!("every triple non-terminal was declared"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::cfg_to_pda::CfgToPda;
    use crate::grammar::GrammarClass;
    use crate::pda::{PdaBuilder, StackGuard};

    #[test]
    fn empty_stack_machine_round_trips_through_the_grammar() {
        let pda = crate::pda::tests::anbn();
        let grammar = PdaToCfg::new().apply(&pda);
        assert_eq!(grammar.to_grammar().classify(), GrammarClass::ContextFree);

        let machine = CfgToPda::new().apply(&grammar);
        for word in [&[][..], &['a', 'b'][..], &['a', 'a', 'b', 'b'][..]] {
            assert_eq!(machine.accepts_within(word, 2000), Some(true));
        }
        for word in [&['a'][..], &['a', 'b', 'b'][..], &['b', 'a'][..]] {
            assert_eq!(machine.accepts_within(word, 2000), Some(false));
        }
    }

    #[test]
    fn accepting_states_machine_is_normalized_before_extraction() {
        // Accepts exactly "a", by accepting state and with a wildcard
        // guard, so every normalization stage has work to do.
        let pda: Pda<u32, char, char> = PdaBuilder::new()
            .with_states([0, 1])
            .with_symbols(['a'])
            .with_stack_symbols(['Z'])
            .with_initial(0)
            .with_accepting(1)
            .with_initial_stack_symbol('Z')
            .with_acceptance(AcceptanceStrategy::AcceptingStates)
            .with_transition(0, Some('a'), StackGuard::Any, vec![StackGuard::Any], 1)
            .build()
            .unwrap();
        let grammar = PdaToCfg::new().apply(&pda);
        let machine = CfgToPda::new().apply(&grammar);

        assert_eq!(machine.accepts_within(&['a'], 2000), Some(true));
        assert_eq!(machine.accepts_within(&[], 2000), Some(false));
        assert_eq!(machine.accepts_within(&['a', 'a'], 2000), Some(false));
    }
}
