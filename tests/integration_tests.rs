//! End-to-end scenarios across the automaton, conversion, and grammar
//! layers, exercised through the public API only.

use libchomsky::prelude::*;

/// The canonical nondeterministic example: over {a, b}, state 0 loops on
/// 'a' and also jumps to accepting state 1 on 'a'. Language: words whose
/// every symbol is 'a', with at least one of them.
fn a_plus_nfa() -> Nfa<u32, char> {
    NfaBuilder::new()
        .with_states([0, 1])
        .with_symbols(['a', 'b'])
        .with_initial(0)
        .with_accepting(1)
        .with_transition(0, 'a', 0)
        .with_transition(0, 'a', 1)
        .build()
        .unwrap()
}

#[test]
fn determinacy_analysis_reports_the_ambiguous_symbol() {
    let nfa = a_plus_nfa();
    let faults = nfa.check_determinacy();
    assert!(!faults.is_deterministic());
    assert!(!faults.is_total());

    let ambiguous: Vec<_> = faults
        .iter()
        .filter(|f| f.reason == DeterminacyReason::AmbiguousTransition)
        .collect();
    assert_eq!(ambiguous.len(), 1);
    assert_eq!(ambiguous[0].state, 0);
    assert_eq!(ambiguous[0].detail.symbol, Some('a'));
    assert_eq!(ambiguous[0].detail.states, vec![0, 1]);
}

#[test]
fn determinize_then_minimize_pipeline() {
    let nfa = a_plus_nfa();
    let dfa = PowerSetConstruction::new().apply(&nfa);
    assert!(dfa.is_deterministic());
    assert!(dfa.is_total());

    let minimal = Minimization::new().apply(&dfa).unwrap();
    // {start}, {0,1}, sink: already three distinct behaviors.
    assert_eq!(minimal.states().len(), 3);

    for word in [&['a'][..], &['a', 'a', 'a'][..]] {
        assert!(nfa.accepts(word));
        assert!(minimal.accepts(word));
    }
    for word in [&[][..], &['b'][..], &['a', 'b'][..], &['a', 'b', 'a'][..]] {
        assert!(!nfa.accepts(word));
        assert!(!minimal.accepts(word));
    }
}

#[test]
fn labeled_conversion_stages_chain_without_collisions() {
    let nfa: Nfa<u32, char> = NfaBuilder::new()
        .with_states([0, 1, 2])
        .with_symbols(['a'])
        .with_initial(0)
        .with_initial(1)
        .with_accepting(2)
        .with_epsilon_transition(0, 1)
        .with_transition(1, 'a', 2)
        .build()
        .unwrap();

    let staged = SingleInitialState::new().apply(&nfa.labeled());
    let staged = EpsilonRemoval::new().apply(&staged);

    assert_eq!(staged.initial_states().len(), 1);
    assert!(staged.transitions().all(|(_, t)| !t.is_epsilon()));
    assert!(staged.accepts(&['a']));
    assert!(!staged.accepts(&[]));
}

#[test]
fn pda_acceptance_strategies_convert_both_ways() {
    // aⁿbⁿ (n ≥ 0) accepting by empty stack.
    let by_stack: Pda<u32, char, char> = PdaBuilder::new()
        .with_states([0, 1])
        .with_symbols(['a', 'b'])
        .with_stack_symbols(['Z', 'X'])
        .with_initial(0)
        .with_initial_stack_symbol('Z')
        .with_acceptance(AcceptanceStrategy::EmptyStack)
        .with_transition(
            0,
            Some('a'),
            StackGuard::Any,
            vec![StackGuard::Symbol('X'), StackGuard::Any],
            0,
        )
        .with_transition(0, Some('b'), StackGuard::Symbol('X'), vec![], 1)
        .with_transition(1, Some('b'), StackGuard::Symbol('X'), vec![], 1)
        .with_epsilon_transition(0, StackGuard::Symbol('Z'), vec![], 1)
        .with_epsilon_transition(1, StackGuard::Symbol('Z'), vec![], 1)
        .build()
        .unwrap();

    let by_state = EmptyStackToAcceptingStates::new().apply(&by_stack.labeled());
    assert_eq!(by_state.acceptance(), AcceptanceStrategy::AcceptingStates);
    let back = AcceptingStatesToEmptyStack::new().apply(&by_state);
    assert_eq!(back.acceptance(), AcceptanceStrategy::EmptyStack);

    for word in [&[][..], &['a', 'b'][..], &['a', 'a', 'b', 'b'][..]] {
        assert_eq!(by_stack.accepts_within(word, 500), Some(true));
        assert_eq!(by_state.accepts_within(word, 1000), Some(true));
        assert_eq!(back.accepts_within(word, 2000), Some(true));
    }
    for word in [&['a'][..], &['b'][..], &['a', 'b', 'b'][..]] {
        assert_eq!(by_stack.accepts_within(word, 500), Some(false));
        assert_eq!(by_state.accepts_within(word, 1000), Some(false));
        assert_eq!(back.accepts_within(word, 2000), Some(false));
    }
}

#[test]
fn grammar_to_machine_and_back() {
    // S → aSb | ε.
    let grammar: ContextFreeGrammar<char, char> = CfgBuilder::new()
        .with_non_terminals(['S'])
        .with_terminals(['a', 'b'])
        .with_start('S')
        .with_production(
            'S',
            vec![
                GrammarSymbol::Terminal('a'),
                GrammarSymbol::NonTerminal('S'),
                GrammarSymbol::Terminal('b'),
            ],
        )
        .with_production('S', vec![])
        .build()
        .unwrap();
    assert_eq!(grammar.to_grammar().classify(), GrammarClass::ContextFree);

    let machine = CfgToPda::new().apply(&grammar);
    let extracted = PdaToCfg::new().apply(&machine);
    let machine_again = CfgToPda::new().apply(&extracted);

    for word in [&[][..], &['a', 'b'][..], &['a', 'a', 'b', 'b'][..]] {
        assert_eq!(machine.accepts_within(word, 500), Some(true));
        assert_eq!(machine_again.accepts_within(word, 5000), Some(true));
    }
    for word in [&['a'][..], &['b', 'a'][..], &['a', 'b', 'b'][..]] {
        assert_eq!(machine.accepts_within(word, 500), Some(false));
        assert_eq!(machine_again.accepts_within(word, 5000), Some(false));
    }
}

#[test]
fn executor_and_stepper_agree_on_finite_automata() {
    let nfa = a_plus_nfa();
    for word in [
        &[][..],
        &['a'][..],
        &['b'][..],
        &['a', 'a'][..],
        &['a', 'b'][..],
    ] {
        let eager = Executor::new(&nfa, word).run();
        let bounded = AutomatonStepper::new(&nfa, word).run(100);
        assert_eq!(bounded, Some(eager));
    }
}

#[test]
fn fault_collections_format_for_humans() {
    let nfa = a_plus_nfa();
    let faults = nfa.check_determinacy();
    let rendered = faults.to_string();
    assert!(rendered.contains("fault"));
    assert!(rendered.contains("ambiguous"));
}
