//! Benchmarks for the conversion pipelines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use libchomsky::prelude::*;

/// An NFA with `n` states whose language is "words over {a, b} with an 'a'
/// exactly `n - 1` symbols before the end". Its minimal DFA is exponential
/// in `n`, which makes the subset construction do real work.
fn nth_from_end_nfa(n: u32) -> Nfa<u32, char> {
    let mut builder = NfaBuilder::new()
        .with_states(0..=n)
        .with_symbols(['a', 'b'])
        .with_initial(0)
        .with_accepting(n)
        .with_transition(0, 'a', 0)
        .with_transition(0, 'b', 0)
        .with_transition(0, 'a', 1);
    for state in 1..n {
        builder = builder
            .with_transition(state, 'a', state + 1)
            .with_transition(state, 'b', state + 1);
    }
    builder.build().unwrap()
}

fn epsilon_chain_nfa(n: u32) -> Nfa<u32, char> {
    let mut builder = NfaBuilder::new()
        .with_states(0..=n)
        .with_symbols(['a'])
        .with_initial(0)
        .with_accepting(n);
    for state in 0..n {
        builder = builder.with_epsilon_transition(state, state + 1);
    }
    builder = builder.with_transition(n, 'a', n);
    builder.build().unwrap()
}

fn bench_power_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("power_set_construction");
    for n in [4u32, 8, 12] {
        let nfa = nth_from_end_nfa(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &nfa, |b, nfa| {
            b.iter(|| PowerSetConstruction::new().apply(black_box(nfa)));
        });
    }
    group.finish();
}

fn bench_epsilon_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("epsilon_removal");
    for n in [8u32, 32, 128] {
        let nfa = epsilon_chain_nfa(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &nfa, |b, nfa| {
            b.iter(|| EpsilonRemoval::new().apply(black_box(nfa)));
        });
    }
    group.finish();
}

fn bench_minimization(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimization");
    for n in [4u32, 6, 8] {
        let dfa = PowerSetConstruction::new().apply(&nth_from_end_nfa(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &dfa, |b, dfa| {
            b.iter(|| Minimization::new().apply(black_box(dfa)).unwrap());
        });
    }
    group.finish();
}

fn bench_pda_normalization(c: &mut Criterion) {
    let pda: Pda<u32, char, char> = PdaBuilder::new()
        .with_states([0, 1, 2])
        .with_symbols(['a', 'b'])
        .with_stack_symbols(['Z', 'X', 'Y'])
        .with_initial(0)
        .with_accepting(2)
        .with_initial_stack_symbol('Z')
        .with_acceptance(AcceptanceStrategy::AcceptingStates)
        .with_transition(
            0,
            Some('a'),
            StackGuard::Any,
            vec![StackGuard::Symbol('X'), StackGuard::Symbol('Y'), StackGuard::Any],
            0,
        )
        .with_transition(0, Some('b'), StackGuard::Symbol('X'), vec![], 1)
        .with_transition(1, Some('b'), StackGuard::Any, vec![], 1)
        .with_epsilon_transition(1, StackGuard::Symbol('Z'), vec![StackGuard::Symbol('Z')], 2)
        .build()
        .unwrap();

    c.bench_function("pda_normalization_chain", |b| {
        b.iter(|| {
            let staged = PdaSingleInitialState::new().apply(black_box(&pda.labeled()));
            let staged = AcceptingStatesToEmptyStack::new().apply(&staged);
            let staged = WildcardElimination::new().apply(&staged);
            StackWriteLimit::new().apply(&staged)
        });
    });
}

fn bench_grammar_translations(c: &mut Criterion) {
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

    c.bench_function("cfg_to_pda", |b| {
        b.iter(|| CfgToPda::new().apply(black_box(&grammar)));
    });

    let machine = CfgToPda::new().apply(&grammar);
    c.bench_function("pda_to_cfg", |b| {
        b.iter(|| PdaToCfg::new().apply(black_box(&machine)));
    });
}

criterion_group!(
    benches,
    bench_power_set,
    bench_epsilon_removal,
    bench_minimization,
    bench_pda_normalization,
    bench_grammar_translations
);
criterion_main!(benches);
