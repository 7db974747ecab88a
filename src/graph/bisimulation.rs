//! Comparator-based bisimulation via partition refinement.
//!
//! Two vertices are bisimilar when (1) they agree under the vertex
//! comparator, and (2) for every outgoing edge of one there is an outgoing
//! edge of the other with an equivalent label leading into the same
//! equivalence class, in both directions. The coarsest such relation is
//! computed by refining an initial comparator-induced partition until no
//! class splits.
//!
//! The comparator formulation keeps the engine generic: DFA minimization
//! instantiates it with "same acceptance" on vertices and "same symbol" on
//! edges, but nothing here knows about automata.

use super::LabeledGraph;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Compute the coarsest bisimulation partition of `graph`.
///
/// `vertices_equivalent` seeds the initial partition; `labels_equivalent`
/// decides which edges are allowed to match during refinement. Returns the
/// equivalence classes; within each class, members appear in the graph's
/// vertex insertion order, so the first member is a deterministic
/// representative.
///
/// Runs in O(iterations · n² · m²) in the worst case, which is fine for the
/// automaton sizes this crate targets; the partition is refined at least
/// once per iteration, so at most n iterations occur and the computation
/// always terminates on a finite graph.
pub fn bisimulation<V, L>(
    graph: &LabeledGraph<V, L>,
    vertices_equivalent: impl Fn(&V, &V) -> bool,
    labels_equivalent: impl Fn(&L, &L) -> bool,
) -> Vec<Vec<V>>
where
    V: Clone + Eq + Hash,
{
    // Initial partition induced by the vertex comparator.
    let mut classes: Vec<Vec<V>> = Vec::new();
    for vertex in graph.vertices() {
        match classes
            .iter_mut()
            .find(|class| vertices_equivalent(&class[0], vertex))
        {
            Some(class) => class.push(vertex.clone()),
            None => classes.push(vec![vertex.clone()]),
        }
    }

    loop {
        let class_of: FxHashMap<&V, usize> = classes
            .iter()
            .enumerate()
            .flat_map(|(index, class)| class.iter().map(move |v| (v, index)))
            .collect();

        let mut refined: Vec<Vec<V>> = Vec::new();
        for class in &classes {
            let mut buckets: Vec<Vec<V>> = Vec::new();
            for vertex in class {
                match buckets.iter_mut().find(|bucket| {
                    edges_match(graph, &bucket[0], vertex, &class_of, &labels_equivalent)
                }) {
                    Some(bucket) => bucket.push(vertex.clone()),
                    None => buckets.push(vec![vertex.clone()]),
                }
            }
            refined.extend(buckets);
        }

        if refined.len() == classes.len() {
            return refined;
        }
        classes = refined;
    }
}

/// Whether `left` and `right` simulate each other's outgoing edges under the
/// current partition: every edge of one has a label-equivalent edge of the
/// other into the same class, in both directions.
fn edges_match<V, L>(
    graph: &LabeledGraph<V, L>,
    left: &V,
    right: &V,
    class_of: &FxHashMap<&V, usize>,
    labels_equivalent: &impl Fn(&L, &L) -> bool,
) -> bool
where
    V: Clone + Eq + Hash,
{
    let simulates = |a: &V, b: &V| {
        graph.edges_from(a).all(|edge_a| {
            graph.edges_from(b).any(|edge_b| {
                labels_equivalent(&edge_a.label, &edge_b.label)
                    && class_of[&edge_a.to] == class_of[&edge_b.to]
            })
        })
    };
    simulates(left, right) && simulates(right, left)
}
