//! Labeled directed graphs as a uniform algorithm substrate.
//!
//! Automata expose an `as_graph()` view that materializes states as vertices
//! and transitions as labeled edges. Graph algorithms (reachability-style
//! walks, the bisimulation engine behind minimization) then run on this one
//! structure instead of each automaton kind separately.

mod bisimulation;

pub use bisimulation::bisimulation;

use indexmap::IndexSet;
use std::hash::Hash;

/// A directed edge carrying a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledEdge<V, L> {
    /// Source vertex.
    pub from: V,
    /// Edge label.
    pub label: L,
    /// Destination vertex.
    pub to: V,
}

/// A directed graph with labeled edges and insertion-ordered vertices.
#[derive(Debug, Clone)]
pub struct LabeledGraph<V: Clone + Eq + Hash, L> {
    vertices: IndexSet<V>,
    edges: Vec<LabeledEdge<V, L>>,
}

impl<V: Clone + Eq + Hash, L> LabeledGraph<V, L> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex. Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, vertex: V) {
        self.vertices.insert(vertex);
    }

    /// Add an edge. Both endpoints are added as vertices if missing.
    pub fn add_edge(&mut self, from: V, label: L, to: V) {
        self.vertices.insert(from.clone());
        self.vertices.insert(to.clone());
        self.edges.push(LabeledEdge { from, label, to });
    }

    /// Iterate over the vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[LabeledEdge<V, L>] {
        &self.edges
    }

    /// Edges leaving `vertex`.
    pub fn edges_from<'a>(&'a self, vertex: &'a V) -> impl Iterator<Item = &'a LabeledEdge<V, L>> {
        self.edges.iter().filter(move |edge| edge.from == *vertex)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl<V: Clone + Eq + Hash, L> Default for LabeledGraph<V, L> {
    fn default() -> Self {
        Self::new()
    }
}
