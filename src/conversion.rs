//! The conversion contract shared by every automaton rewrite.
//!
//! A conversion establishes one structural property (no epsilon
//! transitions, a single initial state, only reachable states, …) while
//! preserving the recognized language. Every conversion answers three
//! questions: does the property already hold ([`Conversion::is_redundant`]),
//! what is the type-correct copy when it does ([`Conversion::identity`]),
//! and how is the automaton rewritten when it does not
//! ([`Conversion::convert`]).
//!
//! [`Conversion::apply`] is the only entry point callers should use: it
//! dispatches between the two paths, which makes every conversion idempotent
//! in its semantics and guarantees a fresh output value on every call — the
//! input automaton is never mutated and never returned.

/// An equivalence-preserving structural rewrite of an automaton.
pub trait Conversion {
    /// Input automaton type.
    type Input;
    /// Output automaton type (may differ from the input in its state or
    /// symbol types, or be a `Result` when the conversion has
    /// preconditions).
    type Output;

    /// Whether the structural property this conversion establishes already
    /// holds for `input`.
    fn is_redundant(&self, input: &Self::Input) -> bool;

    /// Produce a fresh, type-correct copy of `input` without rewriting it.
    ///
    /// Called by [`Conversion::apply`] when [`Conversion::is_redundant`]
    /// holds. The result is a new value, never the input itself.
    fn identity(&self, input: &Self::Input) -> Self::Output;

    /// Perform the rewrite. Callers should prefer [`Conversion::apply`].
    fn convert(&self, input: &Self::Input) -> Self::Output;

    /// Apply the conversion: dispatch to [`Conversion::identity`] when the
    /// property already holds, else to [`Conversion::convert`].
    fn apply(&self, input: &Self::Input) -> Self::Output {
        if self.is_redundant(input) {
            self.identity(input)
        } else {
            self.convert(input)
        }
    }
}
