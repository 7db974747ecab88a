//! The shared determinacy fault model.
//!
//! Determinism and totality are diagnosed, not just decided: the analysis
//! of an automaton produces a collection of [`DeterminacyFault`] records, a
//! reason-tagged diagnostic per violation. The three reasons are shared
//! across automaton kinds; each kind attaches its own detail payload (the
//! NFA records the ambiguous symbol and the states it reaches, the PDA
//! records input symbol, stack symbol, and successor count).
//!
//! Determinacy and totality are independent axes:
//! deterministic ⇔ no ambiguous-transition and no multiple-initial-states
//! fault; total ⇔ no missing-transition fault. A collection can carry
//! faults of either kind, both, or neither.

use crate::fault::FaultCollection;
use std::fmt;

/// Why an automaton fails to be deterministic or total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeterminacyReason {
    /// More than one transition can fire in the same situation (any epsilon
    /// transition counts: it is usable without consuming input, which
    /// already violates determinism).
    AmbiguousTransition,
    /// No transition can fire in some situation; violates totality.
    MissingTransition,
    /// More than one initial state is declared.
    MultipleInitialStates,
}

impl fmt::Display for DeterminacyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DeterminacyReason::AmbiguousTransition => "ambiguous transition",
            DeterminacyReason::MissingTransition => "missing transition",
            DeterminacyReason::MultipleInitialStates => "multiple initial states",
        };
        f.write_str(text)
    }
}

/// One diagnosed determinacy violation: the reason, the offending state,
/// and a kind-specific detail payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason} at state {state:?}: {detail}")]
pub struct DeterminacyFault<S: fmt::Debug, D: fmt::Display> {
    /// The reason taxonomy entry.
    pub reason: DeterminacyReason,
    /// The state at which the violation was diagnosed.
    pub state: S,
    /// Kind-specific detail (symbol, reached states, successor counts).
    pub detail: D,
}

impl<S: fmt::Debug, D: fmt::Display> FaultCollection<DeterminacyFault<S, D>> {
    /// Whether any recorded fault carries the given reason.
    pub fn has_reason(&self, reason: DeterminacyReason) -> bool {
        self.iter().any(|fault| fault.reason == reason)
    }

    /// Derived determinism: no ambiguous transitions, one initial state.
    pub fn is_deterministic(&self) -> bool {
        !self.has_reason(DeterminacyReason::AmbiguousTransition)
            && !self.has_reason(DeterminacyReason::MultipleInitialStates)
    }

    /// Derived totality: no missing transitions.
    pub fn is_total(&self) -> bool {
        !self.has_reason(DeterminacyReason::MissingTransition)
    }
}
