//! Fresh identifiers for generated states and stack symbols.
//!
//! Several conversions introduce states (or stack symbols) that did not
//! exist in the input automaton: the single-initial-state conversions, the
//! acceptance-strategy conversions (bottom-of-stack marker, bookkeeping
//! states), and the stack-write-limit chains. Generated identifiers must
//! never collide with caller-supplied values or with identifiers generated
//! by an earlier conversion stage.
//!
//! The scheme here is flat: a value is either [`MaybeFresh::Input`]
//! (caller-supplied) or [`MaybeFresh::Generated`] (a [`FreshId`] tagged with
//! the provenance stage that created it plus a serial number). An allocator
//! is seeded by scanning the automaton under construction for the highest
//! serial already in use, so chained stages draw from one shared counter and
//! cannot collide regardless of how many stages ran before.

use std::fmt;
use std::hash::Hash;

/// Identifier of a generated state or stack symbol.
///
/// `stage` names the conversion stage that generated the value (for
/// human-readable output such as `"single-initial#0"`); `serial` makes the
/// identifier unique across all stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FreshId {
    /// Provenance label of the conversion stage that generated this id.
    pub stage: &'static str,
    /// Serial number, unique within one automaton across all stages.
    pub serial: u64,
}

impl fmt::Display for FreshId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.stage, self.serial)
    }
}

/// A state or stack symbol that is either caller-supplied or generated by a
/// conversion stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MaybeFresh<T> {
    /// A value from the input automaton.
    Input(T),
    /// A value generated by a conversion stage.
    Generated(FreshId),
}

impl<T> MaybeFresh<T> {
    /// The caller-supplied value, if this is not a generated one.
    pub fn as_input(&self) -> Option<&T> {
        match self {
            MaybeFresh::Input(value) => Some(value),
            MaybeFresh::Generated(_) => None,
        }
    }

    /// Whether this value was generated by a conversion stage.
    pub fn is_generated(&self) -> bool {
        matches!(self, MaybeFresh::Generated(_))
    }
}

impl<T: fmt::Display> fmt::Display for MaybeFresh<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaybeFresh::Input(value) => value.fmt(f),
            MaybeFresh::Generated(id) => id.fmt(f),
        }
    }
}

/// Allocator handing out collision-free [`FreshId`]s for one conversion
/// stage over one automaton.
#[derive(Debug)]
pub struct FreshIdAllocator {
    stage: &'static str,
    next_serial: u64,
}

impl FreshIdAllocator {
    /// Allocator for an automaton that contains no generated values yet.
    pub fn new(stage: &'static str) -> Self {
        Self {
            stage,
            next_serial: 0,
        }
    }

    /// Allocator seeded past every serial already present in `existing`.
    ///
    /// `existing` should yield every `MaybeFresh` value of the automaton
    /// under construction (states and stack symbols alike); the allocator
    /// then starts above the highest serial found, so ids from earlier
    /// stages are never reissued.
    pub fn seeded<'a, T: 'a>(
        stage: &'static str,
        existing: impl IntoIterator<Item = &'a MaybeFresh<T>>,
    ) -> Self {
        let next_serial = existing
            .into_iter()
            .filter_map(|value| match value {
                MaybeFresh::Generated(id) => Some(id.serial + 1),
                MaybeFresh::Input(_) => None,
            })
            .max()
            .unwrap_or(0);
        Self { stage, next_serial }
    }

    /// Hand out the next fresh identifier.
    pub fn fresh(&mut self) -> FreshId {
        let id = FreshId {
            stage: self.stage,
            serial: self.next_serial,
        };
        self.next_serial += 1;
        id
    }

    /// Hand out the next fresh identifier, wrapped as a `MaybeFresh` value.
    pub fn fresh_value<T>(&mut self) -> MaybeFresh<T> {
        MaybeFresh::Generated(self.fresh())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_allocator_skips_existing_serials() {
        let existing: Vec<MaybeFresh<&str>> = vec![
            MaybeFresh::Input("p"),
            MaybeFresh::Generated(FreshId {
                stage: "single-initial",
                serial: 0,
            }),
            MaybeFresh::Generated(FreshId {
                stage: "empty-stack",
                serial: 3,
            }),
        ];
        let mut alloc = FreshIdAllocator::seeded("stack-writes", existing.iter());
        assert_eq!(alloc.fresh().serial, 4);
        assert_eq!(alloc.fresh().serial, 5);
    }

    #[test]
    fn ids_from_different_stages_never_compare_equal() {
        let a = FreshId {
            stage: "single-initial",
            serial: 0,
        };
        let b = FreshId {
            stage: "empty-stack",
            serial: 0,
        };
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "single-initial#0");
    }
}
