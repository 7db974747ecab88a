//! Fault records and fault aggregation.
//!
//! Recoverable problems — malformed builder input, determinism violations
//! where determinism is required — are never reported by panicking. Each
//! problem becomes one immutable, reason-tagged fault record, and all
//! records for an operation are aggregated into a [`FaultCollection`] so a
//! caller sees every problem at once instead of stopping at the first.

use std::fmt;

/// An aggregated, ordered collection of fault records.
///
/// Returned in the `Err` position of builder and validation results. The
/// collection preserves the order in which faults were discovered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FaultCollection<F> {
    faults: Vec<F>,
}

impl<F> FaultCollection<F> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { faults: Vec::new() }
    }

    /// Record one fault.
    pub fn push(&mut self, fault: F) {
        self.faults.push(fault);
    }

    /// Whether no faults were recorded.
    pub fn is_empty(&self) -> bool {
        self.faults.is_empty()
    }

    /// Number of recorded faults.
    pub fn len(&self) -> usize {
        self.faults.len()
    }

    /// Iterate over the fault records in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.faults.iter()
    }

    /// Consume the collection, yielding the raw records.
    pub fn into_vec(self) -> Vec<F> {
        self.faults
    }

    /// Turn the collection into a `Result`: `Ok(value)` iff no faults were
    /// recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl<F> FromIterator<F> for FaultCollection<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self {
            faults: iter.into_iter().collect(),
        }
    }
}

impl<F> IntoIterator for FaultCollection<F> {
    type Item = F;
    type IntoIter = std::vec::IntoIter<F>;

    fn into_iter(self) -> Self::IntoIter {
        self.faults.into_iter()
    }
}

impl<'a, F> IntoIterator for &'a FaultCollection<F> {
    type Item = &'a F;
    type IntoIter = std::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.faults.iter()
    }
}

impl<F> Extend<F> for FaultCollection<F> {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        self.faults.extend(iter);
    }
}

impl<F: fmt::Display> fmt::Display for FaultCollection<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fault(s):", self.faults.len())?;
        for fault in &self.faults {
            write!(f, "\n  - {fault}")?;
        }
        Ok(())
    }
}

impl<F: fmt::Debug + fmt::Display> std::error::Error for FaultCollection<F> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_result_distinguishes_empty_from_nonempty() {
        let empty: FaultCollection<&str> = FaultCollection::new();
        assert_eq!(empty.into_result(42), Ok(42));

        let mut faults = FaultCollection::new();
        faults.push("bad state");
        faults.push("bad symbol");
        let err = faults.clone().into_result(42).unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(err, faults);
    }

    #[test]
    fn display_enumerates_all_faults() {
        let faults: FaultCollection<&str> = ["first", "second"].into_iter().collect();
        let text = faults.to_string();
        assert!(text.contains("2 fault(s)"));
        assert!(text.contains("first"));
        assert!(text.contains("second"));
    }
}
