//! Finite symbol alphabets.
//!
//! An [`Alphabet`] is a finite set of symbols with set-semantics membership
//! and equality, but insertion-ordered iteration. The ordering matters for
//! reproducibility: conversions that enumerate the alphabet (wildcard
//! elimination, determinization, totality checks) visit symbols in a stable
//! order, so the same input automaton always yields the same output
//! automaton.

use indexmap::IndexSet;
use std::fmt::Debug;
use std::hash::Hash;

/// A finite, insertion-ordered set of symbols.
///
/// Symbols are opaque to the engine: anything `Clone + Eq + Hash + Debug`
/// works. Two alphabets are equal iff they contain the same symbols,
/// regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alphabet<T: Clone + Eq + Hash> {
    symbols: IndexSet<T>,
}

impl<T: Clone + Eq + Hash> Alphabet<T> {
    /// Create an empty alphabet.
    pub fn new() -> Self {
        Self {
            symbols: IndexSet::new(),
        }
    }

    /// Insert a symbol. Returns `false` if it was already present.
    pub fn insert(&mut self, symbol: T) -> bool {
        self.symbols.insert(symbol)
    }

    /// Whether `symbol` is a member of this alphabet.
    pub fn contains(&self, symbol: &T) -> bool {
        self.symbols.contains(symbol)
    }

    /// Iterate over the symbols in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.symbols.iter()
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Map every symbol through `f`, producing a new alphabet.
    ///
    /// If `f` is not injective the result is smaller than the input; callers
    /// that rely on language preservation must pass an injective `f`.
    pub fn map<U: Clone + Eq + Hash>(&self, f: impl FnMut(&T) -> U) -> Alphabet<U> {
        Alphabet {
            symbols: self.symbols.iter().map(f).collect(),
        }
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for Alphabet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl<'a, T: Clone + Eq + Hash> IntoIterator for &'a Alphabet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_set_semantics() {
        let a: Alphabet<char> = ['a', 'b', 'a'].into_iter().collect();
        assert_eq!(a.len(), 2);
        assert!(a.contains(&'a'));
        assert!(!a.contains(&'c'));
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let a: Alphabet<char> = ['z', 'a', 'm'].into_iter().collect();
        let order: Vec<char> = a.iter().copied().collect();
        assert_eq!(order, vec!['z', 'a', 'm']);
    }

    #[test]
    fn equality_ignores_order() {
        let a: Alphabet<u32> = [1, 2, 3].into_iter().collect();
        let b: Alphabet<u32> = [3, 2, 1].into_iter().collect();
        assert_eq!(a, b);
    }
}
