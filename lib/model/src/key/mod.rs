//! Index keys and their total order.

mod compare;
mod hash;
mod search;

pub(crate) use compare::compare_terms;
pub(crate) use hash::term_hash;
pub use search::{bisect_left, bisect_right, insert_sorted, sort_keys};

use crate::{IncomparableError, Term, TermKind};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// A comparable and hashable index entry.
///
/// A key is either a single [Term] or a fixed-arity tuple of keys. Every index of the store holds
/// keys of one arity (e.g., the three components of a triple in some permutation) and relies on
/// [Key::try_cmp] for its sort order and on [Key::key_hash] for hash-based lookups.
///
/// The order first compares the [TermKind] ranks of both keys. Only keys of the same kind are
/// compared by their contents:
/// - Tuples compare lexicographically. Tuples of different arity are incomparable.
/// - Blank nodes of one scope compare by id. Blank nodes of different scopes are incomparable.
/// - Language-tagged strings and typed literals compare by value and use the language or datatype
///   only as a tie-breaker.
/// - All other kinds use the natural order of their payload.
///
/// Equality never fails. Keys of different kinds are never equal.
#[derive(Clone, PartialEq, Eq)]
pub enum Key {
    Term(Term),
    Tuple(TupleKey),
}

impl Key {
    /// Creates a tuple key from the given elements.
    pub fn tuple(elements: impl IntoIterator<Item = Key>) -> Self {
        Key::Tuple(TupleKey::new(elements))
    }

    pub fn kind(&self) -> TermKind {
        match self {
            Key::Term(term) => term.kind(),
            Key::Tuple(_) => TermKind::Tuple,
        }
    }

    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Key::Term(term) => Some(term),
            Key::Tuple(_) => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&TupleKey> {
        match self {
            Key::Term(_) => None,
            Key::Tuple(tuple) => Some(tuple),
        }
    }

    /// Orders two keys. See [Key] for the rules.
    ///
    /// ```
    /// use hexastore_model::{Iri, Key, Term, Variable};
    /// use std::cmp::Ordering;
    ///
    /// let iri = Key::from(Term::from(Iri::new_unchecked("http://example.com/a")));
    /// let variable = Key::from(Term::from(Variable::new("a")));
    /// assert_eq!(iri.try_cmp(&variable), Ok(Ordering::Less));
    /// ```
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, IncomparableError> {
        compare::compare_keys(self, other).inspect_err(|error| {
            tracing::trace!(%error, lhs = %self, rhs = %other, "Keys are incomparable");
        })
    }

    /// Returns the fixed-width hash of the key. Equal keys have equal hashes.
    pub fn key_hash(&self) -> u64 {
        hash::key_hash(self)
    }
}

impl From<Term> for Key {
    fn from(term: Term) -> Self {
        Key::Term(term)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Term(term) => term.fmt(f),
            Key::Tuple(tuple) => tuple.fmt(f),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Term(term) => term.fmt(f),
            Key::Tuple(tuple) => tuple.fmt(f),
        }
    }
}

/// An immutable, fixed-arity sequence of keys.
///
/// The elements are shared, so cloning a tuple never copies its elements.
#[derive(Clone)]
pub struct TupleKey(Arc<[Key]>);

impl TupleKey {
    pub fn new(elements: impl IntoIterator<Item = Key>) -> Self {
        Self(elements.into_iter().collect())
    }

    pub fn arity(&self) -> usize {
        self.0.len()
    }

    pub fn elements(&self) -> &[Key] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&Key> {
        self.0.get(index)
    }

    /// Returns true if both tuples share the same elements in memory.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for TupleKey {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl Eq for TupleKey {}

impl<'a> IntoIterator for &'a TupleKey {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Debug for TupleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("");
        for element in self {
            tuple.field(element);
        }
        tuple.finish()
    }
}

impl fmt::Display for TupleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, element) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str(")")
    }
}
