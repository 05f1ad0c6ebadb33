//! Triples and the six component orders a hexastore indexes them in.

use crate::{Key, Term};
use std::fmt;

/// A subject-predicate-object triple.
///
/// Patterns of a query use the same type with [Variable](crate::Variable)s in unbound positions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl Triple {
    pub fn new(
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    pub fn get(&self, component: TripleComponent) -> &Term {
        match component {
            TripleComponent::Subject => &self.subject,
            TripleComponent::Predicate => &self.predicate,
            TripleComponent::Object => &self.object,
        }
    }

    /// Applies `f` to every component.
    #[must_use]
    pub fn map(self, mut f: impl FnMut(Term) -> Term) -> Self {
        Self {
            subject: f(self.subject),
            predicate: f(self.predicate),
            object: f(self.object),
        }
    }

    /// Creates the composite key of this triple for an index with the given `permutation`.
    pub fn to_key(&self, permutation: TriplePermutation) -> Key {
        Key::tuple(
            permutation
                .components()
                .iter()
                .map(|component| Key::Term(self.get(*component).clone())),
        )
    }

    /// Restores a triple from a key that has been created with [Triple::to_key].
    ///
    /// Returns `None` if `key` is not a tuple of three terms.
    pub fn from_key(key: &Key, permutation: TriplePermutation) -> Option<Self> {
        let tuple = key.as_tuple()?;
        if tuple.arity() != 3 {
            return None;
        }

        let mut triple = Triple::new(Term::Null, Term::Null, Term::Null);
        for (component, element) in permutation.components().iter().zip(tuple) {
            let term = element.as_term()?.clone();
            match component {
                TripleComponent::Subject => triple.subject = term,
                TripleComponent::Predicate => triple.predicate = term,
                TripleComponent::Object => triple.object = term,
            }
        }
        Some(triple)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

/// A position within a [Triple].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TripleComponent {
    Subject,
    Predicate,
    Object,
}

impl fmt::Display for TripleComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripleComponent::Subject => write!(f, "S"),
            TripleComponent::Predicate => write!(f, "P"),
            TripleComponent::Object => write!(f, "O"),
        }
    }
}

/// The order of the triple components in the keys of one index.
///
/// A pattern with some bound positions is best answered by an index whose leading components are
/// exactly these positions. For example, `?s <P> <O>` is a range scan in a POS or OPS index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriplePermutation([TripleComponent; 3]);

impl TriplePermutation {
    pub const SPO: TriplePermutation = TriplePermutation([
        TripleComponent::Subject,
        TripleComponent::Predicate,
        TripleComponent::Object,
    ]);
    pub const SOP: TriplePermutation = TriplePermutation([
        TripleComponent::Subject,
        TripleComponent::Object,
        TripleComponent::Predicate,
    ]);
    pub const PSO: TriplePermutation = TriplePermutation([
        TripleComponent::Predicate,
        TripleComponent::Subject,
        TripleComponent::Object,
    ]);
    pub const POS: TriplePermutation = TriplePermutation([
        TripleComponent::Predicate,
        TripleComponent::Object,
        TripleComponent::Subject,
    ]);
    pub const OSP: TriplePermutation = TriplePermutation([
        TripleComponent::Object,
        TripleComponent::Subject,
        TripleComponent::Predicate,
    ]);
    pub const OPS: TriplePermutation = TriplePermutation([
        TripleComponent::Object,
        TripleComponent::Predicate,
        TripleComponent::Subject,
    ]);

    /// All six permutations.
    pub const ALL: [TriplePermutation; 6] = [
        Self::SPO,
        Self::SOP,
        Self::PSO,
        Self::POS,
        Self::OSP,
        Self::OPS,
    ];

    pub fn components(&self) -> &[TripleComponent; 3] {
        &self.0
    }
}

impl fmt::Display for TriplePermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in &self.0 {
            write!(f, "{component}")?;
        }
        Ok(())
    }
}
