use crate::{IncomparableError, Key, Term, TupleKey};
use std::cmp::Ordering;
use std::ptr;

pub(super) fn compare_keys(lhs: &Key, rhs: &Key) -> Result<Ordering, IncomparableError> {
    match (lhs, rhs) {
        (Key::Term(lhs), Key::Term(rhs)) => compare_terms(lhs, rhs),
        (Key::Tuple(lhs), Key::Tuple(rhs)) => compare_tuples(lhs, rhs),
        _ => Ok(lhs.kind().rank().cmp(&rhs.kind().rank())),
    }
}

pub(crate) fn compare_terms(lhs: &Term, rhs: &Term) -> Result<Ordering, IncomparableError> {
    if ptr::eq(lhs, rhs) {
        return Ok(Ordering::Equal);
    }

    // Payloads are only inspected if both kinds match.
    Ok(match (lhs, rhs) {
        (Term::Null, Term::Null) => Ordering::Equal,
        (Term::BlankNode(lhs), Term::BlankNode(rhs)) => lhs.try_cmp(rhs)?,
        (Term::Iri(lhs), Term::Iri(rhs)) => lhs.cmp(rhs),
        (Term::PlainString(lhs), Term::PlainString(rhs)) => lhs.cmp(rhs),
        (Term::LangTaggedString(lhs), Term::LangTaggedString(rhs)) => lhs.cmp(rhs),
        (Term::Numeric(lhs), Term::Numeric(rhs)) => lhs.cmp(rhs),
        (Term::TypedLiteral(lhs), Term::TypedLiteral(rhs)) => lhs.cmp(rhs),
        (Term::Variable(lhs), Term::Variable(rhs)) => lhs.cmp(rhs),
        _ => lhs.kind().rank().cmp(&rhs.kind().rank()),
    })
}

fn compare_tuples(lhs: &TupleKey, rhs: &TupleKey) -> Result<Ordering, IncomparableError> {
    if lhs.ptr_eq(rhs) {
        return Ok(Ordering::Equal);
    }

    if lhs.arity() != rhs.arity() {
        return Err(IncomparableError::ArityMismatch {
            lhs: lhs.arity(),
            rhs: rhs.arity(),
        });
    }

    for (lhs, rhs) in lhs.elements().iter().zip(rhs.elements()) {
        match compare_keys(lhs, rhs)? {
            Ordering::Equal => {}
            ordering => return Ok(ordering),
        }
    }
    Ok(Ordering::Equal)
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare_terms(self, other).ok()
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}
