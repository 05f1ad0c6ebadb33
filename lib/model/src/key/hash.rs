use crate::{Key, Term};
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Multiplier for the scope hash of a blank node.
const BLANK_NODE_FACTOR: u64 = 0x1571_b179;
/// Multiplier for the value hash of language-tagged strings and typed literals.
const LITERAL_FACTOR: u64 = 0x093e_0563;
/// Multiplier of the accumulator when folding the elements of a tuple.
const TUPLE_FACTOR: u64 = 0x0100_0000_01b3;
const NULL_HASH: u64 = 0x9e37_79b9_7f4a_7c15;

fn payload_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

fn combine(primary: u64, factor: u64, secondary: u64) -> u64 {
    primary.wrapping_mul(factor).wrapping_add(secondary)
}

pub(crate) fn term_hash(term: &Term) -> u64 {
    match term {
        Term::Null => NULL_HASH,
        Term::BlankNode(node) => combine(
            payload_hash(&node.scope().id()),
            BLANK_NODE_FACTOR,
            payload_hash(&node.id()),
        ),
        Term::Iri(iri) => payload_hash(iri.as_str()),
        Term::PlainString(value) => payload_hash(value.as_str()),
        Term::LangTaggedString(value) => combine(
            payload_hash(value.value()),
            LITERAL_FACTOR,
            payload_hash(value.language()),
        ),
        Term::Numeric(value) => payload_hash(value),
        Term::TypedLiteral(value) => combine(
            payload_hash(value.value()),
            LITERAL_FACTOR,
            payload_hash(value.datatype().as_str()),
        ),
        Term::Variable(variable) => payload_hash(variable.name()),
    }
}

pub(super) fn key_hash(key: &Key) -> u64 {
    match key {
        Key::Term(term) => term_hash(term),
        Key::Tuple(tuple) => tuple
            .elements()
            .iter()
            .fold(payload_hash(&tuple.arity()), |acc, element| {
                combine(acc, TUPLE_FACTOR, key_hash(element))
            }),
    }
}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(term_hash(self));
    }
}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(key_hash(self));
    }
}
