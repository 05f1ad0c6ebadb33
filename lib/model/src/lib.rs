//! The term model of a hexastore.
//!
//! A hexastore indexes every triple under all six permutations of its components. Each index is a
//! sorted sequence of [Key]s, so every index depends on the total order over keys defined in
//! this crate. The crate provides:
//! - [Term], the closed set of RDF terms, query variables, and [Term::Null].
//! - [BlankNodeScope] and [BlankNodeFactory] for scoped blank node identity.
//! - [Key], single terms or fixed-arity tuples, with [Key::try_cmp] and [Key::key_hash].
//! - A canonical byte encoding of keys ([encode_key], [decode_key]).
//! - [NumericDatatypes], the registry of datatypes that are treated as numeric literals.

mod codec;
mod error;
mod key;
mod namespace;
mod rdf;
mod triple;
mod xsd;

pub use codec::{decode_key, encode_key, MAX_KEY_DEPTH};
pub use error::*;
pub use key::{bisect_left, bisect_right, insert_sorted, sort_keys, Key, TupleKey};
pub use namespace::Namespace;
pub use rdf::*;
pub use triple::{Triple, TripleComponent, TriplePermutation};
pub use xsd::*;

// Re-export the oxrdf terms used for interop.
pub use oxrdf::Term as DecodedTerm;
pub use oxrdf::TermRef as DecodedTermRef;
