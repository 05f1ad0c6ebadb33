mod blank_node;
mod iri;
mod language_string;
mod plain_string;
mod term;
mod typed_literal;
mod variable;

pub use blank_node::{BlankNode, BlankNodeFactory, BlankNodeScope, ScopeId};
pub use iri::Iri;
pub use language_string::LangTaggedString;
pub use plain_string::PlainString;
pub use term::{Term, TermKind};
pub use typed_literal::TypedLiteral;
pub use variable::Variable;
