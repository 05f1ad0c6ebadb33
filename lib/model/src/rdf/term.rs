use crate::key::{compare_terms, term_hash};
use crate::{
    BlankNode, BlankNodeFactory, ConstructionError, DecodedTerm, DecodedTermRef,
    IncomparableError, Iri, LangTaggedString, NumericDatatypes, NumericLiteral, PlainString,
    TypedLiteral, Variable,
};
use oxrdf::vocab::xsd;
use oxrdf::{Literal, NamedNode};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// The kind of a key. The kinds form a fixed, closed table that defines the order between keys of
/// different kinds.
///
/// The declaration order is the order of the kinds:
/// `Null < Tuple < BlankNode < Iri < PlainString < LangTaggedString < Numeric < TypedLiteral < Variable`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TermKind {
    Null,
    Tuple,
    BlankNode,
    Iri,
    PlainString,
    LangTaggedString,
    Numeric,
    TypedLiteral,
    Variable,
}

impl TermKind {
    /// All kinds in ascending order.
    pub const ALL: [TermKind; 9] = [
        TermKind::Null,
        TermKind::Tuple,
        TermKind::BlankNode,
        TermKind::Iri,
        TermKind::PlainString,
        TermKind::LangTaggedString,
        TermKind::Numeric,
        TermKind::TypedLiteral,
        TermKind::Variable,
    ];

    /// Returns the rank of the kind.
    ///
    /// Numeric literals occupy the ranks six to eight as a single band, so typed literals have
    /// the rank nine and variables the rank ten.
    pub const fn rank(self) -> u8 {
        match self {
            TermKind::Null => 0,
            TermKind::Tuple => 1,
            TermKind::BlankNode => 2,
            TermKind::Iri => 3,
            TermKind::PlainString => 4,
            TermKind::LangTaggedString => 5,
            TermKind::Numeric => 6,
            TermKind::TypedLiteral => 9,
            TermKind::Variable => 10,
        }
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        TermKind::ALL.into_iter().find(|kind| kind.rank() == rank)
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TermKind::Null => "Null",
            TermKind::Tuple => "Tuple",
            TermKind::BlankNode => "BlankNode",
            TermKind::Iri => "IRI",
            TermKind::PlainString => "PlainString",
            TermKind::LangTaggedString => "LangTaggedString",
            TermKind::Numeric => "NumericLiteral",
            TermKind::TypedLiteral => "TypedLiteral",
            TermKind::Variable => "Variable",
        };
        f.write_str(name)
    }
}

/// An immutable RDF term, a query variable, or the absent marker [Term::Null].
///
/// Terms are cheap to clone as all string payloads are shared. Equality and hashing never change
/// over the lifetime of a term. The order is defined by [Key](crate::Key).
#[derive(Clone, PartialEq, Eq)]
pub enum Term {
    Null,
    BlankNode(BlankNode),
    Iri(Iri),
    PlainString(PlainString),
    LangTaggedString(LangTaggedString),
    Numeric(NumericLiteral),
    TypedLiteral(TypedLiteral),
    Variable(Variable),
}

impl Term {
    pub fn kind(&self) -> TermKind {
        match self {
            Term::Null => TermKind::Null,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Iri(_) => TermKind::Iri,
            Term::PlainString(_) => TermKind::PlainString,
            Term::LangTaggedString(_) => TermKind::LangTaggedString,
            Term::Numeric(_) => TermKind::Numeric,
            Term::TypedLiteral(_) => TermKind::TypedLiteral,
            Term::Variable(_) => TermKind::Variable,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Term::Null)
    }

    /// Orders two terms.
    ///
    /// Terms of different kinds are ordered by the rank of their [TermKind]. Terms of the same
    /// kind are ordered by their payload. Fails for blank nodes from different scopes.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, IncomparableError> {
        compare_terms(self, other)
    }

    /// Returns the fixed-width hash of the term. Equal terms have equal hashes.
    pub fn key_hash(&self) -> u64 {
        term_hash(self)
    }

    /// Creates a typed literal from a dynamically typed `datatype`.
    ///
    /// Fails if `datatype` is not an [Iri].
    pub fn typed_literal(
        value: impl Into<Arc<str>>,
        datatype: Term,
    ) -> Result<Self, ConstructionError> {
        TypedLiteral::try_new(value, datatype).map(Term::TypedLiteral)
    }

    /// Creates the term for the literal `value` with the given `datatype`.
    ///
    /// Literals of a datatype registered in `numerics` become [NumericLiteral]s and fail if
    /// `value` is not a valid lexical form. `xsd:string` literals become [PlainString]s. All other
    /// literals become [TypedLiteral]s.
    pub fn literal(
        value: &str,
        datatype: &Iri,
        numerics: &NumericDatatypes,
    ) -> Result<Self, ConstructionError> {
        if datatype.as_str() == xsd::STRING.as_str() {
            return Ok(Term::PlainString(PlainString::new(value)));
        }

        match numerics.kind_of(datatype) {
            Some(kind) => Ok(Term::Numeric(NumericLiteral::parse(value, kind)?)),
            None => Ok(Term::TypedLiteral(TypedLiteral::new(value, datatype.clone()))),
        }
    }

    /// Creates a numeric literal. Fails if `datatype` is not registered in `numerics`.
    pub fn numeric_literal(
        value: &str,
        datatype: &Iri,
        numerics: &NumericDatatypes,
    ) -> Result<Self, ConstructionError> {
        let kind = numerics.kind_of(datatype).ok_or_else(|| {
            ConstructionError::NotNumericDatatype {
                datatype: datatype.as_str().to_owned(),
            }
        })?;
        Ok(Term::Numeric(NumericLiteral::parse(value, kind)?))
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            Term::BlankNode(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericLiteral> {
        match self {
            Term::Numeric(numeric) => Some(numeric),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Term::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    /// Returns the string payload of the term, if the term carries one.
    ///
    /// For language-tagged strings and typed literals, this is the lexical value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri.as_str()),
            Term::PlainString(value) => Some(value.as_str()),
            Term::LangTaggedString(value) => Some(value.value()),
            Term::TypedLiteral(value) => Some(value.value()),
            Term::Variable(variable) => Some(variable.name()),
            Term::Null | Term::BlankNode(_) | Term::Numeric(_) => None,
        }
    }

    /// Converts the term into the oxrdf data model, e.g., for handing it to a serializer.
    ///
    /// Returns `None` for [Term::Null] and [Term::Variable] as they are not RDF terms. Blank nodes
    /// are mapped to a unique id derived from their scope and id.
    ///
    /// Numeric literals are written with the datatype of their [NumericKind](crate::NumericKind)
    /// and their canonical lexical form. Hence, an `xsd:int` or `xsd:float` literal, or one of a
    /// custom registered datatype, comes back as `xsd:integer`, `xsd:decimal`, or `xsd:double`, and
    /// a lexical form such as `"01"` comes back as `"1"`.
    pub fn to_decoded(&self) -> Option<DecodedTerm> {
        Some(match self {
            Term::Null | Term::Variable(_) => return None,
            Term::BlankNode(node) => {
                let scope = u128::from(node.scope().id().as_u64());
                let unique_id = (scope << 64) | u128::from(node.id());
                DecodedTerm::BlankNode(oxrdf::BlankNode::new_from_unique_id(unique_id))
            }
            Term::Iri(iri) => DecodedTerm::NamedNode(NamedNode::new_unchecked(iri.as_str())),
            Term::PlainString(value) => Literal::new_simple_literal(value.as_str()).into(),
            Term::LangTaggedString(value) => {
                Literal::new_language_tagged_literal_unchecked(value.value(), value.language())
                    .into()
            }
            Term::Numeric(value) => {
                Literal::new_typed_literal(value.to_string(), value.kind().datatype()).into()
            }
            Term::TypedLiteral(value) => Literal::new_typed_literal(
                value.value(),
                NamedNode::new_unchecked(value.datatype().as_str()),
            )
            .into(),
        })
    }

    /// Creates a term from a parsed oxrdf term.
    ///
    /// Blank node labels are resolved by `blank_nodes`, so the same label yields the same blank
    /// node for the lifetime of the factory.
    pub fn from_decoded(
        term: DecodedTermRef<'_>,
        blank_nodes: &mut BlankNodeFactory,
        numerics: &NumericDatatypes,
    ) -> Result<Self, ConstructionError> {
        Ok(match term {
            DecodedTermRef::NamedNode(node) => Term::Iri(Iri::new_unchecked(node.as_str())),
            DecodedTermRef::BlankNode(node) => {
                Term::BlankNode(blank_nodes.for_label(node.as_str())?)
            }
            DecodedTermRef::Literal(literal) => match literal.language() {
                Some(language) => Term::LangTaggedString(LangTaggedString::new_unchecked(
                    literal.value(),
                    language,
                )),
                None => Term::literal(
                    literal.value(),
                    &Iri::new_unchecked(literal.datatype().as_str()),
                    numerics,
                )?,
            },
        })
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Null => f.write_str("Null"),
            Term::BlankNode(inner) => inner.fmt(f),
            Term::Iri(inner) => inner.fmt(f),
            Term::PlainString(inner) => inner.fmt(f),
            Term::LangTaggedString(inner) => inner.fmt(f),
            Term::Numeric(inner) => inner.fmt(f),
            Term::TypedLiteral(inner) => inner.fmt(f),
            Term::Variable(inner) => inner.fmt(f),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Null => f.write_str("null"),
            Term::BlankNode(inner) => inner.fmt(f),
            Term::Iri(inner) => inner.fmt(f),
            Term::PlainString(inner) => inner.fmt(f),
            Term::LangTaggedString(inner) => inner.fmt(f),
            Term::Numeric(inner) => inner.fmt(f),
            Term::TypedLiteral(inner) => inner.fmt(f),
            Term::Variable(inner) => inner.fmt(f),
        }
    }
}

macro_rules! impl_from {
    ($TYPE: ty, $VARIANT: path) => {
        impl From<$TYPE> for Term {
            fn from(value: $TYPE) -> Self {
                $VARIANT(value)
            }
        }
    };
}

impl_from!(BlankNode, Term::BlankNode);
impl_from!(Iri, Term::Iri);
impl_from!(PlainString, Term::PlainString);
impl_from!(LangTaggedString, Term::LangTaggedString);
impl_from!(NumericLiteral, Term::Numeric);
impl_from!(TypedLiteral, Term::TypedLiteral);
impl_from!(Variable, Term::Variable);
