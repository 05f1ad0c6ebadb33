use crate::{ConstructionError, Iri, Term};
use std::fmt;
use std::sync::Arc;

/// A literal with an explicit datatype IRI.
///
/// Like [LangTaggedString](crate::LangTaggedString), typed literals are compared by their value
/// first. The datatype only breaks ties between equal values.
// The derived order relies on the field order.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypedLiteral {
    value: Arc<str>,
    datatype: Iri,
}

impl TypedLiteral {
    pub fn new(value: impl Into<Arc<str>>, datatype: Iri) -> Self {
        Self {
            value: value.into(),
            datatype,
        }
    }

    /// Creates a new [TypedLiteral] from a dynamically typed `datatype`.
    ///
    /// Fails if `datatype` is not an [Iri]. A string is never wrapped into an IRI implicitly.
    pub fn try_new(value: impl Into<Arc<str>>, datatype: Term) -> Result<Self, ConstructionError> {
        match datatype {
            Term::Iri(datatype) => Ok(Self::new(value, datatype)),
            other => Err(ConstructionError::DatatypeNotIri {
                found: other.kind(),
            }),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn datatype(&self) -> &Iri {
        &self.datatype
    }
}

impl fmt::Debug for TypedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TypedLiteral(value={:?}, datatype={:?})",
            self.value(),
            self.datatype
        )
    }
}

impl fmt::Display for TypedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}^^{}", self.value(), self.datatype)
    }
}
