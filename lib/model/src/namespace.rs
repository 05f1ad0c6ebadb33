use crate::Iri;
use std::fmt;

/// A named IRI prefix, e.g., `xsd: <http://www.w3.org/2001/XMLSchema#>`.
///
/// ```
/// use hexastore_model::{Iri, Namespace};
///
/// let ex = Namespace::new("ex", Iri::new_unchecked("http://example.com/"));
/// assert_eq!(ex.term("alice").as_str(), "http://example.com/alice");
/// assert_eq!(ex.to_string(), "ex: <http://example.com/>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Namespace {
    name: String,
    prefix: Iri,
}

impl Namespace {
    pub fn new(name: impl Into<String>, prefix: Iri) -> Self {
        Self {
            name: name.into(),
            prefix,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> &Iri {
        &self.prefix
    }

    /// Returns the IRI of `local` within this namespace.
    pub fn term(&self, local: &str) -> Iri {
        Iri::new_unchecked(format!("{}{local}", self.prefix))
    }

    /// The XML Schema datatypes namespace.
    pub fn xsd() -> Self {
        Self::new("xsd", Iri::new_unchecked("http://www.w3.org/2001/XMLSchema#"))
    }

    pub fn rdf() -> Self {
        Self::new(
            "rdf",
            Iri::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
        )
    }

    pub fn rdfs() -> Self {
        Self::new(
            "rdfs",
            Iri::new_unchecked("http://www.w3.org/2000/01/rdf-schema#"),
        )
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: <{}>", self.name, self.prefix)
    }
}
