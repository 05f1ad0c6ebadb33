use crate::{ConstructionError, EncodingError};
use std::fmt;
use std::sync::Arc;

/// An absolute identifier of an RDF resource.
///
/// IRIs are ordered by the lexicographic order of their string value.
///
/// ```
/// use hexastore_model::Iri;
///
/// let iri = Iri::new("http://example.com/A")?;
/// assert_eq!(iri.as_str(), "http://example.com/A");
/// assert_eq!(format!("{iri:?}"), r#"IRI(value="http://example.com/A")"#);
/// # Result::<_, hexastore_model::ConstructionError>::Ok(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri {
    value: Arc<str>,
}

impl Iri {
    /// Creates a new [Iri] after checking that `value` is a valid absolute IRI.
    pub fn new(value: impl Into<String>) -> Result<Self, ConstructionError> {
        let value = oxiri::Iri::parse(value.into())?.into_inner();
        Ok(Self::new_unchecked(value))
    }

    /// Creates a new [Iri] without validating `value`.
    ///
    /// Use this for values that come from a trusted source, e.g., an IRI that has already been
    /// validated by a parser.
    pub fn new_unchecked(value: impl Into<Arc<str>>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the canonical UTF-8 encoding of the IRI.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.value.as_bytes().to_vec()
    }

    /// Decodes an IRI from its UTF-8 encoding.
    ///
    /// The decoding is strict: invalid sequences are rejected and never replaced.
    pub fn from_utf8(bytes: Vec<u8>) -> Result<Self, EncodingError> {
        let value = String::from_utf8(bytes)?;
        Ok(Self::new_unchecked(value))
    }
}

impl fmt::Debug for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IRI(value={:?})", self.as_str())
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
