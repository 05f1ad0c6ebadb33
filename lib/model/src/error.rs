use crate::{NumericKind, ScopeId, TermKind};
use oxiri::IriParseError;
use thiserror::Error;

/// A result of any operation in this crate.
pub type ModelResult<T> = Result<T, ModelError>;

/// Groups all errors of the term model for hosts that want to handle them uniformly.
///
/// All of these errors are local and synchronous. None of them is transient, so retrying the
/// offending call never helps.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    Incomparable(#[from] IncomparableError),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// A term could not be constructed from the given parts.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConstructionError {
    /// The datatype of a typed literal must already be an IRI. It is never wrapped implicitly.
    #[error("The datatype of a typed literal must be an IRI, found {found}")]
    DatatypeNotIri { found: TermKind },
    #[error("Invalid IRI: {0}")]
    InvalidIri(#[from] IriParseError),
    #[error("Invalid language tag '{tag}'")]
    InvalidLanguageTag { tag: String },
    #[error("'{value}' is not a valid lexical form for a {kind} literal")]
    InvalidNumeric { value: String, kind: NumericKind },
    #[error("<{datatype}> is not a registered numeric datatype")]
    NotNumericDatatype { datatype: String },
    #[error("All blank node ids of scope {scope} have been handed out")]
    BlankNodeIdsExhausted { scope: ScopeId },
    #[error("The numeric datatype registry has already been installed or read")]
    RegistryAlreadyInstalled,
}

/// The order does not define a relation between the two operands.
///
/// Equality is always decidable and never produces this error. Only ordering requests do.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum IncomparableError {
    /// Blank nodes minted in different scopes have no relative order.
    #[error("Blank nodes of different scopes ({lhs} and {rhs}) cannot be ordered")]
    BlankNodeScopes { lhs: ScopeId, rhs: ScopeId },
    /// Composite keys of one index always have the same arity.
    #[error("Composite keys of arity {lhs} and {rhs} cannot be ordered")]
    ArityMismatch { lhs: usize, rhs: usize },
}

/// A term could not be converted to or from its byte representation.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodingError {
    #[error("Invalid UTF-8 sequence after {valid_up_to} bytes")]
    InvalidUtf8 { valid_up_to: usize },
    /// Blank node scopes only exist within a process and have no byte representation.
    #[error("Blank nodes cannot be encoded outside of their scope")]
    UnscopedBlankNode,
    #[error("Payload of {len} bytes exceeds the maximum encodable length")]
    TooLong { len: usize },
    #[error("Tuples are nested deeper than {max_depth} levels")]
    TooDeep { max_depth: usize },
    #[error("Unexpected end of input")]
    Truncated,
    #[error("Unknown term tag {tag}")]
    UnknownTag { tag: u8 },
    #[error("Invalid encoded numeric literal '{value}'")]
    InvalidNumeric { value: String },
    #[error("{remaining} bytes remain after the encoded key")]
    TrailingBytes { remaining: usize },
}

impl From<std::str::Utf8Error> for EncodingError {
    fn from(error: std::str::Utf8Error) -> Self {
        EncodingError::InvalidUtf8 {
            valid_up_to: error.valid_up_to(),
        }
    }
}

impl From<std::string::FromUtf8Error> for EncodingError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        error.utf8_error().into()
    }
}
