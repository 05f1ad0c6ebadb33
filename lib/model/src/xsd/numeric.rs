use crate::ConstructionError;
use oxrdf::vocab::xsd;
use oxrdf::NamedNodeRef;
use oxsdatatypes::{Decimal, Double, Integer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The subkinds of [NumericLiteral].
///
/// The declaration order is the tie-break between numerically equal literals of different
/// subkinds: `1 < 1.0 (decimal) < 1.0e0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumericKind {
    Integer,
    Decimal,
    Float,
}

impl NumericKind {
    /// The XSD datatype that is used when the literal leaves this model.
    pub fn datatype(self) -> NamedNodeRef<'static> {
        match self {
            NumericKind::Integer => xsd::INTEGER,
            NumericKind::Decimal => xsd::DECIMAL,
            NumericKind::Float => xsd::DOUBLE,
        }
    }

    pub(crate) fn tag(self) -> u8 {
        match self {
            NumericKind::Integer => 0,
            NumericKind::Decimal => 1,
            NumericKind::Float => 2,
        }
    }

    pub(crate) fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(NumericKind::Integer),
            1 => Some(NumericKind::Decimal),
            2 => Some(NumericKind::Float),
            _ => None,
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericKind::Integer => f.write_str("integer"),
            NumericKind::Decimal => f.write_str("decimal"),
            NumericKind::Float => f.write_str("float"),
        }
    }
}

/// A numeric literal. All subkinds are ordered as one band by their numeric value.
///
/// Integers and decimals are compared exactly. As soon as a float is involved, both operands are
/// compared as IEEE-754 doubles using [f64::total_cmp], which gives `NaN` and signed zeros a
/// deterministic place. Numerically equal literals of different subkinds are ordered by their
/// [NumericKind]. Consequently, two numeric literals are only equal if they share a subkind.
#[derive(Clone, Copy)]
pub enum NumericLiteral {
    Integer(Integer),
    Decimal(Decimal),
    Float(Double),
}

impl NumericLiteral {
    /// Parses the lexical form `value` as a literal of the given `kind`.
    pub fn parse(value: &str, kind: NumericKind) -> Result<Self, ConstructionError> {
        let invalid = || ConstructionError::InvalidNumeric {
            value: value.to_owned(),
            kind,
        };
        Ok(match kind {
            NumericKind::Integer => Self::Integer(Integer::from_str(value).map_err(|_| invalid())?),
            NumericKind::Decimal => Self::Decimal(Decimal::from_str(value).map_err(|_| invalid())?),
            NumericKind::Float => Self::float(Double::from_str(value).map_err(|_| invalid())?),
        })
    }

    /// Creates a float literal. All NaNs are stored as the same NaN, so they stay equal after
    /// passing through their lexical form.
    pub fn float(value: impl Into<Double>) -> Self {
        let value = f64::from(value.into());
        if value.is_nan() {
            Self::Float(f64::NAN.into())
        } else {
            Self::Float(value.into())
        }
    }

    pub fn kind(&self) -> NumericKind {
        match self {
            NumericLiteral::Integer(_) => NumericKind::Integer,
            NumericLiteral::Decimal(_) => NumericKind::Decimal,
            NumericLiteral::Float(_) => NumericKind::Float,
        }
    }

    /// Compares the numeric values, ignoring the subkind.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        match (*self, *other) {
            (Self::Integer(lhs), Self::Integer(rhs)) => lhs.cmp(&rhs),
            (Self::Decimal(lhs), Self::Decimal(rhs)) => lhs.cmp(&rhs),
            (Self::Integer(lhs), Self::Decimal(rhs)) => Decimal::from(lhs).cmp(&rhs),
            (Self::Decimal(lhs), Self::Integer(rhs)) => lhs.cmp(&Decimal::from(rhs)),
            (lhs, rhs) => lhs.as_f64().total_cmp(&rhs.as_f64()),
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            NumericLiteral::Integer(value) => Double::from(value).into(),
            NumericLiteral::Decimal(value) => Double::from(value).into(),
            NumericLiteral::Float(value) => value.into(),
        }
    }
}

impl PartialEq for NumericLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NumericLiteral {}

impl PartialOrd for NumericLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NumericLiteral {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
            .then_with(|| self.kind().cmp(&other.kind()))
    }
}

impl Hash for NumericLiteral {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.kind().tag());
        match self {
            NumericLiteral::Integer(value) => state.write_i64(i64::from(*value)),
            NumericLiteral::Decimal(value) => state.write(&value.to_be_bytes()),
            NumericLiteral::Float(value) => state.write_u64(f64::from(*value).to_bits()),
        }
    }
}

impl fmt::Debug for NumericLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NumericLiteral(value={self}, kind={})", self.kind())
    }
}

impl fmt::Display for NumericLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericLiteral::Integer(value) => value.fmt(f),
            NumericLiteral::Decimal(value) => value.fmt(f),
            NumericLiteral::Float(value) => value.fmt(f),
        }
    }
}

macro_rules! impl_from {
    ($TYPE: ty, $VARIANT: path) => {
        impl From<$TYPE> for NumericLiteral {
            fn from(value: $TYPE) -> Self {
                $VARIANT(value.into())
            }
        }
    };
}

impl_from!(Integer, NumericLiteral::Integer);
impl_from!(i64, NumericLiteral::Integer);
impl_from!(i32, NumericLiteral::Integer);
impl_from!(Decimal, NumericLiteral::Decimal);

impl From<Double> for NumericLiteral {
    fn from(value: Double) -> Self {
        Self::float(value)
    }
}

impl From<f64> for NumericLiteral {
    fn from(value: f64) -> Self {
        Self::float(value)
    }
}
