use crate::{ConstructionError, Iri, NumericKind};
use oxrdf::vocab::xsd;
use oxrdf::NamedNodeRef;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

static INSTALLED: OnceLock<NumericDatatypes> = OnceLock::new();

/// Maps datatype IRIs to the [NumericKind] their literals are stored as.
///
/// Literals whose datatype is registered here become numeric literals and are ordered by value.
/// All other typed literals are ordered by their lexical form. The host configures the registry
/// once at startup with [NumericDatatypes::install]. Afterward, it is read-only.
///
/// ```
/// use hexastore_model::{Iri, NumericDatatypes, NumericKind};
///
/// let registry = NumericDatatypes::default().with_datatype(
///     Iri::new_unchecked("http://example.com/myInteger"),
///     NumericKind::Integer,
/// );
/// let datatype = Iri::new_unchecked("http://example.com/myInteger");
/// assert_eq!(registry.kind_of(&datatype), Some(NumericKind::Integer));
/// ```
#[derive(Clone, Debug)]
pub struct NumericDatatypes {
    kinds: FxHashMap<String, NumericKind>,
}

impl NumericDatatypes {
    /// Creates a registry without any numeric datatype.
    pub fn empty() -> Self {
        Self {
            kinds: FxHashMap::default(),
        }
    }

    /// Registers `datatype` as a numeric datatype of the given `kind`.
    #[must_use]
    pub fn with_datatype(mut self, datatype: Iri, kind: NumericKind) -> Self {
        self.kinds.insert(datatype.as_str().to_owned(), kind);
        self
    }

    /// Returns the kind of numeric literal for `datatype`, if it is numeric.
    pub fn kind_of(&self, datatype: &Iri) -> Option<NumericKind> {
        self.kinds.get(datatype.as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Installs this registry as the process-wide registry returned by [NumericDatatypes::global].
    ///
    /// This can only happen once and only before the registry has been read.
    pub fn install(self) -> Result<(), ConstructionError> {
        let count = self.len();
        INSTALLED
            .set(self)
            .map_err(|_| ConstructionError::RegistryAlreadyInstalled)?;
        tracing::debug!(datatypes = count, "Installed numeric datatype registry");
        Ok(())
    }

    /// Returns the installed registry.
    ///
    /// If no registry has been installed, the default registry is installed on first access.
    pub fn global() -> &'static NumericDatatypes {
        INSTALLED.get_or_init(NumericDatatypes::default)
    }
}

impl Default for NumericDatatypes {
    /// The XSD integer family, `xsd:decimal`, `xsd:float`, and `xsd:double`.
    fn default() -> Self {
        static INTEGER_DATATYPES: &[NamedNodeRef<'_>; 13] = &[
            xsd::INTEGER,
            xsd::BYTE,
            xsd::SHORT,
            xsd::INT,
            xsd::LONG,
            xsd::UNSIGNED_BYTE,
            xsd::UNSIGNED_SHORT,
            xsd::UNSIGNED_INT,
            xsd::UNSIGNED_LONG,
            xsd::POSITIVE_INTEGER,
            xsd::NEGATIVE_INTEGER,
            xsd::NON_POSITIVE_INTEGER,
            xsd::NON_NEGATIVE_INTEGER,
        ];

        let mut kinds = FxHashMap::default();
        for datatype in INTEGER_DATATYPES {
            kinds.insert(datatype.as_str().to_owned(), NumericKind::Integer);
        }
        kinds.insert(xsd::DECIMAL.as_str().to_owned(), NumericKind::Decimal);
        kinds.insert(xsd::FLOAT.as_str().to_owned(), NumericKind::Float);
        kinds.insert(xsd::DOUBLE.as_str().to_owned(), NumericKind::Float);
        Self { kinds }
    }
}
