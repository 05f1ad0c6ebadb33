use std::fmt;
use std::sync::Arc;

/// A string literal without a language tag or an explicit datatype.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlainString {
    value: Arc<str>,
}

impl PlainString {
    pub fn new(value: impl Into<Arc<str>>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Debug for PlainString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for PlainString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for PlainString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PlainString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
