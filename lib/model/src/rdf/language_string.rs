use crate::ConstructionError;
use std::fmt;
use std::sync::Arc;

/// A string literal with a language tag, e.g., `"chat"@fr`.
///
/// Two language-tagged strings are first compared by their value. Only if the values are equal,
/// the language breaks the tie. Hence, `"hi"@en` and `"hi"@fr` are adjacent in sort order while
/// `"ha"@fr` sorts before both.
// The derived order relies on the field order.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LangTaggedString {
    value: Arc<str>,
    language: Arc<str>,
}

impl LangTaggedString {
    /// Creates a new [LangTaggedString] after checking the structure of `language`.
    ///
    /// The tag must consist of `-`-separated subtags of one to eight ASCII alphanumeric
    /// characters where the first subtag is alphabetic. The tag is stored as given.
    pub fn new(
        value: impl Into<Arc<str>>,
        language: impl Into<Arc<str>>,
    ) -> Result<Self, ConstructionError> {
        let language = language.into();
        if !is_language_tag(&language) {
            return Err(ConstructionError::InvalidLanguageTag {
                tag: language.to_string(),
            });
        }
        Ok(Self::new_unchecked(value, language))
    }

    pub fn new_unchecked(value: impl Into<Arc<str>>, language: impl Into<Arc<str>>) -> Self {
        Self {
            value: value.into(),
            language: language.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

fn is_language_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let primary_ok = subtags.next().is_some_and(|primary| {
        (1..=8).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_alphabetic())
    });
    primary_ok
        && subtags.all(|subtag| {
            (1..=8).contains(&subtag.len()) && subtag.chars().all(|c| c.is_ascii_alphanumeric())
        })
}

impl fmt::Debug for LangTaggedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LangTaggedString(value={:?}, language={:?})",
            self.value(),
            self.language()
        )
    }
}

impl fmt::Display for LangTaggedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.value(), self.language())
    }
}
