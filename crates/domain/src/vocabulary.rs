//! Shared behavior for closed, string-keyed vocabularies.

use std::fmt;

/// A closed set of tokens with exactly one canonical spelling per variant.
///
/// Matching is exact and case-sensitive: `M` (HNSW degree) and `m`
/// (IVF_PQ sub-quantizers) are distinct index params.
pub trait Vocabulary: Copy + Sized + 'static {
    /// Human-readable vocabulary name used in error messages.
    const NAME: &'static str;

    /// Every variant, in canonical order.
    const ALL: &'static [Self];

    /// Canonical token for this variant.
    fn as_str(self) -> &'static str;

    /// Look up a variant by its exact token.
    fn parse(token: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.as_str() == token)
    }

    /// Render the vocabulary as `[A, B, C]` for "should be one of" messages.
    fn one_of() -> String {
        let tokens: Vec<&str> = Self::ALL.iter().map(|variant| variant.as_str()).collect();
        format!("[{}]", tokens.join(", "))
    }
}

/// A token that is not part of the expected vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToken {
    /// Vocabulary the token was checked against.
    pub vocabulary: &'static str,
    /// Raw token as provided.
    pub token: Box<str>,
}

impl UnknownToken {
    pub(crate) fn new<V: Vocabulary>(token: &str) -> Self {
        Self {
            vocabulary: V::NAME,
            token: token.into(),
        }
    }
}

impl fmt::Display for UnknownToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "unknown {} `{}`", self.vocabulary, self.token)
    }
}

impl std::error::Error for UnknownToken {}
