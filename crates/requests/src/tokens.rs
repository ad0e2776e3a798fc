//! Tokenizer for the colon/comma encoded CLI arguments.
//!
//! The CLI accepts two small composite grammars:
//!
//! - field descriptors: `name:type:extra` (e.g. `vec:FLOAT_VECTOR:128`)
//! - param descriptors: `name:value` (e.g. `nlist:128`)
//!
//! This module only splits and trims. It knows nothing about which field
//! types or param names are valid; that is the validators' job.

use std::collections::HashSet;
use std::fmt;

/// Wrong number of `:`-separated parts in a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    /// Number of parts the grammar requires.
    pub expected: usize,
    /// Number of parts actually found.
    pub found: usize,
}

impl fmt::Display for Arity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "expected {} `:`-separated parts, found {}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for Arity {}

/// A field descriptor split into its three raw parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldToken<'a> {
    /// Field name.
    pub name: &'a str,
    /// Raw data type token.
    pub type_token: &'a str,
    /// Dimension for vector types, description otherwise.
    pub extra: &'a str,
}

impl<'a> FieldToken<'a> {
    /// Split `name:type:extra`.
    pub fn split(raw: &'a str) -> Result<Self, Arity> {
        let [name, type_token, extra] = split_exact::<3>(raw)?;
        Ok(Self {
            name,
            type_token,
            extra,
        })
    }
}

/// A param descriptor split into its two raw parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamToken<'a> {
    /// Raw param name.
    pub name: &'a str,
    /// Raw param value.
    pub value: &'a str,
}

impl<'a> ParamToken<'a> {
    /// Split `name:value`.
    pub fn split(raw: &'a str) -> Result<Self, Arity> {
        let [name, value] = split_exact::<2>(raw)?;
        Ok(Self { name, value })
    }
}

fn split_exact<const N: usize>(raw: &str) -> Result<[&str; N], Arity> {
    let parts: Vec<&str> = raw.split(':').collect();
    let found = parts.len();
    <[&str; N]>::try_from(parts).map_err(|_| Arity { expected: N, found })
}

/// Remove every whitespace character.
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|ch| !ch.is_whitespace()).collect()
}

/// Strip whitespace, then split on commas.
///
/// Empty segments are kept (`"a,,b"` yields three names) so the server
/// reports them instead of the CLI silently dropping input.
pub fn split_csv(raw: &str) -> Vec<Box<str>> {
    strip_whitespace(raw).split(',').map(Box::from).collect()
}

/// Parse an integer, ignoring surrounding whitespace.
///
/// Values outside the `i64` range do not parse.
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Parse a float, ignoring surrounding whitespace.
pub fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

/// First name that occurs more than once, in order of its second occurrence.
pub fn first_duplicate<'a, I>(names: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    names.into_iter().find(|name| !seen.insert(*name))
}
