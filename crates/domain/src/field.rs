//! Collection field data types.

use crate::vocabulary::{UnknownToken, Vocabulary};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Data type of a collection field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    /// Boolean scalar.
    Bool,
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// Variable-length string.
    String,
    /// Packed binary vector (dimension in bits).
    BinaryVector,
    /// Dense float vector.
    FloatVector,
}

impl FieldType {
    /// Returns true for vector types, whose descriptor must carry a dimension.
    #[must_use]
    pub const fn is_vector(self) -> bool {
        matches!(self, Self::BinaryVector | Self::FloatVector)
    }
}

impl Vocabulary for FieldType {
    const NAME: &'static str = "field data type";

    const ALL: &'static [Self] = &[
        Self::Bool,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Float,
        Self::Double,
        Self::String,
        Self::BinaryVector,
        Self::FloatVector,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "BOOL",
            Self::Int8 => "INT8",
            Self::Int16 => "INT16",
            Self::Int32 => "INT32",
            Self::Int64 => "INT64",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::String => "STRING",
            Self::BinaryVector => "BINARY_VECTOR",
            Self::FloatVector => "FLOAT_VECTOR",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = UnknownToken;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::parse(token).ok_or_else(|| UnknownToken::new::<Self>(token))
    }
}
