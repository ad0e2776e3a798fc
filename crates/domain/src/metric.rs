//! Distance metrics.

use crate::vocabulary::{UnknownToken, Vocabulary};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Similarity metric used by an index or a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricType {
    /// Euclidean distance.
    L2,
    /// Inner product.
    Ip,
    /// Hamming distance (binary vectors).
    Hamming,
    /// Tanimoto distance (binary vectors).
    Tanimoto,
}

impl Vocabulary for MetricType {
    const NAME: &'static str = "metric type";

    const ALL: &'static [Self] = &[Self::L2, Self::Ip, Self::Hamming, Self::Tanimoto];

    fn as_str(self) -> &'static str {
        match self {
            Self::L2 => "L2",
            Self::Ip => "IP",
            Self::Hamming => "HAMMING",
            Self::Tanimoto => "TANIMOTO",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for MetricType {
    type Err = UnknownToken;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::parse(token).ok_or_else(|| UnknownToken::new::<Self>(token))
    }
}
