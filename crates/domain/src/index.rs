//! Index types and index build/search parameter names.

use crate::vocabulary::{UnknownToken, Vocabulary};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vector index algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndexType {
    /// Brute-force search.
    Flat,
    /// Inverted file with raw vectors.
    IvfFlat,
    /// Inverted file with scalar quantization.
    IvfSq8,
    /// Inverted file with product quantization.
    IvfPq,
    /// Hierarchical navigable small world graph.
    Hnsw,
    /// Approximate nearest neighbors (random projection trees).
    Annoy,
    /// Refined HNSW over raw vectors.
    RhnswFlat,
    /// Refined HNSW with product quantization.
    RhnswPq,
    /// Refined HNSW with scalar quantization.
    RhnswSq,
    /// Brute-force search over binary vectors.
    BinFlat,
    /// Inverted file over binary vectors.
    BinIvfFlat,
}

impl Vocabulary for IndexType {
    const NAME: &'static str = "index type";

    const ALL: &'static [Self] = &[
        Self::Flat,
        Self::IvfFlat,
        Self::IvfSq8,
        Self::IvfPq,
        Self::Hnsw,
        Self::Annoy,
        Self::RhnswFlat,
        Self::RhnswPq,
        Self::RhnswSq,
        Self::BinFlat,
        Self::BinIvfFlat,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "FLAT",
            Self::IvfFlat => "IVF_FLAT",
            Self::IvfSq8 => "IVF_SQ8",
            Self::IvfPq => "IVF_PQ",
            Self::Hnsw => "HNSW",
            Self::Annoy => "ANNOY",
            Self::RhnswFlat => "RHNSW_FLAT",
            Self::RhnswPq => "RHNSW_PQ",
            Self::RhnswSq => "RHNSW_SQ",
            Self::BinFlat => "BIN_FLAT",
            Self::BinIvfFlat => "BIN_IVF_FLAT",
        }
    }
}

impl fmt::Display for IndexType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for IndexType {
    type Err = UnknownToken;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::parse(token).ok_or_else(|| UnknownToken::new::<Self>(token))
    }
}

/// Recognized integer parameter name for index build and search.
///
/// Any recognized name is accepted for any index type; which names an index
/// actually uses is left to the server.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum IndexParamName {
    /// Number of inverted-file cluster units.
    #[serde(rename = "nlist")]
    Nlist,
    /// Number of product-quantization sub-vectors.
    #[serde(rename = "m")]
    SubQuantizers,
    /// Bits per product-quantization code.
    #[serde(rename = "nbits")]
    Nbits,
    /// Maximum HNSW node degree.
    #[serde(rename = "M")]
    MaxDegree,
    /// HNSW construction candidate list size.
    #[serde(rename = "efConstruction")]
    EfConstruction,
    /// Number of ANNOY trees.
    #[serde(rename = "n_trees")]
    NTrees,
    /// Sub-quantizer count for RHNSW_PQ.
    #[serde(rename = "PQM")]
    Pqm,
}

impl Vocabulary for IndexParamName {
    const NAME: &'static str = "index param";

    const ALL: &'static [Self] = &[
        Self::Nlist,
        Self::SubQuantizers,
        Self::Nbits,
        Self::MaxDegree,
        Self::EfConstruction,
        Self::NTrees,
        Self::Pqm,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Nlist => "nlist",
            Self::SubQuantizers => "m",
            Self::Nbits => "nbits",
            Self::MaxDegree => "M",
            Self::EfConstruction => "efConstruction",
            Self::NTrees => "n_trees",
            Self::Pqm => "PQM",
        }
    }
}

impl fmt::Display for IndexParamName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for IndexParamName {
    type Err = UnknownToken;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::parse(token).ok_or_else(|| UnknownToken::new::<Self>(token))
    }
}
