//! Search-request validation.

use crate::error::ParamError;
use crate::index::{IndexParams, parse_metric, parse_param};
use crate::optional::{optional_csv, optional_timeout};
use crate::tokens::{parse_int, strip_whitespace};
use milvus_cli_domain::MetricType;
use milvus_cli_shared::Validated;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Raw `search` arguments as typed on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchParamsInput<'a> {
    /// Query vectors as a JSON-like `[[f, ...], ...]` literal.
    pub data: &'a str,
    /// Vector field to search.
    pub anns_field: &'a str,
    /// Distance metric token.
    pub metric_type: &'a str,
    /// Comma-separated `name:value` search params.
    pub params: &'a str,
    /// Maximum number of hits.
    pub limit: &'a str,
    /// Boolean filter expression.
    pub expr: &'a str,
    /// Comma-separated partitions to search.
    pub partition_names: Option<&'a str>,
    /// Timeout in seconds.
    pub timeout: Option<&'a str>,
}

/// Metric block of a search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchParam {
    /// Distance metric.
    pub metric_type: MetricType,
    /// Search params; omitted when none were given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<IndexParams>,
}

/// Normalized search payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchRequest {
    /// Query vectors.
    pub data: Vec<Vec<f64>>,
    /// Vector field to search.
    pub anns_field: Box<str>,
    /// Metric and params.
    pub param: SearchParam,
    /// Maximum number of hits.
    pub limit: i64,
    /// Boolean filter expression.
    pub expr: Box<str>,
    /// Partitions to search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_names: Option<Vec<Box<str>>>,
    /// Timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<f64>,
}

/// Validate `search` arguments.
///
/// Quote characters in `data` are dropped before parsing, so both
/// `[[1,2]]` and `"[[1,2]]"` are accepted. Repeated search params keep the
/// last value.
pub fn validate_search_params(
    input: &SearchParamsInput<'_>,
) -> Result<Validated<SearchRequest>, ParamError> {
    let data = parse_vectors(input.data)?;
    if input.anns_field.is_empty() {
        return Err(ParamError::MissingAnnsField);
    }
    let metric_type = parse_metric(input.metric_type)?;

    let mut params = IndexParams::new();
    for raw in strip_whitespace(input.params).split(',').filter(|raw| !raw.is_empty()) {
        let (name, value) = parse_param(raw, |name| ParamError::InvalidSearchParam {
            input: name.into(),
        })?;
        params.insert(name, value);
    }

    let limit = parse_int(input.limit).ok_or_else(|| ParamError::InvalidLimit {
        input: input.limit.into(),
    })?;
    if input.expr.is_empty() {
        return Err(ParamError::MissingExpr);
    }

    Ok(Validated::new(SearchRequest {
        data,
        anns_field: input.anns_field.into(),
        param: SearchParam {
            metric_type,
            params: (!params.is_empty()).then_some(params),
        },
        limit,
        expr: input.expr.into(),
        partition_names: optional_csv(input.partition_names),
        timeout: optional_timeout(input.timeout)?,
    }))
}

fn parse_vectors(raw: &str) -> Result<Vec<Vec<f64>>, ParamError> {
    let unquoted: String = raw.chars().filter(|ch| !matches!(ch, '\'' | '"')).collect();
    serde_json::from_str(&unquoted).map_err(|error| ParamError::InvalidVectorData {
        input: raw.into(),
        reason: error.to_string().into(),
    })
}
