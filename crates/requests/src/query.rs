//! Query-request validation.

use crate::error::ParamError;
use crate::optional::{optional_csv, optional_timeout};
use milvus_cli_shared::Validated;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Raw `query` arguments as typed on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryParamsInput<'a> {
    /// Boolean filter expression.
    pub expr: &'a str,
    /// Comma-separated partitions to query.
    pub partition_names: Option<&'a str>,
    /// Comma-separated fields to return.
    pub output_fields: Option<&'a str>,
    /// Timeout in seconds.
    pub timeout: Option<&'a str>,
}

/// Normalized query payload.
///
/// Absent optional values serialize as `null` so "not requested" stays
/// distinguishable from an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QueryRequest {
    /// Boolean filter expression.
    pub expr: Box<str>,
    /// Fields to return.
    pub output_fields: Option<Vec<Box<str>>>,
    /// Partitions to query.
    pub partition_names: Option<Vec<Box<str>>>,
    /// Timeout in seconds.
    pub timeout: Option<f64>,
}

/// Validate `query` arguments.
pub fn validate_query_params(
    input: &QueryParamsInput<'_>,
) -> Result<Validated<QueryRequest>, ParamError> {
    if input.expr.is_empty() {
        return Err(ParamError::MissingExpr);
    }

    Ok(Validated::new(QueryRequest {
        expr: input.expr.into(),
        output_fields: optional_csv(input.output_fields),
        partition_names: optional_csv(input.partition_names),
        timeout: optional_timeout(input.timeout)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn empty_expr_fails_regardless_of_other_arguments() {
        let input = QueryParamsInput {
            expr: "",
            partition_names: Some("p1"),
            output_fields: Some("id"),
            timeout: Some("not a number"),
        };
        assert_eq!(validate_query_params(&input).err(), Some(ParamError::MissingExpr));
    }

    #[test]
    fn absent_optionals_serialize_as_null() -> Result<(), Box<dyn Error>> {
        let input = QueryParamsInput {
            expr: "id in [1, 2]",
            ..QueryParamsInput::default()
        };
        let request = validate_query_params(&input)?;
        let value = serde_json::to_value(request.as_ref())?;
        assert_eq!(
            value,
            serde_json::json!({
                "expr": "id in [1, 2]",
                "output_fields": null,
                "partition_names": null,
                "timeout": null,
            })
        );
        Ok(())
    }

    #[test]
    fn lists_and_timeout_are_parsed() -> Result<(), Box<dyn Error>> {
        let input = QueryParamsInput {
            expr: "id > 0",
            partition_names: Some("_default"),
            output_fields: Some("id, title ,vec"),
            timeout: Some("0.5"),
        };
        let request = validate_query_params(&input)?;
        let fields: Vec<&str> = request
            .output_fields
            .iter()
            .flatten()
            .map(AsRef::as_ref)
            .collect();
        assert_eq!(fields, vec!["id", "title", "vec"]);
        assert_eq!(request.partition_names.as_ref().map(Vec::len), Some(1));
        assert_eq!(request.timeout, Some(0.5));
        Ok(())
    }

    #[test]
    fn malformed_timeout_is_rejected() {
        let input = QueryParamsInput {
            expr: "id > 0",
            timeout: Some("1s"),
            ..QueryParamsInput::default()
        };
        assert_eq!(
            validate_query_params(&input).err(),
            Some(ParamError::InvalidTimeout { input: "1s".into() })
        );
    }
}
