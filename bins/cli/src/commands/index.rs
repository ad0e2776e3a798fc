//! `create index` handler.

use super::render_validation;
use crate::CliOutput;
use crate::error::CliError;
use crate::format::OutputMode;
use milvus_cli_config::ConnectionConfig;
use milvus_cli_requests::validate_index_params;

/// Inputs for `create index`.
pub struct CreateIndexInput<'a> {
    pub index_type: &'a str,
    pub metric_type: &'a str,
    pub params: &'a [String],
}

/// Validate an index definition and print the normalized payload.
pub fn run_create_index(
    mode: OutputMode,
    target: &ConnectionConfig,
    input: &CreateIndexInput<'_>,
) -> Result<CliOutput, CliError> {
    let outcome = validate_index_params(input.index_type, input.metric_type, input.params);
    render_validation(mode, "index", target, outcome)
}
