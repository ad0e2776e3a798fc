//! `search` handler.

use super::render_validation;
use crate::CliOutput;
use crate::error::CliError;
use crate::format::OutputMode;
use milvus_cli_config::ConnectionConfig;
use milvus_cli_requests::{SearchParamsInput, validate_search_params};

/// Validate search arguments and print the normalized payload.
pub fn run_search(
    mode: OutputMode,
    target: &ConnectionConfig,
    input: &SearchParamsInput<'_>,
) -> Result<CliOutput, CliError> {
    render_validation(mode, "search", target, validate_search_params(input))
}
