//! `create collection` handler.

use super::render_validation;
use crate::CliOutput;
use crate::error::CliError;
use crate::format::OutputMode;
use milvus_cli_config::ConnectionConfig;
use milvus_cli_requests::validate_collection_params;

/// Inputs for `create collection`.
pub struct CreateCollectionInput<'a> {
    pub collection_name: &'a str,
    pub primary_field: &'a str,
    pub fields: &'a [String],
}

/// Validate a collection definition and print the normalized payload.
pub fn run_create_collection(
    mode: OutputMode,
    target: &ConnectionConfig,
    input: &CreateCollectionInput<'_>,
) -> Result<CliOutput, CliError> {
    let outcome =
        validate_collection_params(input.collection_name, input.primary_field, input.fields);
    render_validation(mode, "collection", target, outcome)
}
