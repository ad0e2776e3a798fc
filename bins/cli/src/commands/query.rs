//! `query` handler.

use super::render_validation;
use crate::CliOutput;
use crate::error::CliError;
use crate::format::OutputMode;
use milvus_cli_config::ConnectionConfig;
use milvus_cli_requests::{QueryParamsInput, validate_query_params};

/// Validate query arguments and print the normalized payload.
pub fn run_query(
    mode: OutputMode,
    target: &ConnectionConfig,
    input: &QueryParamsInput<'_>,
) -> Result<CliOutput, CliError> {
    render_validation(mode, "query", target, validate_query_params(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExitCode;
    use crate::format::OutputFormat;

    #[test]
    fn absent_optionals_are_null_in_output() -> Result<(), CliError> {
        let input = QueryParamsInput {
            expr: "id > 0",
            ..QueryParamsInput::default()
        };
        let output = run_query(
            OutputMode {
                format: OutputFormat::Json,
            },
            &ConnectionConfig::default(),
            &input,
        )?;
        assert_eq!(output.exit_code, ExitCode::Ok);
        let value: serde_json::Value = serde_json::from_str(&output.stdout)?;
        assert!(value["request"]["output_fields"].is_null());
        assert!(value["request"]["timeout"].is_null());
        Ok(())
    }
}
