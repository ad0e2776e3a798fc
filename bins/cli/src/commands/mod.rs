//! CLI command handlers.
//!
//! Request commands never contact a server: they validate their arguments
//! and print the payload that would be sent to the configured connection.

pub mod collection;
pub mod config;
pub mod index;
pub mod query;
pub mod schema;
pub mod search;

pub use collection::{CreateCollectionInput, run_create_collection};
pub use config::run_config_show;
pub use index::{CreateIndexInput, run_create_index};
pub use query::run_query;
pub use schema::{SchemaKind, run_schema};
pub use search::run_search;

use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, to_ndjson_line, to_pretty_json_line};
use crate::{CliOutput, format_error_output};
use milvus_cli_config::ConnectionConfig;
use milvus_cli_requests::ParamError;
use milvus_cli_shared::{ErrorEnvelope, Validated};
use serde::Serialize;

/// Render a validation outcome for one request kind.
fn render_validation<T: Serialize>(
    mode: OutputMode,
    kind: &'static str,
    target: &ConnectionConfig,
    outcome: Result<Validated<T>, ParamError>,
) -> Result<CliOutput, CliError> {
    match outcome {
        Ok(request) => {
            tracing::info!(kind, target = %target.address(), "request validated");
            format_request_output(mode, kind, target, request.as_ref())
        },
        Err(error) => {
            let envelope = ErrorEnvelope::from(error);
            tracing::warn!(kind, code = %envelope.code, "request validation failed");
            Ok(format_error_output(mode, &envelope, ExitCode::InvalidInput))
        },
    }
}

fn format_request_output(
    mode: OutputMode,
    kind: &str,
    target: &ConnectionConfig,
    request: &impl Serialize,
) -> Result<CliOutput, CliError> {
    let request = serde_json::to_value(request)?;
    let target_value = serde_json::json!({
        "alias": &*target.alias,
        "address": target.address(),
    });

    let stdout = if mode.is_ndjson() {
        to_ndjson_line(&serde_json::json!({
            "type": "request",
            "status": "ok",
            "kind": kind,
            "target": target_value,
            "request": request,
        }))?
    } else if mode.is_json() {
        to_pretty_json_line(&serde_json::json!({
            "status": "ok",
            "kind": kind,
            "target": target_value,
            "request": request,
        }))?
    } else {
        let mut out = String::new();
        out.push_str("status: ok\n");
        out.push_str("kind: ");
        out.push_str(kind);
        out.push('\n');
        out.push_str("target: ");
        out.push_str(&target.alias);
        out.push_str(" (");
        out.push_str(&target.address());
        out.push_str(")\n");
        out.push_str("request:\n");
        out.push_str(&to_pretty_json_line(&request)?);
        out
    };

    Ok(CliOutput {
        stdout,
        exit_code: ExitCode::Ok,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat;

    fn mode(format: OutputFormat) -> OutputMode {
        OutputMode { format }
    }

    #[test]
    fn text_output_names_kind_and_target() -> Result<(), CliError> {
        let output = format_request_output(
            mode(OutputFormat::Text),
            "query",
            &ConnectionConfig::default(),
            &serde_json::json!({"expr": "id > 0"}),
        )?;
        assert_eq!(output.exit_code, ExitCode::Ok);
        assert!(output.stdout.starts_with("status: ok\nkind: query\n"));
        assert!(output.stdout.contains("target: default (127.0.0.1:19530)"));
        assert!(output.stdout.contains("\"expr\": \"id > 0\""));
        Ok(())
    }

    #[test]
    fn ndjson_output_is_one_line() -> Result<(), CliError> {
        let output = format_request_output(
            mode(OutputFormat::Ndjson),
            "index",
            &ConnectionConfig::default(),
            &serde_json::json!({"index_type": "FLAT"}),
        )?;
        assert_eq!(output.stdout.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(output.stdout.trim())?;
        assert_eq!(value["type"], "request");
        assert_eq!(value["request"]["index_type"], "FLAT");
        Ok(())
    }
}
