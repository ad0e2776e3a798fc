//! `config show` handler.

use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, to_ndjson_line, to_pretty_json_line};
use crate::{CliOutput, envelope_exit_code, format_error_output};
use milvus_cli_config::{ValidatedCliConfig, to_pretty_toml};
use milvus_cli_shared::ErrorEnvelope;
use std::path::Path;

/// Show the effective config after file and env overrides.
pub fn run_config_show(
    mode: OutputMode,
    path: Option<&Path>,
    config: Result<&ValidatedCliConfig, &ErrorEnvelope>,
) -> Result<CliOutput, CliError> {
    let config = match config {
        Ok(config) => config,
        Err(error) => return Ok(format_error_output(mode, error, envelope_exit_code(error))),
    };
    let config_path = path.map(|value| value.to_string_lossy().to_string());

    let stdout = if mode.is_ndjson() {
        to_ndjson_line(&serde_json::json!({
            "type": "summary",
            "status": "ok",
            "kind": "config",
            "configPath": config_path,
            "effectiveConfig": config.as_ref(),
        }))?
    } else if mode.is_json() {
        to_pretty_json_line(&serde_json::json!({
            "status": "ok",
            "configPath": config_path,
            "effectiveConfig": config.as_ref(),
        }))?
    } else {
        let rendered = match to_pretty_toml(config.as_ref()) {
            Ok(rendered) => rendered,
            Err(error) => return Ok(format_error_output(mode, &error, ExitCode::Internal)),
        };
        let mut out = String::new();
        out.push_str("status: ok\n");
        if let Some(path) = &config_path {
            out.push_str("path: ");
            out.push_str(path);
            out.push('\n');
        }
        out.push_str("config:\n");
        out.push_str(&rendered);
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
    use milvus_cli_config::CliConfig;
    use milvus_cli_shared::ErrorCode;

    #[test]
    fn text_output_renders_toml() -> Result<(), Box<dyn std::error::Error>> {
        let config = CliConfig::default().validate_and_normalize()?;
        let output = run_config_show(
            OutputMode {
                format: OutputFormat::Text,
            },
            None,
            Ok(&config),
        )?;
        assert_eq!(output.exit_code, ExitCode::Ok);
        assert!(output.stdout.starts_with("status: ok\nconfig:\n"));
        assert!(output.stdout.contains("port = 19530"));
        Ok(())
    }

    #[test]
    fn load_failure_is_rendered() -> Result<(), CliError> {
        let error = ErrorEnvelope::expected(
            ErrorCode::new("config", "config_file_not_found"),
            "failed to read config file",
        );
        let output = run_config_show(
            OutputMode {
                format: OutputFormat::Json,
            },
            None,
            Err(&error),
        )?;
        assert_eq!(output.exit_code, ExitCode::InvalidInput);
        let value: serde_json::Value = serde_json::from_str(&output.stdout)?;
        assert_eq!(value["error"]["code"], "config:config_file_not_found");
        Ok(())
    }
}
