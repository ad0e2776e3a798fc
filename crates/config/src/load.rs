//! Config loading helpers (env + file).
//!
//! The loader is responsible for deterministic merge order and surfacing
//! user-facing errors as typed `ErrorEnvelope`s.

use crate::{CliConfig, CliEnv, ValidatedCliConfig, apply_env_overrides};
use milvus_cli_shared::{ErrorClass, ErrorCode, ErrorEnvelope};
use std::path::Path;

/// Serialization format of a config file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.json` (also used when the path has no extension).
    Json,
    /// `.toml`.
    Toml,
}

/// Load the CLI config using a deterministic precedence order.
///
/// Precedence (highest wins):
/// - env overrides (`CliEnv`)
/// - config file (TOML or JSON)
/// - defaults (`CliConfig::default()`)
pub fn load_cli_config_from_path(
    config_path: Option<&Path>,
    env: &CliEnv,
) -> Result<ValidatedCliConfig, ErrorEnvelope> {
    let config = match config_path {
        None => CliConfig::default(),
        Some(path) => {
            let format = detect_config_format(path)?;
            let config_text = read_config_file(path)?;
            parse_config_unvalidated(&config_text, format)
                .map_err(|error| error.with_metadata("path", path.to_string_lossy().to_string()))?
        },
    };

    // env is applied last and also validates/normalizes the resulting config.
    apply_env_overrides(config, env)
}

/// Serialize the config as deterministic pretty TOML (with trailing newline).
pub fn to_pretty_toml(config: &CliConfig) -> Result<String, ErrorEnvelope> {
    let mut output = toml::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::new("config", "serialize_toml"),
            format!("failed to serialize config TOML: {error}"),
            ErrorClass::NonRetriable,
        )
    })?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

/// Pick the config format from a path's extension.
pub fn detect_config_format(path: &Path) -> Result<ConfigFormat, ErrorEnvelope> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        None | Some("json") => Ok(ConfigFormat::Json),
        Some("toml") => Ok(ConfigFormat::Toml),
        Some(other) => Err(ErrorEnvelope::expected(
            ErrorCode::new("config", "unsupported_format"),
            "unsupported config format; use .json or .toml",
        )
        .with_metadata("extension", other.to_string())),
    }
}

fn parse_config_unvalidated(input: &str, format: ConfigFormat) -> Result<CliConfig, ErrorEnvelope> {
    match format {
        ConfigFormat::Json => serde_json::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_json"),
                format!("invalid config JSON: {error}"),
            )
        }),
        ConfigFormat::Toml => toml::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_toml"),
                format!("invalid config TOML: {error}"),
            )
        }),
    }
}

fn read_config_file(path: &Path) -> Result<String, ErrorEnvelope> {
    std::fs::read_to_string(path).map_err(|error| {
        let code = match error.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::new("config", "config_file_not_found"),
            std::io::ErrorKind::PermissionDenied => {
                ErrorCode::new("config", "config_file_permission_denied")
            },
            _ => ErrorCode::new("config", "config_file_io"),
        };

        ErrorEnvelope::expected(code, format!("failed to read config file: {error}"))
            .with_metadata("path", path.to_string_lossy().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogLevel;
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn no_path_yields_defaults() -> Result<(), ErrorEnvelope> {
        let config = load_cli_config_from_path(None, &CliEnv::default())?;
        assert_eq!(config.as_ref(), &CliConfig::default());
        Ok(())
    }

    #[test]
    fn env_wins_over_defaults() -> Result<(), ErrorEnvelope> {
        let env = CliEnv {
            log_level: Some(LogLevel::Info),
            ..CliEnv::default()
        };
        let config = load_cli_config_from_path(None, &env)?;
        assert_eq!(config.log.level, LogLevel::Info);
        Ok(())
    }

    #[test]
    fn format_follows_extension() -> Result<(), ErrorEnvelope> {
        assert_eq!(detect_config_format(Path::new("cli.toml"))?, ConfigFormat::Toml);
        assert_eq!(detect_config_format(Path::new("cli.JSON"))?, ConfigFormat::Json);
        assert_eq!(detect_config_format(Path::new("cli"))?, ConfigFormat::Json);
        let error = detect_config_format(Path::new("cli.yaml")).err();
        assert!(matches!(
            error,
            Some(envelope) if envelope.code == ErrorCode::new("config", "unsupported_format")
        ));
        Ok(())
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let path = PathBuf::from("/nonexistent/milvus-cli/config.toml");
        let error = load_cli_config_from_path(Some(path.as_path()), &CliEnv::default()).err();
        assert!(matches!(
            error,
            Some(envelope) if envelope.code == ErrorCode::new("config", "config_file_not_found")
                && envelope.metadata.contains_key("path")
        ));
    }

    #[test]
    fn pretty_toml_ends_with_newline() -> Result<(), Box<dyn Error>> {
        let config = CliConfig::default();
        let toml = to_pretty_toml(&config)?;
        assert!(toml.contains("[connection]"));
        assert!(toml.ends_with('\n'));
        Ok(())
    }
}
