//! CLI configuration schema, defaults, validation, and normalization.
//!
//! - Deserialization uses `serde` (TOML or JSON).
//! - Validation is manual and returns typed errors mapped to `ErrorEnvelope`.
//! - Normalization trims string fields before they are checked.

use milvus_cli_shared::{ErrorCode, ErrorEnvelope};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current supported configuration schema version.
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Default connection alias.
pub const DEFAULT_ALIAS: &str = "default";
/// Default Milvus host.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default Milvus gRPC port.
pub const DEFAULT_PORT: u32 = 19_530;

const PORT_MIN: u32 = 1;
const PORT_MAX: u32 = 65_535;

/// Top-level CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct CliConfig {
    /// Schema version for forward-compatible migrations.
    pub version: u32,
    /// Target server settings.
    pub connection: ConnectionConfig,
    /// Diagnostic logging settings.
    pub log: LogConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            connection: ConnectionConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl CliConfig {
    /// Validate and normalize the config.
    pub fn validate_and_normalize(mut self) -> Result<ValidatedCliConfig, ConfigSchemaError> {
        self.validate_version()?;
        self.connection.normalize();
        self.connection.validate()?;
        Ok(ValidatedCliConfig { raw: self })
    }

    const fn validate_version(&self) -> Result<(), ConfigSchemaError> {
        if self.version != CURRENT_CONFIG_VERSION {
            return Err(ConfigSchemaError::UnsupportedVersion {
                found: self.version,
                supported: CURRENT_CONFIG_VERSION,
            });
        }
        Ok(())
    }
}

/// Validated config wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCliConfig {
    raw: CliConfig,
}

impl ValidatedCliConfig {
    /// Borrow the raw config.
    #[must_use]
    pub const fn as_ref(&self) -> &CliConfig {
        &self.raw
    }

    /// Consume the wrapper and return the raw config.
    #[must_use]
    pub fn into_inner(self) -> CliConfig {
        self.raw
    }
}

impl AsRef<CliConfig> for ValidatedCliConfig {
    fn as_ref(&self) -> &CliConfig {
        &self.raw
    }
}

impl std::ops::Deref for ValidatedCliConfig {
    type Target = CliConfig;

    fn deref(&self) -> &Self::Target {
        &self.raw
    }
}

/// Connection target a validated request would be sent to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ConnectionConfig {
    /// Connection alias registered with the client.
    pub alias: Box<str>,
    /// Server host name or address.
    pub host: Box<str>,
    /// Server port.
    pub port: u32,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            alias: DEFAULT_ALIAS.into(),
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
        }
    }
}

impl ConnectionConfig {
    /// `host:port` rendering used in CLI output.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn normalize(&mut self) {
        self.alias = self.alias.trim().into();
        self.host = self.host.trim().into();
    }

    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.alias.is_empty() {
            return Err(ConfigSchemaError::EmptyValue {
                section: "connection",
                field: "alias",
            });
        }
        if self.host.is_empty() {
            return Err(ConfigSchemaError::EmptyValue {
                section: "connection",
                field: "host",
            });
        }
        if !(PORT_MIN..=PORT_MAX).contains(&self.port) {
            return Err(ConfigSchemaError::PortOutOfRange {
                value: self.port,
                min: PORT_MIN,
                max: PORT_MAX,
            });
        }
        Ok(())
    }
}

/// Diagnostic logging configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct LogConfig {
    /// Minimum level emitted when `RUST_LOG` is unset.
    pub level: LogLevel,
    /// Log line format.
    pub format: LogFormat,
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything.
    Trace,
    /// Config resolution and other diagnostics.
    Debug,
    /// Successful validations.
    Info,
    /// Validation failures.
    #[default]
    Warn,
    /// Internal failures only.
    Error,
}

impl LogLevel {
    /// Parse a lowercase level name.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Directive string understood by `tracing` filters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parse a lowercase format name.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse a CLI config from a JSON string, applying validation and normalization.
pub fn parse_cli_config_json(input: &str) -> Result<ValidatedCliConfig, ErrorEnvelope> {
    let config: CliConfig = serde_json::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_json"),
            format!("invalid config JSON: {error}"),
        )
    })?;

    config.validate_and_normalize().map_err(Into::into)
}

/// Parse a CLI config from a TOML string, applying validation and normalization.
pub fn parse_cli_config_toml(input: &str) -> Result<ValidatedCliConfig, ErrorEnvelope> {
    let config: CliConfig = toml::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_toml"),
            format!("invalid config TOML: {error}"),
        )
    })?;

    config.validate_and_normalize().map_err(Into::into)
}

/// Typed validation errors for the configuration schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSchemaError {
    /// The config version is not supported by this binary.
    UnsupportedVersion {
        /// Version found in the config.
        found: u32,
        /// Version supported by this crate.
        supported: u32,
    },
    /// A required string is empty after trimming.
    EmptyValue {
        /// Schema section (e.g. `connection`).
        section: &'static str,
        /// Field name in the config file (e.g. `host`).
        field: &'static str,
    },
    /// The port is outside the valid TCP range.
    PortOutOfRange {
        /// Value provided.
        value: u32,
        /// Minimum allowed value.
        min: u32,
        /// Maximum allowed value.
        max: u32,
    },
}

impl ConfigSchemaError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedVersion { .. } => ErrorCode::new("config", "unsupported_version"),
            Self::EmptyValue { .. } => ErrorCode::new("config", "empty_value"),
            Self::PortOutOfRange { .. } => ErrorCode::new("config", "port_out_of_range"),
        }
    }
}

impl fmt::Display for ConfigSchemaError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion { found, supported } => write!(
                formatter,
                "unsupported config version {found} (supported: {supported})"
            ),
            Self::EmptyValue { section, field } => {
                write!(formatter, "{section}.{field} must be non-empty")
            },
            Self::PortOutOfRange { value, min, max } => write!(
                formatter,
                "connection.port must be between {min} and {max} (got {value})"
            ),
        }
    }
}

impl std::error::Error for ConfigSchemaError {}

impl From<ConfigSchemaError> for ErrorEnvelope {
    fn from(error: ConfigSchemaError) -> Self {
        let code = error.error_code();
        let message = error.to_string();
        let mut envelope = Self::expected(code, message);

        match error {
            ConfigSchemaError::UnsupportedVersion { found, supported } => {
                envelope = envelope
                    .with_metadata("found", found.to_string())
                    .with_metadata("supported", supported.to_string());
            },
            ConfigSchemaError::EmptyValue { section, field } => {
                envelope = envelope
                    .with_metadata("section", section)
                    .with_metadata("field", field);
            },
            ConfigSchemaError::PortOutOfRange { value, min, max } => {
                envelope = envelope
                    .with_metadata("section", "connection")
                    .with_metadata("field", "port")
                    .with_metadata("value", value.to_string())
                    .with_metadata("min", min.to_string())
                    .with_metadata("max", max.to_string());
            },
        }

        envelope
    }
}
