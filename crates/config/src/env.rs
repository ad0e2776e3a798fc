//! Environment variable parsing and env-to-config merging.
//!
//! Env parsing is strict: a variable that is set but blank or unparsable
//! fails the load instead of silently falling back to the file value.

use crate::schema::{CliConfig, LogFormat, LogLevel, ValidatedCliConfig};
use milvus_cli_shared::{ErrorCode, ErrorEnvelope};
use std::collections::BTreeMap;
use std::fmt;

/// Env var: connection alias.
pub const ENV_ALIAS: &str = "MILVUS_CLI_ALIAS";
/// Env var: server host.
pub const ENV_HOST: &str = "MILVUS_CLI_HOST";
/// Env var: server port.
pub const ENV_PORT: &str = "MILVUS_CLI_PORT";
/// Env var: log level.
pub const ENV_LOG_LEVEL: &str = "MILVUS_CLI_LOG_LEVEL";
/// Env var: log format.
pub const ENV_LOG_FORMAT: &str = "MILVUS_CLI_LOG_FORMAT";

const ENV_VARS: [&str; 5] = [ENV_ALIAS, ENV_HOST, ENV_PORT, ENV_LOG_LEVEL, ENV_LOG_FORMAT];

/// Typed env-derived overrides for `CliConfig`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliEnv {
    /// Override for `connection.alias`.
    pub alias: Option<Box<str>>,
    /// Override for `connection.host`.
    pub host: Option<Box<str>>,
    /// Override for `connection.port`.
    pub port: Option<u32>,
    /// Override for `log.level`.
    pub log_level: Option<LogLevel>,
    /// Override for `log.format`.
    pub log_format: Option<LogFormat>,
}

impl CliEnv {
    /// Parse env overrides from a key/value map (useful for tests and fixtures).
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, EnvParseError> {
        Ok(Self {
            alias: parse_optional_trimmed_string(map, ENV_ALIAS)?,
            host: parse_optional_trimmed_string(map, ENV_HOST)?,
            port: parse_optional_u32(map, ENV_PORT)?,
            log_level: parse_optional_enum(map, ENV_LOG_LEVEL, LogLevel::parse)?,
            log_format: parse_optional_enum(map, ENV_LOG_FORMAT, LogFormat::parse)?,
        })
    }

    /// Parse env overrides from the current process environment.
    pub fn from_std_env() -> Result<Self, EnvParseError> {
        let mut map = BTreeMap::new();
        for name in ENV_VARS {
            if let Ok(value) = std::env::var(name) {
                map.insert(name.to_string(), value);
            }
        }

        Self::from_map(&map)
    }

    /// Names of the variables that are set.
    #[must_use]
    pub fn applied_vars(&self) -> Vec<&'static str> {
        [
            (ENV_ALIAS, self.alias.is_some()),
            (ENV_HOST, self.host.is_some()),
            (ENV_PORT, self.port.is_some()),
            (ENV_LOG_LEVEL, self.log_level.is_some()),
            (ENV_LOG_FORMAT, self.log_format.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }
}

/// Apply env overrides to a base config (env wins over file/default values).
pub fn apply_env_overrides(
    base: CliConfig,
    env: &CliEnv,
) -> Result<ValidatedCliConfig, ErrorEnvelope> {
    let mut config = base;
    if let Some(alias) = &env.alias {
        config.connection.alias = alias.clone();
    }
    if let Some(host) = &env.host {
        config.connection.host = host.clone();
    }
    if let Some(port) = env.port {
        config.connection.port = port;
    }
    if let Some(level) = env.log_level {
        config.log.level = level;
    }
    if let Some(format) = env.log_format {
        config.log.format = format;
    }

    config.validate_and_normalize().map_err(Into::into)
}

/// Validation failures when parsing env variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvParseError {
    /// An env var was present but empty after trimming.
    EmptyValue {
        /// Env var name.
        var: &'static str,
    },
    /// Integer env var had an invalid value.
    InvalidInt {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
    /// Enum env var had an invalid value.
    InvalidEnum {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
}

impl EnvParseError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptyValue { .. } => ErrorCode::new("config", "empty_env_var"),
            Self::InvalidInt { .. } => ErrorCode::new("config", "invalid_env_int"),
            Self::InvalidEnum { .. } => ErrorCode::new("config", "invalid_env_enum"),
        }
    }
}

impl fmt::Display for EnvParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue { var } => write!(formatter, "{var} must be non-empty"),
            Self::InvalidInt { var, .. } => write!(formatter, "{var} must be an integer"),
            Self::InvalidEnum { var, .. } => write!(formatter, "{var} has an unsupported value"),
        }
    }
}

impl std::error::Error for EnvParseError {}

impl From<EnvParseError> for ErrorEnvelope {
    fn from(error: EnvParseError) -> Self {
        let code = error.error_code();
        let message = error.to_string();
        let mut envelope = Self::expected(code, message);

        match error {
            EnvParseError::EmptyValue { var } => {
                envelope = envelope.with_metadata("env_var", var);
            },
            EnvParseError::InvalidInt { var, value } | EnvParseError::InvalidEnum { var, value } => {
                envelope = envelope
                    .with_metadata("env_var", var)
                    .with_metadata("value", value);
            },
        }

        envelope
    }
}

fn parse_optional_trimmed_string(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<Box<str>>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }

    Ok(Some(trimmed.into()))
}

fn parse_optional_u32(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<u32>, EnvParseError> {
    let Some(raw) = parse_optional_trimmed_string(map, var)? else {
        return Ok(None);
    };

    raw.parse::<u32>()
        .map(Some)
        .map_err(|_| EnvParseError::InvalidInt {
            var,
            value: raw.into_string(),
        })
}

fn parse_optional_enum<T>(
    map: &BTreeMap<String, String>,
    var: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, EnvParseError> {
    let Some(raw) = parse_optional_trimmed_string(map, var)? else {
        return Ok(None);
    };

    let normalized = raw.to_ascii_lowercase();
    parse(&normalized)
        .map(Some)
        .ok_or_else(|| EnvParseError::InvalidEnum {
            var,
            value: raw.into_string(),
        })
}
