//! # milvus-cli-config
//!
//! Configuration schema, validation, and loading for the CLI.
//! This crate depends on `shared` only.

/// Environment variable parsing and merging.
pub mod env;
/// Config loading helpers (env + file).
pub mod load;
/// Configuration schema types and helpers.
pub mod schema;

pub use schema::{
    CURRENT_CONFIG_VERSION, CliConfig, ConfigSchemaError, ConnectionConfig, LogConfig, LogFormat,
    LogLevel, ValidatedCliConfig, parse_cli_config_json, parse_cli_config_toml,
};

pub use env::{CliEnv, EnvParseError, apply_env_overrides};
pub use load::{
    ConfigFormat, detect_config_format, load_cli_config_from_path, to_pretty_toml,
};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
