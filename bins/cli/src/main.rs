//! CLI binary entrypoint.

mod commands;
mod error;
mod format;
mod logging;

use clap::{Parser, Subcommand};
use commands::{
    CreateCollectionInput, CreateIndexInput, SchemaKind, run_config_show, run_create_collection,
    run_create_index, run_query, run_schema, run_search,
};
use error::{CliError, ExitCode};
use format::{OutputArgs, OutputMode, to_ndjson_line, to_pretty_json_line};
use milvus_cli_config::{
    CliEnv, ConnectionConfig, LogConfig, ValidatedCliConfig, load_cli_config_from_path,
};
use milvus_cli_requests::{QueryParamsInput, SearchParamsInput};
use milvus_cli_shared::ErrorEnvelope;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "milvus_cli",
    version,
    about = "Validate Milvus CLI arguments and print the normalized request",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    /// Optional config file path (JSON/TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create collections and indexes.
    Create {
        #[command(subcommand)]
        command: CreateCommands,
    },
    /// Vector similarity search.
    Search {
        /// Query vectors, e.g. `[[1.0, 2.0]]`.
        #[arg(long)]
        data: String,
        /// Vector field to search.
        #[arg(long)]
        anns_field: String,
        /// Distance metric (L2, IP, HAMMING, TANIMOTO).
        #[arg(long)]
        metric_type: String,
        /// Comma-separated `name:value` search params.
        #[arg(long, default_value = "")]
        params: String,
        /// Maximum number of hits.
        #[arg(long)]
        limit: String,
        /// Boolean filter expression.
        #[arg(long)]
        expr: String,
        /// Comma-separated partitions to search.
        #[arg(long)]
        partition_names: Option<String>,
        /// Timeout in seconds.
        #[arg(long)]
        timeout: Option<String>,
    },
    /// Query entities by boolean expression.
    Query {
        /// Boolean filter expression.
        #[arg(long)]
        expr: String,
        /// Comma-separated partitions to query.
        #[arg(long)]
        partition_names: Option<String>,
        /// Comma-separated fields to return.
        #[arg(long)]
        output_fields: Option<String>,
        /// Timeout in seconds.
        #[arg(long)]
        timeout: Option<String>,
    },
    /// Config-related commands.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Print the JSON Schema of a normalized request payload.
    Schema {
        /// Request kind.
        #[arg(long, value_enum)]
        kind: SchemaKind,
    },
}

#[derive(Debug, Subcommand)]
enum CreateCommands {
    /// Define a collection schema.
    Collection {
        /// Collection name.
        #[arg(short = 'c', long)]
        collection_name: String,
        /// Primary key field name.
        #[arg(short = 'p', long)]
        primary_field: String,
        /// Field as `name:type:extra` (repeatable).
        #[arg(short = 'f', long = "schema-field")]
        fields: Vec<String>,
    },
    /// Define a vector index.
    Index {
        /// Index type (e.g. IVF_FLAT, HNSW).
        #[arg(short = 't', long)]
        index_type: String,
        /// Distance metric (L2, IP, HAMMING, TANIMOTO).
        #[arg(short = 'm', long)]
        metric_type: String,
        /// Build param as `name:value` (repeatable).
        #[arg(short = 'p', long = "index-param")]
        params: Vec<String>,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommands {
    /// Show the effective config after file and env overrides.
    Show {
        /// Config file path (JSON/TOML); overrides `--config`.
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

pub(crate) struct CliOutput {
    stdout: String,
    exit_code: ExitCode,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let mode = OutputMode::from_args(&cli.output);

    let config_path = match &cli.command {
        Commands::Config {
            command: ConfigCommands::Show { path: Some(path) },
        } => Some(path.as_path()),
        _ => cli.config.as_deref(),
    };
    let loaded = load_config(config_path);
    logging::init_logging(
        loaded
            .as_ref()
            .map_or_else(|_| LogConfig::default(), |(config, _)| config.log),
    );
    if let Ok((config, env)) = &loaded {
        tracing::debug!(
            path = ?config_path,
            env_vars = ?env.applied_vars(),
            alias = %config.connection.alias,
            address = %config.connection.address(),
            "resolved cli config"
        );
    }
    let config = loaded.map(|(config, _)| config);

    match run(&cli.command, config_path, config.as_ref(), mode) {
        Ok(output) => match write_output(&output) {
            Ok(()) => std::process::ExitCode::from(output.exit_code.as_u8()),
            Err(error) => exit_with_error(&error),
        },
        Err(error) => exit_with_error(&error),
    }
}

fn exit_with_error(error: &CliError) -> std::process::ExitCode {
    tracing::error!(%error, "command failed");
    let _ = writeln!(io::stderr(), "error: {error}");
    std::process::ExitCode::from(error.exit_code().as_u8())
}

fn load_config(path: Option<&Path>) -> Result<(ValidatedCliConfig, CliEnv), ErrorEnvelope> {
    let env = CliEnv::from_std_env()?;
    let config = load_cli_config_from_path(path, &env)?;
    Ok((config, env))
}

fn run(
    command: &Commands,
    config_path: Option<&Path>,
    config: Result<&ValidatedCliConfig, &ErrorEnvelope>,
    mode: OutputMode,
) -> Result<CliOutput, CliError> {
    match command {
        Commands::Schema { kind } => run_schema(mode, *kind),
        Commands::Config {
            command: ConfigCommands::Show { .. },
        } => run_config_show(mode, config_path, config),
        Commands::Create {
            command:
                CreateCommands::Collection {
                    collection_name,
                    primary_field,
                    fields,
                },
        } => with_target(mode, config, |target| {
            run_create_collection(
                mode,
                target,
                &CreateCollectionInput {
                    collection_name,
                    primary_field,
                    fields,
                },
            )
        }),
        Commands::Create {
            command:
                CreateCommands::Index {
                    index_type,
                    metric_type,
                    params,
                },
        } => with_target(mode, config, |target| {
            run_create_index(
                mode,
                target,
                &CreateIndexInput {
                    index_type,
                    metric_type,
                    params,
                },
            )
        }),
        Commands::Search {
            data,
            anns_field,
            metric_type,
            params,
            limit,
            expr,
            partition_names,
            timeout,
        } => with_target(mode, config, |target| {
            run_search(
                mode,
                target,
                &SearchParamsInput {
                    data,
                    anns_field,
                    metric_type,
                    params,
                    limit,
                    expr,
                    partition_names: partition_names.as_deref(),
                    timeout: timeout.as_deref(),
                },
            )
        }),
        Commands::Query {
            expr,
            partition_names,
            output_fields,
            timeout,
        } => with_target(mode, config, |target| {
            run_query(
                mode,
                target,
                &QueryParamsInput {
                    expr,
                    partition_names: partition_names.as_deref(),
                    output_fields: output_fields.as_deref(),
                    timeout: timeout.as_deref(),
                },
            )
        }),
    }
}

/// Run a request handler against the configured connection, or render the
/// config load failure that prevents it.
fn with_target(
    mode: OutputMode,
    config: Result<&ValidatedCliConfig, &ErrorEnvelope>,
    handler: impl FnOnce(&ConnectionConfig) -> Result<CliOutput, CliError>,
) -> Result<CliOutput, CliError> {
    match config {
        Ok(config) => handler(&config.connection),
        Err(error) => Ok(format_error_output(mode, error, envelope_exit_code(error))),
    }
}

pub(crate) fn envelope_exit_code(error: &ErrorEnvelope) -> ExitCode {
    if error.is_expected() {
        ExitCode::InvalidInput
    } else {
        ExitCode::Internal
    }
}

pub(crate) fn format_error_output(
    mode: OutputMode,
    error: &ErrorEnvelope,
    exit_code: ExitCode,
) -> CliOutput {
    let payload = serde_json::json!({
        "code": error.code.to_string(),
        "message": error.message,
        "kind": error.kind,
        "class": error.class,
        "metadata": error.metadata,
    });

    let stdout = if mode.is_ndjson() {
        // This is a CLI boundary, so JSON serialization errors are internal.
        to_ndjson_line(&serde_json::json!({
            "type": "error",
            "status": "error",
            "error": payload,
        }))
        .unwrap_or_else(|_| {
            "{\"type\":\"error\",\"status\":\"error\",\"error\":{\"code\":\"core:internal\",\"message\":\"internal error\"}}\n".to_string()
        })
    } else if mode.is_json() {
        to_pretty_json_line(&serde_json::json!({
            "status": "error",
            "error": payload,
        }))
        .unwrap_or_else(|_| {
            "{\"status\":\"error\",\"error\":{\"code\":\"core:internal\",\"message\":\"internal error\"}}\n".to_string()
        })
    } else {
        format_error_text(error)
    };

    CliOutput { stdout, exit_code }
}

fn format_error_text(error: &ErrorEnvelope) -> String {
    let mut out = String::new();
    out.push_str("status: error\n");
    out.push_str("code: ");
    out.push_str(&error.code.to_string());
    out.push('\n');
    out.push_str("message: ");
    out.push_str(&error.message);
    out.push('\n');
    out.push_str("kind: ");
    out.push_str(&error.kind.to_string());
    out.push('\n');

    if !error.metadata.is_empty() {
        out.push_str("meta:\n");
        for (key, value) in &error.metadata {
            out.push_str("  ");
            out.push_str(key);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
    }

    out
}

fn write_output(output: &CliOutput) -> Result<(), CliError> {
    let mut stdout = io::stdout();
    stdout.write_all(output.stdout.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
