//! `schema` handler.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, to_ndjson_line, to_pretty_json_line};
use milvus_cli_requests::{
    collection_definition_schema, index_definition_schema, query_request_schema,
    search_request_schema,
};

/// Request payload whose schema is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemaKind {
    Collection,
    Index,
    Search,
    Query,
}

/// Print the JSON Schema of a normalized request payload.
pub fn run_schema(mode: OutputMode, kind: SchemaKind) -> Result<CliOutput, CliError> {
    let schema = match kind {
        SchemaKind::Collection => collection_definition_schema(),
        SchemaKind::Index => index_definition_schema(),
        SchemaKind::Search => search_request_schema(),
        SchemaKind::Query => query_request_schema(),
    };

    let stdout = if mode.is_ndjson() {
        to_ndjson_line(&schema)?
    } else {
        to_pretty_json_line(&schema)?
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

    #[test]
    fn search_schema_is_valid_json() -> Result<(), CliError> {
        let output = run_schema(
            OutputMode {
                format: OutputFormat::Text,
            },
            SchemaKind::Search,
        )?;
        let value: serde_json::Value = serde_json::from_str(&output.stdout)?;
        assert_eq!(value["title"], "SearchRequest");
        Ok(())
    }
}
