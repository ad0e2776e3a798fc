//! CLI integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn cli_command() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_milvus_cli"));
    for (key, _) in std::env::vars() {
        if key.starts_with("MILVUS_CLI_") {
            command.env_remove(key);
        }
    }
    command.env_remove("RUST_LOG");
    command
}

fn run_cli(args: &[&str]) -> std::io::Result<Output> {
    cli_command().args(args).output()
}

fn fixture_path(relative: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(Path::parent)
        .map_or_else(|| manifest_dir.to_path_buf(), Path::to_path_buf)
        .join("crates")
        .join("config")
        .join("tests")
        .join("fixtures")
        .join(relative)
}

fn parse_json(output: &Output) -> std::io::Result<serde_json::Value> {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).map_err(std::io::Error::other)
}

#[test]
fn cli_version_runs() -> std::io::Result<()> {
    let output = run_cli(&["--version"])?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.starts_with("milvus_cli "));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));

    Ok(())
}

#[test]
fn create_collection_prints_normalized_fields() -> std::io::Result<()> {
    let output = run_cli(&[
        "create",
        "collection",
        "-c",
        "books",
        "-p",
        "id",
        "-f",
        "id:INT64:",
        "-f",
        "title:STRING:",
        "-f",
        "vec:FLOAT_VECTOR:128",
    ])?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "create collection failed: {stderr}");
    assert!(stdout.contains("status: ok"));
    assert!(stdout.contains("kind: collection"));
    assert!(stdout.contains("target: default (127.0.0.1:19530)"));
    assert!(stdout.contains("\"dim\": 128"));

    Ok(())
}

#[test]
fn create_collection_rejects_duplicate_field() -> std::io::Result<()> {
    let output = run_cli(&[
        "create",
        "collection",
        "-c",
        "books",
        "-p",
        "id",
        "-f",
        "id:INT64:",
        "-f",
        "id:STRING:",
    ])?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout.contains("status: error"));
    assert!(stdout.contains("code: params:duplicate_field_name"));

    Ok(())
}

#[test]
fn create_index_json_reports_params() -> std::io::Result<()> {
    let output = run_cli(&[
        "--output",
        "json",
        "create",
        "index",
        "-t",
        "IVF_FLAT",
        "-m",
        "L2",
        "-p",
        "nlist:128",
    ])?;
    assert!(output.status.success());

    let value = parse_json(&output)?;
    assert_eq!(value["kind"], "index");
    assert_eq!(value["request"]["index_type"], "IVF_FLAT");
    assert_eq!(value["request"]["metric_type"], "L2");
    assert_eq!(value["request"]["params"]["nlist"], 128);

    Ok(())
}

#[test]
fn search_rejects_unrecognized_param() -> std::io::Result<()> {
    let output = run_cli(&[
        "--output",
        "json",
        "search",
        "--data",
        "[[1.0,2.0]]",
        "--anns-field",
        "vec",
        "--metric-type",
        "L2",
        "--params",
        "nprobe:10",
        "--limit",
        "10",
        "--expr",
        "id > 0",
    ])?;
    assert_eq!(output.status.code(), Some(2));

    let value = parse_json(&output)?;
    assert_eq!(value["error"]["code"], "params:invalid_search_param");
    assert_eq!(value["error"]["metadata"]["input"], "nprobe");

    Ok(())
}

#[test]
fn query_requires_expression() -> std::io::Result<()> {
    let output = run_cli(&["query", "--expr", "", "--timeout", "abc"])?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout.contains("code: params:missing_expr"));
    assert!(stdout.contains("message: expr is empty!"));

    Ok(())
}

#[test]
fn query_json_keeps_absent_optionals_null() -> std::io::Result<()> {
    let output = run_cli(&[
        "query",
        "--expr",
        "id in [1, 2]",
        "--partition-names",
        "p1, p2",
        "--output",
        "json",
    ])?;
    assert!(output.status.success());

    let value = parse_json(&output)?;
    assert_eq!(value["request"]["expr"], "id in [1, 2]");
    assert_eq!(
        value["request"]["partition_names"],
        serde_json::json!(["p1", "p2"])
    );
    assert!(value["request"]["output_fields"].is_null());
    assert!(value["request"]["timeout"].is_null());

    Ok(())
}

#[test]
fn ndjson_output_is_a_single_line() -> std::io::Result<()> {
    let output = run_cli(&[
        "--output",
        "ndjson",
        "create",
        "index",
        "-t",
        "HNSW",
        "-m",
        "IP",
        "-p",
        "M:16",
        "-p",
        "efConstruction:200",
    ])?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(stdout.lines().count(), 1);
    let value: serde_json::Value =
        serde_json::from_str(stdout.trim()).map_err(std::io::Error::other)?;
    assert_eq!(value["type"], "request");

    Ok(())
}

#[test]
fn config_show_reads_fixture() -> std::io::Result<()> {
    let path = fixture_path("cli-config.valid.toml");
    let output = cli_command()
        .args(["--output", "json", "config", "show", "--path"])
        .arg(&path)
        .output()?;
    assert!(output.status.success());

    let value = parse_json(&output)?;
    let connection = &value["effectiveConfig"]["connection"];
    assert_eq!(connection["alias"], "staging");
    assert_eq!(connection["host"], "milvus.internal");
    assert_eq!(connection["port"], 19531);

    Ok(())
}

#[test]
fn config_show_env_overrides_win() -> std::io::Result<()> {
    let path = fixture_path("cli-config.valid.toml");
    let output = cli_command()
        .args(["--output", "json", "--config"])
        .arg(&path)
        .args(["config", "show"])
        .env("MILVUS_CLI_PORT", "29530")
        .output()?;
    assert!(output.status.success());

    let value = parse_json(&output)?;
    assert_eq!(value["effectiveConfig"]["connection"]["port"], 29530);

    Ok(())
}

#[test]
fn config_show_rejects_invalid_port() -> std::io::Result<()> {
    let path = fixture_path("cli-config.invalid-port.toml");
    let output = cli_command()
        .args(["config", "show", "--path"])
        .arg(&path)
        .output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout.contains("code: config:port_out_of_range"));

    Ok(())
}

#[test]
fn request_commands_fail_on_missing_config_file() -> std::io::Result<()> {
    let output = run_cli(&[
        "--config",
        "does-not-exist.toml",
        "query",
        "--expr",
        "id > 0",
    ])?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout.contains("code: config:config_file_not_found"));

    Ok(())
}

#[test]
fn schema_prints_request_schema() -> std::io::Result<()> {
    let output = run_cli(&["schema", "--kind", "query"])?;
    assert!(output.status.success());

    let value = parse_json(&output)?;
    assert_eq!(value["title"], "QueryRequest");
    assert_eq!(value["type"], "object");

    Ok(())
}
