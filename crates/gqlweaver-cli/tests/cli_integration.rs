use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the gqlweaver binary command.
#[allow(deprecated)]
fn gqlweaver() -> Command {
    let mut cmd = Command::cargo_bin("gqlweaver").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

const DEMO_SCHEMA: &str = "package demo
type Query {
    timeseries: int
    transactions: Transactions!
}
";

const BROKEN_SCHEMA: &str = "package demo
type Query {
    f int
}
";

// ---------------------------------------------------------------------------
// Help and version
// ---------------------------------------------------------------------------

#[test]
fn help_exits_zero() {
    gqlweaver()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("graphql-go"));
}

#[test]
fn version_exits_zero() {
    gqlweaver()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gqlweaver"));
}

#[test]
fn generate_help() {
    gqlweaver()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Compile a .schema file"));
}

#[test]
fn parse_help() {
    gqlweaver()
        .args(["parse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parse and validate"));
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

#[test]
fn generate_writes_go_file_and_reports_bytes() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("demo.schema");
    fs::write(&input, DEMO_SCHEMA).unwrap();

    gqlweaver()
        .args(["generate", input.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("bytes written to"));

    let generated = fs::read_to_string(dir.path().join("demo.go")).unwrap();
    assert!(generated.starts_with("package demo\n"));
    assert!(generated.contains("var Query = graphql.NewObject(graphql.ObjectConfig{"));
    assert!(generated.contains("Type: graphql.NewNonNull(Transactions),"));
}

#[test]
fn generate_respects_output_flag() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("demo.schema");
    let dest = dir.path().join("custom_name.go");
    fs::write(&input, DEMO_SCHEMA).unwrap();

    gqlweaver()
        .args([
            "generate",
            input.to_str().unwrap(),
            "-o",
            dest.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(dest.exists());
}

#[test]
fn generate_malformed_input_exits_3_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.schema");
    fs::write(&input, BROKEN_SCHEMA).unwrap();

    gqlweaver()
        .args(["generate", input.to_str().unwrap()])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("expected ':'"));

    assert!(
        !dir.path().join("broken.go").exists(),
        "no partial output may be written on parse failure"
    );
}

#[test]
fn generate_missing_input_exits_1() {
    gqlweaver()
        .args(["generate", "/nonexistent/demo.schema"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn generate_json_format_reports_bytes_written() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("demo.schema");
    fs::write(&input, DEMO_SCHEMA).unwrap();

    gqlweaver()
        .args(["--format", "json", "generate", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("bytes_written"));
}

// ---------------------------------------------------------------------------
// parse
// ---------------------------------------------------------------------------

#[test]
fn parse_validates_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.schema"), DEMO_SCHEMA).unwrap();
    fs::write(
        dir.path().join("b.schema"),
        "package demo type Extra { total: float! }",
    )
    .unwrap();

    gqlweaver()
        .args(["parse", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("2 files, 0 errors"));
}

#[test]
fn parse_malformed_file_exits_3() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.schema");
    fs::write(&input, BROKEN_SCHEMA).unwrap();

    gqlweaver()
        .args(["parse", input.to_str().unwrap()])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("validation failed"));
}

#[test]
fn parse_nonexistent_path_exits_2() {
    gqlweaver()
        .args(["parse", "/nonexistent/schemas"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no schema files found"));
}

#[test]
fn parse_ast_prints_json_document() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("demo.schema");
    fs::write(&input, DEMO_SCHEMA).unwrap();

    gqlweaver()
        .args(["parse", "--ast", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"package\": \"demo\""));
}

// ---------------------------------------------------------------------------
// completions
// ---------------------------------------------------------------------------

#[test]
fn completions_bash() {
    gqlweaver()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gqlweaver"));
}
