use gqlweaver_codegen::{compile_reader, compile_source, CompileError};

#[test]
fn compile_two_field_query_exactly() {
    let source = "package demo
type Query {
  timeseries: int
  transactions: Transactions!
}";

    let output = compile_source(source).expect("compile should succeed");
    let expected = "package demo

var Query = graphql.NewObject(graphql.ObjectConfig{
\tName: \"Query\",
\tFields: graphql.Fields{
\t\t\"timeseries\": &graphql.Field{
\t\t\tType: graphql.Int,
\t\t},
\t\t\"transactions\": &graphql.Field{
\t\t\tType: graphql.NewNonNull(Transactions),
\t\t},
\t},
})
";
    assert_eq!(output, expected);
}

#[test]
fn required_scalar_field_has_non_null_and_no_list() {
    let output = compile_source("package demo type Query { f: int! }").unwrap();
    assert!(output.contains("graphql.NewNonNull(graphql.Int)"));
    assert!(!output.contains("NewList"));
}

#[test]
fn required_list_field_is_list_of_non_null() {
    let output = compile_source("package demo type Query { f: [Foo]! }").unwrap();
    assert!(output.contains("graphql.NewList(graphql.NewNonNull(Foo))"));
    assert!(!output.contains("graphql.NewNonNull(graphql.NewList"));
}

#[test]
fn argument_block_renders_in_order_with_verbatim_default() {
    let output = compile_source(
        r#"package demo
type Query {
    performance(word: int = "100"!, fish: Animal): float
}"#,
    )
    .unwrap();

    assert!(output.contains("DefaultValue: \"100\","));
    assert!(output.contains("\"word\": &graphql.ArgumentConfig{"));
    assert!(output.contains("\"fish\": &graphql.ArgumentConfig{"));
    let word_at = output.find("\"word\"").unwrap();
    let fish_at = output.find("\"fish\"").unwrap();
    assert!(word_at < fish_at);
}

#[test]
fn type_blocks_render_in_parse_order_under_one_header() {
    let output = compile_source(
        "package gateway
        type Query { timeseries: int }
        type Transactions { total: float! }",
    )
    .unwrap();

    assert!(output.starts_with("package gateway\n"));
    assert_eq!(output.matches("package ").count(), 1);
    let query_at = output.find("var Query").unwrap();
    let transactions_at = output.find("var Transactions").unwrap();
    assert!(query_at < transactions_at);
}

#[test]
fn malformed_input_yields_error_and_no_output() {
    let result = compile_source("package demo type Query { f int }");
    let err = result.expect_err("missing colon must fail");
    let msg = err.to_string();
    assert!(msg.contains("expected ':'"), "message was: {msg}");
    assert!(msg.contains("'int'"), "message was: {msg}");
}

#[test]
fn error_in_later_block_discards_everything() {
    let result = compile_source(
        "package demo
        type Query { f: int }
        type Broken { g float }",
    );
    assert!(result.is_err());
}

#[test]
fn compile_reader_accepts_byte_streams() {
    let source = b"package demo type Query { f: int }" as &[u8];
    let output = compile_reader(source).expect("reader compile should succeed");
    assert!(output.contains("var Query"));
}

#[test]
fn compile_reader_surfaces_read_errors() {
    let not_utf8 = b"\xff\xfe package" as &[u8];
    match compile_reader(not_utf8) {
        Err(CompileError::Read(_)) => {}
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn compile_reader_forwards_parse_errors() {
    let source = b"package demo type { }" as &[u8];
    match compile_reader(source) {
        Err(CompileError::Parse(_)) => {}
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn map_field_renders_as_string_scalar() {
    let output =
        compile_source("package demo type Account { balances: map[Currency]Balance! }").unwrap();
    assert!(output.contains("Type: graphql.NewNonNull(graphql.String),"));
}
