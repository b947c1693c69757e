//! # gqlweaver-codegen
//!
//! Code generator for parsed schema documents: renders each type block as
//! a Go `graphql-go` object declaration under a single package header.
//!
//! The compile entry points sequence the parser and generator, pulling one
//! type block at a time and forwarding the first parse error; on error no
//! output text is produced.
//!
//! # Example
//!
//! ```
//! let source = "package demo
//! type Query {
//!     timeseries: int
//!     transactions: Transactions!
//! }";
//!
//! let output = gqlweaver_codegen::compile_source(source).expect("compile failed");
//! assert!(output.starts_with("package demo\n"));
//! assert!(output.contains("var Query = graphql.NewObject(graphql.ObjectConfig{"));
//! assert!(output.contains("Type: graphql.NewNonNull(Transactions),"));
//! ```

pub mod error;
mod generator;

pub use error::CompileError;
pub use generator::{compile_reader, compile_source, render_document, render_type};
