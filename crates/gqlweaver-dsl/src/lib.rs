//! # gqlweaver-dsl
//!
//! Lexer and recursive descent parser for the gqlweaver schema language.
//!
//! This crate provides:
//! - A lexer that tokenizes `.schema` source text, preserving whitespace
//!   runs and the original casing of keywords
//! - A streaming parser that yields one [`gqlweaver_core::types::TypeDecl`]
//!   per `type` block until the input is exhausted
//! - A whole-document convenience entry point, [`parser::parse`]
//!
//! # Example
//!
//! ```
//! use gqlweaver_dsl::parse;
//!
//! let source = r#"
//! package demo
//!
//! type Query {
//!     timeseries: int
//!     transactions: Transactions!
//! }
//! "#;
//!
//! let document = parse(source).expect("parse failed");
//! assert_eq!(document.package.as_str(), "demo");
//! assert_eq!(document.types.len(), 1);
//! assert_eq!(document.types[0].name.as_str(), "Query");
//! ```

pub mod error;
mod lexer;
pub mod parser;
pub mod token;

pub use error::{DslError, Span};
pub use lexer::{tokenize, SpannedToken};
pub use parser::{parse, Parser};
