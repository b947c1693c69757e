//! # gqlweaver-core
//!
//! The abstract schema model shared by the gqlweaver compiler pipeline.
//!
//! A parsed `.schema` document is represented as a [`types::Document`]: a
//! package name plus an ordered sequence of [`types::TypeDecl`] values, each
//! holding ordered [`types::FieldDecl`]s with optional argument lists.
//! Everything here is immutable after construction; the parser builds these
//! values during a single pass over the input and the generator consumes
//! them without modification.

pub mod error;
pub mod types;

pub use error::ModelError;
