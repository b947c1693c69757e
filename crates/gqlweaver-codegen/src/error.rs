use std::fmt;
use std::io;

use gqlweaver_dsl::DslError;

/// Errors returned by the stream-to-text compile entry point.
#[derive(Debug)]
#[non_exhaustive]
pub enum CompileError {
    /// The input stream could not be read (or was not valid UTF-8).
    Read(io::Error),
    /// The input text failed to parse.
    Parse(DslError),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(e) => write!(f, "failed to read schema input: {e}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for CompileError {
    fn from(e: io::Error) -> Self {
        Self::Read(e)
    }
}

impl From<DslError> for CompileError {
    fn from(e: DslError) -> Self {
        Self::Parse(e)
    }
}
