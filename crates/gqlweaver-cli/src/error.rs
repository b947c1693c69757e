use std::path::PathBuf;

/// Exit codes for the CLI process.
///
/// - 0: success
/// - 1: general error
/// - 2: invalid arguments / usage error
/// - 3: parse or validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    ParseError = 3,
}

/// Errors returned by CLI command handlers.
///
/// Parse failures are rendered as rich diagnostics where the source text
/// is at hand; the variants here are what the top level prints and maps to
/// an exit code.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A schema file failed to compile. The diagnostic has already been
    /// rendered by the command.
    #[error("failed to compile {file}")]
    Parse { file: PathBuf },

    /// One or more files failed validation during `parse`.
    #[error("validation failed: {errors} error(s) across {files} file(s)")]
    Validation { files: usize, errors: usize },

    /// IO errors (file not found, permission denied).
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Schema file or directory not found.
    #[error("no schema files found in {path}")]
    NoSchemaFiles { path: PathBuf },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Maps this error to the appropriate exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Parse { .. } | Self::Validation { .. } => ExitCode::ParseError,
            Self::Config { .. } | Self::NoSchemaFiles { .. } => ExitCode::InvalidArguments,
            Self::Io { .. } | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Structured representation for `--format json` error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.to_string(),
            "exit_code": self.exit_code() as i32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(
            CliError::Parse {
                file: PathBuf::from("x.schema")
            }
            .exit_code(),
            ExitCode::ParseError
        );
        assert_eq!(
            CliError::Validation { files: 2, errors: 3 }.exit_code(),
            ExitCode::ParseError
        );
        assert_eq!(
            CliError::NoSchemaFiles {
                path: PathBuf::from("schemas/")
            }
            .exit_code(),
            ExitCode::InvalidArguments
        );
        assert_eq!(
            CliError::Other("boom".into()).exit_code(),
            ExitCode::GeneralError
        );
    }

    #[test]
    fn json_shape() {
        let json = CliError::Other("boom".into()).to_json();
        assert_eq!(json["error"], "boom");
        assert_eq!(json["exit_code"], 1);
    }
}
