pub mod completions;
pub mod generate;
pub mod parse;

use std::path::Path;

use gqlweaver_dsl::DslError;

use crate::diagnostic::dsl_error_to_diagnostic;
use crate::output::{OutputContext, OutputMode};

/// Render a parse error in the active output mode.
///
/// Human mode gets a miette report with source highlighting; json and
/// plain modes get one structured line on stderr.
pub(crate) fn report_parse_error(
    error: &DslError,
    source: &str,
    file: &Path,
    output: &OutputContext,
) {
    match output.mode {
        OutputMode::Human => {
            let filename = file.display().to_string();
            let report = miette::Report::new(dsl_error_to_diagnostic(error, source, &filename));
            eprintln!("{report:?}");
        }
        OutputMode::Json => {
            let json = serde_json::json!({
                "file": file.display().to_string(),
                "error": error.to_string(),
            });
            eprintln!("{json}");
        }
        OutputMode::Plain => {
            eprintln!("{}\terror\t{}", file.display(), error);
        }
    }
}
