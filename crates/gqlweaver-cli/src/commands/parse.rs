use std::path::PathBuf;

use crate::cli::{GlobalOpts, ParseArgs};
use crate::config;
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Run the `parse` command: validate .schema files without generating Go.
pub fn run(args: ParseArgs, global: &GlobalOpts, output: &OutputContext) -> Result<(), CliError> {
    let cfg = config::load_config(global.config.as_deref())?;
    let paths = if args.paths.is_empty() {
        vec![PathBuf::from(cfg.cli.default_schema_dir)]
    } else {
        args.paths
    };

    let files = discover_schema_files(&paths)?;

    let mut total_types = 0usize;
    let mut total_errors = 0usize;
    let mut file_results: Vec<serde_json::Value> = Vec::new();

    for file in &files {
        let source_text = std::fs::read_to_string(file).map_err(|e| CliError::Io {
            path: file.clone(),
            source: e,
        })?;

        match gqlweaver_dsl::parse(&source_text) {
            Ok(document) => {
                total_types += document.types.len();

                if args.ast {
                    let value = serde_json::to_value(&document)
                        .map_err(|e| CliError::Other(e.to_string()))?;
                    output.print_json(&value);
                }

                output.status(&format!(
                    "  {} .... {} types",
                    file.display(),
                    document.types.len()
                ));
                file_results.push(serde_json::json!({
                    "file": file.display().to_string(),
                    "types": document.types.len(),
                    "errors": [],
                }));
            }
            Err(error) => {
                total_errors += 1;
                super::report_parse_error(&error, &source_text, file, output);
                file_results.push(serde_json::json!({
                    "file": file.display().to_string(),
                    "types": 0,
                    "errors": [error.to_string()],
                }));
            }
        }
    }

    match output.mode {
        OutputMode::Human => {
            if total_errors > 0 {
                output.warn(&format!(
                    "{total_types} types parsed from {} files, {total_errors} errors",
                    files.len()
                ));
            } else {
                output.success(&format!(
                    "{total_types} types parsed from {} files, 0 errors",
                    files.len()
                ));
            }
        }
        OutputMode::Json => {
            output.print_json(&serde_json::json!({
                "files": files.len(),
                "types": total_types,
                "errors": total_errors,
                "results": file_results,
            }));
        }
        OutputMode::Plain => {
            println!("{}\t{total_types}\t{total_errors}", files.len());
        }
    }

    if total_errors > 0 {
        Err(CliError::Validation {
            files: files.len(),
            errors: total_errors,
        })
    } else {
        Ok(())
    }
}

/// Discover .schema files from a list of paths.
///
/// Paths can be files (used directly) or directories (searched recursively
/// for files matching `**/*.schema`).
fn discover_schema_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            let pattern = format!("{}/**/*.schema", path.display());
            let entries = glob::glob(&pattern).map_err(|e| CliError::Other(e.to_string()))?;
            for entry in entries {
                let entry = entry.map_err(|e| CliError::Other(e.to_string()))?;
                files.push(entry);
            }
        } else {
            return Err(CliError::NoSchemaFiles { path: path.clone() });
        }
    }

    if files.is_empty() {
        let display_path = paths
            .first()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("schemas/"));
        return Err(CliError::NoSchemaFiles { path: display_path });
    }

    files.sort();
    files.dedup();
    Ok(files)
}
