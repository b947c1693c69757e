use crate::cli::{GenerateArgs, GlobalOpts};
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Run the `generate` command: compile one schema file to Go source.
///
/// The destination file is written only after a fully successful compile;
/// a parse error leaves no partial output behind.
pub fn run(args: GenerateArgs, _global: &GlobalOpts, output: &OutputContext) -> Result<(), CliError> {
    let source_text = std::fs::read_to_string(&args.input).map_err(|e| CliError::Io {
        path: args.input.clone(),
        source: e,
    })?;

    let generated = match gqlweaver_codegen::compile_source(&source_text) {
        Ok(text) => text,
        Err(error) => {
            super::report_parse_error(&error, &source_text, &args.input, output);
            return Err(CliError::Parse { file: args.input });
        }
    };

    let dest = args
        .output
        .unwrap_or_else(|| args.input.with_extension("go"));

    std::fs::write(&dest, &generated).map_err(|e| CliError::Io {
        path: dest.clone(),
        source: e,
    })?;

    match output.mode {
        OutputMode::Json => {
            output.print_json(&serde_json::json!({
                "input": args.input.display().to_string(),
                "output": dest.display().to_string(),
                "bytes_written": generated.len(),
            }));
        }
        OutputMode::Plain => {
            println!(
                "{}\t{}\t{}",
                args.input.display(),
                dest.display(),
                generated.len()
            );
        }
        OutputMode::Human => {
            output.success(&format!(
                "{} bytes written to {}",
                generated.len(),
                dest.display()
            ));
        }
    }

    Ok(())
}
