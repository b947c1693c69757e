use console::Term;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Output format mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

/// Output context derived from global flags.
///
/// Human-facing messages go to stderr so that stdout stays reserved for
/// machine-readable payloads (`--ast`, completions, JSON summaries).
pub struct OutputContext {
    pub mode: OutputMode,
    #[allow(dead_code)]
    pub verbose: u8,
    pub quiet: bool,
    pub use_color: bool,
}

impl OutputContext {
    /// Construct from global CLI options.
    pub fn from_global(global: &GlobalOpts) -> Self {
        let mode = match global.format.as_str() {
            "json" => OutputMode::Json,
            "plain" => OutputMode::Plain,
            _ => OutputMode::Human,
        };

        let use_color = !global.no_color
            && std::env::var("TERM").map_or(true, |t| t != "dumb")
            && Term::stderr().is_term();

        Self {
            mode,
            verbose: global.verbose,
            quiet: global.quiet,
            use_color,
        }
    }

    /// Print a success message to stderr (human mode only, not in quiet mode).
    pub fn success(&self, msg: &str) {
        if self.quiet || self.mode != OutputMode::Human {
            return;
        }
        eprintln!("{} {}", self.styled("ok", console::Style::new().green().bold()), msg);
    }

    /// Print a warning to stderr (not in quiet mode).
    pub fn warn(&self, msg: &str) {
        if self.quiet {
            return;
        }
        match self.mode {
            OutputMode::Human => {
                eprintln!(
                    "{} {}",
                    self.styled("warning:", console::Style::new().yellow().bold()),
                    msg
                );
            }
            OutputMode::Json => {
                eprintln!("{}", serde_json::json!({ "warning": msg }));
            }
            OutputMode::Plain => {
                eprintln!("warning\t{msg}");
            }
        }
    }

    /// Print an error using the appropriate output mode.
    pub fn print_error(&self, err: &CliError) {
        match self.mode {
            OutputMode::Human => {
                eprintln!(
                    "{} {}",
                    self.styled("error:", console::Style::new().red().bold()),
                    err
                );
            }
            OutputMode::Json => {
                eprintln!("{}", err.to_json());
            }
            OutputMode::Plain => {
                eprintln!("error\t{err}");
            }
        }
    }

    /// Print JSON data to stdout.
    pub fn print_json(&self, value: &serde_json::Value) {
        if let Ok(s) = serde_json::to_string_pretty(value) {
            println!("{s}");
        }
    }

    /// Print a status message to stderr (human mode only, not in quiet mode).
    pub fn status(&self, msg: &str) {
        if self.quiet || self.mode != OutputMode::Human {
            return;
        }
        eprintln!("{msg}");
    }

    fn styled(&self, text: &str, style: console::Style) -> String {
        if self.use_color {
            style.apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_global(format: &str, quiet: bool, no_color: bool) -> GlobalOpts {
        GlobalOpts {
            config: None,
            format: format.to_string(),
            verbose: 0,
            quiet,
            no_color,
        }
    }

    #[test]
    fn mode_resolution() {
        let ctx = OutputContext::from_global(&make_global("json", false, false));
        assert_eq!(ctx.mode, OutputMode::Json);
        let ctx = OutputContext::from_global(&make_global("plain", false, false));
        assert_eq!(ctx.mode, OutputMode::Plain);
        let ctx = OutputContext::from_global(&make_global("human", false, false));
        assert_eq!(ctx.mode, OutputMode::Human);
    }

    #[test]
    fn no_color_disables_styling() {
        let ctx = OutputContext::from_global(&make_global("human", false, true));
        assert!(!ctx.use_color);
        assert_eq!(
            ctx.styled("ok", console::Style::new().green()),
            "ok"
        );
    }

    #[test]
    fn quiet_is_carried() {
        let ctx = OutputContext::from_global(&make_global("human", true, false));
        assert!(ctx.quiet);
    }
}
