use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Schema-DSL compiler for graphql-go.
///
/// gqlweaver turns `.schema` documents — a package declaration plus `type`
/// blocks of typed, optionally-required fields — into Go source text that
/// declares one graphql-go object per type.
#[derive(Parser)]
#[command(
    name = "gqlweaver",
    version,
    about = "Compiles .schema documents into graphql-go object declarations",
    after_help = "Use 'gqlweaver <command> --help' for more information about a command.",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Global options available to all subcommands.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Configuration file path [env: GQLWEAVER_CONFIG]
    #[arg(short = 'c', long = "config", global = true, env = "GQLWEAVER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human (default), json, plain
    #[arg(
        long,
        global = true,
        default_value = "human",
        value_parser = ["human", "json", "plain"]
    )]
    pub format: String,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::BoolishValueParser::new(),
        default_value_t = false
    )]
    pub no_color: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compile a .schema file into graphql-go source
    Generate(GenerateArgs),

    /// Parse and validate .schema files without generating output
    Parse(ParseArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Arguments for `gqlweaver generate`.
#[derive(Args)]
pub struct GenerateArgs {
    /// Schema file to compile
    pub input: PathBuf,

    /// Destination file (default: the input path with a .go extension)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

/// Arguments for `gqlweaver parse`.
#[derive(Args)]
pub struct ParseArgs {
    /// Schema files or directories to parse (default: configured schema dir)
    pub paths: Vec<PathBuf>,

    /// Print each parsed document as JSON
    #[arg(long = "ast")]
    pub ast: bool,
}

/// Arguments for `gqlweaver completions`.
#[derive(Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
