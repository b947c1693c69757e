mod cli;
mod commands;
mod config;
// miette's derive trips unused_assignments on some rustc versions.
#[allow(unused_assignments)]
mod diagnostic;
mod error;
mod output;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    let output = output::OutputContext::from_global(&cli.global);

    let result = match cli.command {
        cli::Commands::Generate(args) => commands::generate::run(args, &cli.global, &output),
        cli::Commands::Parse(args) => commands::parse::run(args, &cli.global, &output),
        cli::Commands::Completions(args) => commands::completions::run(args),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            output.print_error(&e);
            std::process::exit(e.exit_code() as i32);
        }
    }
}
