//! bindlint CLI — contract checker for scripting-layer callable bindings.
//!
//! This binary provides the `bindlint` command with subcommands for
//! initialization, manifest checking, diagnostics explanation, and shell
//! completions. See `bindlint --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let formatter: Box<dyn bindlint_output::OutputFormatter> = if cli.json {
        Box::new(bindlint_output::json::JsonFormatter)
    } else {
        Box::new(bindlint_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Init => commands::init::run(cli.verbose),
        Commands::Check {
            paths,
            strict,
            suppress,
        } => commands::check::run(&*formatter, cli.verbose, paths, strict, suppress),
        Commands::Explain { code } => commands::explain::run(&*formatter, &code),
        Commands::Completion { shell } => commands::completion::run(&shell),
    };

    std::process::exit(exit_code);
}
