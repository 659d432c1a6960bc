use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use estimator::commands::base_commands::{CliArgs, Commands};
use estimator::commands::estimate_cmd::estimate_command;
use estimator::commands::interactive_cmd::interactive_command;
use estimator::commands::questions_cmd::questions_command;
use estimator::logging::init_tracing;

fn main() -> ExitCode {
    init_tracing();
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Questions => questions_command(cmd),
        cmd @ Commands::Estimate { .. } => {
            if let Err(e) = estimate_command(cmd) {
                eprintln!("Failed to estimate: {e}");
                return ExitCode::FAILURE;
            }
        }
        cmd @ Commands::Interactive { .. } => {
            if let Err(e) = interactive_command(cmd) {
                eprintln!("Interactive session failed: {e}");
                return ExitCode::FAILURE;
            }
        }
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        }
    }
    ExitCode::SUCCESS
}
