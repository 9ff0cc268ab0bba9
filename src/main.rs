use std::io;
use std::process::ExitCode;

use birthdays::commands::base_commands::{CliArgs, Commands};
use birthdays::commands::compare_cmd::compare_command;
use birthdays::commands::estimate_cmd::estimate_command;
use birthdays::commands::exact_cmd::exact_command;
use birthdays::commands::run_cmd::run_command;
use birthdays::services::logging::init_tracing;
use clap::{CommandFactory, Parser};

fn main() -> ExitCode {
    init_tracing();
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Exact { .. } => exact_command(cmd),
        cmd @ (Commands::Shared { .. } | Commands::Consecutive { .. }) => estimate_command(cmd),
        cmd @ Commands::Compare { .. } => compare_command(cmd),
        cmd @ Commands::Run { .. } => run_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut io::stdout());
            ExitCode::SUCCESS
        }
    }
}
