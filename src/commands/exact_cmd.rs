use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::domain::calendar::Calendar;
use crate::services::exact::exact_probability;

pub fn exact_command(cmd: Commands) -> ExitCode {
    if let Commands::Exact {
        people,
        calendar_days,
    } = cmd
    {
        let probability = match Calendar::new(calendar_days)
            .and_then(|calendar| exact_probability(people, calendar))
        {
            Ok(probability) => probability,
            Err(e) => {
                eprintln!("Failed to compute exact probability: {e}");
                return ExitCode::FAILURE;
            }
        };
        println!("Exact probability of a shared birthday among {people} people: {probability:.6}");
        return ExitCode::SUCCESS;
    }
    ExitCode::FAILURE
}
