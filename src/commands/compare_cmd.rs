use std::process::ExitCode;

use crate::commands::base_commands::{Commands, SamplingArgs};
use crate::commands::estimate_cmd::estimate_repeated;
use crate::commands::report_format::{format_comparison_table, ComparisonRow};
use crate::services::event::Event;
use crate::services::simulation_error::SimulationError;

pub fn compare_command(cmd: Commands) -> ExitCode {
    if let Commands::Compare {
        from,
        to,
        step,
        sampling,
    } = cmd
    {
        let rows = match comparison_rows(from, to, step, &sampling) {
            Ok(rows) => rows,
            Err(e) => {
                eprintln!("Failed to compare estimates: {e}");
                return ExitCode::FAILURE;
            }
        };
        println!("{}", format_comparison_table(&rows));
        return ExitCode::SUCCESS;
    }
    ExitCode::FAILURE
}

/// Exact and simulated shared-birthday probabilities for every group size in
/// `from..=to`, stepping by `step`. Each group size gets its own seed block
/// so rows do not reuse the same draws.
pub fn comparison_rows(
    from: usize,
    to: usize,
    step: usize,
    sampling: &SamplingArgs,
) -> Result<Vec<ComparisonRow>, SimulationError> {
    let step = step.max(1);
    let mut rows = Vec::new();
    for people in (from..=to).step_by(step) {
        let mut row_sampling = sampling.clone();
        row_sampling.seed = sampling.seed.map(|seed| row_seed(seed, people));
        let report = estimate_repeated(Event::SharedBirthday, people, &row_sampling)?;
        rows.push(ComparisonRow {
            people,
            exact: report.exact.unwrap_or_default(),
            estimates: report.estimates,
        });
    }
    Ok(rows)
}

/// Repeats add their index to the row seed, so rows are spaced 2^32 apart
/// to keep one row's repeat seeds out of the next row's range.
fn row_seed(seed: u64, people: usize) -> u64 {
    seed.wrapping_add((people as u64) << 32)
}
