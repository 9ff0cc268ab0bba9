use std::process::ExitCode;

use crate::commands::base_commands::{Commands, SamplingArgs};
use crate::commands::report_format::format_experiment_report;
use crate::domain::calendar::Calendar;
use crate::domain::estimate::Estimate;
use crate::services::estimator::{estimate_event, estimate_parallel};
use crate::services::event::Event;
use crate::services::exact::exact_probability;
use crate::services::histogram::write_estimate_histogram_png;
use crate::services::repetition::{probabilities, repeat};
use crate::services::simulation::stream_from_seed;
use crate::services::simulation_error::SimulationError;
use crate::services::simulation_types::ExperimentReport;

pub fn estimate_command(cmd: Commands) -> ExitCode {
    let (event, people, sampling) = match cmd {
        Commands::Shared { people, sampling } => (Event::SharedBirthday, people, sampling),
        Commands::Consecutive {
            people,
            run_length,
            sampling,
        } => (Event::ConsecutiveRun { run_length }, people, sampling),
        _ => return ExitCode::FAILURE,
    };

    let report = match estimate_repeated(event, people, &sampling) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Failed to estimate {}: {e}", event.label());
            return ExitCode::FAILURE;
        }
    };

    println!("{}", format_experiment_report(&report));

    if let Some(path) = &sampling.histogram {
        if let Err(e) = write_estimate_histogram_png(path, &report.estimates, report.exact) {
            eprintln!("Failed to write estimate histogram: {e}");
            return ExitCode::FAILURE;
        }
        println!("Estimate histogram written to {path}");
    }
    ExitCode::SUCCESS
}

/// Runs `sampling.repeats` estimates of `event`, sequentially on one stream
/// or, with `--workers`, in parallel with one seed per repeat.
pub fn estimate_repeated(
    event: Event,
    people: usize,
    sampling: &SamplingArgs,
) -> Result<ExperimentReport, SimulationError> {
    let calendar = Calendar::new(sampling.calendar_days)?;
    event.validate(calendar)?;

    let tallies: Vec<Estimate> = match sampling.workers {
        Some(workers) => {
            let base_seed = sampling.seed.unwrap_or_else(rand::random::<u64>);
            let mut index = 0u64;
            repeat(sampling.repeats, || {
                let seed = base_seed.wrapping_add(index);
                index += 1;
                estimate_parallel(event, people, calendar, sampling.trials, seed, workers)
            })?
        }
        None => {
            let mut rng = stream_from_seed(sampling.seed);
            repeat(sampling.repeats, || {
                estimate_event(event, people, calendar, sampling.trials, &mut rng)
            })?
        }
    };

    let exact = match event {
        Event::SharedBirthday => Some(exact_probability(people, calendar)?),
        Event::ConsecutiveRun { .. } => None,
    };
    let name = match event {
        Event::SharedBirthday => "shared".to_string(),
        Event::ConsecutiveRun { .. } => "consecutive".to_string(),
    };

    Ok(ExperimentReport {
        name,
        event,
        people,
        calendar_days: calendar.days,
        trials: sampling.trials,
        repeats: sampling.repeats,
        exact,
        estimates: probabilities(&tallies),
        tallies,
    })
}
