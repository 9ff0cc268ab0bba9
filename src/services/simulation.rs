use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::info;

use crate::domain::calendar::Calendar;
use crate::domain::experiment::{Experiment, ExperimentPlan};
use crate::services::estimator::estimate_event;
use crate::services::event::Event;
use crate::services::exact::exact_probability;
use crate::services::experiment_yaml::{load_experiments_from_yaml_file, ExperimentYamlError};
use crate::services::repetition::{probabilities, repeat};
use crate::services::simulation_error::SimulationError;
use crate::services::simulation_types::{BatchReport, ExperimentReport};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to load experiments: {0}")]
    Load(#[from] ExperimentYamlError),
    #[error("experiment '{name}' failed: {source}")]
    Simulation {
        name: String,
        source: SimulationError,
    },
}

/// One random stream for a whole run: seeded when a seed is given,
/// otherwise drawn from OS entropy.
pub fn stream_from_seed(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

pub fn simulate_from_experiment_file(path: &str) -> Result<BatchReport, BatchError> {
    let plan = load_experiments_from_yaml_file(path)?;
    let mut rng = stream_from_seed(plan.seed);
    run_experiments(&plan, &mut rng)
}

pub fn run_experiments<R: Rng + ?Sized>(
    plan: &ExperimentPlan,
    rng: &mut R,
) -> Result<BatchReport, BatchError> {
    let mut experiments = Vec::with_capacity(plan.experiments.len());
    for experiment in &plan.experiments {
        let report = run_experiment(experiment, plan.calendar, rng).map_err(|source| {
            BatchError::Simulation {
                name: experiment.name.clone(),
                source,
            }
        })?;
        experiments.push(report);
    }
    Ok(BatchReport {
        seed: plan.seed,
        experiments,
    })
}

pub fn run_experiment<R: Rng + ?Sized>(
    experiment: &Experiment,
    calendar: Calendar,
    rng: &mut R,
) -> Result<ExperimentReport, SimulationError> {
    info!(
        name = %experiment.name,
        event = %experiment.event.label(),
        people = experiment.people,
        trials = experiment.trials,
        repeats = experiment.repeats,
        "running experiment"
    );

    let tallies = repeat(experiment.repeats, || {
        estimate_event(
            experiment.event,
            experiment.people,
            calendar,
            experiment.trials,
            &mut *rng,
        )
    })?;

    let exact = match experiment.event {
        Event::SharedBirthday => Some(exact_probability(experiment.people, calendar)?),
        Event::ConsecutiveRun { .. } => None,
    };

    Ok(ExperimentReport {
        name: experiment.name.clone(),
        event: experiment.event,
        people: experiment.people,
        calendar_days: calendar.days,
        trials: experiment.trials,
        repeats: experiment.repeats,
        exact,
        estimates: probabilities(&tallies),
        tallies,
    })
}
