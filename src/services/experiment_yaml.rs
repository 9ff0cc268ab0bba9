use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::calendar::{Calendar, DEFAULT_CALENDAR_DAYS};
use crate::domain::experiment::{Experiment, ExperimentPlan};
use crate::services::event::Event;
use crate::services::simulation_error::SimulationError;

#[derive(Error, Debug)]
pub enum ExperimentYamlError {
    #[error("failed to read experiment file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse experiment yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("experiment file lists no experiments")]
    Empty,
    #[error("unknown event '{event}' in experiment '{name}' (expected shared or consecutive)")]
    UnknownEvent { name: String, event: String },
    #[error("experiment '{name}' uses event consecutive but has no run_length")]
    MissingRunLength { name: String },
    #[error("invalid experiment '{name}': {source}")]
    Invalid {
        name: String,
        source: SimulationError,
    },
}

#[derive(Debug, Deserialize)]
struct PlanRecord {
    calendar_days: Option<u32>,
    seed: Option<u64>,
    #[serde(default)]
    experiments: Vec<ExperimentRecord>,
}

#[derive(Debug, Deserialize)]
struct ExperimentRecord {
    name: Option<String>,
    event: String,
    people: usize,
    run_length: Option<usize>,
    trials: usize,
    repeats: Option<usize>,
}

pub fn load_experiments_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<ExperimentPlan, ExperimentYamlError> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|source| ExperimentYamlError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    load_experiments_from_yaml_str(&contents)
}

pub fn load_experiments_from_yaml_str(yaml: &str) -> Result<ExperimentPlan, ExperimentYamlError> {
    let record: PlanRecord = serde_yaml::from_str(yaml)?;
    if record.experiments.is_empty() {
        return Err(ExperimentYamlError::Empty);
    }

    let days = record.calendar_days.unwrap_or(DEFAULT_CALENDAR_DAYS);
    let calendar = Calendar::new(days).map_err(|source| ExperimentYamlError::Invalid {
        name: "calendar_days".to_string(),
        source,
    })?;

    let experiments = record
        .experiments
        .into_iter()
        .enumerate()
        .map(|(index, experiment)| to_experiment(index, experiment, calendar))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ExperimentPlan {
        calendar,
        seed: record.seed,
        experiments,
    })
}

fn to_experiment(
    index: usize,
    record: ExperimentRecord,
    calendar: Calendar,
) -> Result<Experiment, ExperimentYamlError> {
    let name = record
        .name
        .unwrap_or_else(|| format!("experiment-{}", index + 1));

    let event = match record.event.trim().to_ascii_lowercase().as_str() {
        "shared" | "a" => Event::SharedBirthday,
        "consecutive" | "b" => {
            let run_length = record
                .run_length
                .ok_or_else(|| ExperimentYamlError::MissingRunLength { name: name.clone() })?;
            Event::ConsecutiveRun { run_length }
        }
        _ => {
            return Err(ExperimentYamlError::UnknownEvent {
                name,
                event: record.event,
            });
        }
    };

    let invalid = |source: SimulationError| ExperimentYamlError::Invalid {
        name: name.clone(),
        source,
    };
    event.validate(calendar).map_err(invalid)?;
    if record.trials == 0 {
        return Err(invalid(SimulationError::InvalidTrials));
    }
    let repeats = record.repeats.unwrap_or(1);
    if repeats == 0 {
        return Err(invalid(SimulationError::InvalidRepeats));
    }

    Ok(Experiment {
        name,
        event,
        people: record.people,
        trials: record.trials,
        repeats,
    })
}
