use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("calendar must have at least one day")]
    InvalidCalendar,
    #[error("trials must be greater than zero")]
    InvalidTrials,
    #[error("run length must be between 1 and {calendar_days}, got {run_length}")]
    InvalidRunLength {
        run_length: usize,
        calendar_days: u32,
    },
    #[error("run length must be at least 1")]
    ZeroRunLength,
    #[error("repeats must be greater than zero")]
    InvalidRepeats,
    #[error("workers must be greater than zero")]
    InvalidWorkers,
    #[error("exact probability for {people} people is not representable")]
    NumericOverflow { people: usize },
}
