use serde::Serialize;

use crate::domain::calendar::{BirthdaySet, Calendar};
use crate::services::simulation_error::SimulationError;

/// The outcome tested against each trial's birthday set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Event {
    /// At least two people share a birthday.
    SharedBirthday,
    /// Some `run_length` consecutive gaps between distinct birthdays are all
    /// exactly one day.
    ConsecutiveRun { run_length: usize },
}

impl Event {
    pub fn occurs(&self, birthdays: &BirthdaySet) -> bool {
        match self {
            Event::SharedBirthday => birthdays.has_shared_day(),
            Event::ConsecutiveRun { run_length } => birthdays.has_consecutive_run(*run_length),
        }
    }

    /// Calendar-free check applied by every estimator loop.
    pub fn validate_run_length(&self) -> Result<(), SimulationError> {
        match self {
            Event::ConsecutiveRun { run_length: 0 } => Err(SimulationError::ZeroRunLength),
            _ => Ok(()),
        }
    }

    pub fn validate(&self, calendar: Calendar) -> Result<(), SimulationError> {
        if calendar.days == 0 {
            return Err(SimulationError::InvalidCalendar);
        }
        if let Event::ConsecutiveRun { run_length } = self {
            if *run_length == 0 || *run_length > calendar.days as usize {
                return Err(SimulationError::InvalidRunLength {
                    run_length: *run_length,
                    calendar_days: calendar.days,
                });
            }
        }
        Ok(())
    }

    pub fn label(&self) -> String {
        match self {
            Event::SharedBirthday => "shared birthday".to_string(),
            Event::ConsecutiveRun { run_length } => format!("run of {run_length} one-day gaps"),
        }
    }
}
