use serde::Serialize;

use crate::domain::estimate::Estimate;
use crate::services::event::Event;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ExperimentReport {
    pub name: String,
    pub event: Event,
    pub people: usize,
    pub calendar_days: u32,
    pub trials: usize,
    pub repeats: usize,
    /// Closed-form probability, only known for the shared-birthday event.
    pub exact: Option<f64>,
    pub estimates: Vec<f64>,
    #[serde(skip)]
    pub tallies: Vec<Estimate>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub seed: Option<u64>,
    pub experiments: Vec<ExperimentReport>,
}
