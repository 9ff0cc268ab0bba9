use crate::domain::calendar::Calendar;
use crate::services::event::Event;

#[derive(Debug, Clone, PartialEq)]
pub struct Experiment {
    pub name: String,
    pub event: Event,
    pub people: usize,
    pub trials: usize,
    pub repeats: usize,
}

/// A batch of experiments sharing one calendar and one random stream.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentPlan {
    pub calendar: Calendar,
    /// `None` seeds the stream from entropy.
    pub seed: Option<u64>,
    pub experiments: Vec<Experiment>,
}
