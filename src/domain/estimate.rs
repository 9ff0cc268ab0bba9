use serde::Serialize;

/// Tally of one batch of trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Estimate {
    pub successes: usize,
    pub trials: usize,
}

impl Estimate {
    pub fn new(successes: usize, trials: usize) -> Self {
        Self { successes, trials }
    }

    /// Proportion of successful trials. A batch with no trials is `0.0`.
    pub fn probability(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.successes as f64 / self.trials as f64
    }

    pub fn merge(self, other: Estimate) -> Estimate {
        Estimate {
            successes: self.successes + other.successes,
            trials: self.trials + other.trials,
        }
    }
}
