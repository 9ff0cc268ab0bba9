use crate::domain::calendar::Calendar;
use crate::services::simulation_error::SimulationError;

/// Closed-form probability that at least two of `people` uniformly drawn
/// days coincide:
///
/// `P = 1 - n! * C(N, n) / N^n = 1 - prod_{k=0}^{n-1} (N - k) / N`
///
/// The product is accumulated as a sum of logarithms so that no factorial
/// or power is ever materialised.
pub fn exact_probability(people: usize, calendar: Calendar) -> Result<f64, SimulationError> {
    let days = calendar.days as usize;
    if days == 0 {
        return Err(SimulationError::InvalidCalendar);
    }
    if people <= 1 {
        return Ok(0.0);
    }
    if people > days {
        return Ok(1.0);
    }

    let days_f = days as f64;
    let log_no_match: f64 = (0..people)
        .map(|k| (-(k as f64) / days_f).ln_1p())
        .sum();
    if !log_no_match.is_finite() {
        return Err(SimulationError::NumericOverflow { people });
    }

    let probability = 1.0 - log_no_match.exp();
    if !probability.is_finite() {
        return Err(SimulationError::NumericOverflow { people });
    }
    Ok(probability.clamp(0.0, 1.0))
}

pub fn exact_probability_default(people: usize) -> Result<f64, SimulationError> {
    exact_probability(people, Calendar::default())
}
