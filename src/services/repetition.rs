use crate::domain::estimate::Estimate;
use crate::services::simulation_error::SimulationError;

/// Calls `estimator` `repeats` times and returns every estimate in call
/// order. Stops at the first error.
///
/// Each call is expected to draw fresh randomness (for example by sharing one
/// advancing random stream), so the estimates are independent.
pub fn repeat<F, E>(repeats: usize, mut estimator: F) -> Result<Vec<Estimate>, E>
where
    F: FnMut() -> Result<Estimate, E>,
    E: From<SimulationError>,
{
    if repeats == 0 {
        return Err(SimulationError::InvalidRepeats.into());
    }
    let mut estimates = Vec::with_capacity(repeats);
    for _ in 0..repeats {
        estimates.push(estimator()?);
    }
    Ok(estimates)
}

pub fn probabilities(estimates: &[Estimate]) -> Vec<f64> {
    estimates.iter().map(Estimate::probability).collect()
}
