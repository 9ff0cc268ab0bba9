use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::debug;

use crate::domain::calendar::Calendar;
use crate::domain::estimate::Estimate;
use crate::services::birthday_sampler::{BirthdaySampler, UniformBirthdaySampler};
use crate::services::event::Event;
use crate::services::simulation_error::SimulationError;

/// Runs `trials` independent trials, each drawing a fresh birthday set from
/// `sampler` and testing it against `event`.
pub fn estimate_with_sampler<S: BirthdaySampler + ?Sized>(
    event: Event,
    people: usize,
    trials: usize,
    sampler: &mut S,
) -> Result<Estimate, SimulationError> {
    if trials == 0 {
        return Err(SimulationError::InvalidTrials);
    }
    event.validate_run_length()?;

    let mut successes = 0;
    for _ in 0..trials {
        let birthdays = sampler.draw(people);
        if event.occurs(&birthdays) {
            successes += 1;
        }
    }
    Ok(Estimate::new(successes, trials))
}

pub fn estimate_event<R: Rng + ?Sized>(
    event: Event,
    people: usize,
    calendar: Calendar,
    trials: usize,
    rng: &mut R,
) -> Result<Estimate, SimulationError> {
    event.validate(calendar)?;
    let mut sampler = UniformBirthdaySampler::new(calendar, rng);
    let estimate = estimate_with_sampler(event, people, trials, &mut sampler)?;
    debug!(
        event = %event.label(),
        people,
        trials,
        successes = estimate.successes,
        "estimate finished"
    );
    Ok(estimate)
}

/// Event A: probability that at least two of `people` share a birthday.
pub fn estimate_shared_birthday<R: Rng + ?Sized>(
    people: usize,
    calendar: Calendar,
    trials: usize,
    rng: &mut R,
) -> Result<Estimate, SimulationError> {
    estimate_event(Event::SharedBirthday, people, calendar, trials, rng)
}

/// Event B: probability that `run_length` consecutive one-day gaps appear
/// among the distinct birthdays of `people`.
pub fn estimate_consecutive_run<R: Rng + ?Sized>(
    people: usize,
    calendar: Calendar,
    run_length: usize,
    trials: usize,
    rng: &mut R,
) -> Result<Estimate, SimulationError> {
    estimate_event(
        Event::ConsecutiveRun { run_length },
        people,
        calendar,
        trials,
        rng,
    )
}

/// Splits `trials` into `workers` chunks and evaluates them on the rayon
/// pool. Chunk `i` draws from the ChaCha8 stream `i` of `seed`, so the
/// result depends on `(seed, workers)` only.
pub fn estimate_parallel(
    event: Event,
    people: usize,
    calendar: Calendar,
    trials: usize,
    seed: u64,
    workers: usize,
) -> Result<Estimate, SimulationError> {
    if workers == 0 {
        return Err(SimulationError::InvalidWorkers);
    }
    if trials == 0 {
        return Err(SimulationError::InvalidTrials);
    }
    event.validate(calendar)?;

    let chunks = chunk_sizes(trials, workers);
    let partials: Vec<Estimate> = chunks
        .par_iter()
        .enumerate()
        .filter(|(_, size)| **size > 0)
        .map(|(index, size)| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(index as u64);
            let mut sampler = UniformBirthdaySampler::new(calendar, &mut rng);
            estimate_with_sampler(event, people, *size, &mut sampler)
        })
        .collect::<Result<Vec<Estimate>, SimulationError>>()?;

    let estimate = partials
        .into_iter()
        .fold(Estimate::new(0, 0), Estimate::merge);
    debug!(
        event = %event.label(),
        people,
        trials,
        workers,
        successes = estimate.successes,
        "parallel estimate finished"
    );
    Ok(estimate)
}

fn chunk_sizes(trials: usize, workers: usize) -> Vec<usize> {
    let base = trials / workers;
    let remainder = trials % workers;
    (0..workers)
        .map(|index| if index < remainder { base + 1 } else { base })
        .collect()
}
