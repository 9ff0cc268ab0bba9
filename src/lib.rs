//! Monte Carlo estimators for the birthday problem and its consecutive-day
//! variant, with the closed-form solution used as ground truth.

pub mod commands;
pub mod domain;
pub mod services;

#[cfg(test)]
mod test_support;
