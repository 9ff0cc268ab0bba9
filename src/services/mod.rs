pub mod birthday_sampler;
pub mod estimator;
pub mod event;
pub mod exact;
pub mod experiment_yaml;
pub mod histogram;
pub mod logging;
pub mod repetition;
pub mod simulation;
pub mod simulation_error;
pub mod simulation_types;
