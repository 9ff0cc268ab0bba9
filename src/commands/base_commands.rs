use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::calendar::DEFAULT_CALENDAR_DAYS;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by the Monte Carlo subcommands.
#[derive(Args, Debug, Clone)]
pub struct SamplingArgs {
    /// Number of trials per estimate
    #[arg(short, long, default_value_t = 10000)]
    pub trials: usize,
    /// Number of independent estimates to compute
    #[arg(short, long, default_value_t = 1)]
    pub repeats: usize,
    /// Seed for a reproducible random stream
    #[arg(long)]
    pub seed: Option<u64>,
    /// Split each estimate across this many parallel workers
    #[arg(short, long)]
    pub workers: Option<usize>,
    /// Number of days in the calendar
    #[arg(long, default_value_t = DEFAULT_CALENDAR_DAYS)]
    pub calendar_days: u32,
    /// Optional PNG histogram of the repeated estimates
    #[arg(long)]
    pub histogram: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Closed-form probability that at least two people share a birthday
    Exact {
        /// Number of people
        #[arg(short = 'n', long)]
        people: usize,
        /// Number of days in the calendar
        #[arg(long, default_value_t = DEFAULT_CALENDAR_DAYS)]
        calendar_days: u32,
    },
    /// Estimate the shared-birthday probability by simulation
    Shared {
        /// Number of people
        #[arg(short = 'n', long)]
        people: usize,
        #[command(flatten)]
        sampling: SamplingArgs,
    },
    /// Estimate the probability of a run of consecutive birthday days
    Consecutive {
        /// Number of people
        #[arg(short = 'n', long)]
        people: usize,
        /// Number of consecutive one-day gaps required
        #[arg(short = 'm', long)]
        run_length: usize,
        #[command(flatten)]
        sampling: SamplingArgs,
    },
    /// Compare exact and simulated shared-birthday probabilities over a range of group sizes
    Compare {
        /// Smallest group size
        #[arg(long, default_value_t = 2)]
        from: usize,
        /// Largest group size
        #[arg(long, default_value_t = 60)]
        to: usize,
        /// Step between group sizes
        #[arg(long, default_value_t = 1)]
        step: usize,
        #[command(flatten)]
        sampling: SamplingArgs,
    },
    /// Run a batch of experiments described in a YAML file
    Run {
        /// Experiment YAML file
        #[arg(short, long)]
        config: String,
        /// Output report file (.yaml, .yml or .json)
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
