//! Markov Chain Monte Carlo tour search.
//!
//! A single chain over tours: each iteration proposes a transposition of
//! the current tour and accepts it under the Metropolis criterion at the
//! temperature of that iteration. A constant temperature gives plain MCMC;
//! the annealed schedule `c / sqrt(t + 1)` gives simulated annealing.
//!
//! # References
//!
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod acceptance;
mod config;
mod neighbor;
mod runner;
mod trials;

pub use acceptance::accept;
pub use config::{
    McmcConfig, SwapStrategy, TemperatureSchedule, DEFAULT_COOLING, DEFAULT_MAX_ITERATIONS,
    DEFAULT_TEMPERATURE,
};
pub use neighbor::NeighborGenerator;
pub use runner::{McmcResult, McmcRunner, SearchState, StepOutcome};
pub use trials::{TrialRunner, TrialSummary};
