//! MCMC execution loop.

use rand::Rng;
use tracing::{debug, trace};
use u_numflow::random::{create_rng, shuffle};

use super::acceptance::accept;
use super::config::McmcConfig;
use super::neighbor::NeighborGenerator;
use crate::distance::DistanceMetric;
use crate::error::Result;
use crate::models::Point;
use crate::tour::{Instance, Tour};

/// Loop-carried state of a single run.
///
/// The incumbent `best` starts from the input order while `current` starts
/// from a shuffled order, so the first incumbent is whatever order the
/// points were supplied in.
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Tour the chain currently sits on.
    pub current: Tour,

    /// Cost of `current`.
    pub current_cost: f64,

    /// Best tour seen so far.
    pub best: Tour,

    /// Cost of `best`.
    pub best_cost: f64,

    /// Iterations completed.
    pub iteration: usize,
}

/// What happened in one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// The candidate replaced the current tour.
    pub accepted: bool,

    /// The candidate was strictly cheaper than the current tour.
    pub improving: bool,

    /// The best tour was replaced.
    pub new_best: bool,
}

impl SearchState {
    /// Starts a chain at `current`, with the input order as incumbent.
    ///
    /// # Panics
    ///
    /// Panics if `current` references an index outside `instance`.
    pub fn new(instance: &Instance, current: Tour) -> Self {
        let best = instance.identity_tour();
        Self {
            current_cost: instance.total_distance(&current),
            best_cost: instance.total_distance(&best),
            current,
            best,
            iteration: 0,
        }
    }

    /// Runs one iteration at the given temperature.
    ///
    /// The cached `current_cost` stands in for recomputing the current tour's
    /// cost; both are the same value since `current` only changes together
    /// with it.
    pub fn step<R: Rng>(
        &mut self,
        instance: &Instance,
        generator: &NeighborGenerator,
        temperature: f64,
        rng: &mut R,
    ) -> StepOutcome {
        let candidate = generator.propose(&self.current, rng);
        let candidate_cost = instance.total_distance(&candidate);
        let delta = candidate_cost - self.current_cost;

        let accepted = accept(delta, temperature, rng);
        if accepted {
            self.current = candidate;
            self.current_cost = candidate_cost;
        }

        // Ties keep the older incumbent.
        let new_best = self.current_cost < self.best_cost;
        if new_best {
            self.best = self.current.clone();
            self.best_cost = self.current_cost;
        }

        self.iteration += 1;
        StepOutcome {
            accepted,
            improving: delta < 0.0,
            new_best,
        }
    }
}

/// Result of an MCMC run.
#[derive(Debug, Clone)]
pub struct McmcResult {
    /// Best tour found, as indices into the instance.
    pub best: Tour,

    /// Points of the best tour in visiting order.
    pub route: Vec<Point>,

    /// Cost of the best tour.
    pub best_cost: f64,

    /// Cost of the shuffled starting tour.
    pub initial_cost: f64,

    /// Total number of iterations.
    pub iterations: usize,

    /// Temperature used in the last iteration (or iteration 0 if none ran).
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Current cost after each iteration. Empty unless tracing was enabled.
    pub cost_trace: Vec<f64>,
}

/// Executes the MCMC tour search.
///
/// # Usage
///
/// ```
/// use u_mcmc::distance::DistanceMetric;
/// use u_mcmc::mcmc::{McmcConfig, McmcRunner};
/// use u_mcmc::tour::Instance;
///
/// let instance = Instance::from_pairs(
///     [("a", [0.0, 0.0]), ("b", [1.0, 1.0]), ("c", [1.0, 0.0]), ("d", [0.0, 1.0])],
///     DistanceMetric::Planar,
/// )
/// .unwrap();
/// let config = McmcConfig::constant(0.0).with_max_iterations(1_000).with_seed(42);
/// let result = McmcRunner::run(&instance, &config).unwrap();
/// assert!((result.best_cost - 4.0).abs() < 1e-9);
/// ```
pub struct McmcRunner;

impl McmcRunner {
    /// Runs the search with an RNG seeded from `config.seed` (or a random seed).
    ///
    /// # Errors
    ///
    /// Returns [`McmcError::InvalidParameter`](crate::McmcError::InvalidParameter)
    /// if the configuration is invalid.
    pub fn run(instance: &Instance, config: &McmcConfig) -> Result<McmcResult> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Builds an instance from raw points and runs the search on it.
    ///
    /// # Errors
    ///
    /// Fails with [`McmcError::EmptyInput`](crate::McmcError::EmptyInput) for
    /// an empty point set, and with the errors of [`Instance::new`] and
    /// [`McmcRunner::run`].
    pub fn solve(
        points: Vec<Point>,
        metric: DistanceMetric,
        config: &McmcConfig,
    ) -> Result<McmcResult> {
        let instance = Instance::new(points, metric)?;
        Self::run(&instance, config)
    }

    /// Runs the search drawing every random number from `rng`.
    ///
    /// Draw order: the initial shuffle, then per iteration the proposal
    /// indices followed by at most one acceptance sample.
    pub fn run_with_rng<R: Rng>(
        instance: &Instance,
        config: &McmcConfig,
        rng: &mut R,
    ) -> Result<McmcResult> {
        config.validate()?;

        let n = instance.len();
        debug!(
            event = "run_start",
            points = n,
            max_iterations = config.max_iterations,
            strategy = ?config.strategy,
            schedule = ?config.schedule,
        );

        let mut order: Vec<usize> = (0..n).collect();
        shuffle(&mut order, rng);
        let mut state = SearchState::new(instance, Tour::from_permutation(order));
        let initial_cost = state.current_cost;

        let generator = NeighborGenerator::new(config.strategy);
        let mut cost_trace = if config.record_trace {
            Vec::with_capacity(config.max_iterations)
        } else {
            Vec::new()
        };

        let mut temperature = config.schedule.temperature(0);
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        for t in 0..config.max_iterations {
            temperature = config.schedule.temperature(t);
            let outcome = state.step(instance, &generator, temperature, rng);

            if outcome.accepted {
                accepted_moves += 1;
            }
            if outcome.improving {
                improving_moves += 1;
            }
            if outcome.new_best {
                trace!(event = "new_best", iteration = t, cost = state.best_cost);
            }
            if config.record_trace {
                cost_trace.push(state.current_cost);
            }
        }

        debug!(
            event = "run_end",
            best_cost = state.best_cost,
            initial_cost,
            accepted_moves,
            improving_moves,
        );

        let route = instance.route(&state.best).into_iter().cloned().collect();
        Ok(McmcResult {
            best: state.best,
            route,
            best_cost: state.best_cost,
            initial_cost,
            iterations: state.iteration,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_trace,
        })
    }
}
