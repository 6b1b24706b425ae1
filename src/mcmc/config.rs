//! MCMC configuration, temperature schedules and swap strategies.

use crate::error::{McmcError, Result};

/// Default cooling constant for the annealed schedule.
pub const DEFAULT_COOLING: f64 = 70.0;

/// Default constant temperature.
pub const DEFAULT_TEMPERATURE: f64 = 10.0;

/// Default iteration budget.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Temperature supplied to the acceptance rule at each iteration.
///
/// # References
///
/// - Constant: Metropolis et al. (1953)
/// - Annealed: inverse square-root cooling, `T(t) = c / sqrt(t + 1)`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureSchedule {
    /// Plain MCMC: `T(t) = t0` for every iteration.
    ///
    /// `t0 = 0` gives greedy descent.
    Constant {
        /// Fixed temperature, non-negative.
        t0: f64,
    },

    /// Simulated annealing: `T(t) = cooling / sqrt(t + 1)` with `t` zero-based.
    ///
    /// Strictly decreasing and positive for `cooling > 0`.
    Annealed {
        /// Cooling constant, non-negative. Typical magnitude: 70.
        cooling: f64,
    },
}

impl Default for TemperatureSchedule {
    fn default() -> Self {
        TemperatureSchedule::Constant {
            t0: DEFAULT_TEMPERATURE,
        }
    }
}

impl TemperatureSchedule {
    /// Temperature for the zero-based iteration `t`.
    pub fn temperature(&self, t: usize) -> f64 {
        match *self {
            TemperatureSchedule::Constant { t0 } => t0,
            TemperatureSchedule::Annealed { cooling } => cooling / ((t + 1) as f64).sqrt(),
        }
    }

    fn validate(&self) -> Result<()> {
        let (name, value) = match *self {
            TemperatureSchedule::Constant { t0 } => ("temperature", t0),
            TemperatureSchedule::Annealed { cooling } => ("cooling constant", cooling),
        };
        if !value.is_finite() || value < 0.0 {
            return Err(McmcError::InvalidParameter(format!(
                "{name} must be finite and non-negative, got {value}"
            )));
        }
        Ok(())
    }
}

/// How a candidate tour is derived from the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapStrategy {
    /// Swap two independently drawn positions (possibly the same one).
    #[default]
    Random,

    /// Swap a random position with its successor; the last position wraps to 0.
    Successive,
}

impl SwapStrategy {
    /// `Successive` if `successive` is set, `Random` otherwise.
    pub fn from_successive(successive: bool) -> Self {
        if successive {
            SwapStrategy::Successive
        } else {
            SwapStrategy::Random
        }
    }
}

/// Configuration for an MCMC tour search.
///
/// # Examples
///
/// ```
/// use u_mcmc::mcmc::{McmcConfig, SwapStrategy, TemperatureSchedule};
///
/// let config = McmcConfig::annealed(70.0)
///     .with_max_iterations(5_000)
///     .with_strategy(SwapStrategy::Successive)
///     .with_trace(true)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.schedule, TemperatureSchedule::Annealed { cooling: 70.0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McmcConfig {
    /// Number of iterations to run. No early stopping.
    pub max_iterations: usize,

    /// Temperature schedule.
    pub schedule: TemperatureSchedule,

    /// Neighbor generation strategy.
    pub strategy: SwapStrategy,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Whether to record the current cost after every iteration.
    pub record_trace: bool,
}

impl Default for McmcConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            schedule: TemperatureSchedule::default(),
            strategy: SwapStrategy::default(),
            seed: None,
            record_trace: false,
        }
    }
}

impl McmcConfig {
    /// Plain MCMC at constant temperature `t0`.
    pub fn constant(t0: f64) -> Self {
        Self::default().with_schedule(TemperatureSchedule::Constant { t0 })
    }

    /// Simulated annealing with cooling constant `cooling`.
    pub fn annealed(cooling: f64) -> Self {
        Self::default().with_schedule(TemperatureSchedule::Annealed { cooling })
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_schedule(mut self, schedule: TemperatureSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_strategy(mut self, strategy: SwapStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`McmcError::InvalidParameter`] if the temperature or cooling constant
    /// is negative or non-finite.
    pub fn validate(&self) -> Result<()> {
        self.schedule.validate()
    }
}
