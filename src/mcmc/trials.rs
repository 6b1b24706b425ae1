//! Independent repeated runs.
//!
//! Each trial gets its own seed (`base_seed + trial index`) and therefore its
//! own RNG stream and [`SearchState`](super::SearchState). With the
//! `parallel` feature trials run on rayon.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::info;

use super::config::McmcConfig;
use super::runner::{McmcResult, McmcRunner};
use crate::error::{McmcError, Result};
use crate::tour::Instance;

/// Outcome of a batch of independent runs.
#[derive(Debug, Clone)]
pub struct TrialSummary {
    /// Per-trial results, in trial order.
    pub results: Vec<McmcResult>,

    /// Mean of the trials' best costs.
    pub mean_best_cost: f64,

    /// Index of the trial with the lowest best cost (first on ties).
    pub best_trial: usize,
}

impl TrialSummary {
    /// The result with the lowest best cost.
    pub fn best(&self) -> &McmcResult {
        &self.results[self.best_trial]
    }

    /// Lowest and highest best cost across trials.
    pub fn best_cost_range(&self) -> (f64, f64) {
        self.results
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r.best_cost), hi.max(r.best_cost))
            })
    }
}

/// Runs several independent searches with one configuration.
pub struct TrialRunner;

impl TrialRunner {
    /// Runs `trials` searches on `instance`.
    ///
    /// # Errors
    ///
    /// [`McmcError::InvalidParameter`] if `trials == 0` or the configuration
    /// is invalid.
    pub fn run(instance: &Instance, config: &McmcConfig, trials: usize) -> Result<TrialSummary> {
        if trials == 0 {
            return Err(McmcError::InvalidParameter(
                "trials must be positive".into(),
            ));
        }
        config.validate()?;

        let base_seed = config.seed.unwrap_or_else(rand::random);
        let run_trial = |i: usize| {
            let trial_config = config.clone().with_seed(base_seed.wrapping_add(i as u64));
            McmcRunner::run(instance, &trial_config)
        };

        #[cfg(feature = "parallel")]
        let results: Vec<McmcResult> = (0..trials)
            .into_par_iter()
            .map(run_trial)
            .collect::<Result<_>>()?;

        #[cfg(not(feature = "parallel"))]
        let results: Vec<McmcResult> = (0..trials).map(run_trial).collect::<Result<_>>()?;

        let mean_best_cost =
            results.iter().map(|r| r.best_cost).sum::<f64>() / results.len() as f64;
        let best_trial = results
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.best_cost.total_cmp(&b.best_cost))
            .map(|(i, _)| i)
            .unwrap_or(0);

        info!(
            event = "trials_end",
            trials,
            max_iterations = config.max_iterations,
            schedule = ?config.schedule,
            mean_best_cost,
        );

        Ok(TrialSummary {
            results,
            mean_best_cost,
            best_trial,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMetric;

    fn ring(n: usize) -> Instance {
        Instance::from_pairs(
            (0..n).map(|k| {
                let angle = k as f64 * std::f64::consts::TAU / n as f64;
                (format!("r{k}"), [angle.cos() * 10.0, angle.sin() * 10.0])
            }),
            DistanceMetric::Planar,
        )
        .expect("valid instance")
    }

    #[test]
    fn test_zero_trials_rejected() {
        let err = TrialRunner::run(&ring(5), &McmcConfig::default(), 0).unwrap_err();
        assert!(matches!(err, McmcError::InvalidParameter(_)));
    }

    #[test]
    fn test_trials_use_distinct_streams() {
        let inst = ring(12);
        let config = McmcConfig::constant(1.0)
            .with_max_iterations(200)
            .with_trace(true)
            .with_seed(10);
        let summary = TrialRunner::run(&inst, &config, 4).expect("trials");

        assert_eq!(summary.results.len(), 4);
        let traces: Vec<&Vec<f64>> = summary.results.iter().map(|r| &r.cost_trace).collect();
        assert!(traces.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_trial_matches_single_run_with_same_seed() {
        let inst = ring(8);
        let config = McmcConfig::annealed(10.0).with_max_iterations(300).with_seed(100);
        let summary = TrialRunner::run(&inst, &config, 3).expect("trials");

        let single = McmcRunner::run(&inst, &config.clone().with_seed(102)).expect("run");
        assert_eq!(summary.results[2].best, single.best);
        assert_eq!(summary.results[2].best_cost, single.best_cost);
    }

    #[test]
    fn test_summary_statistics() {
        let inst = ring(10);
        let config = McmcConfig::annealed(20.0).with_max_iterations(2_000).with_seed(1);
        let summary = TrialRunner::run(&inst, &config, 5).expect("trials");

        let (lo, hi) = summary.best_cost_range();
        assert!(lo <= summary.mean_best_cost + 1e-9);
        assert!(summary.mean_best_cost <= hi + 1e-9);
        assert_eq!(summary.best().best_cost, lo);
    }
}
