//! Markov Chain Monte Carlo search for short closed tours.
//!
//! Finds a short round trip through a fixed set of named points (the
//! traveling salesman problem) by Metropolis sampling over tours, with an
//! optional annealing schedule:
//!
//! - **Distance**: planar Euclidean or great-circle (haversine) metrics,
//!   precomputed into a dense matrix per instance.
//! - **Tour**: a permutation of point indices, implicitly closed.
//! - **MCMC**: random or successive transpositions, Metropolis acceptance,
//!   constant or `c / sqrt(t + 1)` temperature, best-tour tracking, and
//!   independent multi-trial batches.
//!
//! Reading coordinates from files and plotting cost traces are left to
//! callers; the crate consumes and produces plain data.
//!
//! # Example
//!
//! ```
//! use u_mcmc::distance::DistanceMetric;
//! use u_mcmc::mcmc::{McmcConfig, McmcRunner};
//! use u_mcmc::tour::Instance;
//!
//! let instance = Instance::from_pairs(
//!     [
//!         ("Boston", [42.3601, -71.0589]),
//!         ("Chicago", [41.8781, -87.6298]),
//!         ("Denver", [39.7392, -104.9903]),
//!         ("Miami", [25.7617, -80.1918]),
//!     ],
//!     DistanceMetric::Haversine,
//! )
//! .unwrap();
//!
//! let config = McmcConfig::annealed(70.0).with_max_iterations(2_000).with_seed(42);
//! let result = McmcRunner::run(&instance, &config).unwrap();
//! assert_eq!(result.route.len(), 4);
//! assert!(result.best_cost <= result.initial_cost);
//! ```

pub mod distance;
pub mod error;
pub mod mcmc;
pub mod models;
pub mod tour;

pub use error::{McmcError, Result};
