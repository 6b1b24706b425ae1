//! Candidate generation by transposition.

use rand::Rng;

use super::config::SwapStrategy;
use crate::tour::Tour;

/// Proposes a candidate tour differing from the current one by a single
/// transposition.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborGenerator {
    strategy: SwapStrategy,
}

impl NeighborGenerator {
    pub fn new(strategy: SwapStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> SwapStrategy {
        self.strategy
    }

    /// Draws the pair of positions to exchange in a tour of `n` points.
    ///
    /// `Random` draws two independent indices and may return a repeated
    /// index. `Successive` pairs index `i` with `i + 1`, or with `0` when
    /// `i` is the last index.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn positions<R: Rng>(&self, n: usize, rng: &mut R) -> (usize, usize) {
        match self.strategy {
            SwapStrategy::Random => {
                let i = rng.random_range(0..n);
                let j = rng.random_range(0..n);
                (i, j)
            }
            SwapStrategy::Successive => {
                let i = rng.random_range(0..n);
                let j = if i + 1 == n { 0 } else { i + 1 };
                (i, j)
            }
        }
    }

    /// Returns a new tour with one transposition applied; `tour` is untouched.
    pub fn propose<R: Rng>(&self, tour: &Tour, rng: &mut R) -> Tour {
        let (i, j) = self.positions(tour.len(), rng);
        tour.swapped(i, j)
    }
}
