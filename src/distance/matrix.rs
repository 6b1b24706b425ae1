//! Dense distance matrix.

use super::DistanceMetric;
use crate::models::Point;

/// A dense n×n distance matrix stored in row-major order.
///
/// Each pair is evaluated once with the metric and mirrored, so lookups
/// return exactly the value the metric would compute.
///
/// # Examples
///
/// ```
/// use u_mcmc::distance::{DistanceMatrix, DistanceMetric};
/// use u_mcmc::models::Point;
///
/// let points = vec![Point::new("a", 0.0, 0.0), Point::new("b", 3.0, 4.0)];
/// let dm = DistanceMatrix::from_points(&points, DistanceMetric::Planar);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the matrix for a point set under the given metric.
    pub fn from_points(points: &[Point], metric: DistanceMetric) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric.distance(&points[i], &points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Returns the distance between locations `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}
