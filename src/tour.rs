//! Problem instances and closed tours.
//!
//! An [`Instance`] owns the validated point set and its distance matrix.
//! A [`Tour`] is a permutation of the instance's point indices; the last
//! point connects back to the first.

use std::collections::HashSet;

use crate::distance::{DistanceMatrix, DistanceMetric};
use crate::error::{McmcError, Result};
use crate::models::Point;

/// A validated set of points under a fixed metric.
///
/// # Examples
///
/// ```
/// use u_mcmc::distance::DistanceMetric;
/// use u_mcmc::tour::Instance;
///
/// let instance = Instance::from_pairs(
///     [("a", [0.0, 0.0]), ("b", [1.0, 0.0]), ("c", [1.0, 1.0]), ("d", [0.0, 1.0])],
///     DistanceMetric::Planar,
/// )
/// .unwrap();
/// let tour = instance.identity_tour();
/// assert!((instance.total_distance(&tour) - 4.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    points: Vec<Point>,
    metric: DistanceMetric,
    matrix: DistanceMatrix,
}

impl Instance {
    /// Builds an instance from points in input order.
    ///
    /// # Errors
    ///
    /// - [`McmcError::EmptyInput`] if `points` is empty.
    /// - [`McmcError::NonFiniteCoordinate`] if a coordinate is NaN or infinite.
    /// - [`McmcError::DuplicatePoint`] if an identifier repeats.
    pub fn new(points: Vec<Point>, metric: DistanceMetric) -> Result<Self> {
        if points.is_empty() {
            return Err(McmcError::EmptyInput);
        }

        let mut seen = HashSet::with_capacity(points.len());
        for p in &points {
            if !p.is_finite() {
                return Err(McmcError::NonFiniteCoordinate(p.id().to_string()));
            }
            if !seen.insert(p.id()) {
                return Err(McmcError::DuplicatePoint(p.id().to_string()));
            }
        }

        let matrix = DistanceMatrix::from_points(&points, metric);
        Ok(Self {
            points,
            metric,
            matrix,
        })
    }

    /// Builds an instance from `(identifier, [a, b])` pairs, keeping their order.
    pub fn from_pairs<I, S>(pairs: I, metric: DistanceMetric) -> Result<Self>
    where
        I: IntoIterator<Item = (S, [f64; 2])>,
        S: Into<String>,
    {
        Self::new(pairs.into_iter().map(Point::from).collect(), metric)
    }

    /// Points in input order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Metric used for every distance in this instance.
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; empty instances are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distance between the points at indices `a` and `b`.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.matrix.get(a, b)
    }

    /// The tour visiting points in input order.
    pub fn identity_tour(&self) -> Tour {
        Tour::identity(self.len())
    }

    /// Total length of the closed tour, including the edge from the last
    /// point back to the first. Zero for tours of fewer than two points.
    ///
    /// # Panics
    ///
    /// Panics if `tour` references an index outside this instance.
    pub fn total_distance(&self, tour: &Tour) -> f64 {
        debug_assert_eq!(tour.len(), self.len(), "tour size does not match instance");
        let order = tour.order();
        let n = order.len();
        if n < 2 {
            return 0.0;
        }

        let mut dist = 0.0;
        for w in order.windows(2) {
            dist += self.distance(w[0], w[1]);
        }
        dist + self.distance(order[n - 1], order[0])
    }

    /// Edges of the closed tour in visiting order, ending with the edge back
    /// to the start.
    ///
    /// # Panics
    ///
    /// Panics if `tour` references an index outside this instance.
    pub fn legs(&self, tour: &Tour) -> Vec<Leg<'_>> {
        debug_assert_eq!(tour.len(), self.len(), "tour size does not match instance");
        let order = tour.order();
        let n = order.len();
        if n < 2 {
            return Vec::new();
        }

        (0..n)
            .map(|i| {
                let from = order[i];
                let to = order[(i + 1) % n];
                Leg {
                    from: &self.points[from],
                    to: &self.points[to],
                    distance: self.distance(from, to),
                }
            })
            .collect()
    }

    /// Points of the tour in visiting order.
    ///
    /// # Panics
    ///
    /// Panics if `tour` references an index outside this instance.
    pub fn route(&self, tour: &Tour) -> Vec<&Point> {
        debug_assert_eq!(tour.len(), self.len(), "tour size does not match instance");
        tour.order().iter().map(|&i| &self.points[i]).collect()
    }
}

/// One edge of a closed tour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg<'a> {
    pub from: &'a Point,
    pub to: &'a Point,
    pub distance: f64,
}

/// A closed tour as a permutation of point indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// The tour `0, 1, ..., n - 1`.
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// Wraps an explicit visiting order.
    ///
    /// Returns `None` unless `order` is a permutation of `0..order.len()`.
    pub fn from_order(order: Vec<usize>) -> Option<Self> {
        let tour = Self { order };
        tour.is_permutation_of(tour.len()).then_some(tour)
    }

    /// Point indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of points in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` for a tour with no points.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns a copy with positions `i` and `j` exchanged.
    ///
    /// `i == j` yields an identical copy.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swapped(&self, i: usize, j: usize) -> Self {
        let mut order = self.order.clone();
        order.swap(i, j);
        Self { order }
    }

    /// Returns `true` if the tour visits each of `0..n` exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &i in &self.order {
            if i >= n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }

    /// Caller guarantees `order` is a permutation.
    pub(crate) fn from_permutation(order: Vec<usize>) -> Self {
        debug_assert!(Self { order: order.clone() }.is_permutation_of(order.len()));
        Self { order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_square() -> Instance {
        Instance::from_pairs(
            [
                ("a", [0.0, 0.0]),
                ("b", [1.0, 0.0]),
                ("c", [1.0, 1.0]),
                ("d", [0.0, 1.0]),
            ],
            DistanceMetric::Planar,
        )
        .expect("valid instance")
    }

    #[test]
    fn test_empty_input() {
        let err = Instance::new(Vec::new(), DistanceMetric::Planar).unwrap_err();
        assert_eq!(err, McmcError::EmptyInput);
    }

    #[test]
    fn test_duplicate_point() {
        let err = Instance::from_pairs([("a", [0.0, 0.0]), ("a", [1.0, 1.0])], DistanceMetric::Planar)
            .unwrap_err();
        assert_eq!(err, McmcError::DuplicatePoint("a".into()));
    }

    #[test]
    fn test_non_finite_coordinate() {
        let err = Instance::from_pairs([("a", [f64::NAN, 0.0])], DistanceMetric::Planar)
            .unwrap_err();
        assert_eq!(err, McmcError::NonFiniteCoordinate("a".into()));
    }

    #[test]
    fn test_unit_square_perimeter() {
        let inst = unit_square();
        let tour = inst.identity_tour();
        assert!((inst.total_distance(&tour) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_crossed_square_is_longer() {
        let inst = unit_square();
        let crossed = Tour::from_order(vec![0, 2, 1, 3]).expect("permutation");
        let expected = 2.0 + 2.0 * 2f64.sqrt();
        assert!((inst.total_distance(&crossed) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_costs_zero() {
        let inst = Instance::from_pairs([("only", [3.0, 4.0])], DistanceMetric::Haversine)
            .expect("valid instance");
        assert_eq!(inst.total_distance(&inst.identity_tour()), 0.0);
        assert!(inst.legs(&inst.identity_tour()).is_empty());
    }

    #[test]
    fn test_legs_close_the_loop() {
        let inst = unit_square();
        let tour = inst.identity_tour();
        let legs = inst.legs(&tour);
        assert_eq!(legs.len(), 4);
        assert_eq!(legs[3].from.id(), "d");
        assert_eq!(legs[3].to.id(), "a");
        let sum: f64 = legs.iter().map(|l| l.distance).sum();
        assert!((sum - inst.total_distance(&tour)).abs() < 1e-12);
    }

    #[test]
    fn test_route_follows_order() {
        let inst = unit_square();
        let tour = Tour::from_order(vec![3, 1, 0, 2]).expect("permutation");
        let ids: Vec<&str> = inst.route(&tour).iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["d", "b", "a", "c"]);
    }

    #[test]
    #[should_panic]
    fn test_total_distance_rejects_oversized_tour() {
        let inst = Instance::from_pairs([("a", [0.0, 0.0]), ("b", [1.0, 0.0])], DistanceMetric::Planar)
            .expect("valid instance");
        inst.total_distance(&Tour::identity(3));
    }

    #[test]
    fn test_planar_instance_far_apart_is_finite() {
        let inst = Instance::from_pairs(
            [("a", [1e200, 0.0]), ("b", [-1e200, 0.0]), ("c", [0.0, 1e200])],
            DistanceMetric::Planar,
        )
        .expect("valid instance");
        assert!(inst.total_distance(&inst.identity_tour()).is_finite());
    }

    #[test]
    fn test_from_order_rejects_non_permutation() {
        assert!(Tour::from_order(vec![0, 0, 1]).is_none());
        assert!(Tour::from_order(vec![0, 3, 1]).is_none());
        assert!(Tour::from_order(vec![2, 0, 1]).is_some());
    }

    #[test]
    fn test_swapped_leaves_original() {
        let tour = Tour::identity(4);
        let swapped = tour.swapped(0, 3);
        assert_eq!(tour.order(), &[0, 1, 2, 3]);
        assert_eq!(swapped.order(), &[3, 1, 2, 0]);
        assert_eq!(tour.swapped(2, 2), tour);
    }

    proptest! {
        #[test]
        fn prop_total_distance_matches_edge_sum(
            coords in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 2..20),
            i in 0usize..20,
            j in 0usize..20,
        ) {
            let n = coords.len();
            let inst = Instance::from_pairs(
                coords.iter().enumerate().map(|(k, &(x, y))| (format!("p{k}"), [x, y])),
                DistanceMetric::Planar,
            ).expect("valid instance");
            let tour = inst.identity_tour().swapped(i % n, j % n);

            let mut expected = 0.0;
            for k in 0..n - 1 {
                expected += inst.distance(tour.order()[k], tour.order()[k + 1]);
            }
            expected += inst.distance(tour.order()[n - 1], tour.order()[0]);

            let first = inst.total_distance(&tour);
            prop_assert_eq!(first, expected);
            prop_assert_eq!(first, inst.total_distance(&tour));
            prop_assert!(tour.is_permutation_of(n));
        }
    }
}
