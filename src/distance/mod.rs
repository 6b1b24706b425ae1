//! Distance metrics and precomputed distance matrices.

mod matrix;
mod metric;

pub use matrix::DistanceMatrix;
pub use metric::{euclidean, haversine_km, DistanceMetric, EARTH_RADIUS_KM};
