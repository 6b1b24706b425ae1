//! Point-to-point cost functions.

use crate::models::Point;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Cost function between two points.
///
/// Both variants are symmetric, non-negative, and zero for identical
/// coordinates.
///
/// # Examples
///
/// ```
/// use u_mcmc::distance::DistanceMetric;
/// use u_mcmc::models::Point;
///
/// let a = Point::new("a", 0.0, 0.0);
/// let b = Point::new("b", 3.0, 4.0);
/// assert!((DistanceMetric::Planar.distance(&a, &b) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceMetric {
    /// Euclidean distance on raw coordinates.
    Planar,

    /// Great-circle distance in kilometers on `[latitude, longitude]` degrees.
    #[default]
    Haversine,
}

impl DistanceMetric {
    /// Cost between two points.
    pub fn distance(&self, a: &Point, b: &Point) -> f64 {
        match self {
            DistanceMetric::Planar => euclidean(a.coords(), b.coords()),
            DistanceMetric::Haversine => haversine_km(a.coords(), b.coords()),
        }
    }
}

/// Euclidean distance between two coordinate pairs.
pub fn euclidean(a: [f64; 2], b: [f64; 2]) -> f64 {
    (a[0] - b[0]).hypot(a[1] - b[1])
}

/// Great-circle distance in kilometers between two `[lat, lon]` pairs in degrees.
///
/// The haversine term is clamped to `[0, 1]` so rounding near identical or
/// antipodal points never leaves the domain of `asin`.
pub fn haversine_km(a: [f64; 2], b: [f64; 2]) -> f64 {
    let lat_a = a[0].to_radians();
    let lat_b = b[0].to_radians();
    let d_lat = (lat_a - lat_b).abs();
    let d_lon = (a[1].to_radians() - b[1].to_radians()).abs();

    let h = haversin(d_lat) + lat_a.cos() * lat_b.cos() * haversin(d_lon);
    let h = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

fn haversin(theta: f64) -> f64 {
    let s = (theta / 2.0).sin();
    s * s
}
