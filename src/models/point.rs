//! Named locations.

/// A location visited by a tour.
///
/// Coordinates are either `[latitude, longitude]` in degrees (for the
/// haversine metric) or planar `[x, y]`.
///
/// # Examples
///
/// ```
/// use u_mcmc::models::Point;
///
/// let p = Point::new("Boston", 42.36, -71.06);
/// assert_eq!(p.id(), "Boston");
/// assert_eq!(p.coords(), [42.36, -71.06]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    id: String,
    coords: [f64; 2],
}

impl Point {
    /// Creates a point from an identifier and a coordinate pair.
    pub fn new(id: impl Into<String>, a: f64, b: f64) -> Self {
        Self {
            id: id.into(),
            coords: [a, b],
        }
    }

    /// Identifier, unique within an instance.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Coordinate pair.
    pub fn coords(&self) -> [f64; 2] {
        self.coords
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }
}

impl<S: Into<String>> From<(S, [f64; 2])> for Point {
    fn from((id, [a, b]): (S, [f64; 2])) -> Self {
        Self::new(id, a, b)
    }
}
