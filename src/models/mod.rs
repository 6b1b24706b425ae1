//! Domain models.

mod point;

pub use point::Point;
