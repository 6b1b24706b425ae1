//! Metropolis acceptance criterion.

use rand::Rng;

/// Decides whether to move to a candidate whose cost differs from the
/// current one by `delta`.
///
/// Improvements (`delta < 0`) are always accepted without drawing. At
/// `temperature <= 0` everything else is rejected without drawing.
/// Otherwise one uniform sample `u` in `[0, 1)` is drawn and the move is
/// accepted when `u < exp(-delta / temperature)`, so `delta == 0` is always
/// accepted.
pub fn accept<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0.0 {
        return true;
    }
    if temperature <= 0.0 {
        return false;
    }
    let probability = (-delta / temperature).exp();
    rng.random_range(0.0..1.0) < probability
}
