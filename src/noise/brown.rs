//! Brown (integrated) noise.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::samples_for_ms;

/// Brown noise: a running sum of gaussian steps, lasting `ms` milliseconds.
///
/// The walk starts at zero and is unbounded; like white noise it relies on
/// the writer's normalization for the final range. Low frequencies dominate,
/// which makes it the rumbling counterpart to [`white_noise`].
///
/// [`white_noise`]: crate::noise::white_noise
pub fn brown_noise<R: Rng + ?Sized>(rng: &mut R, ms: f64) -> Vec<f64> {
    let mut level = 0.0_f64;
    (0..samples_for_ms(ms))
        .map(|_| {
            let current = level;
            level += rng.sample::<f64, _>(StandardNormal);
            current
        })
        .collect()
}
