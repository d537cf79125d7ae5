//! Gaussian (white) noise.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::samples_for_ms;

/// Gaussian noise, one N(0, 1) draw per sample, lasting `ms` milliseconds.
///
/// Samples are not confined to [-1, 1]; the writer's normalization pass
/// establishes the final range.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sfxforge::white_noise;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let wav = white_noise(&mut rng, 100.0);
/// assert_eq!(wav.len(), 4410);
/// ```
pub fn white_noise<R: Rng + ?Sized>(rng: &mut R, ms: f64) -> Vec<f64> {
    white_noise_samples(rng, samples_for_ms(ms))
}

/// Gaussian noise with an explicit sample count.
pub fn white_noise_samples<R: Rng + ?Sized>(rng: &mut R, samples: usize) -> Vec<f64> {
    (0..samples)
        .map(|_| rng.sample::<f64, _>(StandardNormal))
        .collect()
}
