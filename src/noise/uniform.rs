//! Uniform noise.

use rand::Rng;

use crate::samples_for_ms;

/// Uniform noise in [-1, 1) lasting `ms` milliseconds.
pub fn uniform_noise<R: Rng + ?Sized>(rng: &mut R, ms: f64) -> Vec<f64> {
    uniform_noise_samples(rng, samples_for_ms(ms))
}

/// Uniform noise with an explicit sample count.
pub fn uniform_noise_samples<R: Rng + ?Sized>(rng: &mut R, samples: usize) -> Vec<f64> {
    (0..samples).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_sample_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let wav = uniform_noise_samples(&mut rng, 10_000);
        assert!(wav.iter().all(|&s| (-1.0..1.0).contains(&s)));
    }

    #[test]
    fn test_deterministic_with_seed() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        assert_eq!(uniform_noise(&mut a, 10.0), uniform_noise(&mut b, 10.0));
    }
}
