//! Periodic waveform generators.
//!
//! Each generator computes one cycle of its waveform analytically and repeats
//! it until the requested duration is met or exceeded. Output is always a
//! whole number of cycles, so a looped cue has no phase discontinuity at the
//! seam; the cost is up to one cycle of overshoot past the nominal length.

use std::f64::consts::TAU;

use rand::Rng;

use crate::effects::{mix, vol};
use crate::{SAMPLE_RATE, samples_for_ms};

/// Whole samples in one cycle at `frequency`. Fractional samples are dropped,
/// matching the fixed-cycle-table synthesis this pipeline has always used.
fn samples_per_cycle(frequency: f64) -> usize {
    assert!(
        frequency > 0.0 && frequency <= SAMPLE_RATE as f64,
        "frequency out of range: {frequency}"
    );
    (SAMPLE_RATE as f64 / frequency) as usize
}

/// Repeats `cycle` until at least `target` samples are collected.
fn repeat_cycle(cycle: &[f64], target: usize) -> Vec<f64> {
    assert!(
        !cycle.is_empty() || target == 0,
        "cycle shorter than one sample"
    );
    let mut out = Vec::with_capacity(target + cycle.len());
    while out.len() < target {
        out.extend_from_slice(cycle);
    }
    out
}

/// Sine tone at `frequency` Hz lasting at least `ms` milliseconds.
///
/// ```
/// use sfxforge::{samples_for_ms, sine};
///
/// let wav = sine(441.0, 100.0);
/// assert!(wav.len() >= samples_for_ms(100.0));
/// ```
pub fn sine(frequency: f64, ms: f64) -> Vec<f64> {
    let spc = samples_per_cycle(frequency);
    let cycle: Vec<f64> = (0..spc)
        .map(|i| (i as f64 / spc as f64 * TAU).sin())
        .collect();
    repeat_cycle(&cycle, samples_for_ms(ms))
}

/// Square tone: half a cycle at -1.0, then half a cycle at +1.0.
pub fn square(frequency: f64, ms: f64) -> Vec<f64> {
    let half = samples_per_cycle(frequency) / 2;
    let mut cycle = vec![-1.0; half];
    cycle.resize(half * 2, 1.0);
    repeat_cycle(&cycle, samples_for_ms(ms))
}

/// Triangle tone: a linear rise over half a cycle, then a linear fall.
pub fn triangle(frequency: f64, ms: f64) -> Vec<f64> {
    let x = samples_per_cycle(frequency) / 2;
    let mut cycle = Vec::with_capacity(x * 2);
    for i in 0..x {
        cycle.push(i as f64 * 2.0 / x as f64 - 1.0);
    }
    for i in 0..x {
        cycle.push(1.0 - i as f64 * 2.0 / x as f64);
    }
    repeat_cycle(&cycle, samples_for_ms(ms))
}

/// Sawtooth tone: a linear ramp from -1.0 toward +1.0 each cycle.
pub fn sawtooth(frequency: f64, ms: f64) -> Vec<f64> {
    let spc = samples_per_cycle(frequency);
    let cycle: Vec<f64> = (0..spc)
        .map(|i| i as f64 * 2.0 / spc as f64 - 1.0)
        .collect();
    repeat_cycle(&cycle, samples_for_ms(ms))
}

/// Sine tone enriched with harmonics 2 through 7, each at `1 / h^2` volume.
pub fn sine_harmonic(frequency: f64, ms: f64) -> Vec<f64> {
    let mut wav = sine(frequency, ms);
    for harmonic in 2..8 {
        let overtone = vol(
            &sine(frequency * harmonic as f64, ms),
            1.0 / (harmonic * harmonic) as f64,
            false,
        );
        wav = mix(&[&wav, &overtone]);
    }
    wav
}

/// Sine tone whose period drifts by up to `noise_ratio / 2` samples per cycle,
/// for a warbling, unstable pitch.
pub fn noisy_sine<R: Rng + ?Sized>(
    rng: &mut R,
    frequency: f64,
    ms: f64,
    noise_ratio: f64,
) -> Vec<f64> {
    let target = samples_for_ms(ms);
    let mut spc = SAMPLE_RATE as f64 / frequency;
    let mut out = Vec::with_capacity(target);
    while out.len() < target {
        if spc < 1.0 {
            break;
        }
        for i in 0..spc as usize {
            out.push((i as f64 / spc * TAU).sin());
        }
        spc += (rng.gen_range(0.0..1.0) - 0.5) * noise_ratio;
    }
    out
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_square_wave_structure() {
        // 400 Hz at 44100 gives 110 samples per cycle, 55 per half.
        let wav = square(400.0, 10.0);
        assert!(wav.len() >= 441);
        assert_eq!(wav.len(), 550); // 5 whole cycles
        assert!(wav[..55].iter().all(|&s| s == -1.0));
        assert!(wav[55..110].iter().all(|&s| s == 1.0));
        assert!(wav[110..165].iter().all(|&s| s == -1.0));
    }

    #[test]
    fn test_periodic_length_at_least_nominal() {
        for &(freq, ms) in &[(440.0, 100.0), (50.0, 10.0), (1200.0, 250.0), (997.0, 33.0)] {
            let nominal = samples_for_ms(ms);
            assert!(sine(freq, ms).len() >= nominal);
            assert!(square(freq, ms).len() >= nominal);
            assert!(triangle(freq, ms).len() >= nominal);
            assert!(sawtooth(freq, ms).len() >= nominal);
        }
    }

    #[test]
    fn test_sine_whole_cycles() {
        // 441 Hz divides the sample rate exactly: 100 samples per cycle.
        let wav = sine(441.0, 25.0);
        assert_eq!(wav.len() % 100, 0);
        assert_eq!(wav[0], 0.0);
        assert!((wav[25] - 1.0).abs() < 1e-9); // quarter cycle peak
    }

    #[test]
    fn test_triangle_range() {
        let wav = triangle(440.0, 50.0);
        assert!(wav.iter().all(|&s| (-1.0..=1.0).contains(&s)));
        assert_eq!(wav[0], -1.0);
    }

    #[test]
    fn test_sawtooth_ramp() {
        let wav = sawtooth(441.0, 10.0);
        assert_eq!(wav[0], -1.0);
        // Strictly rising within a cycle.
        assert!(wav[1] > wav[0] && wav[99] > wav[98]);
    }

    #[test]
    fn test_sine_harmonic_length() {
        let nominal = samples_for_ms(100.0);
        assert!(sine_harmonic(200.0, 100.0).len() >= nominal);
    }

    #[test]
    fn test_noisy_sine_deterministic() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(
            noisy_sine(&mut a, 440.0, 50.0, 4.0),
            noisy_sine(&mut b, 440.0, 50.0, 4.0)
        );
    }
}
