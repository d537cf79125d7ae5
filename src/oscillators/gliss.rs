//! Swept-tone (glissando) generators.
//!
//! A gliss interpolates its instantaneous frequency linearly between a start
//! and an end value over the duration. The sine variant accumulates phase
//! sample-by-sample; the square variant emits whole cycles at the
//! instantaneous frequency, the same cycle-table approach as the periodic
//! generators.

use std::f64::consts::TAU;

use crate::{SAMPLE_RATE, samples_for_ms};

/// Instantaneous frequency `t` seconds into a linear sweep lasting `length`
/// seconds.
fn frequency_at(start_hz: f64, end_hz: f64, t: f64, length: f64) -> f64 {
    start_hz + (end_hz - start_hz) * (t / length)
}

/// Sine sweep from `start_hz` to `end_hz` over `ms` milliseconds.
///
/// The sweep runs past the nominal sample count to the next zero-crossing so
/// it never ends mid-swing with an audible click.
pub fn sine_gliss(start_hz: f64, end_hz: f64, ms: f64) -> Vec<f64> {
    let seconds = ms / 1000.0;
    let nominal = samples_for_ms(ms);
    let dt = 1.0 / SAMPLE_RATE as f64;

    let mut out = Vec::with_capacity(nominal + 64);
    let mut phase = 0.0_f64;
    let mut previous = 0.0_f64;
    let mut i = 0usize;
    loop {
        let sample = phase.sin();
        if i >= nominal && (sample == 0.0 || sample.signum() != previous.signum()) {
            break;
        }
        out.push(sample);
        previous = sample;
        phase += TAU * frequency_at(start_hz, end_hz, i as f64 * dt, seconds) * dt;
        i += 1;
    }
    out
}

/// Square sweep from `start_hz` to `end_hz` over `ms` milliseconds.
///
/// Whole cycles (positive half first) are appended at the instantaneous
/// frequency until the nominal sample count is reached; the output may
/// overshoot by up to one cycle.
pub fn square_gliss(start_hz: f64, end_hz: f64, ms: f64) -> Vec<f64> {
    let seconds = ms / 1000.0;
    let nominal = samples_for_ms(ms);

    let mut out = Vec::with_capacity(nominal + 256);
    let mut n = 0usize;
    while n < nominal {
        let t = n as f64 / nominal as f64 * seconds;
        let cycle_time = 1.0 / frequency_at(start_hz, end_hz, t, seconds);
        let cycle_samples = ((cycle_time * SAMPLE_RATE as f64) as usize).max(1);
        let half = cycle_samples / 2;
        out.extend(std::iter::repeat(1.0).take(half));
        out.extend(std::iter::repeat(-1.0).take(half));
        n += cycle_samples;
    }
    out
}

/// Rising-and-resetting square sweeps, repeated until `length_ms` of cycles
/// have been emitted.
pub fn siren(frequency: f64, shift_hz: f64, cycle_ms: f64, length_ms: f64) -> Vec<f64> {
    let mut out = Vec::new();
    let mut elapsed = 0.0;
    while elapsed < length_ms {
        out.extend(square_gliss(frequency, frequency + shift_hz, cycle_ms));
        elapsed += cycle_ms;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_gliss_length_and_tail() {
        let wav = sine_gliss(300.0, 800.0, 250.0);
        assert!(wav.len() >= samples_for_ms(250.0));
        // Terminated at a zero-crossing: the last sample is within one phase
        // step of zero (800 Hz advances at most ~0.114 per sample).
        assert!(wav.last().unwrap().abs() < 0.2);
    }

    #[test]
    fn test_sine_gliss_starts_at_zero() {
        let wav = sine_gliss(700.0, 400.0, 150.0);
        assert_eq!(wav[0], 0.0);
    }

    #[test]
    fn test_square_gliss_is_square() {
        let wav = square_gliss(700.0, 400.0, 150.0);
        assert!(wav.len() >= samples_for_ms(150.0));
        assert!(wav.iter().all(|&s| s == 1.0 || s == -1.0));
        assert_eq!(wav[0], 1.0); // positive half leads
    }

    #[test]
    fn test_siren_covers_requested_length() {
        let wav = siren(400.0, 200.0, 100.0, 350.0);
        assert!(wav.len() >= samples_for_ms(350.0));
    }
}
