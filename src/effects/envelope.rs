//! Amplitude envelopes: volume, linear fades, attack shaping, tremolo.

use crate::SAMPLE_RATE;

/// Scales every sample by `factor`; with `clip` set, the result is clamped
/// to [-1, 1].
pub fn vol(wav: &[f64], factor: f64, clip: bool) -> Vec<f64> {
    wav.iter()
        .map(|&s| {
            let scaled = s * factor;
            if clip { scaled.clamp(-1.0, 1.0) } else { scaled }
        })
        .collect()
}

/// Linear fade in across the whole sequence.
pub fn dim_from_zero(wav: &[f64]) -> Vec<f64> {
    let len = wav.len() as f64;
    wav.iter()
        .enumerate()
        .map(|(i, &s)| s * i as f64 / len)
        .collect()
}

/// Linear fade out across the whole sequence.
pub fn dim_to_zero(wav: &[f64]) -> Vec<f64> {
    let len = wav.len() as f64;
    wav.iter()
        .enumerate()
        .map(|(i, &s)| s * (len - i as f64) / len)
        .collect()
}

/// The tail of `wav` starting at `offset` (a fraction of its length), fading
/// along the same global ramp [`dim_to_zero`] applies. The portion before the
/// offset is discarded, not ramped.
pub fn dim(wav: &[f64], offset: f64) -> Vec<f64> {
    let len = wav.len() as f64;
    let start = ((offset * len) as usize).min(wav.len());
    wav[start..]
        .iter()
        .enumerate()
        .map(|(j, &s)| s * (len - (start + j) as f64) / len)
        .collect()
}

/// Linear attack up to `attack` (a fraction of the length), then a linear
/// decay to zero. The workhorse envelope for percussive cues.
pub fn shape(wav: &[f64], attack: f64) -> Vec<f64> {
    if wav.len() < 2 {
        return wav.to_vec();
    }
    let len = wav.len();
    let cp = ((attack * len as f64) as usize).clamp(1, len - 1);
    wav.iter()
        .enumerate()
        .map(|(i, &s)| {
            if i <= cp {
                s * i as f64 / cp as f64
            } else {
                s * (1.0 - (i - cp) as f64 / (len - cp) as f64)
            }
        })
        .collect()
}

/// Symmetric triangular fade: each half ramps linearly from silence at the
/// edges to full level at the midpoint.
pub fn taper(wav: &[f64]) -> Vec<f64> {
    let mut out = wav.to_vec();
    let l = out.len() / 2;
    if l == 0 {
        return out;
    }
    for i in 0..l {
        out[i] *= i as f64 / l as f64;
    }
    let len = out.len();
    for i in 1..l {
        out[len - i] *= i as f64 / l as f64;
    }
    out
}

/// Multiplies the sequence by a repeating linear 0-to-1 ramp with a period of
/// `cycle_ms` milliseconds (tremolo/strobe). The period may be fractional;
/// the ramp position carries the remainder across cycles.
pub fn pulse(wav: &[f64], cycle_ms: f64) -> Vec<f64> {
    let samples_per_cycle = cycle_ms * SAMPLE_RATE as f64 / 1000.0;
    let mut n = 0.0_f64;
    wav.iter()
        .map(|&s| {
            let out = s * (n / samples_per_cycle);
            n = (n + 1.0) % samples_per_cycle;
            out
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vol_scales() {
        assert_eq!(vol(&[0.5, -0.5], 0.5, false), vec![0.25, -0.25]);
    }

    #[test]
    fn test_vol_clip_bounds_output() {
        let wav = vec![0.9, -0.9, 0.1];
        let loud = vol(&wav, 4.0, true);
        assert!(loud.iter().all(|&s| (-1.0..=1.0).contains(&s)));
        assert_eq!(loud[0], 1.0);
        assert_eq!(loud[1], -1.0);
        assert!((loud[2] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_vol_without_clip_can_exceed_unity() {
        let loud = vol(&[0.9], 4.0, false);
        assert!((loud[0] - 3.6).abs() < 1e-12);
    }

    #[test]
    fn test_dim_from_zero_starts_silent() {
        let wav = vec![1.0; 10];
        let out = dim_from_zero(&wav);
        assert_eq!(out[0], 0.0);
        assert!(out[9] > out[5]);
    }

    #[test]
    fn test_dim_to_zero_fades_out() {
        let wav = vec![1.0; 10];
        let out = dim_to_zero(&wav);
        assert_eq!(out[0], 1.0);
        assert!(out[9] < out[5]);
    }

    #[test]
    fn test_dim_drops_head_and_keeps_global_ramp() {
        let wav = vec![1.0; 10];
        let out = dim(&wav, 0.5);
        assert_eq!(out.len(), 5);
        // First kept sample continues the full-length ramp at its offset.
        assert!((out[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_shape_peaks_at_breakpoint() {
        let wav = vec![1.0; 100];
        let out = shape(&wav, 0.1);
        assert_eq!(out[0], 0.0);
        assert_eq!(out[10], 1.0);
        assert!(out[50] < 1.0);
        assert!(out[99] < out[50]);
    }

    #[test]
    fn test_taper_silences_edges() {
        let wav = vec![1.0; 100];
        let out = taper(&wav);
        assert_eq!(out[0], 0.0);
        assert!(out[99] < 0.05);
        assert_eq!(out[50], 1.0);
    }

    #[test]
    fn test_pulse_ramps_each_cycle() {
        // 100 ms period is exactly 4410 samples.
        let wav = vec![1.0; 10_000];
        let out = pulse(&wav, 100.0);
        assert_eq!(out[0], 0.0);
        assert!((out[2205] - 0.5).abs() < 1e-12);
        assert!((out[4409] - 4409.0 / 4410.0).abs() < 1e-12);
        assert_eq!(out[4410], 0.0); // ramp wraps
    }
}
