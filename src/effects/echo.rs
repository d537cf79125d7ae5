//! Recursive feedback echo.

use crate::samples_for_ms;

/// Adds a decaying, delayed copy of the signal onto itself.
///
/// The sequence first grows by `extend` times its own length in trailing
/// zeros, making room for the decay tail. The forward scan then feeds every
/// sample into the sample `delay_ms` later, so echoes re-echo: a single
/// impulse becomes a geometric train with ratio `decay`.
pub fn echo(wav: &[f64], delay_ms: f64, decay: f64, extend: f64) -> Vec<f64> {
    let mut out = wav.to_vec();
    out.resize(wav.len() + (wav.len() as f64 * extend) as usize, 0.0);

    let delay = samples_for_ms(delay_ms);
    if delay == 0 || delay >= out.len() {
        return out;
    }
    for i in 0..out.len() - delay {
        out[i + delay] += out[i] * decay;
    }
    out
}
