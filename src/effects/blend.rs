//! Combining sequences: mixing, cross-fading, phase-shift doubling.

use crate::error::Error;

/// Sample-wise average of `sequences`, truncated to the shortest input.
///
/// Longer inputs lose their tails; that is how layered cues of different
/// lengths are meant to line up. An empty input list yields an empty
/// sequence.
///
/// ```
/// use sfxforge::mix;
///
/// let one = vec![1.0, 1.0, 1.0];
/// let two = vec![0.5, 0.5];
/// assert_eq!(mix(&[&one, &two]), vec![0.75, 0.75]);
/// ```
pub fn mix<S: AsRef<[f64]>>(sequences: &[S]) -> Vec<f64> {
    let Some(shortest) = sequences.iter().map(|s| s.as_ref().len()).min() else {
        return Vec::new();
    };
    let count = sequences.len() as f64;
    (0..shortest)
        .map(|i| sequences.iter().map(|s| s.as_ref()[i]).sum::<f64>() / count)
        .collect()
}

/// Splices `one` into `two`, ramping the tail of `one` down and the head of
/// `two` up over `samples` samples, then concatenating.
///
/// No samples are dropped: the result is exactly `one.len() + two.len()`
/// long. Fails when either input is shorter than twice the overlap, since
/// the ramps would collide with each other.
pub fn cross_fade(one: &[f64], two: &[f64], samples: usize) -> Result<Vec<f64>, Error> {
    if one.len() < samples * 2 || two.len() < samples * 2 {
        return Err(Error::CrossFadeTooShort {
            one: one.len(),
            two: two.len(),
            overlap: samples,
        });
    }

    let mut out = Vec::with_capacity(one.len() + two.len());
    out.extend_from_slice(one);
    let len = out.len();
    for i in 0..samples {
        out[len - samples + i] *= (samples - i) as f64 / samples as f64;
    }
    out.extend(two.iter().enumerate().map(|(i, &s)| {
        if i < samples {
            s * i as f64 / samples as f64
        } else {
            s
        }
    }));
    Ok(out)
}

/// Mixes `wav` with a circularly shifted copy of itself, thickening the tone
/// the way a detuned second voice would.
pub fn phase_shift(wav: &[f64], offset: usize) -> Vec<f64> {
    if wav.is_empty() {
        return Vec::new();
    }
    let shifted: Vec<f64> = (0..wav.len())
        .map(|i| wav[(i + offset) % wav.len()])
        .collect();
    mix(&[wav, shifted.as_slice()])
}
