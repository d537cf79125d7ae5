//! Frequency filtering.
//!
//! Filters are designed from a transient [`FilterSpec`] and applied to whole
//! sequences with zero phase distortion, so filtering never changes a
//! sequence's length or shifts it in time.

mod biquad;
mod butterworth;

pub use biquad::{Biquad, SectionKind};
pub use butterworth::{Band, DEFAULT_ORDER, FilterSpec, bandpass, highpass, lowpass, zero_phase};
