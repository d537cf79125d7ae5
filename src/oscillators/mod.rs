//! Tone generators.
//!
//! This module contains the periodic waveform generators and the swept-tone
//! (glissando) generators.

mod gliss;
mod tone;

pub use gliss::{sine_gliss, siren, square_gliss};
pub use tone::{noisy_sine, sawtooth, sine, sine_harmonic, square, triangle};
