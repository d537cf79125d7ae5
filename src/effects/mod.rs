//! Effects applied to whole sample sequences.
//!
//! Every effect takes its input by reference and returns a new sequence, so
//! callers can keep layering the same source without aliasing surprises.

mod blend;
mod compressor;
mod echo;
mod envelope;

pub use blend::{cross_fade, mix, phase_shift};
pub use compressor::compress;
pub use echo::echo;
pub use envelope::{dim, dim_from_zero, dim_to_zero, pulse, shape, taper, vol};
