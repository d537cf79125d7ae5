//! Crate-level error type.

use thiserror::Error as ThisError;

/// Errors surfaced by effects and the writer.
///
/// Synthesis itself is infallible; the two failure sources are a cross-fade
/// without enough material to overlap, and the encoders/filesystem at write
/// time.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Each cross-fade input must cover at least twice the overlap.
    #[error("not enough samples to cross fade: inputs of {one} and {two} with overlap {overlap}")]
    CrossFadeTooShort {
        /// Length of the first input.
        one: usize,
        /// Length of the second input.
        two: usize,
        /// Requested overlap in samples.
        overlap: usize,
    },

    #[error("wav encoding failed: {0}")]
    Wav(#[from] hound::Error),

    #[error("ogg encoding failed: {0}")]
    Ogg(#[from] vorbis_rs::VorbisError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
