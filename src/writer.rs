//! Normalization and on-disk output.
//!
//! A finished sequence leaves the pipeline through [`write_sound`], which
//! scales it to full amplitude, optionally pads it with silence, and encodes
//! it twice: lossless 16-bit PCM in a `.wav`, and Vorbis in a sibling `.ogg`.

use std::fs::File;
use std::io::BufWriter;
use std::num::{NonZeroU32, NonZeroU8};
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use vorbis_rs::VorbisEncoderBuilder;

use crate::SAMPLE_RATE;
use crate::error::Error;
use crate::noise::silence;

/// Bit depth of the lossless container.
pub const BITS_PER_SAMPLE: u16 = 16;

const CHANNELS: NonZeroU8 = match NonZeroU8::new(1) {
    Some(n) => n,
    None => panic!("mono channel count is zero"),
};

const ENCODER_RATE: NonZeroU32 = match NonZeroU32::new(SAMPLE_RATE) {
    Some(n) => n,
    None => panic!("sample rate is zero"),
};

/// Controls the final conversion step before encoding.
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions {
    /// Scale so the peak sample sits exactly at plus or minus one.
    pub scale: bool,
    /// Silence added to both ends, in milliseconds.
    pub pad_ms: Option<f64>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            scale: true,
            pad_ms: None,
        }
    }
}

/// Scales the sequence so its peak reaches exactly plus or minus one.
///
/// All-zero input comes back unchanged; there is no peak to move.
///
/// ```
/// use sfxforge::normalize;
///
/// let out = normalize(&[0.25, -0.5]);
/// assert_eq!(out, vec![0.5, -1.0]);
/// ```
pub fn normalize(wav: &[f64]) -> Vec<f64> {
    let peak = wav.iter().fold(0.0_f64, |acc, &s| acc.max(s.abs()));
    if peak == 0.0 {
        return wav.to_vec();
    }
    wav.iter().map(|&s| s / peak).collect()
}

fn prepare(wav: &[f64], options: &WriteOptions) -> Vec<f64> {
    let scaled = if options.scale {
        normalize(wav)
    } else {
        wav.to_vec()
    };
    match options.pad_ms {
        Some(pad_ms) => {
            let pad = silence(pad_ms);
            let mut out = Vec::with_capacity(scaled.len() + pad.len() * 2);
            out.extend_from_slice(&pad);
            out.extend_from_slice(&scaled);
            out.extend_from_slice(&pad);
            out
        }
        None => scaled,
    }
}

/// Writes `name.wav` and `name.ogg` under `dir`.
///
/// The directory must already exist; creating it (and tolerating its
/// pre-existence) is the driver's one-time job, not the writer's.
pub fn write_sound(dir: &Path, name: &str, wav: &[f64], options: &WriteOptions) -> Result<(), Error> {
    let prepared = prepare(wav, options);
    write_wav(&dir.join(format!("{name}.wav")), &prepared)?;
    write_ogg(&dir.join(format!("{name}.ogg")), &prepared)?;
    Ok(())
}

/// Encodes 16-bit mono PCM at the pipeline sample rate.
pub fn write_wav(path: &Path, wav: &[f64]) -> Result<(), Error> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for &sample in wav {
        writer.write_sample(to_pcm_i16(sample))?;
    }
    writer.finalize()?;
    Ok(())
}

fn to_pcm_i16(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * f64::from(i16::MAX)) as i16
}

/// Encodes mono Vorbis at the pipeline sample rate.
pub fn write_ogg(path: &Path, wav: &[f64]) -> Result<(), Error> {
    let sink = BufWriter::new(File::create(path)?);
    let block: Vec<f32> = wav.iter().map(|&s| s.clamp(-1.0, 1.0) as f32).collect();

    let mut encoder = VorbisEncoderBuilder::new(ENCODER_RATE, CHANNELS, sink)?.build()?;
    encoder.encode_audio_block([&block])?;
    encoder.finish()?;
    Ok(())
}
