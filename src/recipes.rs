//! The sound catalog.
//!
//! Each recipe is a fixed composition of generators and effects producing one
//! named cue. The catalog is static: the driver enumerates it, renders every
//! entry, and writes the result. Recipes share no state and can run in any
//! order; the injected RNG is their only outside input.

use rand::RngCore;

use crate::effects::{compress, cross_fade, echo, mix, phase_shift, shape, taper, vol};
use crate::error::Error;
use crate::filters::{bandpass, highpass, lowpass};
use crate::noise::{silence, uniform_noise, white_noise};
use crate::oscillators::{sawtooth, sine, sine_gliss, square, square_gliss};
use crate::pitch::{NATURALS, Note};

/// A parameterless synthesis pipeline for one cue.
pub type Recipe = fn(&mut dyn RngCore) -> Vec<f64>;

/// Every cue the pipeline produces, in write order.
pub const CATALOG: &[(&str, Recipe)] = &[
    ("pew", pew),
    ("game_start", game_start),
    ("game_over", game_over),
    ("button_click", button_click),
    ("menu_open", menu_open),
    ("menu_close", menu_close),
    ("damage_hit", damage_hit),
    ("egg_spawn", egg_spawn),
    ("egg_hatch", egg_hatch),
    ("swarm1", swarm1),
    ("swarm2", swarm2),
    ("swarm3", swarm3),
    ("swarm4", swarm4),
    ("swarm5", swarm5),
    ("egg_grow_medium", egg_grow_medium),
    ("egg_grow_large", egg_grow_large),
    ("alien_kill", alien_kill),
    ("egg_kill", egg_kill),
];

/// Laser shot: a falling square sweep doubled against itself.
pub fn pew(_rng: &mut dyn RngCore) -> Vec<f64> {
    let wav = square_gliss(700.0, 400.0, 150.0);
    shape(&phase_shift(&wav, 10), 0.01)
}

/// Rising major-chord arpeggio capped with a descending run.
pub fn game_start(_rng: &mut dyn RngCore) -> Vec<f64> {
    let mut res = Vec::new();
    for octave in 3..6 {
        for note in [Note::C, Note::E, Note::G] {
            res.extend(shape(&square(note.frequency(octave), 100.0), 0.1));
        }
    }
    res.extend(shape(&square(Note::C.frequency(6), 100.0), 0.1));

    let run = [
        Note::C,
        Note::B,
        Note::A,
        Note::G,
        Note::F,
        Note::E,
        Note::D,
        Note::C,
    ];
    for i in 0..run.len() {
        for j in 0..3 {
            if i + j < run.len() {
                res.extend(shape(&square(run[i + j].frequency(4), 60.0), 0.1));
            }
        }
    }
    res
}

/// Full scale sweep ending in a low two-octave rumble.
pub fn game_over(_rng: &mut dyn RngCore) -> Vec<f64> {
    let mut res = Vec::new();
    for note in NATURALS {
        for octave in 3..6 {
            res.extend(square(note.frequency(octave), 50.0));
        }
    }
    res.extend(square(Note::C.frequency(6), 100.0));
    let rumble = mix(&[
        &square(Note::C.frequency(2), 800.0),
        &square(Note::C.frequency(3), 800.0),
    ]);
    res.extend(shape(&rumble, 0.1));
    res
}

/// Double click: two square blips an octave-and-a-half apart plus a noise
/// tick, layered.
pub fn button_click(rng: &mut dyn RngCore) -> Vec<f64> {
    let mut one = square(400.0, 10.0);
    one.extend(silence(50.0));
    one.extend(square(400.0, 10.0));

    let mut two = square(1200.0, 10.0);
    two.extend(silence(50.0));
    two.extend(square(1200.0, 10.0));

    let mut three = uniform_noise(rng, 10.0);
    three.extend(silence(50.0));
    three.extend(uniform_noise(rng, 10.0));

    mix(&[&one, &two, &three])
}

/// Rising sine sweep.
pub fn menu_open(_rng: &mut dyn RngCore) -> Vec<f64> {
    shape(&sine_gliss(300.0, 800.0, 250.0), 0.01)
}

/// Falling sine sweep, the mirror of [`menu_open`].
pub fn menu_close(_rng: &mut dyn RngCore) -> Vec<f64> {
    shape(&sine_gliss(800.0, 300.0, 250.0), 0.01)
}

/// Short band-limited noise burst, squashed and echoed.
pub fn damage_hit(rng: &mut dyn RngCore) -> Vec<f64> {
    let burst = bandpass(&uniform_noise(rng, 100.0), 100.0, 800.0);
    echo(&compress(&burst, 1.0), 100.0, 0.4, 5.0)
}

/// Muffled thump with a triangular swell.
pub fn egg_spawn(_rng: &mut dyn RngCore) -> Vec<f64> {
    taper(&lowpass(&square(400.0, 100.0), 200.0))
}

/// Crack plus hiss: a muffled square layered with band-limited noise.
pub fn egg_hatch(rng: &mut dyn RngCore) -> Vec<f64> {
    let crack = lowpass(&square(1000.0, 100.0), 400.0);
    let hiss = vol(&bandpass(&white_noise(rng, 1000.0), 400.0, 500.0), 0.5, false);
    let wav = taper(&mix(&[&crack, &hiss]));
    shape(&compress(&wav, 1.0), 0.1)
}

/// Shared bed for the swarm layers: a high-passed 50 Hz saw under a mirrored
/// 100 ms tremolo ramp running 0.25 to 1.25.
fn swarm_base(freq: f64) -> Vec<f64> {
    let ms = 10_000.0;
    let mut wav = highpass(&sawtooth(freq, ms), 600.0);

    let pulse_ms = 100.0;
    let len = wav.len();
    let step = (len as f64 * (pulse_ms / ms)) as usize;
    if step == 0 {
        return wav;
    }
    let half = step as f64 / 2.0;
    let mut x = 0;
    while x < len {
        for i in x..(x + step).min(len) {
            let scale = (i - x) as f64 / half * 0.5 + 0.25;
            wav[i] *= scale;
            let mirror = if i == 0 { 0 } else { len - i };
            wav[mirror] *= scale;
        }
        x += step;
    }
    wav
}

pub fn swarm1(_rng: &mut dyn RngCore) -> Vec<f64> {
    swarm_base(50.0)
}

pub fn swarm2(_rng: &mut dyn RngCore) -> Vec<f64> {
    compress(&swarm_base(50.0), 0.05)
}

pub fn swarm3(_rng: &mut dyn RngCore) -> Vec<f64> {
    compress(&swarm_base(50.0), 0.1)
}

pub fn swarm4(_rng: &mut dyn RngCore) -> Vec<f64> {
    compress(&swarm_base(50.0), 0.2)
}

pub fn swarm5(_rng: &mut dyn RngCore) -> Vec<f64> {
    compress(&swarm_base(50.0), 0.3)
}

/// Soft upward burble.
pub fn egg_grow_medium(_rng: &mut dyn RngCore) -> Vec<f64> {
    let wav = lowpass(&sine_gliss(400.0, 500.0, 200.0), 450.0);
    echo(&wav, 200.0, 0.6, 5.0)
}

/// Bigger upward burble for the second growth stage.
pub fn egg_grow_large(_rng: &mut dyn RngCore) -> Vec<f64> {
    let wav = lowpass(&sine_gliss(500.0, 900.0, 200.0), 600.0);
    echo(&wav, 200.0, 0.6, 5.0)
}

/// Wet band-limited burst with a long echo.
pub fn alien_kill(rng: &mut dyn RngCore) -> Vec<f64> {
    let burst = bandpass(&white_noise(rng, 200.0), 100.0, 400.0);
    echo(&compress(&burst, 1.0), 200.0, 0.4, 5.0)
}

/// Shorter, tighter variant of [`alien_kill`].
pub fn egg_kill(rng: &mut dyn RngCore) -> Vec<f64> {
    let burst = bandpass(&white_noise(rng, 50.0), 100.0, 400.0);
    echo(&compress(&burst, 1.0), 50.0, 0.4, 5.0)
}

/// Cross-faded run up the naturals, octaves 3 through 5.
///
/// Not in the catalog (the pipeline has never shipped it); it stays as the
/// reference user of [`cross_fade`] and a handy smoke signal for the tone
/// generators.
pub fn scale() -> Result<Vec<f64>, Error> {
    let mut res: Vec<f64> = Vec::new();
    for octave in 3..6 {
        for note in NATURALS {
            let tone = sine(note.frequency(octave), 100.0);
            res = if res.is_empty() {
                tone
            } else {
                cross_fade(&res, &tone, 100)?
            };
        }
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_catalog_names_are_unique() {
        for (i, (name, _)) in CATALOG.iter().enumerate() {
            assert!(
                CATALOG[i + 1..].iter().all(|(other, _)| other != name),
                "duplicate catalog entry: {name}"
            );
        }
    }

    #[test]
    fn test_every_recipe_renders() {
        let mut rng = StdRng::seed_from_u64(42);
        for (name, recipe) in CATALOG {
            let wav = recipe(&mut rng);
            assert!(!wav.is_empty(), "{name} rendered no samples");
            assert!(
                wav.iter().all(|s| s.is_finite()),
                "{name} rendered non-finite samples"
            );
        }
    }

    #[test]
    fn test_recipes_are_deterministic_under_a_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(damage_hit(&mut a), damage_hit(&mut b));
    }

    #[test]
    fn test_scale_renders() {
        let wav = scale().unwrap();
        // 21 cross-faded 100 ms tones.
        assert!(wav.len() > 21 * 4000);
    }
}
