//! Batch driver: renders every cataloged cue into `sounds/`.
//!
//! Run with `SFX_SEED=<n>` for a reproducible asset build; otherwise the
//! noise layers are fresh on every run. `RUST_LOG=info` shows per-cue
//! progress.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use sfxforge::recipes::CATALOG;
use sfxforge::writer::{WriteOptions, write_sound};

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = Path::new("sounds");
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let mut rng = match std::env::var("SFX_SEED") {
        Ok(seed) => {
            let seed: u64 = seed.parse().context("SFX_SEED must be an integer")?;
            info!("seeding with {seed}");
            StdRng::seed_from_u64(seed)
        }
        Err(_) => StdRng::from_entropy(),
    };

    for (name, recipe) in CATALOG {
        let wav = recipe(&mut rng);
        info!("{name}: {} samples", wav.len());
        write_sound(out_dir, name, &wav, &WriteOptions::default())
            .with_context(|| format!("writing {name}"))?;
    }
    info!("wrote {} cues to {}", CATALOG.len(), out_dir.display());
    Ok(())
}
