//! Shuffles the tiles of Link's spritesheet in an ALttP ROM or ZSPR sprite
//! container, optionally mixing in tiles from other sprite files.

mod binary_utils;
mod catalog;
mod error;
mod formats;
mod shuffle;
mod shuffler;
mod sources;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use error::ShuffleError;
use formats::{rom, zspr};
use shuffler::ShuffleSettings;
use sources::SourcePool;

#[derive(Parser, Debug)]
#[command(version, about = "Shuffles the head and/or body tiles of Link's spritesheet")]
struct Args {
    /// ALttP ROM to read the spritesheet from
    #[arg(long, conflicts_with = "zspr")]
    rom: Option<PathBuf>,

    /// ZSPR sprite file to read the spritesheet from
    #[arg(long)]
    zspr: Option<PathBuf>,

    /// Shuffle head tiles among each other
    #[arg(long)]
    head: bool,

    /// Shuffle body tiles among each other
    #[arg(long)]
    body: bool,

    /// Shuffle all head and body tiles in one pool. This will look weird.
    #[arg(long)]
    chaos: bool,

    /// Swap the bunny sprite wholesale from a random source sprite
    #[arg(long)]
    multibunny: bool,

    /// Source every shuffled tile from a random source sprite, keeping its
    /// position in the sheet
    #[arg(long, conflicts_with = "multisprite_full")]
    multisprite_simple: bool,

    /// Source every shuffled tile from a random source sprite at its
    /// shuffled position
    #[arg(long)]
    multisprite_full: bool,

    /// Clear the shadow-edge pixels of the walk frames so the shadow reads
    /// under any body
    #[arg(long)]
    make_shadow_edge_visible: bool,

    /// Directory of .zspr files used as foreign source sprites
    #[arg(long, default_value = "sprites")]
    sprite_dir: PathBuf,

    /// Write a .zspr sprite file instead of a patched ROM
    #[arg(long)]
    output_zspr: bool,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    let settings = ShuffleSettings {
        head: args.head,
        body: args.body,
        chaos: args.chaos,
        multibunny: args.multibunny,
        multisprite_simple: args.multisprite_simple,
        multisprite_full: args.multisprite_full,
        make_shadow_edge_visible: args.make_shadow_edge_visible,
    };
    settings.validate()?;

    let input = match (&args.rom, &args.zspr) {
        (Some(_), Some(_)) => {
            // clap's conflicts_with already rejects this combination
            return Err(ShuffleError::Configuration(
                "pass either --rom or --zspr, not both".into(),
            )
            .into());
        }
        (Some(path), None) => path,
        (None, Some(path)) => path,
        (None, None) => {
            return Err(
                ShuffleError::Configuration("no input specified, pass --rom or --zspr".into())
                    .into(),
            )
        }
    };
    if args.rom.is_none() && !args.output_zspr {
        bail!("writing a patched ROM requires a --rom input; pass --output-zspr instead");
    }

    let input_bytes =
        fs::read(input).with_context(|| format!("reading {}", input.display()))?;

    println!("Loading spritesheet from {}", input.display());
    let mut sprite = if args.rom.is_some() {
        rom::load(&input_bytes)?
    } else {
        zspr::load(&input_bytes)?
    };

    let pool = if settings.any_multisprite() {
        SourcePool::from_dir(&args.sprite_dir)
            .with_context(|| format!("scanning {}", args.sprite_dir.display()))?
    } else {
        SourcePool::empty()
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    shuffler::run(&mut sprite, &settings, &pool, &mut rng)?;

    let label = settings.output_label();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sprite".to_string());

    let (out_name, out_bytes) = if args.output_zspr {
        let name = format!("{}_{}.zspr", label, stem);
        (name.clone(), zspr::write(&sprite, &format!("{}_{}", label, stem)))
    } else {
        let base = input
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "rom.sfc".to_string());
        (format!("{}_{}", label, base), rom::write(&input_bytes, &sprite)?)
    };

    fs::write(&out_name, out_bytes).with_context(|| format!("writing {}", out_name))?;
    println!("Wrote {}", out_name);
    Ok(())
}
