//! Foreign-sheet pool for the multi-sprite modes.
//!
//! Sheets are loaded once from ZSPR containers and held read-only; a draw
//! hands out a borrowed sheet validated to have non-blank data at the tile
//! the caller wants to copy.

use std::fs;
use std::path::Path;

use rand::Rng;

use crate::catalog::{tile_offset, TileIndex, TILE_HEIGHT, TILE_ROW_LEN, TILE_ROW_STRIDE};
use crate::error::{Result, ShuffleError};
use crate::formats::{zspr, SpriteData};

/// How source bytes are resolved for each destination tile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceSelection {
    /// Shuffled tile from the current sheet
    OwnSheet,
    /// Same tile index, random foreign sheet (permutation ignored)
    SameIndex,
    /// Shuffled tile index, random foreign sheet
    PermutedIndex,
}

/// Draws beyond this many per tile are reported as pool exhaustion instead
/// of looping forever on an all-blank pool.
const DRAW_ATTEMPTS_PER_SHEET: usize = 10;

pub struct SourcePool {
    sheets: Vec<SpriteData>,
}

impl SourcePool {
    pub fn empty() -> Self {
        SourcePool { sheets: Vec::new() }
    }

    pub fn from_sheets(sheets: Vec<SpriteData>) -> Self {
        SourcePool { sheets }
    }

    /// Scan a directory for `.zspr` files. Corrupt files are skipped with a
    /// warning; they never abort the run.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut sheets = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().map_or(true, |e| e != "zspr") {
                continue;
            }
            let data = fs::read(&path)?;
            match zspr::load(&data) {
                Ok(sprite) => sheets.push(sprite),
                Err(e) => eprintln!("Warning: skipping {}: {}", path.display(), e),
            }
        }
        println!("Loaded {} source sprite(s)", sheets.len());
        Ok(SourcePool { sheets })
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Random sheet with non-blank pixel data at `index`. Redraws on blank
    /// candidates, bounded by pool size.
    pub fn draw_non_blank<R: Rng>(&self, index: TileIndex, rng: &mut R) -> Result<&SpriteData> {
        if self.sheets.is_empty() {
            return Err(ShuffleError::NoSourceSprites(
                "source sprite pool is empty".into(),
            ));
        }

        for _ in 0..self.sheets.len() * DRAW_ATTEMPTS_PER_SHEET {
            let candidate = &self.sheets[rng.gen_range(0..self.sheets.len())];
            if !is_blank_tile(&candidate.sheet, index) {
                return Ok(candidate);
            }
        }
        Err(ShuffleError::NoSourceSprites(format!(
            "no sheet in the pool has data at tile {}",
            index
        )))
    }
}

/// A tile region is blank when every byte of both its rows is zero.
pub fn is_blank_tile(sheet: &[u8], index: TileIndex) -> bool {
    let base = tile_offset(index);
    (0..TILE_HEIGHT).all(|h| {
        let row = base + h * TILE_ROW_STRIDE;
        sheet[row..row + TILE_ROW_LEN].iter().all(|&b| b == 0)
    })
}

/// Copy one 2x2-tile block between sheets (two 0x40-byte rows, 0x200 apart).
pub fn copy_tile(dst: &mut [u8], dst_index: TileIndex, src: &[u8], src_index: TileIndex) {
    for h in 0..TILE_HEIGHT {
        let s = tile_offset(src_index) + h * TILE_ROW_STRIDE;
        let d = tile_offset(dst_index) + h * TILE_ROW_STRIDE;
        dst[d..d + TILE_ROW_LEN].copy_from_slice(&src[s..s + TILE_ROW_LEN]);
    }
}
