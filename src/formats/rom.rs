//! Fixed-offset codec for the sprite regions of an ALttP ROM image.
//!
//! Everything outside the three regions is opaque and preserved
//! byte-for-byte on write-back.

use crate::error::{Result, ShuffleError};
use crate::formats::{SpriteData, GLOVE_LEN, PALETTE_LEN, SHEET_LEN};

pub const PIXEL_OFFSET: usize = 0x80000;
pub const PALETTE_OFFSET: usize = 0xDD308;
pub const GLOVE_OFFSET: usize = 0xDEDF5;

/// Highest byte the codec touches; shorter buffers are rejected.
pub const MIN_ROM_LEN: usize = GLOVE_OFFSET + GLOVE_LEN;

pub fn load(rom: &[u8]) -> Result<SpriteData> {
    if rom.len() < MIN_ROM_LEN {
        return Err(ShuffleError::Format {
            len: rom.len(),
            need: MIN_ROM_LEN,
        });
    }

    let mut gloves = [0u8; GLOVE_LEN];
    gloves.copy_from_slice(&rom[GLOVE_OFFSET..GLOVE_OFFSET + GLOVE_LEN]);

    Ok(SpriteData {
        sheet: rom[PIXEL_OFFSET..PIXEL_OFFSET + SHEET_LEN].to_vec(),
        palette: rom[PALETTE_OFFSET..PALETTE_OFFSET + PALETTE_LEN].to_vec(),
        gloves,
    })
}

/// Copy of `rom` with only the three sprite regions overwritten.
pub fn write(rom: &[u8], sprite: &SpriteData) -> Result<Vec<u8>> {
    if rom.len() < MIN_ROM_LEN {
        return Err(ShuffleError::Format {
            len: rom.len(),
            need: MIN_ROM_LEN,
        });
    }

    let mut out = rom.to_vec();
    out[PIXEL_OFFSET..PIXEL_OFFSET + SHEET_LEN].copy_from_slice(&sprite.sheet);
    out[PALETTE_OFFSET..PALETTE_OFFSET + PALETTE_LEN].copy_from_slice(&sprite.palette);
    out[GLOVE_OFFSET..GLOVE_OFFSET + GLOVE_LEN].copy_from_slice(&sprite.gloves);
    Ok(out)
}
