//! # ZSPR sprite container
//!
//! Self-describing exchange format for one player sheet: a small header
//! (magic, version, checksum pair, region offsets/lengths, metadata strings)
//! followed by the pixel data and then the palette + glove data. Only
//! version 1 is supported.

use std::io::Cursor;

use crate::binary_utils::{read_bytes, read_i32_le, read_u16_le, read_u8, write_u16_le, write_u32_le};
use crate::error::{Result, ShuffleError};
use crate::formats::{SpriteData, GLOVE_LEN, PALETTE_LEN, SHEET_LEN};

pub const MAGIC: &[u8; 4] = b"ZSPR";
pub const VERSION: u8 = 1;
pub const SPRITE_TYPE_PLAYER: u16 = 1;

/// Fixed header fields, up to but not including the metadata strings
const HEADER_LEN: usize = 29;
const CHECKSUM_POS: usize = 5;
const PIXEL_OFFSET_POS: usize = 9;
const PIXEL_LEN_POS: usize = 13;
const PALETTE_OFFSET_POS: usize = 15;
const PALETTE_LEN_POS: usize = 19;

const AUTHOR_NAME: &str = "Sprite Shuffler";
const AUTHOR_TAG: &str = "SHUF";

fn corrupt(msg: impl Into<String>) -> ShuffleError {
    ShuffleError::CorruptContainer(msg.into())
}

/// Sum of every byte with the 4-byte checksum field treated as zero,
/// plus 0x1FE, mod 0x10000.
pub fn checksum_of(data: &[u8]) -> u16 {
    let mut sum: u32 = 0x1FE;
    for (i, &b) in data.iter().enumerate() {
        if (CHECKSUM_POS..CHECKSUM_POS + 4).contains(&i) {
            continue;
        }
        sum = (sum + b as u32) % 0x10000;
    }
    sum as u16
}

pub fn load(data: &[u8]) -> Result<SpriteData> {
    if data.len() < HEADER_LEN {
        return Err(corrupt(format!(
            "{} bytes is too short for a ZSPR header",
            data.len()
        )));
    }

    let mut cursor = Cursor::new(data);
    let magic = read_bytes(&mut cursor, 4)?;
    if magic.as_slice() != &MAGIC[..] {
        return Err(corrupt("missing ZSPR magic"));
    }

    let version = read_u8(&mut cursor)?;
    if version != VERSION {
        return Err(ShuffleError::UnsupportedVersion(version));
    }

    let stored_checksum = read_u16_le(&mut cursor)?;
    let stored_complement = read_u16_le(&mut cursor)?;
    let pixel_offset = read_i32_le(&mut cursor)?;
    let pixel_len = read_u16_le(&mut cursor)? as usize;
    let palette_offset = read_i32_le(&mut cursor)?;
    let palette_len = read_u16_le(&mut cursor)? as usize;

    if pixel_offset <= 0 || palette_offset <= 0 {
        return Err(corrupt("zero or negative data offset"));
    }
    let pixel_offset = pixel_offset as usize;
    let palette_offset = palette_offset as usize;

    if pixel_len != SHEET_LEN {
        return Err(corrupt(format!(
            "pixel data length {:#x}, expected {:#x}",
            pixel_len, SHEET_LEN
        )));
    }
    if palette_len != PALETTE_LEN + GLOVE_LEN {
        return Err(corrupt(format!(
            "palette data length {}, expected {}",
            palette_len,
            PALETTE_LEN + GLOVE_LEN
        )));
    }
    if pixel_offset + pixel_len > palette_offset {
        return Err(corrupt("pixel region overlaps palette region"));
    }
    if palette_offset + palette_len > data.len() {
        return Err(corrupt("palette region runs past end of buffer"));
    }

    let recomputed = checksum_of(data);
    if stored_checksum != recomputed || stored_complement != 0xFFFF - recomputed {
        eprintln!(
            "Warning: ZSPR checksum mismatch (stored {:#06x}, computed {:#06x})",
            stored_checksum, recomputed
        );
    }

    let palette_end = palette_offset + palette_len;
    let mut gloves = [0u8; GLOVE_LEN];
    gloves.copy_from_slice(&data[palette_end - GLOVE_LEN..palette_end]);

    Ok(SpriteData {
        sheet: data[pixel_offset..pixel_offset + pixel_len].to_vec(),
        palette: data[palette_offset..palette_end - GLOVE_LEN].to_vec(),
        gloves,
    })
}

fn push_utf16(out: &mut Vec<u8>, s: &str) {
    for unit in s.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out.extend_from_slice(&[0, 0]);
}

pub fn write(sprite: &SpriteData, display_name: &str) -> Vec<u8> {
    let mut out = vec![0u8; HEADER_LEN];
    out[0..4].copy_from_slice(MAGIC);
    out[4] = VERSION;
    write_u16_le(&mut out, SPRITE_TYPE_PLAYER, 21);
    // bytes 23..29 stay reserved zeros

    push_utf16(&mut out, display_name);
    push_utf16(&mut out, AUTHOR_NAME);
    out.extend_from_slice(AUTHOR_TAG.as_bytes());
    out.push(0);

    let pixel_offset = out.len();
    out.extend_from_slice(&sprite.sheet);
    let palette_offset = out.len();
    out.extend_from_slice(&sprite.palette);
    out.extend_from_slice(&sprite.gloves);

    // Backpatch the region fields now that the string lengths are known
    write_u32_le(&mut out, pixel_offset as u32, PIXEL_OFFSET_POS);
    write_u16_le(&mut out, SHEET_LEN as u16, PIXEL_LEN_POS);
    write_u32_le(&mut out, palette_offset as u32, PALETTE_OFFSET_POS);
    write_u16_le(&mut out, (PALETTE_LEN + GLOVE_LEN) as u16, PALETTE_LEN_POS);

    let checksum = checksum_of(&out);
    write_u16_le(&mut out, checksum, CHECKSUM_POS);
    write_u16_le(&mut out, 0xFFFF - checksum, CHECKSUM_POS + 2);

    out
}
