//! # Tile region catalog
//!
//! Hand-curated tables of which 16x16 tile blocks in Link's sheet belong to
//! which shuffle region, derived from the sprite-format documentation. The
//! grid is 16 columns wide; index = row*16 + column, the upper 0x40-byte row
//! of a block sits at index*0x40 and the lower row 0x200 bytes further on.

/// Position of one 2x2-tile block within the 0x7000-byte sheet
pub type TileIndex = usize;

/// Bytes in one half of a tile block (a single 0x40-byte row)
pub const TILE_ROW_LEN: usize = 0x40;
/// Vertical stride between the two rows of a block
pub const TILE_ROW_STRIDE: usize = 0x200;
/// All shuffled blocks are two tile rows high
pub const TILE_HEIGHT: usize = 2;

/// Byte offset of the upper row of a tile block.
pub fn tile_offset(index: TileIndex) -> usize {
    index * TILE_ROW_LEN
}

/// Direction a head tile looks in, used for walk-cycle continuity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Up,
    Right,
    Down,
}

pub struct HeadTile {
    pub index: TileIndex,
    pub facing: Facing,
}

use Facing::{Down, Right, Up};

pub static HEAD_TILES: &[HeadTile] = &[
    HeadTile { index: 0, facing: Down },
    HeadTile { index: 1, facing: Up },
    HeadTile { index: 2, facing: Right },
    HeadTile { index: 3, facing: Right },
    HeadTile { index: 4, facing: Right },
    HeadTile { index: 5, facing: Down },
    HeadTile { index: 6, facing: Up },
    HeadTile { index: 7, facing: Right },
    HeadTile { index: 16 * 1 + 7, facing: Down },
    HeadTile { index: 16 * 4 + 2, facing: Up },
    HeadTile { index: 16 * 4 + 3, facing: Down },
    HeadTile { index: 16 * 4 + 4, facing: Right },
    HeadTile { index: 16 * 4 + 7, facing: Up },
    HeadTile { index: 16 * 6 + 5, facing: Down },
    HeadTile { index: 16 * 6 + 6, facing: Right },
    HeadTile { index: 16 * 10 + 3, facing: Down },
    HeadTile { index: 16 * 10 + 4, facing: Up },
    HeadTile { index: 16 * 10 + 5, facing: Right },
    HeadTile { index: 16 * 11 + 5, facing: Down },
    HeadTile { index: 16 * 11 + 6, facing: Up },
    HeadTile { index: 16 * 11 + 7, facing: Right },
    HeadTile { index: 16 * 20 + 0, facing: Down },
    HeadTile { index: 16 * 20 + 1, facing: Up },
    HeadTile { index: 16 * 20 + 2, facing: Right },
    HeadTile { index: 16 * 23 + 1, facing: Down },
    HeadTile { index: 16 * 25 + 0, facing: Up },
    HeadTile { index: 16 * 25 + 1, facing: Right },
    HeadTile { index: 16 * 25 + 3, facing: Down },
];

/// The three head slots of the left/right walking animation, in frame order
pub static WALK_CYCLE_HEADS: &[TileIndex] = &[2, 3, 4];

#[rustfmt::skip]
pub static BODY_TILES: &[TileIndex] = &[
    16 * 1 + 0, 16 * 1 + 1, 16 * 1 + 2, 16 * 1 + 3, 16 * 1 + 4, 16 * 1 + 5, 16 * 1 + 6,
    16 * 2 + 0, 16 * 2 + 1, 16 * 2 + 2, 16 * 2 + 3, 16 * 2 + 4, 16 * 2 + 5, 16 * 2 + 6, 16 * 2 + 7,
    16 * 3 + 0, 16 * 3 + 1, 16 * 3 + 2, 16 * 3 + 3, 16 * 3 + 4, 16 * 3 + 5, 16 * 3 + 6, 16 * 3 + 7,
    16 * 4 + 0, 16 * 4 + 1, 16 * 5 + 5, 16 * 5 + 6, 16 * 5 + 7, 16 * 6 + 7, 16 * 8 + 0, 16 * 8 + 1, 16 * 8 + 2,
    16 * 11 + 3, 16 * 11 + 4,
    16 * 12 + 0, 16 * 12 + 1, 16 * 12 + 2, 16 * 12 + 3, 16 * 12 + 4, 16 * 12 + 5, 16 * 12 + 6, 16 * 12 + 7,
    16 * 13 + 0, 16 * 13 + 1, 16 * 13 + 2, 16 * 13 + 3, 16 * 13 + 4, 16 * 13 + 5, 16 * 13 + 6, 16 * 13 + 7,
    16 * 14 + 0, 16 * 14 + 1, 16 * 14 + 2, 16 * 14 + 3, 16 * 14 + 4, 16 * 14 + 5, 16 * 14 + 6, 16 * 14 + 7,
    16 * 15 + 1, 16 * 15 + 2, 16 * 15 + 3, 16 * 15 + 4, 16 * 15 + 5, 16 * 15 + 6, 16 * 15 + 7,
    16 * 16 + 0, 16 * 16 + 1, 16 * 16 + 2, 16 * 16 + 3, 16 * 16 + 4, 16 * 16 + 5, 16 * 16 + 6, 16 * 16 + 7,
    16 * 17 + 3, 16 * 17 + 4, 16 * 17 + 5, 16 * 17 + 6, 16 * 17 + 7,
    16 * 18 + 3, 16 * 18 + 4, 16 * 18 + 5, 16 * 18 + 6, 16 * 18 + 7,
    16 * 19 + 3, 16 * 19 + 4, 16 * 19 + 5, 16 * 19 + 6, 16 * 19 + 7,
    16 * 20 + 3, 16 * 20 + 4, 16 * 20 + 5, 16 * 20 + 6, 16 * 20 + 7,
    16 * 21 + 0, 16 * 21 + 1, 16 * 21 + 2, 16 * 21 + 3, 16 * 21 + 4, 16 * 21 + 5, 16 * 21 + 6, 16 * 21 + 7,
    16 * 22 + 0, 16 * 22 + 1, 16 * 22 + 2, 16 * 22 + 3, 16 * 22 + 4, 16 * 22 + 5, 16 * 22 + 6, 16 * 22 + 7,
    16 * 23 + 0, 16 * 23 + 2, 16 * 23 + 3, 16 * 23 + 4, 16 * 23 + 5, 16 * 23 + 6, 16 * 23 + 7,
    16 * 24 + 0, 16 * 24 + 1, 16 * 24 + 2, 16 * 24 + 3, 16 * 24 + 4, 16 * 24 + 5, 16 * 25 + 4,
];

/// Bunny-form tiles at the bottom of the sheet. Never shuffled, only swapped
/// wholesale from one source sheet.
#[rustfmt::skip]
pub static BUNNY_TILES: &[TileIndex] = &[
    16 * 25 + 5, 16 * 25 + 6, 16 * 25 + 7,
    16 * 26 + 0, 16 * 26 + 1, 16 * 26 + 2, 16 * 26 + 3, 16 * 26 + 4, 16 * 26 + 5, 16 * 26 + 6, 16 * 26 + 7,
    16 * 27 + 0, 16 * 27 + 1, 16 * 27 + 2, 16 * 27 + 3, 16 * 27 + 4, 16 * 27 + 5,
];

pub fn head_region() -> Vec<TileIndex> {
    HEAD_TILES.iter().map(|h| h.index).collect()
}

pub fn body_region() -> &'static [TileIndex] {
    BODY_TILES
}

pub fn bunny_region() -> &'static [TileIndex] {
    BUNNY_TILES
}

pub fn walk_cycle_heads() -> &'static [TileIndex] {
    WALK_CYCLE_HEADS
}

/// Facing tag of a head tile, `None` for anything outside the head region.
pub fn head_facing(index: TileIndex) -> Option<Facing> {
    HEAD_TILES
        .iter()
        .find(|h| h.index == index)
        .map(|h| h.facing)
}

/// Body tiles whose shadow fringe faces up/down (standing and vertical walk
/// frames), targets of the shadow-edge clear.
#[rustfmt::skip]
pub static SHADOW_DOWN_TILES: &[TileIndex] = &[
    16 * 1 + 0, 16 * 1 + 1, 16 * 1 + 2, 16 * 1 + 3, 16 * 1 + 4, 16 * 1 + 5, 16 * 1 + 6,
];

/// Body tiles of the sideways walk frames, cleared with the side masks.
#[rustfmt::skip]
pub static SHADOW_SIDE_TILES: &[TileIndex] = &[
    16 * 2 + 0, 16 * 2 + 1, 16 * 2 + 2, 16 * 2 + 3, 16 * 2 + 4, 16 * 2 + 5, 16 * 2 + 6, 16 * 2 + 7,
];

// Per-tile clear masks, one byte per bitplane byte of the lower 8x8 tile.
// 4bpp planar: bytes 0..16 interleave planes 0/1 two bytes per pixel row,
// bytes 16..32 planes 2/3. Only the bottom pixel rows carry shadow fringe.

#[rustfmt::skip]
pub static SHADOW_DOWN_MASK_LEFT: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0xC0,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0xC0,
];

#[rustfmt::skip]
pub static SHADOW_DOWN_MASK_RIGHT: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x03,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x03,
];

#[rustfmt::skip]
pub static SHADOW_SIDE_MASK_LEFT: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xE0, 0xE0, 0xE0, 0xE0,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xE0, 0xE0, 0xE0, 0xE0,
];

#[rustfmt::skip]
pub static SHADOW_SIDE_MASK_RIGHT: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x01, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x01, 0x01,
];
