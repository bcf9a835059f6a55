pub mod rom;
pub mod zspr;

/// Pixel data for one character sheet, 4bpp planar
pub const SHEET_LEN: usize = 0x7000;
/// Four 30-byte sub-palettes
pub const PALETTE_LEN: usize = 120;
/// Glove colour block, stored separately from the palette proper
pub const GLOVE_LEN: usize = 4;

/// One character's sprite data, independent of which container it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteData {
    pub sheet: Vec<u8>,
    pub palette: Vec<u8>,
    pub gloves: [u8; GLOVE_LEN],
}
