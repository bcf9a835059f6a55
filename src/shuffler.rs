//! # Shuffle orchestrator
//!
//! Wires the mode flags to region selection, runs the permutation engine
//! and cross-sheet sourcing, then the bunny and shadow post-processing.
//! One call mutates one destination sprite in place; output writing is the
//! caller's last step, so a failed run never produces a partial file.

use rand::Rng;

use crate::catalog::{self, tile_offset, TileIndex, TILE_ROW_STRIDE};
use crate::error::{Result, ShuffleError};
use crate::formats::SpriteData;
use crate::shuffle;
use crate::sources::{copy_tile, SourcePool, SourceSelection};

/// Third 30-byte sub-palette, the bunny-form slot
const BUNNY_PALETTE_START: usize = 90;
const BUNNY_PALETTE_END: usize = 120;

#[derive(Clone, Copy, Debug, Default)]
pub struct ShuffleSettings {
    pub head: bool,
    pub body: bool,
    pub chaos: bool,
    pub multibunny: bool,
    pub multisprite_simple: bool,
    pub multisprite_full: bool,
    pub make_shadow_edge_visible: bool,
}

impl ShuffleSettings {
    pub fn any_region(&self) -> bool {
        self.head || self.body || self.chaos
    }

    /// Any mode that pulls tiles from foreign sheets
    pub fn any_multisprite(&self) -> bool {
        self.multisprite_simple || self.multisprite_full || self.multibunny
    }

    pub fn source_selection(&self) -> SourceSelection {
        if self.multisprite_simple {
            SourceSelection::SameIndex
        } else if self.multisprite_full {
            SourceSelection::PermutedIndex
        } else {
            SourceSelection::OwnSheet
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.any_region() && !self.multibunny {
            return Err(ShuffleError::Configuration(
                "no shuffle specified, pass at least one of --head, --body, --chaos, --multibunny"
                    .into(),
            ));
        }
        if self.multisprite_simple && self.multisprite_full {
            return Err(ShuffleError::Configuration(
                "--multisprite-simple and --multisprite-full are mutually exclusive".into(),
            ));
        }
        if self.chaos && (self.head || self.body) {
            eprintln!("Warning: --chaos supersedes --head/--body");
        }
        Ok(())
    }

    /// Output file label, e.g. `Spriteshuffled_full` or
    /// `Frankenspriteshuffled_chaos_bunny`.
    pub fn output_label(&self) -> String {
        let mut label = if self.any_multisprite() {
            "Frankenspriteshuffled"
        } else {
            "Spriteshuffled"
        }
        .to_string();

        if self.chaos {
            label.push_str("_chaos");
        } else if self.head && self.body {
            label.push_str("_full");
        } else if self.head {
            label.push_str("_head");
        } else if self.body {
            label.push_str("_body");
        }
        if self.multibunny {
            label.push_str("_bunny");
        }
        label
    }
}

/// Run one shuffle over `sprite` in place.
pub fn run<R: Rng>(
    sprite: &mut SpriteData,
    settings: &ShuffleSettings,
    pool: &SourcePool,
    rng: &mut R,
) -> Result<()> {
    settings.validate()?;
    if settings.any_multisprite() && pool.is_empty() {
        return Err(ShuffleError::NoSourceSprites(
            "source sprite pool is empty".into(),
        ));
    }

    // Sources for own-sheet copies come from this snapshot, never from the
    // partially rewritten destination.
    let original = sprite.sheet.clone();
    let selection = settings.source_selection();

    if settings.chaos {
        // Heads and bodies share one pool; the walk-cycle fixup does not run
        // here, matching the original tool.
        let mut region = catalog::head_region();
        region.extend_from_slice(catalog::body_region());
        let assigned = shuffle::shuffled(&region, rng);
        apply_region(sprite, &original, &region, &assigned, selection, pool, rng)?;
    } else {
        if settings.head {
            let region = catalog::head_region();
            let mut assigned = shuffle::shuffled(&region, rng);
            shuffle::fix_walk_cycle(&region, &mut assigned, rng);
            apply_region(sprite, &original, &region, &assigned, selection, pool, rng)?;
        }
        if settings.body {
            let region = catalog::body_region().to_vec();
            let assigned = shuffle::shuffled(&region, rng);
            apply_region(sprite, &original, &region, &assigned, selection, pool, rng)?;
        }
    }

    if settings.multibunny {
        apply_bunny(sprite, pool, rng)?;
    }
    if settings.make_shadow_edge_visible {
        clear_shadow_edges(&mut sprite.sheet);
    }
    Ok(())
}

fn apply_region<R: Rng>(
    sprite: &mut SpriteData,
    original: &[u8],
    region: &[TileIndex],
    assigned: &[TileIndex],
    selection: SourceSelection,
    pool: &SourcePool,
    rng: &mut R,
) -> Result<()> {
    for (i, &dst) in region.iter().enumerate() {
        match selection {
            SourceSelection::OwnSheet => {
                copy_tile(&mut sprite.sheet, dst, original, assigned[i]);
            }
            SourceSelection::SameIndex => {
                let src = pool.draw_non_blank(dst, rng)?;
                copy_tile(&mut sprite.sheet, dst, &src.sheet, dst);
            }
            SourceSelection::PermutedIndex => {
                let src = pool.draw_non_blank(assigned[i], rng)?;
                copy_tile(&mut sprite.sheet, dst, &src.sheet, assigned[i]);
            }
        }
    }
    Ok(())
}

/// Replace the bunny tiles and the bunny sub-palette from one source sheet.
/// Bunny tiles keep their own positions.
fn apply_bunny<R: Rng>(sprite: &mut SpriteData, pool: &SourcePool, rng: &mut R) -> Result<()> {
    let probe = catalog::bunny_region()[0];
    let src = pool.draw_non_blank(probe, rng)?;

    for &tile in catalog::bunny_region() {
        copy_tile(&mut sprite.sheet, tile, &src.sheet, tile);
    }
    sprite.palette[BUNNY_PALETTE_START..BUNNY_PALETTE_END]
        .copy_from_slice(&src.palette[BUNNY_PALETTE_START..BUNNY_PALETTE_END]);
    Ok(())
}

/// Clear the fixed shadow-fringe pixels in the lower tile row of the listed
/// body tiles. Only clears bits, so reapplying is a no-op.
pub fn clear_shadow_edges(sheet: &mut [u8]) {
    for &tile in catalog::SHADOW_DOWN_TILES {
        apply_clear_masks(
            sheet,
            tile,
            &catalog::SHADOW_DOWN_MASK_LEFT,
            &catalog::SHADOW_DOWN_MASK_RIGHT,
        );
    }
    for &tile in catalog::SHADOW_SIDE_TILES {
        apply_clear_masks(
            sheet,
            tile,
            &catalog::SHADOW_SIDE_MASK_LEFT,
            &catalog::SHADOW_SIDE_MASK_RIGHT,
        );
    }
}

fn apply_clear_masks(sheet: &mut [u8], index: TileIndex, left: &[u8; 32], right: &[u8; 32]) {
    let base = tile_offset(index) + TILE_ROW_STRIDE;
    for i in 0..32 {
        sheet[base + i] &= !left[i];
        sheet[base + 0x20 + i] &= !right[i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{TILE_HEIGHT, TILE_ROW_LEN};
    use crate::formats::{GLOVE_LEN, PALETTE_LEN, SHEET_LEN};
    use rand::{rngs::StdRng, Rng as _, SeedableRng};

    /// Sheet where every region tile's block carries its own index as a
    /// two-byte sentinel pattern.
    fn sentinel_sprite() -> SpriteData {
        let mut sheet = vec![0u8; SHEET_LEN];
        let tiles: Vec<TileIndex> = catalog::head_region()
            .into_iter()
            .chain(catalog::body_region().iter().copied())
            .chain(catalog::bunny_region().iter().copied())
            .collect();
        for t in tiles {
            for h in 0..TILE_HEIGHT {
                let row = tile_offset(t) + h * TILE_ROW_STRIDE;
                for i in (0..TILE_ROW_LEN).step_by(2) {
                    sheet[row + i] = t as u8;
                    sheet[row + i + 1] = (t >> 8) as u8;
                }
            }
        }
        SpriteData {
            sheet,
            palette: (0..PALETTE_LEN).map(|i| i as u8).collect(),
            gloves: [0u8; GLOVE_LEN],
        }
    }

    fn block_bytes(sheet: &[u8], t: TileIndex) -> Vec<u8> {
        let mut out = Vec::new();
        for h in 0..TILE_HEIGHT {
            let row = tile_offset(t) + h * TILE_ROW_STRIDE;
            out.extend_from_slice(&sheet[row..row + TILE_ROW_LEN]);
        }
        out
    }

    #[test]
    fn head_only_shuffle_leaves_body_tiles_untouched() {
        let mut sprite = sentinel_sprite();
        let before = sprite.clone();
        let settings = ShuffleSettings {
            head: true,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        run(&mut sprite, &settings, &SourcePool::empty(), &mut rng).unwrap();

        for &t in catalog::body_region() {
            assert_eq!(
                block_bytes(&sprite.sheet, t),
                block_bytes(&before.sheet, t),
                "body tile {} changed in a head-only shuffle",
                t
            );
        }
        assert_eq!(sprite.palette, before.palette);
    }

    #[test]
    fn chaos_shuffle_preserves_the_tile_multiset() {
        let mut sprite = sentinel_sprite();
        let before = sprite.clone();
        let settings = ShuffleSettings {
            chaos: true,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        run(&mut sprite, &settings, &SourcePool::empty(), &mut rng).unwrap();

        let combined: Vec<TileIndex> = catalog::head_region()
            .into_iter()
            .chain(catalog::body_region().iter().copied())
            .collect();
        let mut old: Vec<Vec<u8>> = combined
            .iter()
            .map(|&t| block_bytes(&before.sheet, t))
            .collect();
        let mut new: Vec<Vec<u8>> = combined
            .iter()
            .map(|&t| block_bytes(&sprite.sheet, t))
            .collect();
        old.sort();
        new.sort();
        assert_eq!(old, new);
    }

    #[test]
    fn simple_multisprite_sources_same_index_from_the_one_pool_sheet() {
        let mut sprite = sentinel_sprite();

        // One foreign sheet with a per-offset pattern distinct from the
        // destination's sentinels
        let mut foreign = sentinel_sprite();
        for (i, b) in foreign.sheet.iter_mut().enumerate() {
            *b = (i ^ 0x55) as u8;
        }
        let pool = SourcePool::from_sheets(vec![foreign.clone()]);

        let settings = ShuffleSettings {
            head: true,
            multisprite_simple: true,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(21);
        run(&mut sprite, &settings, &pool, &mut rng).unwrap();

        for t in catalog::head_region() {
            assert_eq!(
                block_bytes(&sprite.sheet, t),
                block_bytes(&foreign.sheet, t),
                "head tile {} not sourced from the pool sheet at its own index",
                t
            );
        }
    }

    #[test]
    fn full_multisprite_never_reads_the_destination_sheet() {
        let mut sprite = sentinel_sprite();
        let mut foreign = sentinel_sprite();
        for b in foreign.sheet.iter_mut() {
            *b = 0x5A;
        }
        let pool = SourcePool::from_sheets(vec![foreign]);

        let settings = ShuffleSettings {
            head: true,
            body: true,
            multisprite_full: true,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(13);
        run(&mut sprite, &settings, &pool, &mut rng).unwrap();

        for t in catalog::head_region()
            .into_iter()
            .chain(catalog::body_region().iter().copied())
        {
            assert!(
                block_bytes(&sprite.sheet, t).iter().all(|&b| b == 0x5A),
                "tile {} kept destination bytes",
                t
            );
        }
    }

    #[test]
    fn multisprite_with_empty_pool_fails() {
        let mut sprite = sentinel_sprite();
        let settings = ShuffleSettings {
            head: true,
            multisprite_simple: true,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            run(&mut sprite, &settings, &SourcePool::empty(), &mut rng),
            Err(ShuffleError::NoSourceSprites(_))
        ));
    }

    #[test]
    fn bunny_swap_copies_tiles_and_third_sub_palette() {
        let mut sprite = sentinel_sprite();
        let before = sprite.clone();

        let mut foreign = sentinel_sprite();
        for b in foreign.sheet.iter_mut() {
            *b = 0x77;
        }
        for (i, b) in foreign.palette.iter_mut().enumerate() {
            *b = 0x80 | i as u8;
        }
        let pool = SourcePool::from_sheets(vec![foreign.clone()]);

        let settings = ShuffleSettings {
            multibunny: true,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(4);
        run(&mut sprite, &settings, &pool, &mut rng).unwrap();

        for &t in catalog::bunny_region() {
            assert_eq!(block_bytes(&sprite.sheet, t), block_bytes(&foreign.sheet, t));
        }
        // Head/body tiles and the other sub-palettes are untouched
        for t in catalog::head_region() {
            assert_eq!(block_bytes(&sprite.sheet, t), block_bytes(&before.sheet, t));
        }
        assert_eq!(
            &sprite.palette[..BUNNY_PALETTE_START],
            &before.palette[..BUNNY_PALETTE_START]
        );
        assert_eq!(
            &sprite.palette[BUNNY_PALETTE_START..BUNNY_PALETTE_END],
            &foreign.palette[BUNNY_PALETTE_START..BUNNY_PALETTE_END]
        );
    }

    #[test]
    fn shadow_edge_clearing_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut sheet: Vec<u8> = (0..SHEET_LEN).map(|_| rng.gen()).collect();

        let mut once = sheet.clone();
        clear_shadow_edges(&mut once);
        clear_shadow_edges(&mut sheet);
        clear_shadow_edges(&mut sheet);
        assert_eq!(sheet, once);
        assert_ne!(once, {
            let mut rng = StdRng::seed_from_u64(8);
            (0..SHEET_LEN).map(|_| rng.gen::<u8>()).collect::<Vec<u8>>()
        });
    }

    #[test]
    fn no_mode_selected_is_a_configuration_error() {
        let settings = ShuffleSettings::default();
        assert!(matches!(
            settings.validate(),
            Err(ShuffleError::Configuration(_))
        ));
    }

    #[test]
    fn conflicting_multisprite_modes_are_rejected() {
        let settings = ShuffleSettings {
            head: true,
            multisprite_simple: true,
            multisprite_full: true,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ShuffleError::Configuration(_))
        ));
    }

    #[test]
    fn output_labels_follow_the_naming_contract() {
        let mut s = ShuffleSettings {
            head: true,
            ..Default::default()
        };
        assert_eq!(s.output_label(), "Spriteshuffled_head");

        s.body = true;
        assert_eq!(s.output_label(), "Spriteshuffled_full");

        s.chaos = true;
        assert_eq!(s.output_label(), "Spriteshuffled_chaos");

        s.multisprite_full = true;
        s.multibunny = true;
        assert_eq!(s.output_label(), "Frankenspriteshuffled_chaos_bunny");

        let bunny_only = ShuffleSettings {
            multibunny: true,
            ..Default::default()
        };
        assert_eq!(bunny_only.output_label(), "Frankenspriteshuffled_bunny");
    }
}
