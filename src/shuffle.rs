//! Region permutation and the walk-cycle continuity fixup.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{self, Facing, TileIndex};

/// Uniformly shuffled copy of a region's tile list. `assigned[i]` is the
/// tile that ends up at destination `region[i]`.
pub fn shuffled<R: Rng>(region: &[TileIndex], rng: &mut R) -> Vec<TileIndex> {
    let mut out = region.to_vec();
    out.shuffle(rng);
    out
}

/// Repair the three side-walk head slots after a head shuffle so they all
/// face one direction.
///
/// Picks a facing uniformly at random, then for each walk slot holding a
/// tile with a different facing, swaps its assignment with the first
/// non-walk slot currently holding a tile with the chosen facing. Only the
/// assignment vector is mutated.
pub fn fix_walk_cycle<R: Rng>(region: &[TileIndex], assigned: &mut [TileIndex], rng: &mut R) {
    debug_assert_eq!(region.len(), assigned.len());

    let facing = match rng.gen_range(0..3) {
        0 => Facing::Up,
        1 => Facing::Right,
        _ => Facing::Down,
    };

    for slot in catalog::walk_cycle_heads() {
        let Some(slot_pos) = region.iter().position(|r| r == slot) else {
            continue;
        };
        if catalog::head_facing(assigned[slot_pos]) == Some(facing) {
            continue;
        }

        let donor = (0..assigned.len()).find(|&i| {
            !catalog::walk_cycle_heads().contains(&region[i])
                && catalog::head_facing(assigned[i]) == Some(facing)
        });
        if let Some(i) = donor {
            assigned.swap(slot_pos, i);
        }
    }
}
