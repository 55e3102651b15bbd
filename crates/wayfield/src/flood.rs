//! Multi-source breadth-first flood fill.
//!
//! Starting from the points of interest, every cell reachable without
//! crossing a wall is given the direction of one step toward the nearest
//! point of interest (by hop count, diagonal hops cost 1). Ties are broken
//! by enqueue order: seeds in the order given, then neighbours in
//! [`Direction::SEARCH_ORDER`].
//!
//! A neighbour `n` of `current`, reached by stepping `d`, is accepted iff
//!
//! 1. `n` is inside the grid and not already stamped with this build,
//! 2. `n` is not a wall (walls are stamped and marked [`Direction::WALL`]),
//! 3. `d` is cardinal, or `n` allows diagonal entry,
//! 4. `current` can be entered travelling `d.reverse()`, the way an agent
//!    on `n` would move to reach it.
//!
//! Accepted neighbours store `d.reverse()`. Slots never reached keep
//! whatever they held before.

use std::collections::VecDeque;
use wayfield_core::{BuildId, Direction};
use wayfield_grid::{neighbours, Cell, LayerSlot};

/// Counts from one build of one layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BuildSummary {
    /// Stamp written by the build. [`BuildId::NEVER`] if nothing ran
    /// (empty point-of-interest list).
    pub build: BuildId,
    /// Distinct points of interest seeded.
    pub seeds: usize,
    /// Cells given a movement direction, seeds excluded.
    pub reached: usize,
    /// Wall cells stamped while bordering the reached region.
    pub walls: usize,
}

/// Rebuild one layer in place.
///
/// `cells` and `slots` are indexed alike; `seeds` are in-grid indices.
/// Every slot written gets `build`, which must differ from every stamp
/// already present in `slots`.
pub(crate) fn flood_fill(
    cells: &[Cell],
    slots: &mut [LayerSlot],
    width: u32,
    height: u32,
    seeds: &[usize],
    build: BuildId,
) -> BuildSummary {
    debug_assert_eq!(cells.len(), slots.len());

    let mut summary = BuildSummary {
        build,
        ..BuildSummary::default()
    };
    let mut queue = VecDeque::with_capacity(seeds.len());

    for &seed in seeds {
        let slot = &mut slots[seed];
        if slot.build_id() == build {
            tracing::trace!(seed, "duplicate point of interest skipped");
            continue;
        }
        slot.set_direction(Direction::DEST);
        slot.set_build_id(build);
        queue.push_back(seed);
        summary.seeds += 1;
    }

    while let Some(current) = queue.pop_front() {
        for (dir, next) in neighbours(current, width, height) {
            if slots[next].build_id() == build {
                continue;
            }

            let neighbour = &cells[next];
            if neighbour.is_wall() {
                let slot = &mut slots[next];
                slot.set_build_id(build);
                slot.mark_wall();
                summary.walls += 1;
                continue;
            }

            if dir.is_diagonal() && !neighbour.allow_diagonal() {
                continue;
            }

            let back = dir.reverse();
            if !cells[current].can_enter_from(back) {
                continue;
            }

            let slot = &mut slots[next];
            slot.set_build_id(build);
            slot.set_direction(back);
            queue.push_back(next);
            summary.reached += 1;
        }
    }

    summary
}
