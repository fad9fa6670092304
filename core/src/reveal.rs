use alloc::collections::{BTreeSet, VecDeque};

use crate::*;

/// Cascading reveal over the 8-neighbour adjacency graph.
///
/// The fill is breadth-first: cells leave the work queue in the order they
/// were discovered. A cell is queued at most once, the `queued` set holds
/// every coordinate that ever entered the queue.
pub struct RevealEngine;

impl RevealEngine {
    /// Reveals `start` and, when it has no adjacent mines, its whole zero
    /// region plus the ring of numbered cells around it.
    ///
    /// Returns the cells that were hidden before this call. A bomb at `start`
    /// is revealed on its own. Out of range coordinates reveal nothing.
    pub fn reveal(grid: &mut Grid, start: Coord2) -> BTreeSet<Coord2> {
        let mut revealed = BTreeSet::new();

        let Ok(start) = grid.validate_coords(start) else {
            return revealed;
        };

        if grid[start].is_bomb() {
            if grid.cell_mut(start).reveal() {
                revealed.insert(start);
            }
            log::debug!("Revealed mine at {:?}", start);
            return revealed;
        }

        let mut queued = BTreeSet::from([start]);
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            if grid.cell_mut(coords).reveal() {
                revealed.insert(coords);
            }

            let count = grid[coords].adjacent_mine_count();
            log::trace!("Visited {:?}, mine count: {}", coords, count);
            if count != 0 {
                continue;
            }

            for pos in grid.iter_neighbors(coords) {
                if queued.insert(pos) {
                    to_visit.push_back(pos);
                }
            }
        }

        log::debug!("Revealed {} cells from {:?}", revealed.len(), start);
        revealed
    }
}
