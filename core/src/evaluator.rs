use serde::{Deserialize, Serialize};

use crate::*;

/// Counts gathered over the whole grid in a single pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub revealed: CellCount,
    /// Flags on cells that are still hidden.
    pub flagged: CellCount,
    /// Revealed bombs.
    pub exploded: CellCount,
}

impl Tally {
    pub fn of(grid: &Grid) -> Self {
        grid.cells().fold(Self::default(), |mut tally, (_, cell)| {
            if cell.is_revealed() {
                tally.revealed += 1;
                if cell.is_bomb() {
                    tally.exploded += 1;
                }
            } else if cell.is_flagged() {
                tally.flagged += 1;
            }
            tally
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Pending,
    Won,
    Lost,
}

/// Decides whether a grid is won or lost after a player action.
///
/// A win only looks at counts: as many effective flags as mines, and every
/// other cell revealed. Flags are not checked against bomb positions.
pub struct WinLossEvaluator;

impl WinLossEvaluator {
    pub fn evaluate(grid: &Grid) -> Verdict {
        Self::judge(Tally::of(grid), grid.mine_count(), grid.total_cells())
    }

    pub fn judge(tally: Tally, num_mines: CellCount, total_cells: CellCount) -> Verdict {
        if tally.exploded > 0 {
            Verdict::Lost
        } else if tally.flagged == num_mines && tally.revealed + tally.flagged == total_cells {
            Verdict::Won
        } else {
            Verdict::Pending
        }
    }
}
