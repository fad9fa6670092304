#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use evaluator::*;
pub use generator::*;
pub use grid::*;
pub use reveal::*;
pub use session::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod error;
mod evaluator;
mod generator;
mod grid;
mod reveal;
mod session;
mod snapshot;
mod types;

/// Side length and mine count of a square minefield.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_size: Coord,
    pub num_mines: CellCount,
}

impl GameConfig {
    pub fn new(grid_size: Coord, num_mines: CellCount) -> Result<Self> {
        Self {
            grid_size,
            num_mines,
        }
        .validate()
    }

    /// Placement needs at least one cell and at least one safe cell.
    pub fn validate(self) -> Result<Self> {
        let cells = self.total_cells();
        if cells == 0 {
            return Err(GameError::EmptyGrid);
        }
        if self.num_mines >= cells {
            return Err(GameError::TooManyMines {
                mines: self.num_mines,
                cells,
            });
        }
        Ok(self)
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.grid_size)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.num_mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            num_mines: 10,
        }
    }
}
