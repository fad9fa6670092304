use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a front end needs to draw one frame, detached from the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: GameConfig,
    pub state: GameState,
    pub mines_left: isize,
    pub rows: Vec<Vec<CellSymbol>>,
}

impl Snapshot {
    pub fn from_session(session: &GameSession) -> Self {
        let rows = session
            .grid()
            .rows()
            .map(|row| row.map(Cell::symbol).collect())
            .collect();

        Self {
            config: session.config(),
            state: session.state(),
            mines_left: session.mines_left(),
            rows,
        }
    }

    pub fn symbol_at(&self, (row, col): Coord2) -> Option<CellSymbol> {
        self.rows.get(usize::from(row))?.get(usize::from(col)).copied()
    }
}
