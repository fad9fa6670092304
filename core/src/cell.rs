use core::fmt;
use serde::{Deserialize, Serialize};

/// One grid position.
///
/// `is_bomb` and `adjacent_mine_count` are fixed by the generator, the player
/// only ever changes the revealed and flagged bits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    is_revealed: bool,
    is_flagged: bool,
    is_bomb: bool,
    adjacent_mine_count: u8,
}

impl Cell {
    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    pub const fn is_bomb(&self) -> bool {
        self.is_bomb
    }

    pub const fn adjacent_mine_count(&self) -> u8 {
        self.adjacent_mine_count
    }

    /// Whether a flag on this cell is in effect, flags on revealed cells are ignored.
    pub const fn shows_flag(&self) -> bool {
        self.is_flagged && !self.is_revealed
    }

    /// What a renderer should draw for this cell.
    pub const fn symbol(&self) -> CellSymbol {
        match (self.is_revealed, self.is_bomb, self.is_flagged) {
            (true, true, _) => CellSymbol::Bomb,
            (true, false, _) if self.adjacent_mine_count > 0 => {
                CellSymbol::Count(self.adjacent_mine_count)
            }
            (false, _, true) => CellSymbol::Flag,
            _ => CellSymbol::Blank,
        }
    }

    /// Returns `true` when this call changed the cell.
    pub(crate) fn reveal(&mut self) -> bool {
        !core::mem::replace(&mut self.is_revealed, true)
    }

    pub(crate) fn toggle_flag(&mut self) {
        self.is_flagged = !self.is_flagged;
    }

    pub(crate) fn place_bomb(&mut self) {
        self.is_bomb = true;
    }

    pub(crate) fn add_adjacent_mine(&mut self) {
        self.adjacent_mine_count += 1;
    }
}

/// Display symbol of a cell, in order of precedence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellSymbol {
    Bomb,
    Count(u8),
    Flag,
    Blank,
}

impl fmt::Display for CellSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bomb => f.write_str("*"),
            Self::Count(count) => write!(f, "{count}"),
            Self::Flag => f.write_str("F"),
            Self::Blank => f.write_str(" "),
        }
    }
}
