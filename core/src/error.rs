use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid must have at least one cell")]
    EmptyGrid,
    #[error("Too many mines, requested {mines} but a grid of {cells} cells needs at least one safe cell")]
    TooManyMines { mines: CellCount, cells: CellCount },
}

pub type Result<T> = core::result::Result<T, GameError>;
