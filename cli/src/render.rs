use std::fmt;
use sweeper_core::{CellSymbol, GameSession, GameState};

/// Draws the board with row and column labels.
///
/// Hidden blank cells get a dot so they can be told apart from opened zeroes.
pub struct Board<'a>(pub &'a GameSession);

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.0.grid();
        let width = grid.grid_size().saturating_sub(1).to_string().len();

        write!(f, "{:width$} ", "")?;
        for col in 0..grid.grid_size() {
            write!(f, " {:>width$}", col)?;
        }
        writeln!(f)?;

        for (row, cells) in grid.rows().enumerate() {
            write!(f, "{:>width$} ", row)?;
            for cell in cells {
                match cell.symbol() {
                    CellSymbol::Blank if !cell.is_revealed() => write!(f, " {:>width$}", "·")?,
                    symbol => write!(f, " {:>width$}", symbol.to_string())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn status(session: &GameSession) -> String {
    match session.state() {
        GameState::Initialised | GameState::Running => {
            format!("mines left: {}", session.mines_left())
        }
        GameState::Won => "You won! `n` for a new game, `q` to quit".to_string(),
        GameState::Lost => "Boom, you lost. `n` for a new game, `q` to quit".to_string(),
    }
}
