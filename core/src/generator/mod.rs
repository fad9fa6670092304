use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

pub trait MinefieldGenerator {
    /// Builds a fresh grid for `config`, failing before any placement work
    /// when the configuration cannot be satisfied.
    fn generate(self, config: GameConfig) -> Result<Grid>;
}

/// Double checks the layout a generator produced.
fn check_mine_count(grid: &Grid, config: GameConfig) {
    if grid.mine_count() != config.num_mines {
        log::warn!(
            "Generated minefield count mismatch, actual: {}, requested: {}",
            grid.mine_count(),
            config.num_mines
        );
    }
}
