use alloc::vec::Vec;

use super::*;

/// Places mines on a predetermined list of coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinefieldGenerator {
    mines: Vec<Coord2>,
}

impl FixedMinefieldGenerator {
    pub fn new(mines: &[Coord2]) -> Self {
        Self {
            mines: mines.to_vec(),
        }
    }
}

impl MinefieldGenerator for FixedMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid> {
        let config = config.validate()?;
        let grid = Grid::from_mine_coords(config.grid_size, &self.mines)?;
        check_mine_count(&grid, config);
        Ok(grid)
    }
}
