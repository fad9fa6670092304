use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Square board of cells stored row-major, so `(row, col)` lives at flat
/// index `row * grid_size + col`.
///
/// Only built through [`Grid::from_mine_coords`] or a generator, so the
/// array is always square and `mine_count` matches the bombs in it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Grid {
    /// Empty grid without any mines.
    pub(crate) fn new(grid_size: Coord) -> Self {
        Self {
            cells: Array2::default((grid_size, grid_size).to_nd_index()),
            mine_count: 0,
        }
    }

    /// Grid with bombs on exactly the given coordinates, duplicates collapse.
    pub fn from_mine_coords(grid_size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if grid_size == 0 {
            return Err(GameError::EmptyGrid);
        }

        let mut grid = Self::new(grid_size);
        for &coords in mine_coords {
            let coords = grid.validate_coords(coords)?;
            grid.place_bomb(coords);
        }
        Ok(grid)
    }

    pub fn grid_size(&self) -> Coord {
        // the constructor only takes a `Coord`, so the dimension always fits
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.grid_size())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.grid_size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn index_of(&self, (row, col): Coord2) -> usize {
        usize::from(row) * usize::from(self.grid_size()) + usize::from(col)
    }

    pub fn coords_of(&self, index: usize) -> Option<Coord2> {
        let size = usize::from(self.grid_size());
        if index >= self.cells.len() {
            return None;
        }
        Some(((index / size) as Coord, (index % size) as Coord))
    }

    pub fn cell(&self, coords: Coord2) -> Option<&Cell> {
        let coords = self.validate_coords(coords).ok()?;
        Some(&self[coords])
    }

    /// All cells in flat index order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &Cell>> {
        self.cells.rows().into_iter().map(|row| row.into_iter())
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.grid_size())
    }

    /// Recounts the bomb neighbours of `coords` from the bomb layout.
    pub fn count_adjacent_bombs(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_bomb())
            .count() as u8
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_where(Cell::is_revealed)
    }

    /// Cells whose flag is in effect, see [`Cell::shows_flag`].
    pub fn flagged_count(&self) -> CellCount {
        self.count_where(Cell::shows_flag)
    }

    fn count_where(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells.iter().filter(|&cell| predicate(cell)).count() as CellCount
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    /// Marks `coords` as a bomb and bumps the count of each in-bounds
    /// neighbour. Placing a bomb twice is a no-op.
    pub(crate) fn place_bomb(&mut self, coords: Coord2) {
        if self[coords].is_bomb() {
            return;
        }
        self.cell_mut(coords).place_bomb();
        self.mine_count += 1;
        for pos in self.iter_neighbors(coords) {
            self.cell_mut(pos).add_adjacent_mine();
        }
    }

    /// Full disclosure at the end of a game.
    pub(crate) fn reveal_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reveal();
        }
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn counts_follow_single_corner_mine() {
        let grid = Grid::from_mine_coords(4, &[(0, 0)]).unwrap();

        assert_eq!(grid.mine_count(), 1);
        for (coords, cell) in grid.cells() {
            let expected = match coords {
                (0, 1) | (1, 0) | (1, 1) => 1,
                _ => 0,
            };
            assert_eq!(cell.adjacent_mine_count(), expected, "at {coords:?}");
        }
    }

    #[test]
    fn stored_counts_match_recount() {
        let mines = [(0, 0), (0, 1), (2, 2), (4, 4), (3, 0)];
        let grid = Grid::from_mine_coords(5, &mines).unwrap();

        for (coords, cell) in grid.cells() {
            assert_eq!(cell.adjacent_mine_count(), grid.count_adjacent_bombs(coords));
        }
    }

    #[test]
    fn duplicate_mines_collapse() {
        let grid = Grid::from_mine_coords(3, &[(1, 1), (1, 1)]).unwrap();

        assert_eq!(grid.mine_count(), 1);
        assert_eq!(grid[(0, 0)].adjacent_mine_count(), 1);
    }

    #[test]
    fn rejects_out_of_range_mines() {
        assert_eq!(
            Grid::from_mine_coords(3, &[(3, 0)]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(Grid::from_mine_coords(0, &[]), Err(GameError::EmptyGrid));
    }

    #[test]
    fn flat_index_is_row_major() {
        let grid = Grid::new(4);

        assert_eq!(grid.index_of((2, 3)), 11);
        assert_eq!(grid.coords_of(11), Some((2, 3)));
        assert_eq!(grid.coords_of(16), None);

        let order: Vec<_> = grid.cells().map(|(coords, _)| grid.index_of(coords)).collect();
        assert_eq!(order, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn cell_lookup_is_bounds_checked() {
        let grid = Grid::new(2);

        assert!(grid.cell((1, 1)).is_some());
        assert!(grid.cell((2, 0)).is_none());
        assert!(grid.cell((0, 200)).is_none());
    }

    #[test]
    fn validate_coords_checks_both_axes() {
        let grid = Grid::from_mine_coords(2, &[]).unwrap();

        assert_eq!(grid.validate_coords((1, 1)), Ok((1, 1)));
        assert_eq!(grid.validate_coords((0, 2)), Err(GameError::InvalidCoords));
        assert_eq!(grid.validate_coords((2, 0)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn serializes_square_cell_array() {
        let grid = Grid::from_mine_coords(2, &[(1, 0)]).unwrap();
        let json = serde_json::to_value(&grid).unwrap();

        assert_eq!(json["cells"]["dim"], serde_json::json!([2, 2]));
        assert_eq!(json["mine_count"], 1);
    }

    #[test]
    fn flags_on_revealed_cells_are_not_counted() {
        let mut grid = Grid::new(2);
        grid.cell_mut((0, 0)).toggle_flag();
        grid.cell_mut((0, 1)).toggle_flag();
        grid.cell_mut((0, 1)).reveal();

        assert_eq!(grid.flagged_count(), 1);
        assert_eq!(grid.revealed_count(), 1);
    }

    #[test]
    fn display_renders_one_line_per_row() {
        let mut grid = Grid::from_mine_coords(2, &[(0, 0)]).unwrap();
        grid.reveal_all();

        assert_eq!(grid.to_string(), "*1\n11\n");
    }
}
