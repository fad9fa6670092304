use super::*;

/// Purely random placement, reproducible from `seed`.
///
/// Positions are drawn uniformly from the whole index space without
/// replacement, so every layout with the requested mine count is equally
/// likely and generation always finishes in bounded time.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid> {
        use rand::prelude::*;

        let config = config.validate()?;
        let mut grid = Grid::new(config.grid_size);

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let positions = rand::seq::index::sample(
            &mut rng,
            usize::from(config.total_cells()),
            usize::from(config.num_mines),
        );
        for index in positions {
            let Some(coords) = grid.coords_of(index) else {
                continue;
            };
            grid.place_bomb(coords);
        }

        check_mine_count(&grid, config);
        log::debug!(
            "Generated {}x{} minefield with {} mines, seed {}",
            config.grid_size,
            config.grid_size,
            grid.mine_count(),
            self.seed
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(seed: u64, grid_size: Coord, num_mines: CellCount) -> Result<Grid> {
        RandomMinefieldGenerator::new(seed).generate(GameConfig {
            grid_size,
            num_mines,
        })
    }

    #[test]
    fn places_exact_mine_count() {
        for seed in 0..32 {
            for (size, mines) in [(1, 0), (2, 3), (4, 1), (9, 10), (16, 40), (10, 99)] {
                let grid = generate(seed, size, mines).unwrap();
                let bombs = grid.cells().filter(|(_, cell)| cell.is_bomb()).count();

                assert_eq!(bombs, usize::from(mines));
                assert_eq!(grid.mine_count(), mines);
            }
        }
    }

    #[test]
    fn counts_match_final_layout() {
        for seed in 0..16 {
            let grid = generate(seed, 12, 30).unwrap();

            for (coords, cell) in grid.cells() {
                assert_eq!(cell.adjacent_mine_count(), grid.count_adjacent_bombs(coords));
                assert!(cell.adjacent_mine_count() <= 8);
            }
        }
    }

    #[test]
    fn fresh_grid_has_nothing_revealed_or_flagged() {
        let grid = generate(7, 8, 10).unwrap();

        assert_eq!(grid.revealed_count(), 0);
        assert_eq!(grid.flagged_count(), 0);
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(generate(42, 10, 10), generate(42, 10, 10));
    }

    #[test]
    fn full_grid_fails_fast() {
        assert_eq!(
            generate(0, 3, 9),
            Err(GameError::TooManyMines { mines: 9, cells: 9 })
        );
        assert_eq!(
            generate(0, 3, 100),
            Err(GameError::TooManyMines {
                mines: 100,
                cells: 9
            })
        );
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert_eq!(generate(0, 0, 0), Err(GameError::EmptyGrid));
    }

    #[test]
    fn every_cell_can_hold_a_mine() {
        // a 2x2 grid with 3 mines leaves a single safe cell, over enough seeds
        // that safe cell should have visited every position
        let mut safe_seen = [false; 4];
        for seed in 0..64 {
            let grid = generate(seed, 2, 3).unwrap();
            for (coords, cell) in grid.cells() {
                if !cell.is_bomb() {
                    safe_seen[grid.index_of(coords)] = true;
                }
            }
        }

        assert_eq!(safe_seen, [true; 4]);
    }
}
