use alloc::collections::BTreeSet;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Initialised -> Running
/// - Running -> Running
/// - Running -> Won
/// - Running -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Fresh grid, nothing revealed yet
    #[default]
    Initialised,
    /// At least one reveal happened
    Running,
    /// Game ended and player won
    Won,
    /// Game ended and player lost
    Lost,
}

impl GameState {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::Initialised)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Moves to `next`, panicking on a transition the state machine does not have.
    pub fn advance(self, next: Self) -> Self {
        use GameState::*;
        match (self, next) {
            (Initialised | Running, Running) => Running,
            (Running, Won) => Won,
            (Running, Lost) => Lost,
            (from, to) => unreachable!("invalid game state transition {from:?} -> {to:?}"),
        }
    }
}

/// Outcome of flagging a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
    Won,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of revealing a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// One game from start to finish, restartable with a fresh layout.
///
/// The session owns its grid exclusively; callers only get shared borrows
/// through [`GameSession::grid`].
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    grid: Grid,
    state: GameState,
    last_revealed: BTreeSet<Coord2>,
    rng: SmallRng,
}

impl GameSession {
    /// Creates a session and starts its first game. Every later layout is
    /// derived from `seed` as well.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let grid = RandomMinefieldGenerator::new(rng.random()).generate(config)?;
        Ok(Self::with_grid(config, grid, rng))
    }

    /// Creates a session around a layout built by any generator.
    pub fn with_generator(
        config: GameConfig,
        generator: impl MinefieldGenerator,
        seed: u64,
    ) -> Result<Self> {
        let grid = generator.generate(config)?;
        Ok(Self::with_grid(config, grid, SmallRng::seed_from_u64(seed)))
    }

    fn with_grid(config: GameConfig, grid: Grid, rng: SmallRng) -> Self {
        log::debug!(
            "Game started, {}x{} with {} mines",
            config.grid_size,
            config.grid_size,
            grid.mine_count()
        );
        Self {
            config,
            grid,
            state: GameState::Initialised,
            last_revealed: BTreeSet::new(),
            rng,
        }
    }

    /// Discards the current game and starts a new one for `config`.
    ///
    /// On a configuration error the current game is left as it was.
    pub fn start(&mut self, config: GameConfig) -> Result<()> {
        let grid = RandomMinefieldGenerator::new(self.rng.random()).generate(config)?;
        let rng = self.rng.clone();
        *self = Self::with_grid(config, grid, rng);
        Ok(())
    }

    /// Starts a new game with the current configuration.
    pub fn restart(&mut self) {
        if let Err(err) = self.start(self.config) {
            // the current config already produced a grid once
            log::warn!("Could not restart game: {}", err);
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_size(&self) -> Coord {
        self.grid.grid_size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.grid.mine_count()
    }

    /// How many mines have not been flagged yet, negative with too many flags
    pub fn mines_left(&self) -> isize {
        (self.grid.mine_count() as isize) - (self.grid.flagged_count() as isize)
    }

    /// Cells the latest reveal uncovered, before any end of game disclosure.
    pub fn last_revealed(&self) -> &BTreeSet<Coord2> {
        &self.last_revealed
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.grid.cell(coords)
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.state.is_finished() {
            log::debug!("Ignoring reveal at {:?}, game already ended", coords);
            return RevealOutcome::NoChange;
        }
        let Ok(coords) = self.grid.validate_coords(coords) else {
            log::debug!("Ignoring reveal at {:?}, out of range", coords);
            return RevealOutcome::NoChange;
        };

        self.state = self.state.advance(GameState::Running);
        self.last_revealed = RevealEngine::reveal(&mut self.grid, coords);

        match self.settle() {
            Verdict::Lost => RevealOutcome::HitMine,
            Verdict::Won => RevealOutcome::Won,
            Verdict::Pending if self.last_revealed.is_empty() => RevealOutcome::NoChange,
            Verdict::Pending => RevealOutcome::Revealed,
        }
    }

    pub fn flag(&mut self, coords: Coord2) -> FlagOutcome {
        if self.state.is_finished() {
            log::debug!("Ignoring flag at {:?}, game already ended", coords);
            return FlagOutcome::NoChange;
        }
        let Ok(coords) = self.grid.validate_coords(coords) else {
            log::debug!("Ignoring flag at {:?}, out of range", coords);
            return FlagOutcome::NoChange;
        };

        self.grid.cell_mut(coords).toggle_flag();
        log::debug!(
            "Toggled flag at {:?}, flagged: {}",
            coords,
            self.grid[coords].is_flagged()
        );

        match self.settle() {
            Verdict::Won => FlagOutcome::Won,
            // flagging never reveals anything
            Verdict::Lost | Verdict::Pending => FlagOutcome::Changed,
        }
    }

    /// Runs the evaluator and applies its verdict.
    fn settle(&mut self) -> Verdict {
        let verdict = WinLossEvaluator::evaluate(&self.grid);
        match verdict {
            Verdict::Pending => {}
            Verdict::Won => self.end_game(GameState::Won),
            Verdict::Lost => self.end_game(GameState::Lost),
        }
        verdict
    }

    fn end_game(&mut self, state: GameState) {
        self.state = self.state.advance(state);
        self.grid.reveal_all();
        log::debug!("Game ended: {:?}", self.state);
    }
}
