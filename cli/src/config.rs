use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use sweeper_core::{CellCount, Coord, GameConfig};

/// Optional settings file, every key may be left out.
///
/// ```toml
/// grid_size = 16
/// num_mines = 40
/// seed = 1234
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub grid_size: Option<Coord>,
    pub num_mines: Option<CellCount>,
    pub seed: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Final settings after layering command line flags over the file over the defaults.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings {
    pub game: GameConfig,
    pub seed: u64,
}

impl Settings {
    pub fn resolve(
        file: FileConfig,
        grid_size: Option<Coord>,
        num_mines: Option<CellCount>,
        seed: Option<u64>,
    ) -> Result<Self> {
        let defaults = GameConfig::default();
        let game = GameConfig::new(
            grid_size.or(file.grid_size).unwrap_or(defaults.grid_size),
            num_mines.or(file.num_mines).unwrap_or(defaults.num_mines),
        )?;
        let seed = seed.or(file.seed).unwrap_or_else(rand::random);
        Ok(Self { game, seed })
    }
}
