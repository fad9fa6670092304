use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use sweeper_core::{CellCount, Coord, GameSession, Snapshot};

use command::{Command, HELP};
use config::{FileConfig, Settings};

mod command;
mod config;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Play minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Side length of the square grid
    #[arg(short, long)]
    size: Option<Coord>,

    /// Number of mines, must leave at least one safe cell
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with `grid_size`, `num_mines` and `seed`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a JSON snapshot after every action instead of the board
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(file, args.size, args.mines, args.seed)?;
    log::debug!("seed: {}", settings.seed);

    let session = GameSession::new(settings.game, settings.seed)
        .context("Could not start a game with this configuration")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    play(session, stdin.lock(), stdout.lock(), args.json)
}

/// Reads commands from `input` until `q` or end of input.
fn play(
    mut session: GameSession,
    input: impl BufRead,
    mut output: impl Write,
    json: bool,
) -> Result<()> {
    draw(&session, &mut output, json)?;
    if !json {
        writeln!(output, "{HELP}")?;
    }

    for line in input.lines() {
        let line = line.context("Could not read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err}, `?` for help")?;
                continue;
            }
        };
        log::debug!("command: {:?}", command);

        match command {
            Command::Reveal(coords) => {
                let outcome = session.reveal(coords);
                log::info!("reveal {:?}: {:?}", coords, outcome);
            }
            Command::Flag(coords) => {
                let outcome = session.flag(coords);
                log::info!("flag {:?}: {:?}", coords, outcome);
            }
            Command::Restart => session.restart(),
            Command::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        }
        draw(&session, &mut output, json)?;
    }

    output.flush()?;
    Ok(())
}

fn draw(session: &GameSession, output: &mut impl Write, json: bool) -> Result<()> {
    if json {
        let snapshot = Snapshot::from_session(session);
        writeln!(output, "{}", serde_json::to_string(&snapshot)?)?;
    } else {
        write!(output, "{}", render::Board(session))?;
        writeln!(output, "{}", render::status(session))?;
    }
    Ok(())
}
