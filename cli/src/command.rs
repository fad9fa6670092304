use std::str::FromStr;
use sweeper_core::Coord2;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Restart,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    UnknownVerb(String),
    #[error("missing {0}")]
    MissingAxis(&'static str),
    #[error("invalid {axis} `{word}`")]
    InvalidAxis { axis: &'static str, word: String },
    #[error("unexpected `{0}`")]
    TrailingWord(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(ParseCommandError::Empty);
        };

        let command = match verb {
            "r" | "reveal" => Self::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Self::Flag(parse_coords(&mut words)?),
            "n" | "new" => Self::Restart,
            "?" | "h" | "help" => Self::Help,
            "q" | "quit" => Self::Quit,
            other => return Err(ParseCommandError::UnknownVerb(other.to_string())),
        };

        if let Some(extra) = words.next() {
            return Err(ParseCommandError::TrailingWord(extra.to_string()));
        }
        Ok(command)
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Coord2, ParseCommandError> {
    let mut next = |axis: &'static str| -> Result<u8, ParseCommandError> {
        let word = words.next().ok_or(ParseCommandError::MissingAxis(axis))?;
        word.parse().map_err(|_| ParseCommandError::InvalidAxis {
            axis,
            word: word.to_string(),
        })
    };
    let row = next("row")?;
    let col = next("column")?;
    Ok((row, col))
}

pub const HELP: &str = "\
commands:
  r <row> <col>   reveal a cell
  f <row> <col>   toggle a flag
  n               new game
  q               quit";
