pub mod army;
pub mod sim;
pub mod unit;

use std::{
    error,
    fmt::Display,
    io::{BufRead, Write},
};

use anyhow::{bail, Context, Result};
use clap::Parser;

pub use army::Army;
pub use sim::{Simulator, DEFAULT_MIN_WINS};
pub use unit::{BattleOutcome, Unit, UnitClass};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptyInput,
    InvalidPlatoonFormat(String),
    InvalidSoldierCount(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "Input cannot be empty."),
            Error::InvalidPlatoonFormat(s) => write!(f, "Invalid platoon format: '{}'", s),
            Error::InvalidSoldierCount(s) => write!(f, "Invalid number of soldiers in: '{}'", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
#[command(about = "Find an arrangement of own platoons that wins enough battles against the enemy.")]
pub struct CLIArgs {
    /// Own army text, e.g. "Militia#10;Spearmen#5". Prompted for when absent.
    #[arg(long)]
    pub own: Option<String>,
    /// Enemy army text. Prompted for when absent.
    #[arg(long)]
    pub enemy: Option<String>,
    /// Least number of won battles an arrangement needs.
    #[arg(long, default_value_t = DEFAULT_MIN_WINS)]
    pub min_wins: usize,
    /// Print the outcome of every matchup in the found arrangement.
    #[arg(long)]
    pub show_battles: bool,
}

/// Writes `prompt`, then reads one line from `reader` with the line ending and surrounding
/// whitespace removed. Fails when the input ends before a line is given.
pub fn prompt_line<R, W>(prompt: &str, reader: &mut R, writer: &mut W) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{}", prompt).context("Failed to write prompt.")?;
    writer.flush().context("Failed to flush prompt.")?;

    let mut line = String::new();
    let read_n = reader
        .read_line(&mut line)
        .with_context(|| format!("Failed to read answer for prompt({}).", prompt.trim()))?;
    if read_n == 0 {
        bail!("EOF when reading a line");
    }

    Ok(line.trim().to_string())
}
