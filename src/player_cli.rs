#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use anyhow::{bail, Context};
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    coord::Coord,
};

use crate::player::Player;

/// Why a line typed by the player is not a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Anything other than exactly two tokens.
    WrongTokenCount,
    /// A token that is not a plain unsigned number.
    NotANumber,
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::WrongTokenCount => write!(f, "Enter two coordinates: row and column"),
            InputError::NotANumber => write!(f, "Coordinates must be numbers"),
        }
    }
}

/// Parse a 1-based `row col` pair into a zero-based coordinate.
///
/// Only the syntax is checked; `0 0` or `9 9` parse fine and are rejected
/// later by the board.
pub fn parse_coord(input: &str) -> Result<Coord, InputError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount);
    };
    Ok(Coord::new(parse_index(row)? - 1, parse_index(col)? - 1))
}

fn parse_index(token: &str) -> Result<i32, InputError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber);
    }
    token.parse().map_err(|_| InputError::NotANumber)
}

fn describe(outcome: ShotOutcome) -> String {
    match outcome {
        ShotOutcome::Hit => "hit!".into(),
        ShotOutcome::Miss => "miss.".into(),
        ShotOutcome::Sunk(name) => std::format!("{} sunk!", name),
    }
}

/// Human player reading targets from a line-based input.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written to the player so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read target")?;
        if read == 0 {
            bail!("input closed while waiting for a target");
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(&mut self, _rng: &mut SmallRng) -> anyhow::Result<Coord> {
        loop {
            write!(self.output, "Where do you fire? (row col): ")?;
            self.output.flush()?;
            let line = self.read_line()?;
            match parse_coord(&line) {
                Ok(coord) => return Ok(coord),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn handle_turn_start(&mut self, own: &Board, opponent: &Board) {
        let _ = writeln!(
            self.output,
            "\nYour board:\n{}\n\nComputer's board:\n{}\n\nYour move! Enemy ships sunk: {}",
            own,
            opponent,
            opponent.sunk_count()
        );
    }

    fn handle_rejected_shot(&mut self, _target: Coord, err: &BoardError) {
        let _ = writeln!(self.output, "{}", err);
    }

    fn handle_shot_result(&mut self, target: Coord, outcome: ShotOutcome) {
        let _ = writeln!(self.output, "You fire at {}: {}", target, describe(outcome));
    }

    fn handle_opponent_shot(&mut self, target: Coord, outcome: ShotOutcome) {
        let _ = writeln!(
            self.output,
            "Computer fires at {}: {}",
            target,
            describe(outcome)
        );
    }

    fn handle_match_end(&mut self, won: bool, own: &Board, opponent: &Board) {
        let verdict = if won {
            "You win! Congratulations!"
        } else {
            "The computer wins."
        };
        let _ = writeln!(
            self.output,
            "\nYour board:\n{}\n\nComputer's board:\n{}\n\n{}",
            own, opponent, verdict
        );
    }
}
