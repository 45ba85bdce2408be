#![cfg(feature = "std")]

//! Interactive driver: the read-validate-apply loop around the engine.

use std::io::{BufRead, Write};

use crate::common::MoveError;
use crate::game::{GameEngine, GameStatus};

/// Run a full game over the given input and output streams.
///
/// Each turn reads one line, takes the first two whitespace-separated
/// tokens as one-based row and column, and feeds them to the engine.
/// Rejected moves print their message and re-prompt without advancing
/// the turn. The loop exits on the first terminal status, which is
/// printed and returned.
pub fn run_game<R: BufRead, W: Write>(mut input: R, mut output: W) -> anyhow::Result<GameStatus> {
    let mut engine = GameEngine::new();
    writeln!(output, "{}", engine.board())?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("input ended before the game finished");
        }
        let mut tokens = line.split_whitespace();
        let (row, col) = match (tokens.next(), tokens.next()) {
            (Some(row), Some(col)) => (row, col),
            // A line with fewer than two tokens is malformed numeric input.
            _ => {
                writeln!(output, "{}", MoveError::NonNumeric)?;
                continue;
            }
        };
        match engine.play(row, col) {
            Ok(player) => {
                log::debug!("{} played at ({}, {})", player, row, col);
                writeln!(output, "{}", engine.board())?;
            }
            Err(e) => {
                log::debug!("rejected move ({}, {}): {:?}", row, col, e);
                writeln!(output, "{}", e)?;
                continue;
            }
        }
        let status = engine.status();
        if status.is_terminal() {
            writeln!(output, "{}", status)?;
            log::debug!("game over: {}", status);
            return Ok(status);
        }
    }
}
