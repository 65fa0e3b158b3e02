//! Interactive player reading moves from standard input.

use super::Player;
use crate::game::action::Move;
use std::io::{BufRead, Write};

/// A human player typing moves such as `c3-d4` or `d6xf8` on standard
/// input.
///
/// Unparsable or currently unplayable input re-prompts; an empty line or
/// end of input passes and ends the game.
pub struct HumanPlayer;
impl HumanPlayer {
    pub fn new() -> Self {
        Self
    }
}
impl Default for HumanPlayer {
    fn default() -> Self {
        Self::new()
    }
}
impl Player for HumanPlayer {
    fn choose_move(&mut self, candidates: &[Move]) -> Option<Move> {
        if candidates.is_empty() {
            return None;
        }
        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            print!("> ");
            if std::io::stdout().flush().is_err() {
                return None;
            }
            line.clear();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    log::error!("failed to read standard input: {e}");
                    return None;
                }
            }
            let input = line.trim();
            if input.is_empty() {
                return None;
            }
            match input.parse::<Move>() {
                Ok(mv) if candidates.contains(&mv) => return Some(mv),
                Ok(mv) => println!("{mv} is not playable right now"),
                Err(e) => println!("{e}"),
            }
        }
    }
}
