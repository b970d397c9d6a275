//! Terminal-input agent: a human typing moves.

use std::io::{self, BufRead, Write};

use crate::agents::agent_trait::Agent;
use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceTeam;
use crate::notation::notation_to_squares;

/// Reads moves from standard input. Malformed input is re-prompted here;
/// well-formed but illegal moves are rejected by the game loop, which asks
/// again.
pub struct PlayerAgent {
    team: PieceTeam,
}

impl PlayerAgent {
    pub fn new(team: PieceTeam) -> Self {
        PlayerAgent { team }
    }

    fn read_line(prompt: &str) -> Result<String, ChessErrors> {
        print!("{prompt}");
        let _ = io::stdout().flush();
        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|_| ChessErrors::InputStreamClosed)?;
        if read == 0 {
            return Err(ChessErrors::InputStreamClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl Agent for PlayerAgent {
    fn team(&self) -> PieceTeam {
        self.team
    }

    fn choose_move(&mut self, _board: &Board) -> Result<String, ChessErrors> {
        loop {
            let text = Self::read_line(&format!("{} move> ", self.team.name()))?;
            match notation_to_squares(&text) {
                Ok(_) => return Ok(text),
                Err(_) => println!("Moves look like e2e4. Try again."),
            }
        }
    }

    fn choose_promotion(&mut self) -> char {
        loop {
            let text = match Self::read_line("Promote to (r/k/b/q)> ") {
                Ok(text) => text,
                // The game loop retries rejected letters; on a closed input
                // stream fall back to the queen so it can make progress.
                Err(_) => return 'q',
            };
            match text.to_ascii_lowercase().chars().next() {
                Some(c @ ('r' | 'k' | 'b' | 'q')) => return c,
                _ => println!("Pick one of r, k, b, q (k is the knight)."),
            }
        }
    }
}
