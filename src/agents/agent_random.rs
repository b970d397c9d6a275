//! Uniform-random legal mover, mostly useful as a test opponent.

use rand::prelude::IndexedRandom;

use crate::agents::agent_trait::Agent;
use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceTeam;

pub struct RandomAgent {
    team: PieceTeam,
}

impl RandomAgent {
    pub fn new(team: PieceTeam) -> Self {
        RandomAgent { team }
    }
}

impl Agent for RandomAgent {
    fn team(&self) -> PieceTeam {
        self.team
    }

    fn choose_move(&mut self, board: &Board) -> Result<String, ChessErrors> {
        let mut scratch = board.clone();
        let moves: Vec<String> = scratch.get_legal_moves(self.team)?.into_iter().collect();
        let mut rng = rand::rng();
        moves
            .as_slice()
            .choose(&mut rng)
            .cloned()
            .ok_or(ChessErrors::NoLegalMoves)
    }

    fn choose_promotion(&mut self) -> char {
        'q'
    }
}
