//! Depth-limited minimax over the speculative apply/undo machinery.

use crate::agents::agent_trait::Agent;
use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::PieceTeam;
use crate::scoring::{BoardScorer, Score, MAX_SCORE};

const DEFAULT_DEPTH: u32 = 3;

/// Minimax search agent.
///
/// Each node picks the move that minimizes the value its opponent reports
/// back, and reports that minimized value upward; leaves are scored from the
/// perspective of the side to move at the leaf. A node is terminal when the
/// depth budget runs out or either side has no legal reply.
pub struct MinimaxAgent<S: BoardScorer> {
    team: PieceTeam,
    scorer: S,
    depth: u32,
}

impl<S: BoardScorer> MinimaxAgent<S> {
    pub fn new(team: PieceTeam, scorer: S) -> Self {
        MinimaxAgent {
            team,
            scorer,
            depth: DEFAULT_DEPTH,
        }
    }

    pub fn with_depth(team: PieceTeam, scorer: S, depth: u32) -> Self {
        MinimaxAgent {
            team,
            scorer,
            depth,
        }
    }

    fn minimax(
        &self,
        board: &mut Board,
        depth: u32,
        team: PieceTeam,
    ) -> Result<(String, Score), ChessErrors> {
        let moves = board.get_legal_moves(team)?;
        if depth == 0
            || moves.is_empty()
            || board.get_legal_moves(team.opponent())?.is_empty()
        {
            return Ok((String::new(), self.scorer.score(board, team)));
        }

        let mut best_move = String::new();
        let mut best_score = MAX_SCORE;
        for text in moves {
            let mut mv = ChessMove::from_notation(&text, team)?;
            board.apply(&mut mv)?;
            let (_, opponent_score) = self.minimax(board, depth - 1, team.opponent())?;
            board.undo(&mv)?;
            if opponent_score < best_score {
                best_score = opponent_score;
                best_move = text;
            }
        }
        Ok((best_move, best_score))
    }
}

impl<S: BoardScorer> Agent for MinimaxAgent<S> {
    fn team(&self) -> PieceTeam {
        self.team
    }

    fn choose_move(&mut self, board: &Board) -> Result<String, ChessErrors> {
        let mut scratch = board.clone();
        let (best_move, _) = self.minimax(&mut scratch, self.depth, self.team)?;
        if best_move.is_empty() {
            return Err(ChessErrors::NoLegalMoves);
        }
        Ok(best_move)
    }

    fn choose_promotion(&mut self) -> char {
        'q'
    }
}
