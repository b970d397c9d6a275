//! Alpha-beta pruned search.
//!
//! Plain (non-negated) min/max: Light always maximizes and Dark always
//! minimizes, with leaves scored on a fixed axis where positive favors
//! Light. Alpha and beta start unbounded and only constrain siblings once a
//! child has established them; pruning changes how many nodes are visited,
//! never the value selected.

use crate::agents::agent_trait::Agent;
use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::PieceTeam;
use crate::scoring::{BoardScorer, Score, MAX_SCORE, MIN_SCORE};

const DEFAULT_DEPTH: u32 = 3;

pub struct AlphaBetaAgent<S: BoardScorer> {
    team: PieceTeam,
    scorer: S,
    depth: u32,
}

impl<S: BoardScorer> AlphaBetaAgent<S> {
    pub fn new(team: PieceTeam, scorer: S) -> Self {
        AlphaBetaAgent {
            team,
            scorer,
            depth: DEFAULT_DEPTH,
        }
    }

    pub fn with_depth(team: PieceTeam, scorer: S, depth: u32) -> Self {
        AlphaBetaAgent {
            team,
            scorer,
            depth,
        }
    }

    fn alpha_beta(
        &self,
        board: &mut Board,
        depth: u32,
        team: PieceTeam,
        mut alpha: Option<Score>,
        mut beta: Option<Score>,
    ) -> Result<(String, Score), ChessErrors> {
        let moves = board.get_legal_moves(team)?;
        if depth == 0
            || moves.is_empty()
            || board.get_legal_moves(team.opponent())?.is_empty()
        {
            return Ok((String::new(), self.scorer.score(board, PieceTeam::Light)));
        }

        let maximizing = team == PieceTeam::Light;
        let mut best_move = String::new();
        let mut best_score = if maximizing { MIN_SCORE } else { MAX_SCORE };

        for text in moves {
            let mut mv = ChessMove::from_notation(&text, team)?;
            board.apply(&mut mv)?;
            let (_, child) =
                self.alpha_beta(board, depth - 1, team.opponent(), alpha, beta)?;
            board.undo(&mv)?;

            if (maximizing && child > best_score) || (!maximizing && child < best_score) {
                best_score = child;
                best_move = text;
            }
            if maximizing {
                alpha = Some(alpha.map_or(child, |a| a.max(child)));
            } else {
                beta = Some(beta.map_or(child, |b| b.min(child)));
            }
            if let (Some(a), Some(b)) = (alpha, beta) {
                if b <= a {
                    break;
                }
            }
        }
        Ok((best_move, best_score))
    }
}

impl<S: BoardScorer> Agent for AlphaBetaAgent<S> {
    fn team(&self) -> PieceTeam {
        self.team
    }

    fn choose_move(&mut self, board: &Board) -> Result<String, ChessErrors> {
        let mut scratch = board.clone();
        let (best_move, _) = self.alpha_beta(&mut scratch, self.depth, self.team, None, None)?;
        if best_move.is_empty() {
            return Err(ChessErrors::NoLegalMoves);
        }
        Ok(best_move)
    }

    fn choose_promotion(&mut self) -> char {
        'q'
    }
}
