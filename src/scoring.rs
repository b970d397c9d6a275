//! Position scoring for the search agents.
//!
//! Scores are plain integers in centipawn-free units (a pawn is worth 1).
//! Positive is better for the side the score is taken from. `BoardScorer` is
//! the seam between search and evaluation so agents can be built against any
//! heuristic; `MaterialScorer` is the material-count baseline.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceClass, PieceTeam};

/// Evaluation score. Material units, signed for perspective.
pub type Score = i32;

/// Sentinel below any reachable evaluation.
pub const MIN_SCORE: Score = Score::MIN + 1;

/// Sentinel above any reachable evaluation.
pub const MAX_SCORE: Score = Score::MAX;

/// Conventional material value of a piece class. The king carries no
/// material value; losing it ends the game instead.
pub const fn conventional_value(class: PieceClass) -> Score {
    match class {
        PieceClass::Pawn => 1,
        PieceClass::Knight => 3,
        PieceClass::Bishop => 3,
        PieceClass::Rook => 5,
        PieceClass::Queen => 9,
        PieceClass::King => 0,
    }
}

/// A static evaluation of a board position from one side's perspective.
pub trait BoardScorer {
    /// Scores `board` for `team`; higher is better for `team`.
    fn score(&self, board: &Board, team: PieceTeam) -> Score;
}

/// Material difference: own piece values minus the opponent's.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    fn material(board: &Board, team: PieceTeam) -> Score {
        board
            .roster(team)
            .iter()
            .filter_map(|&sq| board.piece_at(sq))
            .map(|piece| conventional_value(piece.class))
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, team: PieceTeam) -> Score {
        Self::material(board, team) - Self::material(board, team.opponent())
    }
}
