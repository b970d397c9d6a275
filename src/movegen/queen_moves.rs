//! Queen pseudo-legal destination generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceTeam, Square};
use crate::movegen::shared::ray_moves;

const QUEEN_DIRECTIONS: [(i16, i16); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Rook and bishop rays combined.
pub fn queen_moves(board: &Board, sq: Square, team: PieceTeam) -> Vec<Square> {
    ray_moves(board, sq, team, &QUEEN_DIRECTIONS)
}
