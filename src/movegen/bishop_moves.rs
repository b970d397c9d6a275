//! Bishop pseudo-legal destination generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceTeam, Square};
use crate::movegen::shared::ray_moves;

const BISHOP_DIRECTIONS: [(i16, i16); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Diagonal ray-casts until blocked (inclusive of a single capture).
pub fn bishop_moves(board: &Board, sq: Square, team: PieceTeam) -> Vec<Square> {
    ray_moves(board, sq, team, &BISHOP_DIRECTIONS)
}
