//! Raw attack-square unions used by check detection and castling.

use std::collections::BTreeSet;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceClass, PieceTeam, Square};
use crate::movegen::bishop_moves::bishop_moves;
use crate::movegen::king_moves::king_moves;
use crate::movegen::knight_moves::knight_moves;
use crate::movegen::pawn_moves::pawn_moves;
use crate::movegen::queen_moves::queen_moves;
use crate::movegen::rook_moves::rook_moves;

/// Union of all squares reached by the pseudo-legal destinations of every
/// piece on `team`, with castling candidates excluded (a castle destination
/// is never an attack).
///
/// `include_king` is false on the castling path, which excludes the enemy
/// king from the union entirely; check detection passes true.
pub fn attack_squares(board: &Board, team: PieceTeam, include_king: bool) -> BTreeSet<Square> {
    let mut result = BTreeSet::new();
    for &sq in board.roster(team) {
        let piece = match board.piece_at(sq) {
            Some(p) => p,
            None => continue,
        };
        let destinations = match piece.class {
            PieceClass::Pawn => pawn_moves(board, sq),
            PieceClass::Rook => rook_moves(board, sq, team),
            PieceClass::Knight => knight_moves(board, sq, team),
            PieceClass::Bishop => bishop_moves(board, sq, team),
            PieceClass::Queen => queen_moves(board, sq, team),
            PieceClass::King => {
                if include_king {
                    king_moves(board, sq, team, false)
                } else {
                    continue;
                }
            }
        };
        result.extend(destinations);
    }
    result
}
