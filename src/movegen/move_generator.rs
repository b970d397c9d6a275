//! Pseudo-legal move dispatch.
//!
//! Single entry point mapping a piece class to its generator. Pseudo-legal
//! means geometrically valid for the piece (blocking and capture rules
//! respected) but not yet filtered for check-safety; that filtering is
//! `Board::get_legal_moves`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceClass, Square};
use crate::movegen::bishop_moves::bishop_moves;
use crate::movegen::king_moves::king_moves;
use crate::movegen::knight_moves::knight_moves;
use crate::movegen::pawn_moves::pawn_moves;
use crate::movegen::queen_moves::queen_moves;
use crate::movegen::rook_moves::rook_moves;

/// Pseudo-legal destinations of the piece on `sq` (empty when the square is
/// vacant). Castling candidates are included for kings.
pub fn pseudo_legal_moves(board: &Board, sq: Square) -> Vec<Square> {
    let piece = match board.piece_at(sq) {
        Some(p) => p,
        None => return Vec::new(),
    };
    match piece.class {
        PieceClass::Pawn => pawn_moves(board, sq),
        PieceClass::Rook => rook_moves(board, sq, piece.team),
        PieceClass::Knight => knight_moves(board, sq, piece.team),
        PieceClass::Bishop => bishop_moves(board, sq, piece.team),
        PieceClass::Queen => queen_moves(board, sq, piece.team),
        PieceClass::King => king_moves(board, sq, piece.team, true),
    }
}
