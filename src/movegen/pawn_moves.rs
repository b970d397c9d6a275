//! Pawn pseudo-legal destination generation.
//!
//! Covers the one-square advance, the two-square first-move advance, the two
//! diagonal captures, and en passant captures next to an en-passant-eligible
//! enemy pawn. Advance direction is +8 squares for Light and -8 for Dark;
//! diagonal offsets are guarded against wrapping across the a/h files.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceClass, Square};
use crate::movegen::shared::{square_at, square_file, square_rank};

/// Pseudo-legal destinations for the pawn on `sq`.
///
/// Returns nothing for a pawn parked on its promotion rank (possible in
/// search, where the promotion commit is deferred to the game loop).
pub fn pawn_moves(board: &Board, sq: Square) -> Vec<Square> {
    let pawn = match board.piece_at(sq) {
        Some(p) if p.class == PieceClass::Pawn => *p,
        _ => return Vec::new(),
    };

    let mut result = Vec::new();
    let file = square_file(sq);
    let rank = square_rank(sq);
    let d_rank: i16 = match pawn.team.pawn_direction() {
        8 => 1,
        _ => -1,
    };

    let one_ahead = square_at(file, rank + d_rank);
    let two_ahead = square_at(file, rank + 2 * d_rank);

    // First move: two steps ahead through an empty intermediate square.
    if pawn.move_count == 0 {
        if let (Some(one), Some(two)) = (one_ahead, two_ahead) {
            if board.piece_at(one).is_none() && board.piece_at(two).is_none() {
                result.push(two);
            }
        }
    }

    // Regular move: one step ahead.
    if let Some(one) = one_ahead {
        if board.piece_at(one).is_none() {
            result.push(one);
        }
    }

    // Diagonal captures.
    for d_file in [1i16, -1] {
        if let Some(dest) = square_at(file + d_file, rank + d_rank) {
            if let Some(occupant) = board.piece_at(dest) {
                if occupant.team != pawn.team {
                    result.push(dest);
                }
            }
        }
    }

    // En passant: an enemy pawn directly beside us that just double-stepped
    // can be captured as if it had advanced one square.
    for d_file in [1i16, -1] {
        if let Some(beside) = square_at(file + d_file, rank) {
            if let Some(neighbor) = board.piece_at(beside) {
                if neighbor.class == PieceClass::Pawn
                    && neighbor.team != pawn.team
                    && neighbor.en_passable
                {
                    if let Some(dest) = square_at(file + d_file, rank + d_rank) {
                        result.push(dest);
                    }
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game_state::chess_types::{PieceRecord, PieceTeam};
    use crate::notation::algebraic_to_square;

    fn place(board: &mut Board, class: PieceClass, team: PieceTeam, at: &str) -> Square {
        let sq = algebraic_to_square(at).expect("test square should parse");
        board
            .set_occupant(sq, Some(PieceRecord::new(class, team, sq)))
            .expect("test square should be in range");
        sq
    }

    #[test]
    fn opening_pawn_has_two_advances() {
        let board = Board::new_game();
        let e2 = algebraic_to_square("e2").expect("e2 should parse");
        let moves = pawn_moves(&board, e2);
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn captures_do_not_wrap_files() {
        let mut board = Board::empty();
        let a4 = place(&mut board, PieceClass::Pawn, PieceTeam::Light, "a4");
        let mut pawn = *board.piece_at(a4).expect("pawn was just placed");
        pawn.move_count = 1;
        board
            .set_occupant(a4, Some(pawn))
            .expect("a4 should be in range");
        // h4 is index 31, exactly a4 + 7: a naive index-offset capture would
        // reach it across the board edge.
        place(&mut board, PieceClass::Rook, PieceTeam::Dark, "h4");
        let moves = pawn_moves(&board, a4);
        assert_eq!(
            moves,
            vec![algebraic_to_square("a5").expect("a5 should parse")]
        );
    }

    #[test]
    fn blocked_pawn_has_no_advance() {
        let mut board = Board::empty();
        let e2 = place(&mut board, PieceClass::Pawn, PieceTeam::Light, "e2");
        place(&mut board, PieceClass::Knight, PieceTeam::Dark, "e3");
        assert!(pawn_moves(&board, e2).is_empty());
    }
}
