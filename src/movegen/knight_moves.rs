//! Knight pseudo-legal destination generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceTeam, Square};
use crate::movegen::shared::offset_moves;

const KNIGHT_OFFSETS: [(i16, i16); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Fixed 8-offset jump table filtered by board bounds and same-team occupancy.
pub fn knight_moves(board: &Board, sq: Square, team: PieceTeam) -> Vec<Square> {
    offset_moves(board, sq, team, &KNIGHT_OFFSETS)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game_state::chess_types::{PieceClass, PieceRecord};
    use crate::notation::algebraic_to_square;

    #[test]
    fn corner_knight_has_two_moves() {
        let mut board = Board::empty();
        let a1 = algebraic_to_square("a1").expect("a1 should parse");
        board
            .set_occupant(
                a1,
                Some(PieceRecord::new(PieceClass::Knight, PieceTeam::Light, a1)),
            )
            .expect("a1 should be in range");
        let mut moves = knight_moves(&board, a1, PieceTeam::Light);
        moves.sort_unstable();
        let b3 = algebraic_to_square("b3").expect("b3 should parse");
        let c2 = algebraic_to_square("c2").expect("c2 should parse");
        assert_eq!(moves, vec![c2, b3]);
    }
}
