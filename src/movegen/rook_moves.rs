//! Rook pseudo-legal destination generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceTeam, Square};
use crate::movegen::shared::ray_moves;

const ROOK_DIRECTIONS: [(i16, i16); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Orthogonal ray-casts until blocked (inclusive of a single capture).
pub fn rook_moves(board: &Board, sq: Square, team: PieceTeam) -> Vec<Square> {
    ray_moves(board, sq, team, &ROOK_DIRECTIONS)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game_state::chess_types::{PieceClass, PieceRecord};
    use crate::notation::algebraic_to_square;

    #[test]
    fn rays_stop_at_blockers() {
        let mut board = Board::empty();
        let a1 = algebraic_to_square("a1").expect("a1 should parse");
        let a3 = algebraic_to_square("a3").expect("a3 should parse");
        let c1 = algebraic_to_square("c1").expect("c1 should parse");
        board
            .set_occupant(
                a1,
                Some(PieceRecord::new(PieceClass::Rook, PieceTeam::Light, a1)),
            )
            .expect("a1 should be in range");
        // Friendly blocker up the file, enemy blocker along the rank.
        board
            .set_occupant(
                a3,
                Some(PieceRecord::new(PieceClass::Pawn, PieceTeam::Light, a3)),
            )
            .expect("a3 should be in range");
        board
            .set_occupant(
                c1,
                Some(PieceRecord::new(PieceClass::Pawn, PieceTeam::Dark, c1)),
            )
            .expect("c1 should be in range");

        let mut moves = rook_moves(&board, a1, PieceTeam::Light);
        moves.sort_unstable();
        let a2 = algebraic_to_square("a2").expect("a2 should parse");
        let b1 = algebraic_to_square("b1").expect("b1 should parse");
        assert_eq!(moves, vec![b1, c1, a2]);
    }
}
