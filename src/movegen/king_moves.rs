//! King pseudo-legal destination generation and castling eligibility.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceClass, PieceTeam, Square};
use crate::movegen::attacks::attack_squares;
use crate::movegen::shared::offset_moves;

const KING_OFFSETS: [(i16, i16); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The 8 adjacent squares filtered by bounds and same-team occupancy, plus
/// castling candidates when `with_castling` is set.
///
/// Attack-union computation passes `with_castling == false` so that castling
/// eligibility (which itself consults the opponent's attack squares) never
/// recurses.
pub fn king_moves(board: &Board, sq: Square, team: PieceTeam, with_castling: bool) -> Vec<Square> {
    let mut result = offset_moves(board, sq, team, &KING_OFFSETS);
    if with_castling {
        if can_castle(board, sq, true) {
            result.push(sq + 2);
        }
        if can_castle(board, sq, false) {
            result.push(sq - 2);
        }
    }
    result
}

/// Castling eligibility for the king on `king_sq`.
///
/// Holds only when: the king has never moved; every square between king and
/// rook is empty; the rook at the expected corner is present, unmoved and
/// same-team; and none of the squares the king stands on, passes through or
/// lands on (`src`, `src±1`, `src±2`) is attacked. The attack union excludes
/// the enemy king itself, which would otherwise recurse back through its own
/// castling eligibility.
pub fn can_castle(board: &Board, king_sq: Square, short: bool) -> bool {
    let king = match board.piece_at(king_sq) {
        Some(p) if p.class == PieceClass::King => *p,
        _ => return false,
    };
    if king.move_count != 0 {
        return false;
    }

    let step: i16 = if short { 1 } else { -1 };
    let at = |offset: i16| -> Option<Square> {
        let sq = i16::from(king_sq) + offset * step;
        if (0..64).contains(&sq) {
            Some(sq as Square)
        } else {
            None
        }
    };

    // Every square between king and rook must be empty.
    let interior = if short { 2 } else { 3 };
    for offset in 1..=interior {
        match at(offset) {
            Some(sq) if board.piece_at(sq).is_none() => (),
            _ => return false,
        }
    }

    // The rook at the expected corner must be present, unmoved, and ours.
    let rook_sq = match at(if short { 3 } else { 4 }) {
        Some(sq) => sq,
        None => return false,
    };
    match board.piece_at(rook_sq) {
        Some(rook)
            if rook.class == PieceClass::Rook
                && rook.move_count == 0
                && rook.team == king.team => {}
        _ => return false,
    }

    // The king may not castle out of, through, or into an attacked square.
    let attacked = attack_squares(board, king.team.opponent(), false);
    for offset in 0..=2 {
        match at(offset) {
            Some(sq) if !attacked.contains(&sq) => (),
            _ => return false,
        }
    }

    true
}
