//! Helpers shared by the per-class move generators.
//!
//! Destinations are computed on (file, rank) pairs and converted back to the
//! linear index only once both coordinates are known to be on the board, so
//! no generator can wrap across a board edge.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceTeam, Square};

/// File (0..8) of a square index.
#[inline]
pub fn square_file(sq: Square) -> i16 {
    i16::from(sq % 8)
}

/// Rank (0..8) of a square index.
#[inline]
pub fn square_rank(sq: Square) -> i16 {
    i16::from(sq / 8)
}

/// Recombine a (file, rank) pair into a square index if it is on the board.
#[inline]
pub fn square_at(file: i16, rank: i16) -> Option<Square> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank * 8 + file) as Square)
    } else {
        None
    }
}

/// A piece of `team` may occupy `sq` when it is empty or holds an enemy.
#[inline]
pub fn can_occupy(board: &Board, sq: Square, team: PieceTeam) -> bool {
    match board.piece_at(sq) {
        None => true,
        Some(occupant) => occupant.team != team,
    }
}

/// Ray-cast from `sq` along each (d_file, d_rank) direction until blocked by
/// any piece (inclusive of a single capture) or the board edge.
pub fn ray_moves(
    board: &Board,
    sq: Square,
    team: PieceTeam,
    directions: &[(i16, i16)],
) -> Vec<Square> {
    let mut result = Vec::new();
    for &(d_file, d_rank) in directions {
        let mut file = square_file(sq);
        let mut rank = square_rank(sq);
        loop {
            file += d_file;
            rank += d_rank;
            let dest = match square_at(file, rank) {
                Some(dest) => dest,
                None => break,
            };
            match board.piece_at(dest) {
                None => result.push(dest),
                Some(occupant) => {
                    if occupant.team != team {
                        result.push(dest);
                    }
                    break;
                }
            }
        }
    }
    result
}

/// Fixed-offset destinations (knight jumps, king steps) filtered by board
/// bounds and same-team occupancy.
pub fn offset_moves(
    board: &Board,
    sq: Square,
    team: PieceTeam,
    offsets: &[(i16, i16)],
) -> Vec<Square> {
    let file = square_file(sq);
    let rank = square_rank(sq);
    let mut result = Vec::new();
    for &(d_file, d_rank) in offsets {
        if let Some(dest) = square_at(file + d_file, rank + d_rank) {
            if can_occupy(board, dest, team) {
                result.push(dest);
            }
        }
    }
    result
}
