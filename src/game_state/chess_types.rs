//! Core piece and square types shared by the whole engine.
//!
//! The board is a linear, row-major array of 64 squares (`rank = sq / 8`,
//! `file = sq % 8`, `0 == a1`, `63 == h8`). Pieces are flat `Copy` records
//! tagged by class; per-class behavior is dispatched with `match` rather than
//! trait objects so the hot legality-checking loops stay allocation-free.

use crate::game_state::board::Board;
use crate::game_state::chess_move::MoveType;

/// Board square index (`0..64`).
pub type Square = u8;

/// Number of squares on the board.
pub const BOARD_SQUARES: usize = 64;

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceTeam {
    /// The light (white) side. Pawns advance toward higher ranks.
    Light,
    /// The dark (black) side. Pawns advance toward lower ranks.
    Dark,
}

impl PieceTeam {
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            PieceTeam::Light => PieceTeam::Dark,
            PieceTeam::Dark => PieceTeam::Light,
        }
    }

    /// Display name used by the game loop and renderer.
    pub const fn name(self) -> &'static str {
        match self {
            PieceTeam::Light => "LIGHT",
            PieceTeam::Dark => "DARK",
        }
    }

    /// Pawn advance direction as a signed square offset (+8 / -8).
    #[inline]
    pub const fn pawn_direction(self) -> i16 {
        match self {
            PieceTeam::Light => 8,
            PieceTeam::Dark => -8,
        }
    }
}

/// Piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceClass {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

/// A chess piece as stored on the board.
///
/// `move_count` tracks how many times the piece has moved; a value of 1
/// immediately after a move means "this was the first move", which classifies
/// the `PawnFirstMove`/`RookFirstMove`/`KingFirstMove` move types and
/// invalidates castling.
///
/// `en_passable` and `en_passable_at` are only meaningful for pawns:
/// `en_passable` is true only immediately after a two-square advance and is
/// cleared once one opposing ply completes; `en_passable_at` records the ply
/// at which the vulnerability expires so undo can re-derive the flag exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceRecord {
    pub class: PieceClass,
    pub team: PieceTeam,
    pub square: Square,
    pub move_count: u16,
    pub en_passable: bool,
    pub en_passable_at: u16,
}

impl PieceRecord {
    pub fn new(class: PieceClass, team: PieceTeam, square: Square) -> Self {
        PieceRecord {
            class,
            team,
            square,
            move_count: 0,
            en_passable: false,
            en_passable_at: 0,
        }
    }

    /// Single-character board glyph (uppercase for Light, lowercase for Dark).
    pub fn glyph(&self) -> char {
        let c = match self.class {
            PieceClass::Pawn => 'p',
            PieceClass::Rook => 'r',
            PieceClass::Knight => 'n',
            PieceClass::Bishop => 'b',
            PieceClass::Queen => 'q',
            PieceClass::King => 'k',
        };
        match self.team {
            PieceTeam::Light => c.to_ascii_uppercase(),
            PieceTeam::Dark => c,
        }
    }

    /// Resolves a move of this piece to `dst`, mutating position and
    /// counters, and returns the resulting `MoveType`.
    ///
    /// This is the piece-side half of `Board::apply`: it decides what kind of
    /// move just happened (first move, castle, en passant, promotion) from
    /// the piece's own state and the board's occupancy. Board-side
    /// bookkeeping (captures, rook relocation, flag expiry) stays in
    /// `Board::apply`.
    pub fn resolve_move(&mut self, board: &Board, dst: Square) -> MoveType {
        self.move_count += 1;

        let mut move_type = if self.move_count == 1 {
            match self.class {
                PieceClass::Pawn => MoveType::PawnFirstMove,
                PieceClass::Rook => MoveType::RookFirstMove,
                PieceClass::King => MoveType::KingFirstMove,
                _ => MoveType::Regular,
            }
        } else {
            MoveType::Regular
        };

        match self.class {
            PieceClass::Pawn => {
                let dir = self.team.pawn_direction();
                let src = i16::from(self.square);
                let to = i16::from(dst);

                // Two-square advance leaves this pawn en-passant vulnerable.
                if to == src + 2 * dir {
                    self.en_passable = true;
                }

                // A diagonal step onto an empty square next to an
                // en-passant-eligible enemy pawn is an en passant capture.
                let diff = (to - src).abs();
                if (diff == 7 || diff == 9) && board.piece_at(dst).is_none() {
                    let behind = (to - dir) as Square;
                    if let Some(victim) = board.piece_at(behind) {
                        if victim.class == PieceClass::Pawn
                            && victim.team != self.team
                            && victim.en_passable
                        {
                            move_type = MoveType::EnPassant;
                        }
                    }
                }

                // Reaching the far rank promotes.
                let promotes = match self.team {
                    PieceTeam::Light => dst >= 56,
                    PieceTeam::Dark => dst <= 7,
                };
                if promotes {
                    move_type = MoveType::Promotion;
                }
            }
            PieceClass::King => {
                if dst == self.square.wrapping_add(2) {
                    move_type = MoveType::CastleShort;
                }
                if dst.wrapping_add(2) == self.square {
                    move_type = MoveType::CastleLong;
                }
            }
            _ => (),
        }

        self.square = dst;
        move_type
    }
}
