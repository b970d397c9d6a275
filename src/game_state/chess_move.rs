//! Move description for one ply.
//!
//! A `ChessMove` starts life as just (source, destination, team) and is
//! filled in by `Board::apply` with everything needed to reverse the move
//! exactly: a pre-move snapshot of the mover, the captured piece and its
//! roster position, the committed promotion piece, and the resolved
//! `MoveType`. It is mutable scratch state; it must not be reused across
//! board clones.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{PieceRecord, PieceTeam, Square};
use crate::notation::{notation_to_squares, squares_to_notation};

/// The resolved kind of a move, decided during application.
///
/// `PawnFirstMove`/`RookFirstMove`/`KingFirstMove` are regular moves flagged
/// on the piece's first move (the pawn variant is where en-passant
/// vulnerability is stamped; the rook/king variants are what invalidate
/// castling). The remaining variants carry special board bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveType {
    Regular,
    PawnFirstMove,
    RookFirstMove,
    KingFirstMove,
    EnPassant,
    Promotion,
    CastleShort,
    CastleLong,
}

/// One ply of the game, in scratch form.
#[derive(Debug, Clone)]
pub struct ChessMove {
    pub team: PieceTeam,
    pub src: Square,
    pub dst: Square,
    /// Pre-move snapshot of the moving piece, bound at apply time. Restoring
    /// this snapshot is what makes undo lossless (position, move counter and
    /// en-passant bookkeeping all revert in one assignment), including the
    /// reconstruction of the original pawn after a promotion.
    pub piece: Option<PieceRecord>,
    /// The captured piece, if any, bound at apply time and restored on undo.
    pub captured: Option<PieceRecord>,
    /// Index the captured piece held in its side's roster, so undo can
    /// reinsert it at the exact same position.
    pub captured_roster_index: Option<usize>,
    /// The piece a promotion was committed to, if any.
    pub promotion: Option<PieceRecord>,
    /// The move kind resolved during application.
    pub move_type: Option<MoveType>,
}

impl ChessMove {
    pub fn new(src: Square, dst: Square, team: PieceTeam) -> Self {
        ChessMove {
            team,
            src,
            dst,
            piece: None,
            captured: None,
            captured_roster_index: None,
            promotion: None,
            move_type: None,
        }
    }

    /// Builds a move from 4-character notation (`"e2e4"`).
    pub fn from_notation(text: &str, team: PieceTeam) -> Result<Self, ChessErrors> {
        let (src, dst) = notation_to_squares(text)?;
        Ok(ChessMove::new(src, dst, team))
    }

    /// Renders the move back to 4-character notation.
    pub fn to_notation(&self) -> Result<String, ChessErrors> {
        squares_to_notation(self.src, self.dst)
    }
}
