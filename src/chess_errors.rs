//! Errors used throughout the chess engine.
//!
//! This module defines the canonical error type returned by game logic,
//! parsing utilities, move application and the agents. The enum `ChessErrors`
//! is used as the single error type across the crate to simplify propagation
//! and matching. Each variant carries contextual information where
//! appropriate to aid diagnostics and user-facing error messages.
//!
//! Usage guidelines:
//! - Functions in the engine should return `Result<..., ChessErrors>` for
//!   recoverable or expected failure modes (invalid input, bad promotion
//!   letters, etc).
//! - Parsing and input-related variants (`InvalidNotationString`,
//!   `InvalidNotationChar`, `InvalidSquareIndex`, `InvalidPromotionTarget`)
//!   are recoverable: callers should re-prompt or reject the input.
//! - Board-state violation variants (`NothingToUndo`, `MoveNotApplied`,
//!   `PieceMissingAtSquare`) indicate a bug in move bookkeeping. They are not
//!   caught or retried anywhere; they should be allowed to abort the
//!   operation loudly rather than corrupt board state.

use std::fmt;

use crate::game_state::chess_types::Square;

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq)]
pub enum ChessErrors {
    /// A square index outside `0..64` was used.
    ///
    /// Payload: the offending index.
    InvalidSquareIndex(usize),

    /// A single character used during notation parsing was invalid
    /// (a file outside 'a'..'h' or a rank outside '1'..'8').
    InvalidNotationChar(char),

    /// A notation string failed to parse (wrong length or malformed form).
    ///
    /// Payload: the original string that could not be interpreted.
    InvalidNotationString(String),

    /// `undo` was called on a board with no applied moves.
    ///
    /// This is a fatal precondition violation: strict apply/undo stack
    /// discipline means it can only be reached through a core bug.
    NothingToUndo,

    /// `undo` was called with a move that was never applied (no bound piece
    /// or resolved move type). Same severity as `NothingToUndo`.
    MoveNotApplied,

    /// `apply` resolved a move whose source square is empty, or internal
    /// bookkeeping expected a piece that is not there.
    ///
    /// Payload: the empty square.
    PieceMissingAtSquare(Square),

    /// An unrecognized pawn promotion letter was supplied.
    ///
    /// Payload: the offending character. Recoverable by re-prompting the
    /// agent for one of `r`, `k`, `b`, `q`.
    InvalidPromotionTarget(char),

    /// No legal moves are available for the side to move. An agent asked for
    /// a move in such a position returns this; within search a position with
    /// no legal moves is a terminal value, not an error.
    NoLegalMoves,

    /// The interactive input stream closed while an agent was waiting for a
    /// line of input.
    InputStreamClosed,

    /// Two agents configured for the same team were handed to a game.
    AgentsOnSameTeam,
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidSquareIndex(idx) => {
                write!(f, "invalid position: square index {} is out of range", idx)
            }
            ChessErrors::InvalidNotationChar(c) => {
                write!(f, "invalid position: unexpected character '{}'", c)
            }
            ChessErrors::InvalidNotationString(s) => {
                write!(f, "invalid position: cannot parse \"{}\"", s)
            }
            ChessErrors::NothingToUndo => {
                write!(f, "undo called with no applied moves")
            }
            ChessErrors::MoveNotApplied => {
                write!(f, "undo called with a move that was never applied")
            }
            ChessErrors::PieceMissingAtSquare(sq) => {
                write!(f, "no piece at square index {}", sq)
            }
            ChessErrors::InvalidPromotionTarget(c) => {
                write!(f, "cannot promote to '{}'", c)
            }
            ChessErrors::NoLegalMoves => write!(f, "no legal moves available"),
            ChessErrors::InputStreamClosed => write!(f, "input stream closed"),
            ChessErrors::AgentsOnSameTeam => {
                write!(f, "cannot play when both agents are on the same team")
            }
        }
    }
}
