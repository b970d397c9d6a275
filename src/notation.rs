//! Square and move conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the linear
//! square index, and splits 4-character move strings (`"e2e4"`) into source
//! and destination squares. These are the only notation forms the engine
//! speaks; anything else is rejected with an invalid-position error.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Square, BOARD_SQUARES};

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidNotationString(square.to_string()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidNotationChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidNotationChar(rank as char));
    }

    let file_index = file - b'a';
    let rank_index = rank - b'1';
    Ok(rank_index * 8 + file_index)
}

/// Convert a square index (`0..64`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, ChessErrors> {
    if usize::from(square) >= BOARD_SQUARES {
        return Err(ChessErrors::InvalidSquareIndex(usize::from(square)));
    }

    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Split a 4-character move string (`"e2e4"`) into (source, destination).
pub fn notation_to_squares(text: &str) -> Result<(Square, Square), ChessErrors> {
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessErrors::InvalidNotationString(text.to_string()));
    }
    let src = algebraic_to_square(&text[..2])?;
    let dst = algebraic_to_square(&text[2..])?;
    Ok((src, dst))
}

/// Render a (source, destination) pair as a 4-character move string.
pub fn squares_to_notation(src: Square, dst: Square) -> Result<String, ChessErrors> {
    Ok(format!(
        "{}{}",
        square_to_algebraic(src)?,
        square_to_algebraic(dst)?
    ))
}
