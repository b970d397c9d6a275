//! Console board rendering.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

/// Renders the board as text, dark side at the top, with rank numbers down
/// the left edge and a file legend underneath. Empty squares print as `.`.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("       DARK      \n");
    for rank in (0..8u8).rev() {
        out.push_str(&format!("{} ", rank + 1));
        for file in 0..8u8 {
            let glyph = board
                .piece_at((rank * 8 + file) as Square)
                .map_or('.', |piece| piece.glyph());
            out.push(glyph);
            if file < 7 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    out.push_str("       LIGHT     \n");
    out
}
