//! The agent interface the game loop plays through.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceTeam;

/// A move source for one side: a human at the terminal, a random mover, or a
/// search agent. The game loop treats all of them identically.
pub trait Agent {
    /// Which side this agent plays for.
    fn team(&self) -> PieceTeam;

    /// Produces the agent's chosen move for the current position, as a
    /// 4-character notation string (e.g. `"e2e4"`). The game loop validates
    /// the choice against the legal move set and re-asks on a miss, so an
    /// agent is free to return a hopeful answer.
    fn choose_move(&mut self, board: &Board) -> Result<String, ChessErrors>;

    /// Promotion piece letter (`r`/`k`/`b`/`q`, `k` being the knight) when a
    /// pawn of this agent's side reaches the far rank.
    fn choose_promotion(&mut self) -> char;
}
