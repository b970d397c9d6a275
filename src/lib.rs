//! A two-player chess engine: a mutable 64-square board enforcing full
//! legality, O(1) reversible move application, and minimax / alpha-beta
//! search agents over a material evaluator.

pub mod chess_errors;
pub mod chess_game;
pub mod notation;
pub mod render_board;
pub mod scoring;

pub mod game_state {
    pub mod board;
    pub mod chess_move;
    pub mod chess_types;
}

pub mod movegen {
    pub mod attacks;
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_generator;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod shared;
}

pub mod agents {
    pub mod agent_alpha_beta;
    pub mod agent_minimax;
    pub mod agent_player;
    pub mod agent_random;
    pub mod agent_trait;
}
