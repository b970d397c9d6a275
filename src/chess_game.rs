//! The turn-alternating game loop.
//!
//! Thin glue over the board's legal-move and apply/undo interfaces: render,
//! ask the side to move for a choice, validate it against the legal set,
//! apply, resolve promotions, and detect termination. Checkmate and
//! stalemate both surface as "no legal moves"; check status disambiguates.

use crate::agents::agent_trait::Agent;
use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_move::{ChessMove, MoveType};
use crate::game_state::chess_types::PieceTeam;
use crate::render_board::render;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The named side delivered mate.
    Checkmate(PieceTeam),
    Stalemate,
}

pub struct Game {
    board: Board,
    light: Box<dyn Agent>,
    dark: Box<dyn Agent>,
    turn: PieceTeam,
}

impl Game {
    /// Builds a game from one agent per side. The agents must disagree on
    /// which side they play.
    pub fn new(light: Box<dyn Agent>, dark: Box<dyn Agent>) -> Result<Self, ChessErrors> {
        if light.team() == dark.team() {
            return Err(ChessErrors::AgentsOnSameTeam);
        }
        // Accept the pair in either order.
        let (light, dark) = if light.team() == PieceTeam::Light {
            (light, dark)
        } else {
            (dark, light)
        };
        Ok(Game {
            board: Board::new_game(),
            light,
            dark,
            turn: PieceTeam::Light,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs the game to completion and reports how it ended.
    pub fn play(&mut self) -> Result<GameOutcome, ChessErrors> {
        loop {
            let Game {
                board,
                light,
                dark,
                turn,
            } = self;
            let team = *turn;

            println!("{}", render(board));

            let legal = board.get_legal_moves(team)?;
            if legal.is_empty() {
                return Ok(if board.is_check(team) {
                    let winner = team.opponent();
                    println!("Checkmate. {} wins.", winner.name());
                    GameOutcome::Checkmate(winner)
                } else {
                    println!("Stalemate.");
                    GameOutcome::Stalemate
                });
            }

            println!("{}'s turn", team.name());
            let agent = match team {
                PieceTeam::Light => light,
                PieceTeam::Dark => dark,
            };

            let text = loop {
                let candidate = agent.choose_move(board)?;
                if legal.contains(&candidate) {
                    break candidate;
                }
                println!("Invalid Move");
            };

            let mut mv = ChessMove::from_notation(&text, team)?;
            let kind = board.apply(&mut mv)?;
            if kind == MoveType::Promotion {
                loop {
                    let letter = agent.choose_promotion();
                    match board.promote(&mut mv, letter) {
                        Ok(()) => break,
                        Err(ChessErrors::InvalidPromotionTarget(_)) => {
                            println!("Invalid promotion piece");
                        }
                        Err(other) => return Err(other),
                    }
                }
            }

            self.turn = team.opponent();
        }
    }
}
