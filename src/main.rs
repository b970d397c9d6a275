use std::env;
use std::process::ExitCode;

use damson_chess::agents::agent_alpha_beta::AlphaBetaAgent;
use damson_chess::agents::agent_minimax::MinimaxAgent;
use damson_chess::agents::agent_player::PlayerAgent;
use damson_chess::agents::agent_random::RandomAgent;
use damson_chess::agents::agent_trait::Agent;
use damson_chess::chess_game::Game;
use damson_chess::game_state::chess_types::PieceTeam;
use damson_chess::scoring::MaterialScorer;

fn build_agent(kind: &str, team: PieceTeam) -> Option<Box<dyn Agent>> {
    match kind {
        "human" | "player" => Some(Box::new(PlayerAgent::new(team))),
        "random" => Some(Box::new(RandomAgent::new(team))),
        "minimax" => Some(Box::new(MinimaxAgent::new(team, MaterialScorer))),
        "alphabeta" | "alpha-beta" => Some(Box::new(AlphaBetaAgent::new(team, MaterialScorer))),
        _ => None,
    }
}

fn usage() {
    eprintln!("usage: damson_chess [light-agent] [dark-agent]");
    eprintln!("agents: human, random, minimax, alphabeta (default: human vs alphabeta)");
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let light_kind = args.get(1).map(String::as_str).unwrap_or("human");
    let dark_kind = args.get(2).map(String::as_str).unwrap_or("alphabeta");

    let light = match build_agent(light_kind, PieceTeam::Light) {
        Some(agent) => agent,
        None => {
            eprintln!("unknown agent: {light_kind}");
            usage();
            return ExitCode::FAILURE;
        }
    };
    let dark = match build_agent(dark_kind, PieceTeam::Dark) {
        Some(agent) => agent,
        None => {
            eprintln!("unknown agent: {dark_kind}");
            usage();
            return ExitCode::FAILURE;
        }
    };

    let mut game = match Game::new(light, dark) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    match game.play() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("game aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
