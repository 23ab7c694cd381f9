// Self-play driver: two alpha-beta players against each other on the
// command line. Optional argument is the move budget in seconds.
//
// Usage: checkers_engine [seconds-per-move]

use checkers_engine::agent::ai::AlphaBetaPlayer;
use checkers_engine::agent::{Deadline, GameResult, Player};
use checkers_engine::game_repr::{Color, GameState};
use std::time::Duration;

fn main() {
    env_logger::init();

    let budget = match parse_budget() {
        Ok(budget) => budget,
        Err(arg) => {
            eprintln!("invalid move budget '{}': expected seconds > 0", arg);
            eprintln!("usage: checkers_engine [seconds-per-move]");
            std::process::exit(2);
        }
    };

    let mut white = AlphaBetaPlayer::new(Default::default(), "White".to_string());
    let mut red = AlphaBetaPlayer::new(Default::default(), "Red".to_string());

    let mut state = GameState::new();
    let mut move_number = 0;

    println!("{}", state);

    let result = loop {
        if let Some(result) = GameResult::from_state(&state) {
            break result;
        }

        move_number += 1;
        let player: &mut dyn Player = match state.next_player() {
            Color::White => &mut white,
            Color::Red => &mut red,
        };

        let deadline = Deadline::from_now(Duration::from_secs_f64(budget));
        let name = player.name().to_string();
        state = player.play(&state, &deadline);

        println!("Move {} ({}):", move_number, name);
        println!("{}", state);
    };

    match result {
        GameResult::WhiteWins => println!("White wins after {} moves", move_number),
        GameResult::RedWins => println!("Red wins after {} moves", move_number),
        GameResult::Draw => println!("Draw after {} moves", move_number),
    }
}

/// Seconds per move from the first argument; defaults to 1.0.
fn parse_budget() -> Result<f64, String> {
    match std::env::args().nth(1) {
        None => Ok(1.0),
        Some(arg) => match arg.parse::<f64>() {
            Ok(seconds) if seconds > 0.0 && seconds.is_finite() => Ok(seconds),
            _ => Err(arg),
        },
    }
}
