//! Player trait and associated types for checkers agents.
//!
//! A player is any entity that can be asked for a move: the alpha-beta
//! engine, a random baseline, or in principle a human or network peer. The
//! `play` method is intentionally synchronous: a turn-based game only ever
//! needs one move at a time, and blocking until it is ready keeps the
//! harness trivial.

use crate::game_repr::{Color, GameState};
use super::deadline::Deadline;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    WhiteWins,
    RedWins,
    Draw,
}

impl GameResult {
    /// Classify a terminal state, or None if the game is still running.
    pub fn from_state(state: &GameState) -> Option<Self> {
        if state.is_white_win() {
            Some(GameResult::WhiteWins)
        } else if state.is_red_win() {
            Some(GameResult::RedWins)
        } else if state.is_draw() {
            Some(GameResult::Draw)
        } else {
            None
        }
    }

    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Red => GameResult::RedWins,
        }
    }
}

/// Trait for entities that can provide checkers moves.
///
/// `play` must be total: it returns the successor state for the chosen
/// move, or the input state unchanged when the side to move has no legal
/// move at all. It may block up to (roughly) the given deadline.
pub trait Player {
    /// Choose a move in `state` for the side to move, within `deadline`.
    fn play(&mut self, state: &GameState, deadline: &Deadline) -> GameState;

    /// Display name, used in logs and the self-play driver.
    fn name(&self) -> &str {
        "Player"
    }
}
