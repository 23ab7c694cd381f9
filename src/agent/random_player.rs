use crate::game_repr::GameState;
use super::deadline::Deadline;
use super::player::Player;
use rand::seq::SliceRandom;

/// Baseline player that picks a uniformly random legal move. Useful as a
/// sparring partner in self-play and as a sanity opponent in tests.
pub struct RandomPlayer {
    name: String,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            name: "Random".to_string(),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn play(&mut self, state: &GameState, _deadline: &Deadline) -> GameState {
        let successors = state.successors();
        match successors.choose(&mut rand::thread_rng()) {
            Some(next) => next.clone(),
            None => state.clone(),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
