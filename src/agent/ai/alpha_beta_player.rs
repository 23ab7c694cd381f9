use crate::agent::deadline::Deadline;
use crate::agent::player::Player;
use crate::game_repr::GameState;
use super::search::{choose_best_move, SearchConfig};

/// Player backed by the iterative-deepening alpha-beta search.
///
/// A thin wrapper: all move selection lives in the search module, the
/// player just carries a configuration and a display name and logs what
/// each search accomplished.
pub struct AlphaBetaPlayer {
    config: SearchConfig,
    name: String,
}

impl AlphaBetaPlayer {
    pub fn new(config: SearchConfig, name: String) -> Self {
        Self { config, name }
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self::new(config, "AlphaBeta".to_string())
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Default for AlphaBetaPlayer {
    fn default() -> Self {
        Self::with_config(SearchConfig::default())
    }
}

impl Player for AlphaBetaPlayer {
    fn play(&mut self, state: &GameState, deadline: &Deadline) -> GameState {
        let result = choose_best_move(state, deadline, &self.config);

        log::info!(
            "[{}] depth {}, score {}, {} nodes in {} ms",
            self.name,
            result.depth_reached,
            result.score,
            result.nodes_searched,
            result.time_ms
        );

        result.state
    }

    fn name(&self) -> &str {
        &self.name
    }
}
