// Iterative Deepening Search Driver
//
// Repeatedly scores every root candidate at increasing depth until the
// move budget is nearly spent or the depth cap is reached. Each pass
// reuses the previous pass's scores to order the candidates, which is what
// makes the alpha-beta window cut effectively. The answer returned is
// always the one from the deepest pass that ran to completion.

use crate::agent::deadline::Deadline;
use crate::game_repr::{Color, GameState};
use super::alpha_beta::{minimax, SearchContext, TIME_EPSILON, WIN_SCORE};
use super::move_ordering::{order_candidates, Candidate};
use rand::Rng;
use std::time::Instant;

/// Hard cap on the deepening loop.
pub const MAX_SEARCH_DEPTH: u8 = 10;

/// How the driver picks the fallback candidate it answers with if not even
/// one pass completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// A uniformly random candidate, the classical engine behavior.
    #[default]
    Random,
    /// Always the first generated candidate; keeps scenarios reproducible.
    FirstCandidate,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Depth cap for iterative deepening (clamped to `MAX_SEARCH_DEPTH`).
    pub max_depth: u8,
    /// Enable the per-call transposition table.
    pub use_table: bool,
    /// Fallback selection policy.
    pub tie_break: TieBreak,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_SEARCH_DEPTH,
            use_table: false,
            tie_break: TieBreak::default(),
        }
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Chosen successor state (the input state when no move exists).
    pub state: GameState,
    /// Score of the chosen move at the deepest completed pass.
    pub score: i32,
    /// Deepest fully completed pass; 0 when none completed.
    pub depth_reached: u8,
    /// Recursive search invocations across all passes.
    pub nodes_searched: u64,
    pub time_ms: u64,
}

/// Choose the best move in `state` for the side to move, within `deadline`.
///
/// Total: always returns a state. With zero legal moves the input comes
/// back unchanged (a "pass"; the rules layer owns what that means); with a
/// single legal move it is returned immediately without searching, even on
/// an already-expired deadline.
pub fn choose_best_move(
    state: &GameState,
    deadline: &Deadline,
    config: &SearchConfig,
) -> SearchResult {
    let start = Instant::now();
    let successors = state.successors();

    if successors.is_empty() {
        return SearchResult {
            state: state.clone(),
            score: 0,
            depth_reached: 0,
            nodes_searched: 0,
            time_ms: start.elapsed().as_millis() as u64,
        };
    }

    if let [only] = successors.as_slice() {
        return SearchResult {
            state: only.clone(),
            score: 0,
            depth_reached: 0,
            nodes_searched: 0,
            time_ms: start.elapsed().as_millis() as u64,
        };
    }

    let mut candidates: Vec<Candidate> = successors.into_iter().map(Candidate::new).collect();

    // Fallback answer in case the clock runs out before depth 1 completes.
    let fallback = match config.tie_break {
        TieBreak::Random => rand::thread_rng().gen_range(0..candidates.len()),
        TieBreak::FirstCandidate => 0,
    };
    let mut chosen = candidates[fallback].state.clone();
    let mut best_score = 0;
    let mut depth_reached = 0;

    let mut ctx = if config.use_table {
        SearchContext::with_table(deadline)
    } else {
        SearchContext::new(deadline)
    };

    let max_depth = config.max_depth.min(MAX_SEARCH_DEPTH);
    let mut depth = 1;
    while deadline.seconds_remaining() > TIME_EPSILON && depth < max_depth {
        let best_index = search_candidates(&mut candidates, state.next_player(), depth, &mut ctx);

        if ctx.timed_out {
            // The pass was cut short: its comparisons mixed real scores
            // with neutral stand-ins, so the previous answer stands.
            break;
        }

        chosen = candidates[best_index].state.clone();
        best_score = candidates[best_index].score;
        depth_reached = depth;

        log::debug!(
            "depth {}: score {}, {} nodes, {} ms",
            depth,
            best_score,
            ctx.nodes_searched,
            start.elapsed().as_millis()
        );

        depth += 1;
    }

    SearchResult {
        state: chosen,
        score: best_score,
        depth_reached,
        nodes_searched: ctx.nodes_searched,
        time_ms: start.elapsed().as_millis() as u64,
    }
}

/// One top-level scoring pass at a fixed depth.
///
/// Orders the candidates by their previous scores, then scans them with a
/// fresh [alpha, beta] window, scoring each via `minimax` with the
/// opponent to move. Returns the index of the best candidate for `player`;
/// ties keep the first-encountered one in post-sort scan order.
fn search_candidates(
    candidates: &mut [Candidate],
    player: Color,
    depth: u8,
    ctx: &mut SearchContext,
) -> usize {
    order_candidates(candidates, player);

    let mut alpha = -WIN_SCORE;
    let mut beta = WIN_SCORE;
    let mut best_index = 0;

    match player {
        Color::White => {
            let mut max = -WIN_SCORE;
            for i in 0..candidates.len() {
                let points = minimax(&candidates[i].state, depth, alpha, beta, Color::Red, ctx);
                candidates[i].score = points;
                if points > max {
                    max = points;
                    best_index = i;
                }
                alpha = alpha.max(points);
                if beta <= alpha {
                    break;
                }
            }
        }
        Color::Red => {
            let mut min = WIN_SCORE;
            for i in 0..candidates.len() {
                let points = minimax(&candidates[i].state, depth, alpha, beta, Color::White, ctx);
                candidates[i].score = points;
                if points < min {
                    min = points;
                    best_index = i;
                }
                beta = beta.min(points);
                if beta <= alpha {
                    break;
                }
            }
        }
    }

    best_index
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ample_deadline() -> Deadline {
        Deadline::from_now(Duration::from_secs(60))
    }

    fn deterministic() -> SearchConfig {
        SearchConfig {
            tie_break: TieBreak::FirstCandidate,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn test_no_moves_returns_input_unchanged() {
        // White to move with no pieces.
        let state = GameState::from_board(
            "....\
             ..r.\
             ....\
             ....\
             ....\
             ....\
             ....\
             ....",
            Color::White,
        )
        .unwrap();

        for deadline in [Deadline::from_now(Duration::ZERO), ample_deadline()] {
            let result = choose_best_move(&state, &deadline, &deterministic());
            assert_eq!(result.state, state);
            assert_eq!(result.nodes_searched, 0);
        }
    }

    #[test]
    fn test_single_move_skips_search() {
        // One white man with exactly one legal step (its other diagonal
        // leaves the board).
        let state = GameState::from_board(
            "....\
             ....\
             ....\
             ....\
             ....\
             ....\
             ....\
             w...",
            Color::White,
        )
        .unwrap();
        let successors = state.successors();
        assert_eq!(successors.len(), 1);

        // Even an expired deadline must not matter.
        let result = choose_best_move(&state, &Deadline::from_now(Duration::ZERO), &deterministic());
        assert_eq!(result.state, successors[0]);
        assert_eq!(result.nodes_searched, 0);
        assert_eq!(result.depth_reached, 0);
    }

    #[test]
    fn test_expired_deadline_returns_fallback_candidate() {
        let state = GameState::new();
        let result = choose_best_move(&state, &Deadline::from_now(Duration::ZERO), &deterministic());

        // No pass completed: the first candidate comes back unscored.
        assert_eq!(result.depth_reached, 0);
        assert_eq!(result.state, state.successors()[0]);
    }

    #[test]
    fn test_finds_winning_capture() {
        // White's man on 21 wins with the forced double jump 21x14x5; the
        // man on 13 only has the lesser 13x6.
        let state = GameState::from_board(
            "....\
             ....\
             .r..\
             .w..\
             .r..\
             .w..\
             ....\
             ....",
            Color::White,
        )
        .unwrap();
        let winning = state
            .successors()
            .into_iter()
            .find(|s| s.is_white_win())
            .unwrap();

        let result = choose_best_move(&state, &ample_deadline(), &deterministic());
        assert_eq!(result.state, winning);
        assert_eq!(result.score, WIN_SCORE);
        assert!(result.depth_reached >= 1);
    }

    #[test]
    fn test_table_agrees_with_plain_search() {
        let state = GameState::new();
        let plain = choose_best_move(
            &state,
            &ample_deadline(),
            &SearchConfig {
                max_depth: 5,
                ..deterministic()
            },
        );
        let cached = choose_best_move(
            &state,
            &ample_deadline(),
            &SearchConfig {
                use_table: true,
                max_depth: 5,
                tie_break: TieBreak::FirstCandidate,
            },
        );

        // Both must return legal successors of the same position.
        let successors = state.successors();
        assert!(successors.contains(&plain.state));
        assert!(successors.contains(&cached.state));
    }

    #[test]
    fn test_depth_cap_bounds_the_loop() {
        let state = GameState::new();
        let result = choose_best_move(
            &state,
            &ample_deadline(),
            &SearchConfig {
                max_depth: 3,
                ..deterministic()
            },
        );
        // depth < max_depth keeps the deepest pass at cap - 1.
        assert_eq!(result.depth_reached, 2);
    }

    #[test]
    fn test_scores_are_written_back_to_candidates() {
        let deadline = ample_deadline();
        let state = GameState::new();
        let mut candidates: Vec<Candidate> =
            state.successors().into_iter().map(Candidate::new).collect();
        let mut ctx = SearchContext::new(&deadline);

        search_candidates(&mut candidates, Color::White, 2, &mut ctx);

        // At least the best candidate carries a real score; the opening
        // position is balanced so everything stays near zero.
        assert!(candidates.iter().all(|c| c.score.abs() < WIN_SCORE));
        assert!(ctx.nodes_searched > 0);
    }
}
