// Minimax search with alpha-beta pruning
//
// Checkers is a zero-sum game, so one recursive function serves both
// sides: White picks the child with the maximum score, Red the minimum,
// and the [alpha, beta] window prunes every branch that can no longer
// influence the choice at the root. Pruning never changes the computed
// value, only the number of nodes visited.
//
// The function is deliberately pure in (state, depth, bounds, side). The
// context threaded alongside carries only the deadline reference, the node
// counter, the timeout flag, and the optional per-call score cache.

use crate::agent::deadline::Deadline;
use crate::game_repr::{Color, GameState};
use super::evaluation::evaluate;
use super::transposition_table::TranspositionTable;

/// Sentinel score for a decided game. Every heuristic value is strictly
/// inside (-WIN_SCORE, WIN_SCORE), so a win is never mistaken for a merely
/// excellent position.
pub const WIN_SCORE: i32 = 10_000;

/// Remaining budget (in seconds) below which the search stops starting new
/// work and unwinds.
pub const TIME_EPSILON: f64 = 1e-4;

/// Per-call bookkeeping threaded through the recursion.
pub struct SearchContext<'a> {
    deadline: &'a Deadline,
    /// Recursive search invocations so far.
    pub nodes_searched: u64,
    /// Set as soon as any node runs out of budget. The driver discards the
    /// pass that tripped it.
    pub timed_out: bool,
    /// Optional score cache, scoped to this context.
    pub table: Option<TranspositionTable>,
}

impl<'a> SearchContext<'a> {
    pub fn new(deadline: &'a Deadline) -> Self {
        Self {
            deadline,
            nodes_searched: 0,
            timed_out: false,
            table: None,
        }
    }

    pub fn with_table(deadline: &'a Deadline) -> Self {
        Self {
            table: Some(TranspositionTable::new()),
            ..Self::new(deadline)
        }
    }
}

/// Score `state` by searching `depth` plies ahead with `player` to move.
/// Positive results favor White, negative favor Red.
pub fn minimax(
    state: &GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    player: Color,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.nodes_searched += 1;

    // Leaf rule, checked first: the depth horizon or a decided game.
    if depth == 0 || state.is_end_of_game() {
        return if state.is_white_win() {
            WIN_SCORE
        } else if state.is_red_win() {
            -WIN_SCORE
        } else if state.is_draw() {
            0
        } else {
            evaluate(state)
        };
    }

    // Budget rule, checked second, before any successor is generated.
    // The neutral score keeps the pass numerically well-formed; the flag
    // tells the driver not to trust it.
    if ctx.deadline.seconds_remaining() < TIME_EPSILON {
        ctx.timed_out = true;
        return 0;
    }

    let hash = ctx
        .table
        .is_some()
        .then(|| TranspositionTable::compute_hash(state));
    if let (Some(table), Some(hash)) = (ctx.table.as_mut(), hash) {
        if let Some(score) = table.probe(hash, depth) {
            return score;
        }
    }

    let successors = state.successors();
    let score = match player {
        Color::White => {
            let mut best = -WIN_SCORE;
            for next in &successors {
                let value = minimax(next, depth - 1, alpha, beta, Color::Red, ctx);
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
        Color::Red => {
            let mut best = WIN_SCORE;
            for next in &successors {
                let value = minimax(next, depth - 1, alpha, beta, Color::White, ctx);
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    };

    // A pass cut short by the clock mixes neutral stand-ins into its
    // scores; those must not be cached.
    if !ctx.timed_out {
        if let (Some(table), Some(hash)) = (ctx.table.as_mut(), hash) {
            table.store(hash, depth, score);
        }
    }

    score
}
