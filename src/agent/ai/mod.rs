// AI Agent - iterative deepening minimax with alpha-beta pruning
//
// Move selection for the checkers agent. The driver deepens the search one
// ply at a time inside a wall-clock budget, the recursive core prunes with
// alpha-beta bounds, candidates are re-ordered between passes by their
// previous scores, and a material evaluator grounds whatever the horizon
// cuts off.
//
// Key properties:
// - Pruning never changes a computed value, only the work done
// - A pass interrupted by the deadline is discarded, never half-trusted
// - Nothing survives a top-level call: the optional score cache is scoped
//   to one search and dropped with it

mod alpha_beta;
mod alpha_beta_player;
mod evaluation;
mod move_ordering;
mod search;
mod transposition_table;

pub use alpha_beta::{minimax, SearchContext, TIME_EPSILON, WIN_SCORE};
pub use alpha_beta_player::AlphaBetaPlayer;
pub use evaluation::{evaluate, KING_VALUE, MAN_VALUE};
pub use move_ordering::{order_candidates, Candidate};
pub use search::{choose_best_move, SearchConfig, SearchResult, TieBreak, MAX_SEARCH_DEPTH};
pub use transposition_table::TranspositionTable;
