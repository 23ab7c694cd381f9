// Candidate ordering for efficient pruning
//
// Before each deepening pass the root candidates are sorted by the score
// the previous pass assigned them, so the most promising lines are searched
// first and alpha-beta cuts off the rest as early as possible.

use crate::game_repr::{Color, GameState};

/// One legal root move: the state it leads to plus the score the most
/// recent search pass assigned it. Lives for a single driver invocation;
/// the score is overwritten at every depth.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub state: GameState,
    pub score: i32,
}

impl Candidate {
    pub fn new(state: GameState) -> Self {
        Self { state, score: 0 }
    }
}

/// Sort candidates in place so the side to move sees its best-looking
/// option first: descending scores for White (the maximizer), ascending
/// for Red. The sort is stable, so equal scores keep their scan order.
pub fn order_candidates(candidates: &mut [Candidate], player: Color) {
    match player {
        Color::White => candidates.sort_by(|a, b| b.score.cmp(&a.score)),
        Color::Red => candidates.sort_by(|a, b| a.score.cmp(&b.score)),
    }
}
