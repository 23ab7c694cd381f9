// Static position evaluation
// Returns a material score: positive favors White, negative favors Red.

use crate::game_repr::{Color, GameState, Type};

// Material values. A king is worth two men.
pub const MAN_VALUE: i32 = 1;
pub const KING_VALUE: i32 = 2;

/// Evaluate a (non-terminal) position by material count.
///
/// This is a pure function of the board contents: the side to move and the
/// draw countdown do not influence the score. The result is bounded well
/// inside (-WIN_SCORE, WIN_SCORE): with 32 cells it can never leave
/// [-64, 64], so a heuristic value is always distinguishable from a
/// decided game.
pub fn evaluate(state: &GameState) -> i32 {
    let mut score = 0;

    for index in 0..crate::game_repr::CELL_COUNT {
        let piece = state.cell_at(index);
        let value = match piece.piece_type {
            Type::Man => MAN_VALUE,
            Type::King => KING_VALUE,
            Type::None => continue,
        };
        match piece.color {
            Color::White => score += value,
            Color::Red => score -= value,
        }
    }

    score
}
