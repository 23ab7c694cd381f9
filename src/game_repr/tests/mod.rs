use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board with the given side to move
pub fn empty_state(next_player: Color) -> GameState {
    GameState {
        cells: [Piece::none(); CELL_COUNT],
        next_player,
        moves_until_draw: DRAW_MOVE_LIMIT,
    }
}

/// Helper function to place a piece
pub fn place_piece(state: &mut GameState, index: usize, piece: Piece) {
    state.cells[index] = piece;
}

/// Helper function to check if a move from `from` to `to` exists
pub fn has_move(moves: &[Move], from: usize, to: usize) -> bool {
    moves.iter().any(|m| m.from() == from && m.to() == to)
}

/// Helper function to find the move from `from` to `to`
pub fn find_move(moves: &[Move], from: usize, to: usize) -> Option<&Move> {
    moves.iter().find(|m| m.from() == from && m.to() == to)
}

// ==================== TEST MODULES ====================
