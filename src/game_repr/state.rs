use super::*;
use smallvec::SmallVec;
use std::error::Error;
use std::fmt;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

/// Number of playable (dark) cells on the board.
pub const CELL_COUNT: usize = 32;

/// Quiet king moves allowed before the game is declared drawn. The countdown
/// resets on every capture and every man move.
pub const DRAW_MOVE_LIMIT: u8 = 50;

/// Row of a playable cell, 0 (red back row) to 7 (white back row).
#[inline]
pub(crate) fn row(index: usize) -> usize {
    index / 4
}

/// Column of a playable cell on the full 8x8 board. Even rows hold their
/// dark squares on odd columns, odd rows on even columns.
#[inline]
pub(crate) fn col(index: usize) -> usize {
    2 * (index % 4) + (1 - row(index) % 2)
}

/// Diagonal neighbor of a playable cell, or None when it leaves the board.
/// `drow`/`dcol` are each -1 or +1.
pub(crate) fn diagonal(index: usize, drow: i32, dcol: i32) -> Option<usize> {
    let r = row(index) as i32 + drow;
    let c = col(index) as i32 + dcol;
    if (0..8).contains(&r) && (0..8).contains(&c) {
        Some(r as usize * 4 + c as usize / 2)
    } else {
        None
    }
}

/// Row on which a man of the given color is crowned.
#[inline]
fn crowning_row(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Red => 7,
    }
}

/// Diagonal directions a piece may move and capture in. Men only move
/// toward the opponent's back row; kings move in all four directions.
fn move_directions(piece: Piece) -> &'static [(i32, i32)] {
    const ALL: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
    const UP: [(i32, i32); 2] = [(-1, -1), (-1, 1)];
    const DOWN: [(i32, i32); 2] = [(1, -1), (1, 1)];

    match (piece.piece_type, piece.color) {
        (Type::King, _) => &ALL,
        (Type::Man, Color::White) => &UP,
        (Type::Man, Color::Red) => &DOWN,
        (Type::None, _) => &[],
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    /// Mailbox of the 32 playable cells. `Type::None` marks an empty cell.
    pub cells: [Piece; CELL_COUNT],
    /// Side that makes the next move.
    pub next_player: Color,
    /// Draw countdown, see `DRAW_MOVE_LIMIT`.
    pub moves_until_draw: u8,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Starting position: twelve red men on rows 0-2, twelve white men on
    /// rows 5-7, white to move.
    pub fn new() -> Self {
        let mut cells = [Piece::none(); CELL_COUNT];
        for cell in &mut cells[0..12] {
            *cell = Piece::man(Color::Red);
        }
        for cell in &mut cells[20..32] {
            *cell = Piece::man(Color::White);
        }
        Self {
            cells,
            next_player: Color::White,
            moves_until_draw: DRAW_MOVE_LIMIT,
        }
    }

    /// Parse a 32-character board description (cell 0 first, whitespace
    /// ignored) using the `Piece::from_char` encoding. Intended for tests
    /// and diagnostics; the draw countdown starts fresh.
    pub fn from_board(board: &str, next_player: Color) -> Result<Self, ParseBoardError> {
        let mut cells = [Piece::none(); CELL_COUNT];
        let mut count = 0;

        for c in board.chars().filter(|c| !c.is_whitespace()) {
            if count == CELL_COUNT {
                count += 1;
                break;
            }
            cells[count] = Piece::from_char(c).ok_or(ParseBoardError::UnknownCell(c))?;
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(ParseBoardError::WrongLength(count));
        }

        Ok(Self {
            cells,
            next_player,
            moves_until_draw: DRAW_MOVE_LIMIT,
        })
    }

    #[inline]
    pub fn cell_at(&self, index: usize) -> Piece {
        self.cells[index]
    }

    #[inline]
    pub fn next_player(&self) -> Color {
        self.next_player
    }

    /// All legal moves for the side to move. Captures are mandatory: when
    /// any jump exists, only jump sequences are returned, each extended
    /// until no further jump is possible (or the man is crowned).
    pub fn possible_moves(&self) -> Vec<Move> {
        let mut jumps = Vec::new();
        for index in 0..CELL_COUNT {
            let piece = self.cells[index];
            if piece.is(self.next_player) {
                self.collect_jumps(index, piece, &mut jumps);
            }
        }
        if !jumps.is_empty() {
            return jumps;
        }

        let mut steps = Vec::new();
        for index in 0..CELL_COUNT {
            let piece = self.cells[index];
            if piece.is(self.next_player) {
                for &(drow, dcol) in move_directions(piece) {
                    if let Some(to) = diagonal(index, drow, dcol) {
                        if self.cells[to].is_none() {
                            steps.push(Move::step(index as u8, to as u8));
                        }
                    }
                }
            }
        }
        steps
    }

    fn collect_jumps(&self, from: usize, piece: Piece, out: &mut Vec<Move>) {
        // Scratch board: the jumper is lifted off so a king may circle back
        // over its starting cell, and captured pieces are removed as the
        // sequence grows so none is jumped twice.
        let mut cells = self.cells;
        cells[from] = Piece::none();
        let mut path = SmallVec::from_slice(&[from as u8]);
        let mut captured = SmallVec::new();
        extend_jump(&mut cells, piece, from, &mut path, &mut captured, out);
    }

    /// All successor states of this position, one per legal move. Order is
    /// not significant; the search re-sorts candidates itself.
    pub fn successors(&self) -> Vec<GameState> {
        self.possible_moves()
            .iter()
            .map(|mv| self.apply_move(mv))
            .collect()
    }

    /// Resulting state after a legal move, leaving `self` untouched.
    pub fn apply_move(&self, mv: &Move) -> GameState {
        let mut cells = self.cells;
        let moved = cells[mv.from()];
        cells[mv.from()] = Piece::none();
        for &capture in &mv.captured {
            cells[capture as usize] = Piece::none();
        }

        let crowned = moved.piece_type == Type::Man && row(mv.to()) == crowning_row(moved.color);
        cells[mv.to()] = if crowned { Piece::king(moved.color) } else { moved };

        let moves_until_draw = if mv.is_capture() || moved.piece_type == Type::Man {
            DRAW_MOVE_LIMIT
        } else {
            self.moves_until_draw.saturating_sub(1)
        };

        GameState {
            cells,
            next_player: self.next_player.opposite(),
            moves_until_draw,
        }
    }

    /// End of game: the side to move cannot move, or the draw countdown ran
    /// out. The `is_*` predicates below are mutually exclusive while this
    /// holds; an immobile side loses even if the countdown is also spent.
    pub fn is_end_of_game(&self) -> bool {
        self.moves_until_draw == 0 || self.possible_moves().is_empty()
    }

    pub fn is_white_win(&self) -> bool {
        self.next_player == Color::Red && self.possible_moves().is_empty()
    }

    pub fn is_red_win(&self) -> bool {
        self.next_player == Color::White && self.possible_moves().is_empty()
    }

    pub fn is_draw(&self) -> bool {
        self.moves_until_draw == 0 && !self.possible_moves().is_empty()
    }
}

fn extend_jump(
    cells: &mut [Piece; CELL_COUNT],
    piece: Piece,
    at: usize,
    path: &mut SmallVec<[u8; 8]>,
    captured: &mut SmallVec<[u8; 8]>,
    out: &mut Vec<Move>,
) {
    let mut extended = false;
    for &(drow, dcol) in move_directions(piece) {
        let Some(over) = diagonal(at, drow, dcol) else {
            continue;
        };
        if !cells[over].is(piece.color.opposite()) {
            continue;
        }
        let Some(landing) = diagonal(over, drow, dcol) else {
            continue;
        };
        if !cells[landing].is_none() {
            continue;
        }

        extended = true;
        let jumped = cells[over];
        cells[over] = Piece::none();
        path.push(landing as u8);
        captured.push(over as u8);

        if piece.piece_type == Type::Man && row(landing) == crowning_row(piece.color) {
            // Crowning ends the jump sequence on the spot.
            out.push(Move {
                path: path.clone(),
                captured: captured.clone(),
            });
        } else {
            extend_jump(cells, piece, landing, path, captured, out);
        }

        captured.pop();
        path.pop();
        cells[over] = jumped;
    }

    if !extended && path.len() > 1 {
        out.push(Move {
            path: path.clone(),
            captured: captured.clone(),
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseBoardError {
    /// Board description did not contain exactly 32 cells.
    WrongLength(usize),
    /// Character without a piece encoding.
    UnknownCell(char),
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(n) if *n > CELL_COUNT => {
                write!(f, "board description has more than {} cells", CELL_COUNT)
            }
            Self::WrongLength(n) => {
                write!(f, "board description has {} cells, expected {}", n, CELL_COUNT)
            }
            Self::UnknownCell(c) => write!(f, "unknown cell character '{}'", c),
        }
    }
}

impl Error for ParseBoardError {}

impl fmt::Display for GameState {
    /// ASCII board, red side (row 0) on top. Light squares print as spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..8 {
            for c in 0..8 {
                if (r + c) % 2 == 1 {
                    write!(f, "{} ", self.cells[r * 4 + c / 2].to_char())?;
                } else {
                    write!(f, "  ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board: String = self.cells.iter().map(|p| p.to_char()).collect();
        write!(
            f,
            "GameState({:?} to move, draw in {}, \"{}\")",
            self.next_player, self.moves_until_draw, board
        )
    }
}
