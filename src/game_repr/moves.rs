use smallvec::SmallVec;
use std::fmt;

/// A checkers move: the sequence of cells visited plus the pieces it removes.
///
/// A simple diagonal step has a two-entry path and no captures. A jump
/// sequence records every landing cell in order, and the cell of each
/// captured piece. Cells are playable-square indices in 0..32.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// Cells visited, starting cell first.
    pub path: SmallVec<[u8; 8]>,
    /// Cells of captured pieces, in jump order. Empty for simple moves.
    pub captured: SmallVec<[u8; 8]>,
}

impl Move {
    pub fn step(from: u8, to: u8) -> Self {
        Self {
            path: SmallVec::from_slice(&[from, to]),
            captured: SmallVec::new(),
        }
    }

    pub fn from(&self) -> usize {
        self.path[0] as usize
    }

    pub fn to(&self) -> usize {
        self.path[self.path.len() - 1] as usize
    }

    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

impl fmt::Display for Move {
    /// Standard checkers notation: cells are numbered 1..=32, simple moves
    /// joined with '-' and jumps with 'x' ("11-15", "22x15x8").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        for (i, cell) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", sep)?;
            }
            write!(f, "{}", cell + 1)?;
        }
        Ok(())
    }
}
