use crate::game_repr::{Color, GameState, Type, CELL_COUNT};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Zobrist hashing constants for checkers positions
///
/// One random 64-bit number per (rank, color, cell) combination plus a
/// side-to-move key. XOR-ing the keys of every piece on the board yields a
/// position hash that is cheap to compute and uniformly distributed.
pub struct ZobristKeys {
    /// [rank][color][cell] - 2 ranks * 2 colors * 32 cells
    pub pieces: [[[u64; CELL_COUNT]; 2]; 2],
    /// Toggled in when Red is to move.
    pub side_to_move: u64,
}

impl ZobristKeys {
    /// Generate Zobrist keys using a seeded random number generator.
    /// This ensures the keys are random but reproducible.
    fn generate() -> Self {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        // Fixed seed for reproducibility
        let mut rng = StdRng::seed_from_u64(0x9e3779b97f4a7c15);

        let mut pieces = [[[0u64; CELL_COUNT]; 2]; 2];
        for rank in &mut pieces {
            for color in rank {
                for cell in color {
                    *cell = rng.gen();
                }
            }
        }

        Self {
            pieces,
            side_to_move: rng.gen(),
        }
    }

    #[inline]
    fn rank_index(piece_type: Type) -> usize {
        match piece_type {
            Type::Man => 0,
            Type::King => 1,
            Type::None => panic!("Cannot hash Type::None"),
        }
    }

    #[inline]
    fn color_index(color: Color) -> usize {
        match color {
            Color::White => 0,
            Color::Red => 1,
        }
    }
}

/// Global Zobrist keys - initialized once using LazyLock
static ZOBRIST: LazyLock<ZobristKeys> = LazyLock::new(ZobristKeys::generate);

/// Score cache for positions already searched in the current call.
///
/// Keyed by (position hash, remaining depth): an entry is only reused at
/// the exact depth it was computed for. The table belongs to a single
/// top-level search context and is dropped with it; nothing persists
/// across `choose_best_move` calls. The draw countdown is deliberately not
/// hashed; within one search tree it only differs along quiet king lines.
///
/// Scores stored under a narrowed alpha-beta window may be bounds rather
/// than exact values, which is why the search leaves the table disabled by
/// default.
pub struct TranspositionTable {
    table: HashMap<(u64, u8), i32>,
    /// Maximum number of entries allowed
    max_size: usize,
    /// Statistics: number of successful probes
    pub hits: u64,
    /// Statistics: number of failed probes
    pub misses: u64,
}

impl TranspositionTable {
    /// Create a transposition table with the default capacity (1M entries)
    pub fn new() -> Self {
        Self::with_capacity(1_000_000)
    }

    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            table: HashMap::with_capacity(max_size.min(100_000)),
            max_size,
            hits: 0,
            misses: 0,
        }
    }

    /// Compute the Zobrist hash of a position (pieces + side to move).
    pub fn compute_hash(state: &GameState) -> u64 {
        let mut hash = 0u64;

        for cell in 0..CELL_COUNT {
            let piece = state.cell_at(cell);
            if piece.piece_type != Type::None {
                let rank_idx = ZobristKeys::rank_index(piece.piece_type);
                let color_idx = ZobristKeys::color_index(piece.color);
                hash ^= ZOBRIST.pieces[rank_idx][color_idx][cell];
            }
        }

        if state.next_player() == Color::Red {
            hash ^= ZOBRIST.side_to_move;
        }

        hash
    }

    /// Look up a score cached for this position at exactly this depth.
    pub fn probe(&mut self, hash: u64, depth: u8) -> Option<i32> {
        match self.table.get(&(hash, depth)) {
            Some(&score) => {
                self.hits += 1;
                Some(score)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Cache a computed score. When the table is full, new keys are
    /// dropped rather than evicting old ones; entries from shallower
    /// passes keep paying off through move ordering.
    pub fn store(&mut self, hash: u64, depth: u8, score: i32) {
        if self.table.len() >= self.max_size && !self.table.contains_key(&(hash, depth)) {
            return;
        }
        self.table.insert((hash, depth), score);
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Get hit rate (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}
