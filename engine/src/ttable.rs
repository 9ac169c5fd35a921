use chess::moves::Move;

use crate::score::Score;

const BYTES_PER_MB: usize = 1024 * 1024;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum EntryFlag {
    Exact,
    LowerBound,
    UpperBound,
}

/// A transposition table entry. `score` is stored relative to the node it was
/// computed at; callers are responsible for re-basing mate scores via
/// [`Score::to_tt`]/[`Score::from_tt`] before storing/after reading.
#[derive(Clone, Copy)]
pub struct TranspositionTableEntry {
    pub zobrist: u64,
    pub score: Score,
    pub board_move: Move,
    pub depth: u8,
    pub flag: EntryFlag,
}

impl TranspositionTableEntry {
    pub fn new(
        zobrist: u64,
        depth: u8,
        score: Score,
        flag: EntryFlag,
        mv: Move,
    ) -> TranspositionTableEntry {
        TranspositionTableEntry {
            zobrist,
            depth,
            score,
            flag,
            board_move: mv,
        }
    }
}

/// A transposition table keyed by Zobrist hash, using an always-replace
/// policy. Size is chosen in MB rather than entry count so it can be wired
/// up to a UCI `Hash` option directly.
pub struct TranspositionTable {
    table: Vec<Option<TranspositionTableEntry>>,
    pub collisions: usize,
    pub accesses: usize,
    pub hits: usize,
}

pub const MAX_TABLE_SIZE_MB: usize = 1024;
pub const MIN_TABLE_SIZE_MB: usize = 1;
const DEFAULT_TABLE_SIZE_MB: usize = 16;

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::from_size_in_mb(DEFAULT_TABLE_SIZE_MB)
    }
}

/// Given `word`, produce an integer in the range `[0, p)` without division.
/// See <https://github.com/ozgrakkurt/fastrange-rs/blob/master/src/lib.rs>.
const fn fast_range_64(word: u64, p: u64) -> u64 {
    ((word as u128 * p as u128) >> 64) as u64
}

impl TranspositionTable {
    pub fn from_capacity(capacity: usize) -> Self {
        Self {
            table: vec![None; capacity.max(1)],
            collisions: 0,
            accesses: 0,
            hits: 0,
        }
    }

    pub fn from_size_in_mb(mb: usize) -> Self {
        let capacity = mb * BYTES_PER_MB / std::mem::size_of::<TranspositionTableEntry>();
        Self::from_capacity(capacity)
    }

    fn get_index(&self, zobrist: u64) -> usize {
        fast_range_64(zobrist, self.table.len() as u64) as usize
    }

    pub fn get_entry(&mut self, zobrist: u64) -> Option<TranspositionTableEntry> {
        self.accesses += 1;
        let index = self.get_index(zobrist);
        let entry = self.table[index];
        match entry {
            Some(e) if e.zobrist == zobrist => {
                self.hits += 1;
                Some(e)
            }
            Some(_) => {
                self.collisions += 1;
                None
            }
            None => None,
        }
    }

    pub fn store_entry(&mut self, entry: TranspositionTableEntry) {
        let index = self.get_index(entry.zobrist);
        self.table[index] = Some(entry);
    }

    pub fn clear(&mut self) {
        self.table.iter_mut().for_each(|element| {
            *element = None;
        });

        self.collisions = 0;
        self.accesses = 0;
        self.hits = 0;
    }

    pub fn fullness(&self) -> f64 {
        (self.table.iter().filter(|entry| entry.is_some()).count() as f64 / self.table.len() as f64)
            * 100_f64
    }

    pub fn size(&self) -> usize {
        self.table.len()
    }
}
