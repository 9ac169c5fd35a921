use chess::moves::Move;

use crate::defs::MAX_DEPTH;

/// Up to two quiet moves per ply that caused a beta cutoff. Used to order
/// quiet moves ahead of others that have not been shown to be strong.
pub struct KillerMovesTable {
    table: [[Option<Move>; 2]; MAX_DEPTH as usize],
}

impl Default for KillerMovesTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KillerMovesTable {
    pub fn new() -> Self {
        Self {
            table: [[None; 2]; MAX_DEPTH as usize],
        }
    }

    /// Returns the killer moves recorded for `ply`, most recent first.
    pub fn get(&self, ply: u8) -> [Option<Move>; 2] {
        assert!(ply < MAX_DEPTH, "ply is out of bounds");
        self.table[ply as usize]
    }

    pub fn is_killer(&self, ply: u8, mv: Move) -> bool {
        assert!(ply < MAX_DEPTH, "ply is out of bounds");
        self.table[ply as usize].iter().any(|k| *k == Some(mv))
    }

    /// Records `mv` as a killer at `ply`, pushing out the older of the two
    /// existing slots. A move already present is not duplicated.
    pub fn update(&mut self, ply: u8, mv: Move) {
        assert!(ply < MAX_DEPTH, "ply is out of bounds");
        let slots = &mut self.table[ply as usize];
        if slots[0] == Some(mv) {
            return;
        }
        slots[1] = slots[0];
        slots[0] = Some(mv);
    }

    pub fn clear(&mut self) {
        for slots in self.table.iter_mut() {
            *slots = [None, None];
        }
    }
}
