use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, AddAssign, Neg},
};

use uci_parser::UciScore;

/// Centipawn scores are kept as `i32`; `i64` in the teacher engine was overkill
/// for values that never exceed a few times [`Score::MATE`].
pub type ScoreType = i32;

/// Represents a score in centipawns, from the perspective of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(pub ScoreType);

impl Score {
    pub const DRAW: Score = Score(0);
    /// Base mate score. An engine-found mate is this value minus the ply at
    /// which the mating move is delivered, so that shorter mates score higher.
    pub const MATE: Score = Score(30_000);
    pub const INF: Score = Score(i16::MAX as ScoreType);

    pub fn new(score: ScoreType) -> Score {
        Score(score)
    }

    /// Builds a mate score for a mate found `ply` half-moves from the root.
    pub fn mate_in(ply: u8) -> Score {
        Score(Self::MATE.0 - ply as ScoreType)
    }

    /// Builds the losing counterpart of [`Self::mate_in`].
    pub fn mated_in(ply: u8) -> Score {
        Score(-Self::MATE.0 + ply as ScoreType)
    }

    /// Returns `true` if this score represents a forced mate (for either side).
    pub fn is_mate(&self) -> bool {
        self.0.abs() >= Self::MATE.0 - MAX_MATE_PLY
    }

    /// Adjusts a score read back from the transposition table so that mate
    /// distances are measured from the current node rather than from the node
    /// that originally stored the entry.
    pub fn from_tt(self, ply: u8) -> Score {
        if self.0 >= Self::MATE.0 - MAX_MATE_PLY {
            Score(self.0 - ply as ScoreType)
        } else if self.0 <= -Self::MATE.0 + MAX_MATE_PLY {
            Score(self.0 + ply as ScoreType)
        } else {
            self
        }
    }

    /// Inverse of [`Self::from_tt`]: re-bases a mate score to be relative to
    /// the root before it is stored in the transposition table.
    pub fn to_tt(self, ply: u8) -> Score {
        if self.0 >= Self::MATE.0 - MAX_MATE_PLY {
            Score(self.0 + ply as ScoreType)
        } else if self.0 <= -Self::MATE.0 + MAX_MATE_PLY {
            Score(self.0 - ply as ScoreType)
        } else {
            self
        }
    }
}

/// Any score within this many ply of [`Score::MATE`] is considered a mate score.
const MAX_MATE_PLY: ScoreType = MAX_DEPTH as ScoreType;

use crate::defs::MAX_DEPTH;

impl From<Score> for UciScore {
    fn from(value: Score) -> Self {
        if value.is_mate() {
            let ply_to_mate = Score::MATE.0 - value.0.abs();
            let moves_to_mate = (ply_to_mate + 1) / 2;
            UciScore::mate(if value.0 < 0 {
                -moves_to_mate
            } else {
                moves_to_mate
            })
        } else {
            UciScore::cp(value.0)
        }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.is_mate() {
            let ply_to_mate = Score::MATE.0 - self.0.abs();
            let moves_to_mate = (ply_to_mate + 1) / 2;
            if self.0 < 0 {
                write!(f, "mate -{moves_to_mate}")
            } else {
                write!(f, "mate {moves_to_mate}")
            }
        } else {
            write!(f, "cp {}", self.0)
        }
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        Score(-self.0)
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, other: Score) {
        self.0 += other.0;
    }
}

impl AddAssign<ScoreType> for Score {
    fn add_assign(&mut self, other: ScoreType) {
        self.0 += other;
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, other: Score) -> Score {
        Score(self.0 + other.0)
    }
}

impl Add<ScoreType> for Score {
    type Output = Score;

    fn add(self, other: ScoreType) -> Score {
        Score(self.0 + other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mate_scores_shorter_mate_wins() {
        let mate_in_1 = Score::mate_in(1);
        let mate_in_3 = Score::mate_in(3);
        assert!(mate_in_1 > mate_in_3);
        assert!(mate_in_1.is_mate());
        assert!(mate_in_3.is_mate());
    }

    #[test]
    fn non_mate_score_is_not_mate() {
        let score = Score::new(350);
        assert!(!score.is_mate());
    }

    #[test]
    fn tt_round_trip_preserves_relative_distance() {
        let found_at_ply_5 = Score::mate_in(2);
        let stored = found_at_ply_5.to_tt(5);
        let retrieved = stored.from_tt(5);
        assert_eq!(retrieved, found_at_ply_5);
    }

    #[test]
    fn display_formats_centipawns() {
        assert_eq!(Score::new(123).to_string(), "cp 123");
    }
}
