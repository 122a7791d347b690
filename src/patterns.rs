//! Pattern-matching collaborator interface.
//!
//! The worm analyzer consults two pattern databases (`attpat_db` for attack
//! patterns anchored on an enemy stone, `defpat_db` for defense patterns
//! anchored on a friendly stone). Both go through the same
//! `global_matchpat`-shaped callback in the original engine; here they are
//! a single [`PatternSource`] trait parameterized by [`AnchorKind`], so a
//! caller can plug in GNU Go's real pattern databases or the teacher's own
//! `pat3`-style symmetry-enumerated table without the worm analyzer caring
//! which.

use crate::board::{Board, Point};

/// Which anchor color a pattern match is anchored on, mirroring
/// `ANCHOR_OTHER` (enemy anchor, used for attack patterns) and
/// `ANCHOR_COLOR` (own-color anchor, used for defense patterns).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    /// Pattern anchored on an enemy stone (attack patterns).
    Enemy,
    /// Pattern anchored on a friendly stone (defense patterns).
    Own,
}

/// A single pattern match, carrying just what the tactical analyzer needs:
/// the anchor point and the move the pattern proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    /// The stone the pattern is anchored on.
    pub anchor: Point,
    /// The move the pattern proposes playing.
    pub move_point: Point,
}

/// External pattern-matching collaborator (spec §6, `global_matchpat`).
///
/// Implementations enumerate the symmetries of their pattern set against
/// the board the same way the teacher's `patterns::PAT3SET` does for 3x3
/// patterns, but the worm analyzer only ever needs the resulting list of
/// matches, not the matching machinery itself.
pub trait PatternSource {
    /// All matches of `anchor_kind` patterns found on `board`.
    fn find_matches(&self, board: &Board, anchor_kind: AnchorKind) -> Vec<PatternMatch>;
}

/// A `PatternSource` that never matches anything.
///
/// For callers who don't need pattern-based refinement (phases (b) and (d)
/// of the tactical analyzer become no-ops) and for test scenarios where
/// pattern noise would obscure what's being tested.
pub struct NullPatternSource;

impl PatternSource for NullPatternSource {
    fn find_matches(&self, _board: &Board, _anchor_kind: AnchorKind) -> Vec<PatternMatch> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn null_pattern_source_matches_nothing() {
        let board = Board::new();
        let src = NullPatternSource;
        assert!(src.find_matches(&board, AnchorKind::Enemy).is_empty());
        assert!(src.find_matches(&board, AnchorKind::Own).is_empty());
    }
}
