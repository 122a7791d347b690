//! External collaborator traits (spec §6) and a reference implementation.
//!
//! The worm analyzer is written entirely against these traits; it never
//! assumes a particular reading engine. `NaiveReader` is a real, if weak,
//! `TacticalReader` grounded in the teacher's `fix_atari`/`read_ladder_attack`
//! — atari and simple ladders only, no deep search — good enough to make
//! the pipeline's plumbing testable without pulling in a full game-tree
//! search engine.

use crate::board::{Board, Color, Point};
use crate::constants::{BOARDSIZE, NO_POINT};
use crate::worm::Code;

/// Strength of an `unconditional_life` flag, mirroring the source
/// convention of 0 / weak / strong per point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeFlag {
    None,
    Weak,
    Strong,
}

/// External tactical reader (spec §6): `attack`, `find_defense`,
/// `does_defend`, and the paired depth-horizon adjustments that keep a
/// reader's search budget identical whether or not a speculative move is
/// currently on the stack.
pub trait TacticalReader {
    /// Best attack on the worm at `origin`, or `(Code::None, NO_POINT)`.
    fn attack(&mut self, board: &Board, origin: Point) -> (Code, Point);
    /// Best defense for the worm at `origin`, or `(Code::None, NO_POINT)`.
    fn find_defense(&mut self, board: &Board, origin: Point) -> (Code, Point);
    /// Does playing `mv` defend the worm at `origin`?
    fn does_defend(&mut self, board: &Board, mv: Point, origin: Point) -> bool;
    /// Called once per speculative move pushed, before probing.
    fn increase_depth_values(&mut self);
    /// Called once per speculative move popped, after probing.
    fn decrease_depth_values(&mut self);
}

/// External unconditional-life oracle (spec §6, §4.3).
pub trait LifeSolver {
    /// One flag per board point for the unconditional-life status of
    /// `color`'s territory.
    fn unconditional_life(&self, board: &Board, color: Color) -> Vec<LifeFlag>;
}

/// `LifeSolver` that finds no unconditionally alive territory for anyone.
///
/// For callers who don't need phase §4.3 and for test scenarios where it
/// would only add noise.
pub struct NullLifeSolver;

impl LifeSolver for NullLifeSolver {
    fn unconditional_life(&self, _board: &Board, _color: Color) -> Vec<LifeFlag> {
        vec![LifeFlag::None; BOARDSIZE]
    }
}

/// Opaque hook for the small-semeai solver delegated out of scope (spec §2,
/// step 9). Preserves `make_worms()`'s call-order position for it between
/// the genus computer and the refinement loop without implementing semeai
/// search.
pub trait SmallSemeaiSolver {
    /// Attempt to resolve a semeai between the worms at `w1` and `w2`.
    /// Returns whether it resolved anything.
    fn resolve(&self, board: &Board, w1: Point, w2: Point) -> bool;
}

/// `SmallSemeaiSolver` that never resolves anything.
pub struct NullSmallSemeaiSolver;

impl SmallSemeaiSolver for NullSmallSemeaiSolver {
    fn resolve(&self, _board: &Board, _w1: Point, _w2: Point) -> bool {
        false
    }
}

/// A shallow but real `TacticalReader`: detects worms in atari and reads
/// out simple ladders, bounded by a depth budget adjusted in lockstep with
/// the speculative move stack.
///
/// Grounded in `position::fix_atari`/`read_ladder_attack`: both work from a
/// single-liberty string, extend it, and check whether the attacker's
/// response re-ataris it. This reader generalizes that to absolute colors
/// and a recursive bounded ladder search instead of a single extend/recheck
/// step.
pub struct NaiveReader {
    depth: i32,
}

impl NaiveReader {
    /// `base_depth` bounds how many ladder extensions are read before the
    /// reader gives up and assumes the defender escapes.
    pub fn new(base_depth: i32) -> Self {
        NaiveReader { depth: base_depth }
    }

    /// Can `defender`'s string at `origin`, currently in atari, escape
    /// within the remaining depth budget?
    fn read_ladder(&self, board: &Board, origin: Point, defender: Color, depth: i32) -> bool {
        let libs = board.findlib(origin);
        if libs.len() >= 2 {
            return true;
        }
        if libs.is_empty() {
            return false;
        }
        if depth <= 0 {
            // Search horizon exhausted: conservatively assume escape
            // rather than report a false attack.
            return true;
        }
        let lib = libs[0];
        let attacker = defender.opponent();
        let mut extended = board.clone();
        let Ok(undo_extend) = extended.try_play(lib, defender) else {
            return false;
        };
        let new_libs = extended.findlib(origin);
        let escapes = if new_libs.len() < 2 {
            false
        } else {
            new_libs.iter().all(|&cand| {
                let mut chased = extended.clone();
                match chased.try_play(cand, attacker) {
                    Err(_) => true,
                    Ok(undo_chase) => {
                        let result = self.read_ladder(&chased, origin, defender, depth - 1);
                        chased.undo_play(undo_chase);
                        result
                    }
                }
            })
        };
        extended.undo_play(undo_extend);
        escapes
    }
}

impl Default for NaiveReader {
    fn default() -> Self {
        NaiveReader::new(3)
    }
}

impl TacticalReader for NaiveReader {
    fn attack(&mut self, board: &Board, origin: Point) -> (Code, Point) {
        if !board.get(origin).is_stone() {
            return (Code::None, NO_POINT);
        }
        let libs = board.findlib(origin);
        if libs.len() != 1 {
            return (Code::None, NO_POINT);
        }
        let lib = libs[0];
        let defender = board.get(origin).stone_color().unwrap();
        if self.read_ladder(board, origin, defender, self.depth) {
            (Code::None, NO_POINT)
        } else {
            (Code::Win, lib)
        }
    }

    fn find_defense(&mut self, board: &Board, origin: Point) -> (Code, Point) {
        if !board.get(origin).is_stone() {
            return (Code::None, NO_POINT);
        }
        let libs = board.findlib(origin);
        if libs.len() != 1 {
            return (Code::None, NO_POINT);
        }
        let lib = libs[0];
        let defender = board.get(origin).stone_color().unwrap();
        if self.read_ladder(board, origin, defender, self.depth) {
            (Code::Win, lib)
        } else {
            (Code::None, NO_POINT)
        }
    }

    fn does_defend(&mut self, board: &Board, mv: Point, origin: Point) -> bool {
        let Some(defender) = board.get(origin).stone_color() else {
            return false;
        };
        let mut probe = board.clone();
        match probe.try_play(mv, defender) {
            Err(_) => false,
            Ok(undo) => {
                let defended = if probe.is_empty(origin) {
                    false
                } else {
                    probe.countlib(origin) >= 2 || self.read_ladder(&probe, origin, defender, self.depth)
                };
                probe.undo_play(undo);
                defended
            }
        }
    }

    fn increase_depth_values(&mut self) {
        self.depth += 1;
    }

    fn decrease_depth_values(&mut self) {
        self.depth -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn atari_string_is_attacked() {
        let mut board = Board::new();
        let origin = Board::point_of(4, 4);
        board.place_stone(origin, Color::White);
        for n in Board::neighbors4(origin).iter().take(3) {
            board.place_stone(*n, Color::Black);
        }
        let mut reader = NaiveReader::default();
        let (code, pt) = reader.attack(&board, origin);
        assert_eq!(code, Code::Win);
        assert_eq!(pt, Board::neighbors4(origin)[3]);
    }

    #[test]
    fn string_with_many_liberties_is_not_attacked() {
        let board = Board::new();
        let origin = Board::point_of(4, 4);
        let mut board = board;
        board.place_stone(origin, Color::Black);
        let mut reader = NaiveReader::default();
        let (code, _) = reader.attack(&board, origin);
        assert_eq!(code, Code::None);
    }

    #[test]
    fn depth_adjustments_are_paired() {
        let mut reader = NaiveReader::default();
        let base = reader.depth;
        reader.increase_depth_values();
        reader.decrease_depth_values();
        assert_eq!(reader.depth, base);
    }
}
