//! A scoped speculative move: play, inspect, always undo.
//!
//! Addresses Design Notes §9's call for "a single scoped operation that
//! guarantees rollback on any exit path, including faults": every place
//! the refinement loop and tactical analyzer used to call `trymove` /
//! `popgo` in pairs now goes through [`with_move`], whose [`Drop`] impl
//! pops the move even if the closure panics.

use crate::board::{Board, Color, MoveUndo, Point};
use crate::error::SpeculativeError;

/// RAII guard for a single speculatively played move.
///
/// Dropping the guard undoes the move. `with_move` is the usual entry
/// point; construct this directly only when the move must outlive a
/// single closure call (e.g. the refinement loop, which plays one move and
/// then inspects many other worms before popping it).
pub struct SpeculativeMove<'a> {
    board: &'a mut Board,
    undo: Option<MoveUndo>,
}

impl<'a> SpeculativeMove<'a> {
    /// Play `color` at `pt`. Fails the same way `trymove` returning false
    /// does in the original engine: occupied, ko, or suicide.
    pub fn play(board: &'a mut Board, pt: Point, color: Color) -> Result<Self, SpeculativeError> {
        let undo = board.try_play(pt, color)?;
        Ok(SpeculativeMove { board, undo: Some(undo) })
    }

    #[inline]
    pub fn board(&mut self) -> &mut Board {
        self.board
    }

    #[inline]
    pub fn board_ref(&self) -> &Board {
        self.board
    }
}

impl Drop for SpeculativeMove<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            self.board.undo_play(undo);
        }
    }
}

/// Play `color` at `pt`, run `f` against the resulting board, then undo the
/// move unconditionally before returning `f`'s result.
///
/// Returns `Err` without calling `f` if the move itself is illegal — the
/// same "skip this branch" behavior as a failed `trymove`.
pub fn with_move<T>(
    board: &mut Board,
    pt: Point,
    color: Color,
    f: impl FnOnce(&mut Board) -> T,
) -> Result<T, SpeculativeError> {
    let mut guard = SpeculativeMove::play(board, pt, color)?;
    Ok(f(guard.board()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn with_move_restores_board_on_success() {
        let mut board = Board::new();
        let pt = Board::point_of(4, 4);
        let before = format!("{board}");
        let result = with_move(&mut board, pt, Color::Black, |b| b.get(pt).is_stone());
        assert_eq!(result, Ok(true));
        assert_eq!(format!("{board}"), before);
    }

    #[test]
    fn with_move_rejects_occupied_point() {
        let mut board = Board::new();
        let pt = Board::point_of(4, 4);
        board.place_stone(pt, Color::Black);
        let result = with_move(&mut board, pt, Color::White, |_| ());
        assert_eq!(result, Err(SpeculativeError::Occupied));
    }

    #[test]
    fn with_move_captures_and_restores() {
        let mut board = Board::new();
        let white = Board::point_of(4, 4);
        board.place_stone(white, Color::White);
        for n in Board::neighbors4(white).iter().take(3) {
            board.place_stone(*n, Color::Black);
        }
        let last_lib = Board::neighbors4(white)[3];
        let before = format!("{board}");
        let captured = with_move(&mut board, last_lib, Color::Black, |b| b.is_empty(white)).unwrap();
        assert!(captured);
        assert_eq!(format!("{board}"), before);
    }
}
