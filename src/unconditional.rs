//! Unconditional-status driver (spec §4.3).
//!
//! Invokes the external `unconditional_life` oracle once per color and maps
//! the resulting per-point flags onto worm records. White runs first, Black
//! second, so tied points end up with Black's classification — "BLACK runs
//! last and overwrites for tied points".

use crate::board::{Board, Color};
use crate::constants::{BOARDSIZE, N};
use crate::reader::{LifeFlag, LifeSolver};
use crate::worm::{UnconditionalStatus, WormTable};

pub fn compute_unconditional_status(board: &Board, worms: &mut WormTable, solver: &dyn LifeSolver) {
    for &color in &[Color::White, Color::Black] {
        let flags = solver.unconditional_life(board, color);
        for row in 0..N {
            for col in 0..N {
                let pt = Board::point_of(row, col);
                if matches!(flags[pt], LifeFlag::None) {
                    continue;
                }
                let cell_color = board.get(pt).color().expect("on-board point");
                let origin = worms.get(pt).origin;
                if cell_color == color {
                    let record = worms.get_mut(origin);
                    record.unconditional_status = UnconditionalStatus::Alive;
                    if matches!(flags[pt], LifeFlag::Strong) {
                        record.invincible = true;
                    }
                } else if cell_color == Color::Empty {
                    let status = if color == Color::White {
                        UnconditionalStatus::WhiteBorder
                    } else {
                        UnconditionalStatus::BlackBorder
                    };
                    worms.get_mut(origin).unconditional_status = status;
                } else {
                    worms.get_mut(origin).unconditional_status = UnconditionalStatus::Dead;
                }
            }
        }
    }

    propagate_all(board, worms);
}

/// Re-propagate every worm's origin record to its members, used after any
/// stage that may have written directly to an origin's slot.
pub fn propagate_all(board: &Board, worms: &mut WormTable) {
    let mut visited = vec![false; BOARDSIZE];
    for row in 0..N {
        for col in 0..N {
            let pt = Board::point_of(row, col);
            if visited[pt] {
                continue;
            }
            let members = board.findstones(pt);
            for &m in &members {
                visited[m] = true;
            }
            let origin = *members.iter().min().expect("component is non-empty");
            worms.propagate(origin, &members);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::NullLifeSolver;
    use crate::worm_builder::build_worms;

    #[test]
    fn null_solver_leaves_status_unknown() {
        let mut board = Board::new();
        let pt = Board::point_of(4, 4);
        board.place_stone(pt, Color::Black);
        let mut worms = build_worms(&board);
        compute_unconditional_status(&board, &mut worms, &NullLifeSolver);
        assert_eq!(worms.get(pt).unconditional_status, UnconditionalStatus::Unknown);
    }
}
