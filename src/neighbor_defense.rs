//! Neighbor-defense patch (spec §4.9).
//!
//! For adjacent opposite-color worms that are both attackable but only one
//! is defendable, try using the defendable worm's attack point as the
//! undefendable worm's defense.
//!
//! `/* FIXME: need to check ko relationship */` in the original patch is
//! preserved here rather than fixed: `does_defend` is trusted as-is, with
//! no additional ko verification layered on top (see `SPEC_FULL.md` §0 and
//! `DESIGN.md`'s Open Question decisions).

use crate::board::Board;
use crate::constants::{NO_POINT, N};
use crate::reader::TacticalReader;
use crate::unconditional::propagate_all;
use crate::worm::{Code, WormTable};

/// South-neighbor pass, then east-neighbor pass, matching the original's
/// fixed iteration order.
pub fn patch_neighbor_defense(board: &Board, worms: &mut WormTable, reader: &mut dyn TacticalReader) {
    for use_south in [true, false] {
        for row in 0..N {
            for col in 0..N {
                let pt = Board::point_of(row, col);
                if !board.get(pt).is_stone() {
                    continue;
                }
                let neighbor = if use_south {
                    Board::neighbors4(pt)[2]
                } else {
                    Board::neighbors4(pt)[1]
                };
                if !board.is_on_board(neighbor) || !board.get(neighbor).is_stone() {
                    continue;
                }
                let c1 = board.get(pt).stone_color().unwrap();
                let c2 = board.get(neighbor).stone_color().unwrap();
                if c1 == c2 {
                    continue;
                }
                let o1 = board.find_origin(pt);
                let o2 = board.find_origin(neighbor);
                if o1 == o2 {
                    continue;
                }
                try_patch(board, worms, reader, o1, o2);
                try_patch(board, worms, reader, o2, o1);
            }
        }
    }
    propagate_all(board, worms);
}

/// Try to defend the worm at `undefendable` with the attack point of
/// `attacker`.
fn try_patch(
    board: &Board,
    worms: &mut WormTable,
    reader: &mut dyn TacticalReader,
    undefendable: crate::board::Point,
    attacker: crate::board::Point,
) {
    let target = worms.get(undefendable);
    if target.attack_code == Code::None || target.defend_code != Code::None {
        return;
    }
    let other = worms.get(attacker);
    if other.attack_code == Code::None {
        return;
    }
    let candidate_move = other.attack_point;
    if candidate_move == NO_POINT {
        return;
    }
    if reader.does_defend(board, candidate_move, undefendable) {
        log::trace!(
            "patch_neighbor_defense: worm at {} borrows defense point {} from {}",
            undefendable,
            candidate_move,
            attacker
        );
        let record = worms.get_mut(undefendable);
        record.defend_code = Code::Win;
        record.defense_point = candidate_move;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use crate::reader::NaiveReader;
    use crate::worm_builder::build_worms;

    #[test]
    fn undefendable_worm_borrows_neighbors_attack_point() {
        let mut board = Board::new();
        let black = Board::point_of(4, 4);
        let white = Board::point_of(4, 5);
        board.place_stone(black, Color::Black);
        board.place_stone(white, Color::White);
        let mut worms = build_worms(&board);
        worms.get_mut(black).attack_code = Code::Win;
        worms.get_mut(white).attack_code = Code::Win;
        worms.get_mut(white).attack_point = Board::point_of(4, 3);
        let mut reader = NaiveReader::default();
        patch_neighbor_defense(&board, &mut worms, &mut reader);
        // does_defend is NaiveReader's own ladder judgment; we only assert
        // it never panics and leaves a consistent code/point pairing.
        let record = worms.get(black);
        if record.defend_code != Code::None {
            assert_ne!(record.defense_point, NO_POINT);
        }
    }
}
