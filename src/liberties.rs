//! Liberty spectrum (`ping_cave`, spec §4.6).
//!
//! Computes the (lib1, lib2, lib3, lib4) tuple for a string. lib1 is the
//! ordinary liberty count; lib2..4 come from a bounded flood across
//! untouched empty points and same-color stones, seeded from the
//! non-blocked first-order liberties.
//!
//! Faithful to the original even where that's a known oddity: the flood is
//! run with the *same* seed set three times, so lib2 = lib3 = lib4 in most
//! positions (see Design Notes / Open Questions in `SPEC_FULL.md`). This is
//! preserved rather than "fixed".

use crate::board::{Board, Color, Point};
use std::collections::HashSet;

/// The four liberty counts of a string, in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibertySpectrum {
    pub lib1: usize,
    pub lib2: usize,
    pub lib3: usize,
    pub lib4: usize,
}

/// Is `lib` a first-order liberty "blocked" by enemy stones flanking it on
/// opposite sides (N/S or E/W), or by one enemy stone and the board edge on
/// such a pair?
fn is_blocked(board: &Board, lib: Point, owner: Color) -> bool {
    let enemy = owner.opponent();
    let n4 = Board::neighbors4(lib);
    let pairs = [(n4[0], n4[2]), (n4[1], n4[3])];
    pairs.iter().any(|&(a, b)| {
        let a_enemy = board.get(a).stone_color() == Some(enemy);
        let b_enemy = board.get(b).stone_color() == Some(enemy);
        let a_blocks = a_enemy || !board.is_on_board(a);
        let b_blocks = b_enemy || !board.is_on_board(b);
        (a_enemy && b_blocks) || (b_enemy && a_blocks)
    })
}

/// Does `pt` 4-touch an enemy stone?
fn touches_enemy(board: &Board, pt: Point, enemy: Color) -> bool {
    Board::neighbors4(pt)
        .iter()
        .any(|&n| board.get(n).stone_color() == Some(enemy))
}

/// One pass of the bounded flood from `seed`, expanding through same-color
/// stones and previously admitted untouched empty points.
fn expand_count(board: &Board, owner: Color, seed: &[Point]) -> usize {
    let enemy = owner.opponent();
    let mut admitted: HashSet<Point> = seed.iter().copied().collect();
    let mut stack: Vec<Point> = seed.to_vec();
    while let Some(pt) = stack.pop() {
        for n in Board::neighbors4(pt) {
            if board.get(n).stone_color() == Some(owner) {
                for n2 in Board::neighbors4(n) {
                    if board.is_empty(n2) && !admitted.contains(&n2) && !touches_enemy(board, n2, enemy) {
                        admitted.insert(n2);
                        stack.push(n2);
                    }
                }
            } else if board.is_empty(n) && !admitted.contains(&n) && !touches_enemy(board, n, enemy) {
                admitted.insert(n);
                stack.push(n);
            }
        }
    }
    admitted.len()
}

/// Compute the liberty spectrum of the string at `origin`.
pub fn ping_cave(board: &Board, origin: Point) -> LibertySpectrum {
    let owner = board
        .get(origin)
        .stone_color()
        .expect("ping_cave: origin must be a stone");
    let raw_libs = board.findlib(origin);
    let lib1 = raw_libs.len();
    let seed: Vec<Point> = raw_libs
        .into_iter()
        .filter(|&l| !is_blocked(board, l, owner))
        .collect();
    let count = expand_count(board, owner, &seed);
    LibertySpectrum {
        lib1,
        lib2: count,
        lib3: count,
        lib4: count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn isolated_stone_has_four_first_order_liberties() {
        let mut board = Board::new();
        let pt = Board::point_of(4, 4);
        board.place_stone(pt, Color::Black);
        let spectrum = ping_cave(&board, pt);
        assert_eq!(spectrum.lib1, 4);
        assert!(spectrum.lib2 >= spectrum.lib1);
    }

    #[test]
    fn lib2_lib3_lib4_are_identical() {
        let mut board = Board::new();
        let pt = Board::point_of(4, 4);
        board.place_stone(pt, Color::Black);
        let spectrum = ping_cave(&board, pt);
        assert_eq!(spectrum.lib2, spectrum.lib3);
        assert_eq!(spectrum.lib3, spectrum.lib4);
    }

    #[test]
    fn fully_enclosed_stone_has_no_liberties() {
        let mut board = Board::new();
        let pt = Board::point_of(4, 4);
        board.place_stone(pt, Color::Black);
        for n in Board::neighbors4(pt) {
            board.place_stone(n, Color::White);
        }
        let spectrum = ping_cave(&board, pt);
        assert_eq!(spectrum.lib1, 0);
        assert_eq!(spectrum.lib2, 0);
    }
}
