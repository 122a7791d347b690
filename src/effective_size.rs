//! Effective-size diffuser (spec §4.2).
//!
//! BFS out from every stone to radius [`EFFECTIVE_SIZE_RADIUS`], tracking at
//! each empty point the *set* of worm origins currently closest to it.
//! After saturation, stones contribute 1.0 to their own worm; empty points
//! split 0.5 among all worms equidistant to them, reflecting that only one
//! side can eventually hold that point.

use crate::board::Board;
use crate::constants::{BOARDSIZE, EFFECTIVE_SIZE_RADIUS, MAX_EQUIDISTANT_WORMS, N};
use crate::worm::WormTable;
use std::collections::HashMap;

use crate::board::Point;

/// Populate `effective_size` on every worm's origin, then propagate to all
/// stones of the worm.
pub fn compute_effective_sizes(board: &Board, worms: &mut WormTable) {
    let mut distance = vec![-1i32; BOARDSIZE];
    let mut origin_sets: Vec<Vec<Point>> = vec![Vec::new(); BOARDSIZE];

    for row in 0..N {
        for col in 0..N {
            let pt = Board::point_of(row, col);
            if board.get(pt).is_stone() {
                distance[pt] = 0;
                origin_sets[pt] = vec![board.find_origin(pt)];
            }
        }
    }

    for dist in 1..=(EFFECTIVE_SIZE_RADIUS as i32) {
        let mut updates: Vec<(Point, Vec<Point>)> = Vec::new();
        for row in 0..N {
            for col in 0..N {
                let pt = Board::point_of(row, col);
                if distance[pt] != -1 {
                    continue;
                }
                let mut union_set: Vec<Point> = Vec::new();
                let mut found = false;
                for n in Board::neighbors4(pt) {
                    if distance[n] == dist - 1 {
                        found = true;
                        for &o in &origin_sets[n] {
                            if !union_set.contains(&o) {
                                union_set.push(o);
                            }
                        }
                    }
                }
                if found {
                    debug_assert!(
                        union_set.len() <= MAX_EQUIDISTANT_WORMS,
                        "more equidistant worms than the board admits"
                    );
                    updates.push((pt, union_set));
                }
            }
        }
        for (pt, set) in updates {
            distance[pt] = dist;
            origin_sets[pt] = set;
        }
    }

    let mut credit: HashMap<Point, f64> = HashMap::new();
    for row in 0..N {
        for col in 0..N {
            let pt = Board::point_of(row, col);
            if board.get(pt).is_stone() {
                let origin = board.find_origin(pt);
                *credit.entry(origin).or_insert(0.0) += 1.0;
            } else if distance[pt] != -1 {
                let set = &origin_sets[pt];
                if !set.is_empty() {
                    let share = 0.5 / set.len() as f64;
                    for &o in set {
                        *credit.entry(o).or_insert(0.0) += share;
                    }
                }
            }
        }
    }

    for (&origin, &value) in &credit {
        worms.get_mut(origin).effective_size = value;
    }

    for row in 0..N {
        for col in 0..N {
            let pt = Board::point_of(row, col);
            if board.get(pt).is_stone() {
                let origin = board.find_origin(pt);
                if origin != pt {
                    let value = worms.get(origin).effective_size;
                    worms.get_mut(pt).effective_size = value;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use crate::constants::BOARDSIZE;

    #[test]
    fn single_stone_gets_full_board_credit() {
        let mut board = Board::new();
        let center = Board::point_of(N / 2, N / 2);
        board.place_stone(center, Color::Black);
        let mut worms = WormTable::new(BOARDSIZE);
        compute_effective_sizes(&board, &mut worms);
        let record = worms.get(center);
        assert!(record.effective_size > 1.0);
    }

    #[test]
    fn empty_board_gives_no_credit() {
        let board = Board::new();
        let mut worms = WormTable::new(BOARDSIZE);
        compute_effective_sizes(&board, &mut worms);
        for row in 0..N {
            for col in 0..N {
                let pt = Board::point_of(row, col);
                assert_eq!(worms.get(pt).effective_size, 0.0);
            }
        }
    }
}
