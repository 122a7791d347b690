//! Cutting-stone classifier (spec §4.7).

use crate::board::{Board, Color, Point};
use crate::constants::{BOARDSIZE, N};
use crate::unconditional::propagate_all;
use crate::worm::{CutStone, WormTable};

/// Classify every worm's `cutstone` field and propagate it to all members.
pub fn classify_cutstones(board: &Board, worms: &mut WormTable) {
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
            let color = board.get(origin).color().expect("on-board point");
            if color == Color::Empty {
                continue;
            }

            let enemy = color.opponent();
            let mut enemy_origins: Vec<Point> = Vec::new();
            'scan: for &m in &members {
                for n in Board::neighbors4(m) {
                    if board.get(n).stone_color() == Some(enemy) {
                        let eo = board.find_origin(n);
                        if !enemy_origins.contains(&eo) {
                            enemy_origins.push(eo);
                            if enemy_origins.len() == 2 {
                                break 'scan;
                            }
                        }
                    }
                }
            }

            let cutstone = if enemy_origins.len() < 2 {
                CutStone::None
            } else {
                let (o1, o2) = (enemy_origins[0], enemy_origins[1]);
                let mut shared = false;
                'search: for r in 0..N {
                    for c in 0..N {
                        let p = Board::point_of(r, c);
                        if board.is_empty(p) && board.liberty_of_string(p, o1) && board.liberty_of_string(p, o2) {
                            shared = true;
                            break 'search;
                        }
                    }
                }
                if shared {
                    CutStone::Potential
                } else {
                    CutStone::Cutting
                }
            };

            worms.get_mut(origin).cutstone = cutstone;
        }
    }
    propagate_all(board, worms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worm_builder::build_worms;

    #[test]
    fn cross_cut_center_stones_are_cutting() {
        // A classical 2x2 cross-cut: XO / OX. Each stone is a lone worm
        // adjacent to two enemy worms that share no liberty.
        let mut board = Board::new();
        let black_nw = Board::point_of(4, 4);
        let white_ne = Board::point_of(4, 5);
        let white_sw = Board::point_of(5, 4);
        let black_se = Board::point_of(5, 5);
        board.place_stone(black_nw, Color::Black);
        board.place_stone(white_ne, Color::White);
        board.place_stone(white_sw, Color::White);
        board.place_stone(black_se, Color::Black);
        let mut worms = build_worms(&board);
        classify_cutstones(&board, &mut worms);
        assert_eq!(worms.get(black_nw).cutstone, CutStone::Cutting);
        assert_eq!(worms.get(black_se).cutstone, CutStone::Cutting);
        assert_eq!(worms.get(white_ne).cutstone, CutStone::Cutting);
        assert_eq!(worms.get(white_sw).cutstone, CutStone::Cutting);
    }

    #[test]
    fn lone_stone_is_never_cutting() {
        let mut board = Board::new();
        let pt = Board::point_of(4, 4);
        board.place_stone(pt, Color::Black);
        let mut worms = build_worms(&board);
        classify_cutstones(&board, &mut worms);
        assert_eq!(worms.get(pt).cutstone, CutStone::None);
    }
}
