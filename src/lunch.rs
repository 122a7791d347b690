//! Lunch finder (spec §4.10): the juiciest capturable adjacent enemy.

use crate::board::{Board, Color, Point};
use crate::constants::{BOARDSIZE, NO_POINT, N};
use crate::unconditional::propagate_all;
use crate::worm::{Code, WormTable};

/// Populate every worm's `lunch` field and propagate it to all members.
pub fn find_lunches(board: &Board, worms: &mut WormTable) {
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

            let mut candidates: Vec<Point> = Vec::new();
            for &m in &members {
                for n in Board::neighbors8(m) {
                    if board.get(n).stone_color() == Some(enemy) {
                        let eo = board.find_origin(n);
                        if !candidates.contains(&eo) {
                            candidates.push(eo);
                        }
                    }
                }
            }

            let mut best: Option<Point> = None;
            for &cand in &candidates {
                let record = worms.get(cand);
                if !matches!(record.attack_code, Code::Win | Code::KoA) {
                    continue;
                }
                if board.is_ko_point(cand) {
                    continue;
                }
                best = Some(match best {
                    None => cand,
                    Some(b) => {
                        let rb = worms.get(b);
                        if record.cutstone > rb.cutstone
                            || (record.cutstone == rb.cutstone && record.liberties < rb.liberties)
                        {
                            cand
                        } else {
                            b
                        }
                    }
                });
            }

            worms.get_mut(origin).lunch = best.unwrap_or(NO_POINT);
        }
    }
    propagate_all(board, worms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worm_builder::build_worms;

    #[test]
    fn no_candidates_means_no_lunch() {
        let mut board = Board::new();
        let pt = Board::point_of(4, 4);
        board.place_stone(pt, Color::Black);
        let mut worms = build_worms(&board);
        find_lunches(&board, &mut worms);
        assert_eq!(worms.get(pt).lunch, NO_POINT);
    }

    #[test]
    fn attackable_neighbor_becomes_lunch() {
        let mut board = Board::new();
        let owner = Board::point_of(4, 4);
        let prey = Board::point_of(4, 5);
        board.place_stone(owner, Color::Black);
        board.place_stone(prey, Color::White);
        let mut worms = build_worms(&board);
        worms.get_mut(prey).attack_code = Code::Win;
        find_lunches(&board, &mut worms);
        assert_eq!(worms.get(owner).lunch, prey);
    }
}
