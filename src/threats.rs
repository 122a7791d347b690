//! Threat finder (spec §4.12): moves that *threaten* to attack or save a
//! worm without yet doing so outright.

use crate::board::{Board, Point};
use crate::constants::{BOARDSIZE, N};
use crate::reader::TacticalReader;
use crate::speculative::with_move;
use crate::tactics::MoveRegistry;
use crate::worm::{Code, WormTable};

fn list_worm_origins(board: &Board) -> Vec<Point> {
    let mut visited = vec![false; BOARDSIZE];
    let mut out = Vec::new();
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
            if board.get(origin).is_stone() {
                out.push(origin);
            }
        }
    }
    out
}

/// Candidate threat points: every first-order liberty, plus every empty
/// 4-neighbor of a liberty that isn't itself already a liberty.
fn candidate_points(board: &Board, origin: Point) -> Vec<Point> {
    let libs = board.findlib(origin);
    let mut candidates = Vec::new();
    for &l in &libs {
        candidates.push(l);
        for n in Board::neighbors4(l) {
            if board.is_empty(n) && !libs.contains(&n) && !candidates.contains(&n) {
                candidates.push(n);
            }
        }
    }
    candidates
}

/// Register attack threats (for untouched worms) and defense threats (for
/// worms attacked but not yet defended).
pub fn find_threats(board: &mut Board, worms: &WormTable, reader: &mut dyn TacticalReader, registry: &mut MoveRegistry) {
    for w in list_worm_origins(board) {
        let record = worms.get(w).clone();
        // The 1-liberty skip accommodates snapback cases where attack_code
        // was paradoxically still 0; the >=6 skip is a search-depth cutoff.
        if record.liberties <= 1 || record.liberties >= 6 {
            continue;
        }
        let owner = board.get(w).stone_color().expect("worm origin is a stone");
        let attacker = owner.opponent();

        if record.attack_code == Code::None {
            for cand in candidate_points(board, w) {
                reader.increase_depth_values();
                let result = with_move(board, cand, attacker, |b| reader.attack(b, w).0);
                reader.decrease_depth_values();
                if result == Ok(Code::Win) {
                    registry.add_attack_threat_move(cand, w);
                }
            }
        }

        if record.attack_code == Code::Win && record.defend_code == Code::None {
            for cand in candidate_points(board, w) {
                reader.increase_depth_values();
                let result = with_move(board, cand, owner, |b| reader.attack(b, w).0);
                reader.decrease_depth_values();
                if result == Ok(Code::None) {
                    registry.add_defense_threat_move(cand, w);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use crate::reader::NaiveReader;
    use crate::worm_builder::build_worms;

    #[test]
    fn healthy_worm_gets_no_threats_registered_without_merit() {
        let mut board = Board::new();
        let origin = Board::point_of(4, 4);
        board.place_stone(origin, Color::Black);
        let mut worms = build_worms(&board);
        worms.get_mut(origin).liberties = 4;
        let mut reader = NaiveReader::default();
        let mut registry = MoveRegistry::new();
        find_threats(&mut board, &worms, &mut reader, &mut registry);
        assert!(registry.attack_threats.is_empty());
    }
}
