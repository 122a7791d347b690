//! Inessentiality classifier (spec §4.11).

use crate::board::{Board, Color};
use crate::constants::{BOARDSIZE, N, NO_POINT};
use crate::genus::{examine_cavity, CavityBorder};
use crate::unconditional::propagate_all;
use crate::worm::WormTable;

/// Mark every worm's `inessential` field and propagate it to all members.
pub fn classify_inessential(board: &Board, worms: &mut WormTable) {
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
            if board.get(origin).color() == Some(Color::Empty) {
                continue;
            }

            let record = worms.get(origin);
            let candidate = record.genus == 0 && record.liberties2 == 0 && record.lunch == NO_POINT;
            if candidate {
                let info = examine_cavity(board, origin);
                if info.border != CavityBorder::Gray && info.edge_count < 3 {
                    worms.get_mut(origin).inessential = true;
                }
            }
        }
    }
    propagate_all(board, worms);
}
