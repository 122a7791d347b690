//! Worm builder (spec §4.1): the first pipeline stage.
//!
//! Walks the board in raster order; on each unvisited point, enumerates its
//! component via `findstones`, records color/origin/size/liberties at the
//! origin, then propagates the record to every member.

use crate::board::{Board, Color};
use crate::constants::{BOARDSIZE, N};
use crate::worm::{WormRecord, WormTable};

/// Stage 1 of `make_worms`: origins, size, and first-order liberties only.
/// Exposed standalone for callers who need cheap worm info without paying
/// for the rest of the pipeline (spec §6, `build_worms`).
pub fn build_worms(board: &Board) -> WormTable {
    let mut worms = WormTable::new(BOARDSIZE);
    let mut visited = vec![false; BOARDSIZE];

    for row in 0..N {
        for col in 0..N {
            let pt = Board::point_of(row, col);
            if visited[pt] {
                continue;
            }
            let color = board
                .get(pt)
                .color()
                .expect("build_worms: raster scan stayed on-board");
            let members = board.findstones(pt);
            let origin = *members.iter().min().expect("component is non-empty");
            for &m in &members {
                visited[m] = true;
            }

            let mut record = WormRecord::empty_at(origin);
            record.color = color;
            if color == Color::Empty {
                record.size = 1;
            } else {
                record.size = members.len();
                record.liberties = board.countlib(origin);
            }

            worms.set(origin, record);
            worms.propagate(origin, &members);
        }
    }

    worms
}

/// Is the board entirely empty? Used for `make_worms`'s early exit (spec
/// §8 scenario 5).
pub fn has_no_stones(board: &Board) -> bool {
    for row in 0..N {
        for col in 0..N {
            if board.get(Board::point_of(row, col)).is_stone() {
                return false;
            }
        }
    }
    true
}
