//! The speculative-search refinement loop (spec §4.5) — the hardest
//! subsystem: an attack or defense point found for one worm may also be the
//! critical point for a neighboring worm, discoverable only by speculatively
//! playing it and re-reading everyone else.

use crate::board::{Board, Color, Point};
use crate::constants::{BOARDSIZE, NO_POINT, N};
use crate::reader::TacticalReader;
use crate::speculative::with_move;
use crate::worm::{Code, WormTable};
use std::collections::HashSet;

enum Relocation {
    Attack { worm: Point, point: Point, code: Code },
    Defense { worm: Point, point: Point, code: Code },
}

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

fn tried_contains(tried_black: &HashSet<Point>, tried_white: &HashSet<Point>, color: Color, mv: Point) -> bool {
    match color {
        Color::Black => tried_black.contains(&mv),
        Color::White => tried_white.contains(&mv),
        Color::Empty => false,
    }
}

fn tried_insert(tried_black: &mut HashSet<Point>, tried_white: &mut HashSet<Point>, color: Color, mv: Point) {
    match color {
        Color::Black => {
            tried_black.insert(mv);
        }
        Color::White => {
            tried_white.insert(mv);
        }
        Color::Empty => {}
    }
}

/// Run the refinement loop to a fixed point (a single pass over every
/// worm's known attack/defense point, per spec — the original likewise
/// visits each move once, not iterating to a global fixed point).
pub fn refine(board: &mut Board, worms: &mut WormTable, reader: &mut dyn TacticalReader) {
    log::trace!("refine: starting refinement pass");
    let mut tried_black: HashSet<Point> = HashSet::new();
    let mut tried_white: HashSet<Point> = HashSet::new();
    let mut dirty: HashSet<Point> = HashSet::new();

    for w in list_worm_origins(board) {
        let wcolor = board.get(w).stone_color().expect("worm origin is a stone");
        let attacker_color = wcolor.opponent();

        let attack_point = worms.get(w).attack_point;
        let attack_code = worms.get(w).attack_code;
        if attack_code != Code::None
            && attack_point != NO_POINT
            && !tried_contains(&tried_black, &tried_white, attacker_color, attack_point)
        {
            tried_insert(&mut tried_black, &mut tried_white, attacker_color, attack_point);
            try_relocate(board, worms, reader, w, attack_point, attacker_color, &mut dirty);
        }

        let defense_point = worms.get(w).defense_point;
        let defend_code = worms.get(w).defend_code;
        if defend_code != Code::None
            && defense_point != NO_POINT
            && !tried_contains(&tried_black, &tried_white, wcolor, defense_point)
        {
            tried_insert(&mut tried_black, &mut tried_white, wcolor, defense_point);
            try_relocate(board, worms, reader, w, defense_point, wcolor, &mut dirty);
        }
    }

    for origin in dirty {
        if board.get(origin).is_stone() {
            let members = board.findstones(origin);
            worms.propagate(origin, &members);
        }
    }
}

/// Play `mv` as `mover_color`, then check every other worm for a relocation
/// triggered by that move, following spec §4.5's cases A-D.
fn try_relocate(
    board: &mut Board,
    worms: &mut WormTable,
    reader: &mut dyn TacticalReader,
    w: Point,
    mv: Point,
    mover_color: Color,
    dirty: &mut HashSet<Point>,
) {
    let wcolor = board.get(w).stone_color().expect("worm origin is a stone");
    let is_attack_move = mover_color != wcolor;
    let w_defense_point = worms.get(w).defense_point;

    reader.increase_depth_values();
    let result = with_move(board, mv, mover_color, |b| {
        let mut relocations = Vec::new();
        if b.is_empty(w) {
            // W itself was captured by this hypothetical move; its status
            // is frozen, per spec's edge case, and nothing downstream of it
            // can be trusted either.
            return relocations;
        }
        for wp in list_worm_origins(b) {
            if wp == w {
                continue;
            }
            let w_color = b.get(wp).stone_color().expect("worm origin is a stone");
            let rec_attack_code = worms.get(wp).attack_code;
            let rec_defend_code = worms.get(wp).defend_code;

            if is_attack_move {
                if w_color != mover_color {
                    // Case A: ally of W.
                    if rec_attack_code != Code::None && rec_defend_code != Code::None {
                        let (def_code, _) = reader.find_defense(b, wp);
                        if def_code == Code::None {
                            let mut still_needed = false;
                            if w_defense_point != NO_POINT {
                                if let Ok(succeeds) =
                                    with_move(b, w_defense_point, w_color, |b2| reader.attack(b2, wp).0 != Code::None)
                                {
                                    still_needed = succeeds;
                                }
                            }
                            if !still_needed {
                                relocations.push(Relocation::Attack {
                                    worm: wp,
                                    point: mv,
                                    code: rec_attack_code,
                                });
                            }
                        }
                    }
                } else {
                    // Case B: enemy of W.
                    if rec_attack_code != Code::None {
                        let (atk, _) = reader.attack(b, wp);
                        if atk == Code::None {
                            relocations.push(Relocation::Defense {
                                worm: wp,
                                point: mv,
                                code: Code::Win,
                            });
                        }
                    }
                }
            } else if w_color == mover_color {
                // Case C: ally of W, move is W's defense.
                if rec_attack_code != Code::None && rec_defend_code == Code::None {
                    let (def_code, _) = reader.find_defense(b, wp);
                    if def_code != Code::None {
                        relocations.push(Relocation::Defense {
                            worm: wp,
                            point: mv,
                            code: def_code,
                        });
                    }
                }
            } else {
                // Case D: enemy of W, move is W's defense.
                if rec_attack_code == Code::None {
                    let (atk, _) = reader.attack(b, wp);
                    if atk != Code::None {
                        relocations.push(Relocation::Attack {
                            worm: wp,
                            point: mv,
                            code: atk,
                        });
                    }
                }
            }
        }
        relocations
    });
    reader.decrease_depth_values();

    if let Ok(relocations) = result {
        for reloc in relocations {
            match reloc {
                Relocation::Attack { worm, point, code } => {
                    log::trace!("refine: relocating attack point of worm at {} to {}", worm, point);
                    let record = worms.get_mut(worm);
                    if code > record.attack_code {
                        record.attack_code = code;
                    }
                    record.attack_point = point;
                    dirty.insert(worm);
                }
                Relocation::Defense { worm, point, code } => {
                    log::trace!("refine: relocating defense point of worm at {} to {}", worm, point);
                    let record = worms.get_mut(worm);
                    if code > record.defend_code {
                        record.defend_code = code;
                    }
                    record.defense_point = point;
                    dirty.insert(worm);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::NaiveReader;
    use crate::worm_builder::build_worms;

    #[test]
    fn refine_never_panics_on_a_quiet_board() {
        let mut board = Board::new();
        let origin = Board::point_of(4, 4);
        board.place_stone(origin, Color::White);
        for n in Board::neighbors4(origin).iter().take(3) {
            board.place_stone(*n, Color::Black);
        }
        let mut worms = build_worms(&board);
        worms.get_mut(origin).attack_code = Code::Win;
        worms.get_mut(origin).attack_point = Board::neighbors4(origin)[3];
        let mut reader = NaiveReader::default();
        refine(&mut board, &mut worms, &mut reader);
    }
}
