//! Tactical analyzer and code-merging rules (spec §4.4).
//!
//! Five phases: (a) ask the reader directly, (b) attack patterns, (c) ask
//! the reader for a defense once an attack is known, (d) defense patterns,
//! (e) brute-force liberty probing. Each phase can only ever *merge*
//! evidence into a worm's attack/defense code, never clobber a stronger
//! existing result with a weaker one — except where the spec's own
//! attacker/defender "ko swap" rule calls for recording the complementary,
//! weaker code on purpose (see [`merge_code_from_probe`]).

use crate::board::{Board, Point};
use crate::constants::{BOARDSIZE, NO_POINT, N};
use crate::patterns::{AnchorKind, PatternSource};
use crate::reader::TacticalReader;
use crate::speculative::with_move;
use crate::unconditional::propagate_all;
use crate::worm::{Code, WormTable};

/// Log of moves registered as attacks/defenses/threats during the tactical
/// phases, consumed by the refinement loop's "tried" bookkeeping and by the
/// threat finder's diagnostics. Mirrors `add_attack_move` /
/// `add_defense_move` / `add_attack_threat_move` / `add_defense_threat_move`.
#[derive(Default)]
pub struct MoveRegistry {
    pub attack_moves: Vec<(Point, Point)>,
    pub defense_moves: Vec<(Point, Point)>,
    pub attack_threats: Vec<(Point, Point)>,
    pub defense_threats: Vec<(Point, Point)>,
}

impl MoveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_attack_move(&mut self, mv: Point, worm: Point) {
        self.attack_moves.push((mv, worm));
    }

    pub fn add_defense_move(&mut self, mv: Point, worm: Point) {
        self.defense_moves.push((mv, worm));
    }

    pub fn add_attack_threat_move(&mut self, mv: Point, worm: Point) {
        self.attack_threats.push((mv, worm));
    }

    pub fn add_defense_threat_move(&mut self, mv: Point, worm: Point) {
        self.defense_threats.push((mv, worm));
    }

    fn move_already_registered(&self, mv: Point, worm: Point) -> bool {
        self.attack_moves.iter().any(|&(m, w)| m == mv && w == worm)
    }
}

/// Translate a defense/attack probe result into the code that should be
/// recorded on the complementary side, per spec §4.4(b)/(d)'s asymmetric
/// ko-swap rule: an unconditional result on one side is recorded as WIN on
/// the other; a KO_A result weakens to KO_B and vice versa, each gated on
/// the current code so a stronger existing result is never downgraded.
fn merge_code_from_probe(current: Code, probe_result: Code) -> Option<Code> {
    match probe_result {
        Code::None => Some(Code::Win),
        Code::KoA => {
            if matches!(current, Code::None | Code::KoB) {
                Some(Code::KoB)
            } else {
                None
            }
        }
        Code::KoB => {
            if current != Code::Win {
                Some(Code::KoA)
            } else {
                None
            }
        }
        Code::Win => None,
    }
}

/// Run all five tactical phases over every worm, mutating `worms` in place.
pub fn analyze_tactics(
    board: &mut Board,
    worms: &mut WormTable,
    reader: &mut dyn TacticalReader,
    patterns: &dyn PatternSource,
    registry: &mut MoveRegistry,
) {
    phase_a_direct_attack(board, worms, reader, registry);
    phase_b_attack_patterns(board, worms, reader, patterns, registry);
    phase_c_find_defense(board, worms, reader);
    phase_d_defense_patterns(board, worms, reader, patterns);
    phase_e_liberty_probe(board, worms, reader, registry);
    propagate_all(board, worms);
}

fn for_each_worm_origin(board: &Board, mut f: impl FnMut(Point)) {
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
            if board.get(origin).is_stone() {
                f(origin);
            }
        }
    }
}

/// Phase (a): ask the reader directly for each worm's attack.
fn phase_a_direct_attack(
    board: &Board,
    worms: &mut WormTable,
    reader: &mut dyn TacticalReader,
    registry: &mut MoveRegistry,
) {
    let mut origins = Vec::new();
    for_each_worm_origin(board, |o| origins.push(o));
    for origin in origins {
        let (code, mv) = reader.attack(board, origin);
        if code != Code::None {
            let record = worms.get_mut(origin);
            record.attack_code = code;
            record.attack_point = mv;
            registry.add_attack_move(mv, origin);
        }
    }
}

/// Phase (b): attack-pattern matches anchored on an enemy stone.
fn phase_b_attack_patterns(
    board: &mut Board,
    worms: &mut WormTable,
    reader: &mut dyn TacticalReader,
    patterns: &dyn PatternSource,
    registry: &mut MoveRegistry,
) {
    let matches = patterns.find_matches(board, AnchorKind::Enemy);
    for pm in matches {
        if !board.get(pm.anchor).is_stone() {
            continue;
        }
        let aa = board.find_origin(pm.anchor);
        if worms.get(aa).liberties > 4 {
            continue;
        }
        if registry.move_already_registered(pm.move_point, aa) {
            continue;
        }
        let Some(attacker_color) = board.get(pm.anchor).stone_color().map(|c| c.opponent()) else {
            continue;
        };
        reader.increase_depth_values();
        let outcome = with_move(board, pm.move_point, attacker_color, |b| {
            if b.is_empty(aa) {
                Code::None
            } else {
                reader.find_defense(b, aa).0
            }
        });
        reader.decrease_depth_values();
        let Ok(defense_code) = outcome else { continue };
        let current = worms.get(aa).attack_code;
        if let Some(new_code) = merge_code_from_probe(current, defense_code) {
            let record = worms.get_mut(aa);
            record.attack_code = new_code;
            if new_code == Code::Win {
                record.attack_point = pm.move_point;
            }
            registry.add_attack_move(pm.move_point, aa);
        }
    }
}

/// Phase (c): once a worm is known attacked, ask for its defense; if none
/// is found and the attack point isn't adjacent to the worm, probe it as a
/// defense candidate directly.
fn phase_c_find_defense(board: &mut Board, worms: &mut WormTable, reader: &mut dyn TacticalReader) {
    let mut origins = Vec::new();
    for_each_worm_origin(board, |o| origins.push(o));
    for origin in origins {
        let attack_code = worms.get(origin).attack_code;
        if attack_code == Code::None {
            continue;
        }
        let (code, mv) = reader.find_defense(board, origin);
        if code != Code::None {
            let record = worms.get_mut(origin);
            record.defend_code = code;
            record.defense_point = mv;
            continue;
        }

        let attack_point = worms.get(origin).attack_point;
        let adjacent = Board::neighbors4(origin).contains(&attack_point);
        if attack_point == NO_POINT || adjacent {
            continue;
        }
        let Some(defender_color) = board.get(origin).stone_color() else { continue };
        reader.increase_depth_values();
        let residual = with_move(board, attack_point, defender_color, |b| reader.attack(b, origin).0);
        reader.decrease_depth_values();
        let Ok(residual_code) = residual else { continue };
        if let Some(new_code) = merge_code_from_probe(Code::None, residual_code) {
            let record = worms.get_mut(origin);
            record.defend_code = new_code;
            record.defense_point = attack_point;
        }
    }
}

/// Phase (d): defense-pattern matches anchored on a friendly stone.
fn phase_d_defense_patterns(
    board: &mut Board,
    worms: &mut WormTable,
    reader: &mut dyn TacticalReader,
    patterns: &dyn PatternSource,
) {
    let matches = patterns.find_matches(board, AnchorKind::Own);
    for pm in matches {
        if !board.get(pm.anchor).is_stone() {
            continue;
        }
        let origin = board.find_origin(pm.anchor);
        let record = worms.get(origin);
        if record.attack_code == Code::None || record.defense_point == pm.move_point {
            continue;
        }
        let Some(defender_color) = board.get(pm.anchor).stone_color() else { continue };
        reader.increase_depth_values();
        let outcome = with_move(board, pm.move_point, defender_color, |b| reader.attack(b, origin).0);
        reader.decrease_depth_values();
        let Ok(attack_after) = outcome else { continue };
        let current = worms.get(origin).defend_code;
        if let Some(new_code) = merge_code_from_probe(current, attack_after) {
            let record = worms.get_mut(origin);
            record.defend_code = new_code;
            if new_code == Code::Win {
                record.defense_point = pm.move_point;
            }
        }
    }
}

/// Does a post-attack-probe defense result `dcode` warrant registering the
/// probed liberty as an attack move against a worm whose settled attack code
/// is `attack_code`? Mirrors `worm.c`'s stage-5 liberty loop: the move is
/// registered outright on a clean kill, and on a ko result only if it's no
/// worse than (or fills in) what's already known.
fn should_register_attack(dcode: Code, attack_code: Code) -> bool {
    dcode == Code::None
        || (dcode == Code::KoB && matches!(attack_code, Code::None | Code::KoB))
        || (dcode == Code::KoA && attack_code == Code::None)
}

/// Same gating as [`should_register_attack`], mirrored for the defense side:
/// is a post-defense-probe attack result `acode` weak enough to register the
/// probed liberty as a defense move against a worm whose settled defense
/// code is `defend_code`?
fn should_register_defense(acode: Code, defend_code: Code) -> bool {
    acode == Code::None
        || (acode == Code::KoB && matches!(defend_code, Code::None | Code::KoB))
        || (acode == Code::KoA && defend_code == Code::None)
}

/// Phase (e): for every attacked worm, brute-force probe every liberty as
/// both a candidate attack and, if defended, a candidate defense. Unlike
/// phases (a)-(d), this phase never touches a worm's own attack/defend
/// fields: it only registers candidate moves for the refinement loop and
/// the threat finder to pick up.
fn phase_e_liberty_probe(
    board: &mut Board,
    worms: &mut WormTable,
    reader: &mut dyn TacticalReader,
    registry: &mut MoveRegistry,
) {
    let mut origins = Vec::new();
    for_each_worm_origin(board, |o| origins.push(o));
    for origin in origins {
        let record = worms.get(origin);
        if record.attack_code == Code::None {
            continue;
        }
        let owner = board.get(origin).stone_color().expect("worm origin is a stone");
        let attacker = owner.opponent();
        let attack_code = record.attack_code;
        let defend_code = record.defend_code;
        let has_defense = defend_code != Code::None;
        let liberties = board.findlib(origin);

        for lib in liberties {
            reader.increase_depth_values();
            let attack_probe = with_move(board, lib, attacker, |b| {
                if b.is_empty(origin) {
                    Some(Code::None)
                } else if reader.attack(b, origin).0 != Code::None {
                    Some(reader.find_defense(b, origin).0)
                } else {
                    None
                }
            });
            reader.decrease_depth_values();
            if let Ok(Some(dcode)) = attack_probe {
                if should_register_attack(dcode, attack_code) {
                    registry.add_attack_move(lib, origin);
                }
            }

            if has_defense {
                reader.increase_depth_values();
                let defense_probe = with_move(board, lib, owner, |b| reader.attack(b, origin).0);
                reader.decrease_depth_values();
                if let Ok(acode) = defense_probe {
                    if should_register_defense(acode, defend_code) {
                        registry.add_defense_move(lib, origin);
                    }
                }
            }
        }
    }
}
