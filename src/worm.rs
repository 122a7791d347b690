//! Worm records: the per-point data the whole pipeline populates.
//!
//! A record is meaningful only at its worm's origin; every other stone of
//! the worm carries a propagated copy (see [`crate::propagate_worm`]).

use crate::board::{Color, Point};
use crate::constants::NO_POINT;

/// Strength of a found attack or defense, `0 < KO_B < KO_A < WIN`.
///
/// The ordering is the whole point of this type: merging evidence from
/// several sources (the reader, pattern matches, liberty probes) only ever
/// replaces a code with a strictly stronger one, never a weaker one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Code {
    None,
    KoB,
    KoA,
    Win,
}

impl Code {
    #[inline]
    pub fn is_none(self) -> bool {
        self == Code::None
    }
}

/// Outcome of the unconditional-life solver for a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnconditionalStatus {
    Unknown,
    Alive,
    Dead,
    WhiteBorder,
    BlackBorder,
}

impl Default for UnconditionalStatus {
    fn default() -> Self {
        UnconditionalStatus::Unknown
    }
}

/// Cutting-stone classification (spec §4.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CutStone {
    /// Not a cutting stone.
    None,
    /// Adjacent to two enemy worms that share a liberty.
    Potential,
    /// Adjacent to two enemy worms sharing no liberty.
    Cutting,
}

impl Default for CutStone {
    fn default() -> Self {
        CutStone::None
    }
}

/// The full record attached to a worm's origin (§3 data model).
#[derive(Debug, Clone)]
pub struct WormRecord {
    pub color: Color,
    pub origin: Point,
    pub size: usize,
    pub effective_size: f64,
    pub liberties: usize,
    pub liberties2: usize,
    pub liberties3: usize,
    pub liberties4: usize,
    pub genus: usize,
    pub cutstone: CutStone,
    /// Set by a connection pass out of scope for this crate; kept for
    /// record-layout parity and always zero here.
    pub cutstone2: usize,
    pub attack_code: Code,
    pub attack_point: Point,
    pub defend_code: Code,
    pub defense_point: Point,
    pub lunch: Point,
    pub inessential: bool,
    pub invincible: bool,
    pub unconditional_status: UnconditionalStatus,
}

impl WormRecord {
    /// A zeroed record for an empty point, per "all records are zeroed at
    /// pipeline entry".
    pub fn empty_at(origin: Point) -> Self {
        WormRecord {
            color: Color::Empty,
            origin,
            size: 0,
            effective_size: 0.0,
            liberties: 0,
            liberties2: 0,
            liberties3: 0,
            liberties4: 0,
            genus: 0,
            cutstone: CutStone::None,
            cutstone2: 0,
            attack_code: Code::None,
            attack_point: NO_POINT,
            defend_code: Code::None,
            defense_point: NO_POINT,
            lunch: NO_POINT,
            inessential: false,
            invincible: false,
            unconditional_status: UnconditionalStatus::Unknown,
        }
    }
}

/// The board-sized array of worm records, indexed by point.
///
/// Only the origin's slot is authoritative at any point in the pipeline;
/// [`WormTable::propagate_all`] copies origin records onto every member
/// after a phase finishes mutating them.
pub struct WormTable {
    records: Vec<WormRecord>,
}

impl WormTable {
    pub fn new(size: usize) -> Self {
        WormTable {
            records: (0..size).map(WormRecord::empty_at).collect(),
        }
    }

    #[inline]
    pub fn get(&self, pt: Point) -> &WormRecord {
        &self.records[pt]
    }

    #[inline]
    pub fn get_mut(&mut self, pt: Point) -> &mut WormRecord {
        &mut self.records[pt]
    }

    #[inline]
    pub fn set(&mut self, pt: Point, record: WormRecord) {
        self.records[pt] = record;
    }

    /// Propagate the record at `origin` to every point in `members`.
    pub fn propagate(&mut self, origin: Point, members: &[Point]) {
        let record = self.records[origin].clone();
        for &m in members {
            if m != origin {
                self.records[m] = record.clone();
            }
        }
    }
}
