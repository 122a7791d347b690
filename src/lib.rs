//! tesuji: a worm analyzer for a static Go position.
//!
//! Given a board, partitions it into maximal same-color connected
//! components ("worms") and empty cavities, then computes tactical
//! attack/defense points, cutting-stone classification, liberty spectra,
//! genus, lunches, inessentiality, unconditional life/death, and
//! territorial effective size for each worm.
//!
//! The analyzer is written entirely against external collaborator traits
//! ([`reader::TacticalReader`], [`reader::LifeSolver`],
//! [`patterns::PatternSource`], [`reader::SmallSemeaiSolver`]) — it has no
//! opinion on how attacks are read, how unconditional life is proven, or
//! how patterns are matched. [`reader::NaiveReader`] is a real, shallow
//! default; production callers are expected to supply their own.
//!
//! ## Example
//!
//! ```
//! use tesuji::board::{Board, Color};
//! use tesuji::reader::{NaiveReader, NullLifeSolver, NullSmallSemeaiSolver};
//! use tesuji::patterns::NullPatternSource;
//! use tesuji::AnalyzerContext;
//!
//! let mut board = Board::new();
//! board.place_stone(Board::point_of(4, 4), Color::Black);
//!
//! let mut reader = NaiveReader::default();
//! let patterns = NullPatternSource;
//! let life_solver = NullLifeSolver;
//! let semeai = NullSmallSemeaiSolver;
//!
//! let mut ctx = AnalyzerContext::new(board, &mut reader, &patterns, &life_solver, &semeai);
//! ctx.make_worms();
//! assert_eq!(ctx.worms.get(Board::point_of(4, 4)).size, 1);
//! ```

pub mod board;
pub mod constants;
pub mod cutstone;
pub mod effective_size;
pub mod error;
pub mod genus;
pub mod inessential;
pub mod liberties;
pub mod lunch;
pub mod neighbor_defense;
pub mod patterns;
pub mod reader;
pub mod refine;
pub mod speculative;
pub mod tactics;
pub mod threats;
pub mod unconditional;
pub mod worm;
pub mod worm_builder;

use board::{Board, Point};
use constants::{BOARDSIZE, N};
use patterns::PatternSource;
use reader::{LifeSolver, SmallSemeaiSolver, TacticalReader};
use tactics::MoveRegistry;
use worm::{WormRecord, WormTable};

fn worm_origins(board: &Board) -> Vec<Point> {
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

/// The explicit analyzer context the original engine spread across three
/// process-wide arrays (board, worm records, move stack). Every pipeline
/// stage is a method on this struct; the move stack itself is never stored
/// here — it lives only for the duration of a [`speculative::with_move`]
/// call.
pub struct AnalyzerContext<'a> {
    pub board: Board,
    pub worms: WormTable,
    pub reader: &'a mut dyn TacticalReader,
    pub patterns: &'a dyn PatternSource,
    pub life_solver: &'a dyn LifeSolver,
    pub semeai: &'a dyn SmallSemeaiSolver,
    pub registry: MoveRegistry,
}

impl<'a> AnalyzerContext<'a> {
    pub fn new(
        board: Board,
        reader: &'a mut dyn TacticalReader,
        patterns: &'a dyn PatternSource,
        life_solver: &'a dyn LifeSolver,
        semeai: &'a dyn SmallSemeaiSolver,
    ) -> Self {
        AnalyzerContext {
            board,
            worms: WormTable::new(BOARDSIZE),
            reader,
            patterns,
            life_solver,
            semeai,
            registry: MoveRegistry::new(),
        }
    }

    /// Stage 1 only: origins, size, first-order liberties. Cheap, for
    /// callers who don't need the rest of the pipeline.
    pub fn build_worms(&mut self) {
        self.worms = worm_builder::build_worms(&self.board);
    }

    /// The full pipeline. Early-exits after stage 1 if the board has no
    /// stones at all.
    pub fn make_worms(&mut self) {
        log::debug!("make_worms: starting pipeline");
        self.build_worms();
        if worm_builder::has_no_stones(&self.board) {
            log::trace!("make_worms: empty board, early exit after stage 1");
            return;
        }

        effective_size::compute_effective_sizes(&self.board, &mut self.worms);
        unconditional::compute_unconditional_status(&self.board, &mut self.worms, self.life_solver);

        tactics::analyze_tactics(
            &mut self.board,
            &mut self.worms,
            self.reader,
            self.patterns,
            &mut self.registry,
        );
        log::trace!("make_worms: tactical analysis complete, entering refinement loop");
        refine::refine(&mut self.board, &mut self.worms, self.reader);
        neighbor_defense::patch_neighbor_defense(&self.board, &mut self.worms, self.reader);

        self.compute_liberty_spectra();
        cutstone::classify_cutstones(&self.board, &mut self.worms);
        genus::compute_genus(&self.board, &mut self.worms);

        // Small-semeai solver: delegated out of scope (see
        // `reader::SmallSemeaiSolver`), called here only to preserve the
        // original pipeline's ordering between genus and the threat finder.
        let _ = self.semeai;

        threats::find_threats(&mut self.board, &self.worms, self.reader, &mut self.registry);
        lunch::find_lunches(&self.board, &mut self.worms);
        inessential::classify_inessential(&self.board, &mut self.worms);
        log::debug!("make_worms: pipeline complete");
    }

    fn compute_liberty_spectra(&mut self) {
        for origin in worm_origins(&self.board) {
            let spectrum = liberties::ping_cave(&self.board, origin);
            let record = self.worms.get_mut(origin);
            record.liberties2 = spectrum.lib2;
            record.liberties3 = spectrum.lib3;
            record.liberties4 = spectrum.lib4;
        }
        unconditional::propagate_all(&self.board, &mut self.worms);
    }

    /// Are `p` and `q` stones of the same worm?
    pub fn is_same_worm(&self, p: Point, q: Point) -> bool {
        self.board.find_origin(p) == self.board.find_origin(q)
    }

    /// Is `o` the origin of the worm containing `p`?
    pub fn is_worm_origin(&self, p: Point, o: Point) -> bool {
        self.board.find_origin(p) == o
    }

    /// Re-copy the record at `p`'s origin onto every member of its worm.
    pub fn propagate_worm(&mut self, p: Point) {
        let origin = self.board.find_origin(p);
        let members = self.board.findstones(origin);
        self.worms.propagate(origin, &members);
    }

    /// The worm record at board coordinates (m, n), for diagnostics.
    pub fn report_worm(&self, m: usize, n: usize) -> &WormRecord {
        self.worms.get(Board::point_of(m, n))
    }
}
