//! End-to-end scenarios exercising the full pipeline on small positions.

use tesuji::board::{Board, Color};
use tesuji::patterns::NullPatternSource;
use tesuji::reader::{NaiveReader, NullLifeSolver, NullSmallSemeaiSolver};
use tesuji::refine;
use tesuji::worm::Code;
use tesuji::worm_builder::build_worms;
use tesuji::AnalyzerContext;

fn analyzer<'a>(
    board: Board,
    reader: &'a mut NaiveReader,
    patterns: &'a NullPatternSource,
    life_solver: &'a NullLifeSolver,
    semeai: &'a NullSmallSemeaiSolver,
) -> AnalyzerContext<'a> {
    AnalyzerContext::new(board, reader, patterns, life_solver, semeai)
}

/// Scenario 1: a single stone with nothing else on the board. Every empty
/// point within the diffuser's radius-3 diamond contributes half a point of
/// credit to the lone worm, since no other worm competes for it.
#[test]
fn single_stone_has_the_expected_worked_example_values() {
    let mut board = Board::new();
    let center = Board::point_of(4, 4);
    board.place_stone(center, Color::Black);

    let mut reader = NaiveReader::default();
    let patterns = NullPatternSource;
    let life_solver = NullLifeSolver;
    let semeai = NullSmallSemeaiSolver;
    let mut ctx = analyzer(board, &mut reader, &patterns, &life_solver, &semeai);
    ctx.make_worms();

    let record = ctx.worms.get(center);
    assert_eq!(record.size, 1);
    assert_eq!(record.liberties, 4);
    assert!(record.liberties2 >= 8);
    assert_eq!(record.genus, 0);
    assert_eq!(record.attack_code, Code::None);
    assert_eq!(record.defend_code, Code::None);
    // Radius-3 diamond around an interior point holds 24 empty points, each
    // worth 0.5 since nothing else shares them: 1 + 24 * 0.5 = 13.
    assert_eq!(record.effective_size, 13.0);
}

/// Scenario 2 (adapted): a white stone in true atari, surrounded so its
/// single liberty cannot be ladder-escaped. Three separate black worms touch
/// it; each should see it as a lunch, and none qualifies as a cutting stone
/// (each only touches one enemy worm).
#[test]
fn atari_worm_becomes_a_lunch_for_every_neighbor() {
    let mut board = Board::new();
    let white = Board::point_of(4, 4);
    board.place_stone(white, Color::White);
    board.place_stone(Board::point_of(3, 4), Color::Black); // north
    board.place_stone(Board::point_of(4, 3), Color::Black); // west
    board.place_stone(Board::point_of(4, 5), Color::Black); // east
    // Pinch the only remaining liberty (south) so the ladder collapses
    // immediately instead of running into open space.
    board.place_stone(Board::point_of(5, 3), Color::Black);
    board.place_stone(Board::point_of(5, 5), Color::Black);

    let mut reader = NaiveReader::default();
    let patterns = NullPatternSource;
    let life_solver = NullLifeSolver;
    let semeai = NullSmallSemeaiSolver;
    let mut ctx = analyzer(board, &mut reader, &patterns, &life_solver, &semeai);
    ctx.make_worms();

    let white_record = ctx.worms.get(white);
    assert_eq!(white_record.attack_code, Code::Win);
    assert_eq!(white_record.attack_point, Board::point_of(5, 4));

    for black_origin in [
        Board::point_of(3, 4),
        Board::point_of(4, 3), // origin of the {(4,3),(5,3)} worm
        Board::point_of(4, 5), // origin of the {(4,5),(5,5)} worm
    ] {
        let record = ctx.worms.get(black_origin);
        assert_eq!(record.cutstone, tesuji::worm::CutStone::None);
        assert_eq!(record.lunch, white);
    }
}

/// Scenario 3: the classical cross-cut. Each of the four single-stone worms
/// touches two enemy worms that share no liberty.
#[test]
fn cross_cut_produces_four_cutting_stones() {
    let mut board = Board::new();
    let black_nw = Board::point_of(4, 4);
    let white_ne = Board::point_of(4, 5);
    let white_sw = Board::point_of(5, 4);
    let black_se = Board::point_of(5, 5);
    board.place_stone(black_nw, Color::Black);
    board.place_stone(white_ne, Color::White);
    board.place_stone(white_sw, Color::White);
    board.place_stone(black_se, Color::Black);

    let mut reader = NaiveReader::default();
    let patterns = NullPatternSource;
    let life_solver = NullLifeSolver;
    let semeai = NullSmallSemeaiSolver;
    let mut ctx = analyzer(board, &mut reader, &patterns, &life_solver, &semeai);
    ctx.make_worms();

    for origin in [black_nw, white_ne, white_sw, black_se] {
        assert_eq!(ctx.worms.get(origin).cutstone, tesuji::worm::CutStone::Cutting);
    }
}

/// Scenario 4: a corner L-shape with no liberties of its own, wholly bordered
/// by one enemy color. It has no lunch (its neighbors aren't in atari) and no
/// genus, so it's classified inessential.
#[test]
fn corner_l_shape_with_no_liberties_is_inessential() {
    let mut board = Board::new();
    let a1 = Board::point_of(0, 0);
    let a2 = Board::point_of(0, 1);
    let b1 = Board::point_of(1, 0);
    board.place_stone(a1, Color::Black);
    board.place_stone(a2, Color::Black);
    board.place_stone(b1, Color::Black);
    board.place_stone(Board::point_of(0, 2), Color::White);
    board.place_stone(Board::point_of(1, 1), Color::White);
    board.place_stone(Board::point_of(2, 0), Color::White);

    let mut reader = NaiveReader::default();
    let patterns = NullPatternSource;
    let life_solver = NullLifeSolver;
    let semeai = NullSmallSemeaiSolver;
    let mut ctx = analyzer(board, &mut reader, &patterns, &life_solver, &semeai);
    ctx.make_worms();

    let record = ctx.worms.get(a1);
    assert_eq!(record.liberties, 0);
    assert_eq!(record.genus, 0);
    assert_eq!(record.lunch, tesuji::constants::NO_POINT);
    assert!(record.inessential);
    assert!(ctx.worms.get(a2).inessential);
    assert!(ctx.worms.get(b1).inessential);
}

/// Scenario 5: a fully empty board. `make_worms` must early-exit after stage
/// 1, leaving every record at its zeroed default.
#[test]
fn empty_board_early_exits_after_stage_one() {
    let board = Board::new();
    let mut reader = NaiveReader::default();
    let patterns = NullPatternSource;
    let life_solver = NullLifeSolver;
    let semeai = NullSmallSemeaiSolver;
    let mut ctx = analyzer(board, &mut reader, &patterns, &life_solver, &semeai);
    ctx.make_worms();

    let record = ctx.worms.get(Board::point_of(4, 4));
    assert_eq!(record.size, 0);
    assert_eq!(
        record.unconditional_status,
        tesuji::worm::UnconditionalStatus::Unknown
    );
    assert_eq!(record.effective_size, 0.0);
}

/// Scenario 6: refining an attack move onto an ally. W is attacked at A; its
/// ally W' is already (synthetically) known attacked-and-defended elsewhere.
/// Once A is played, W's defense collapses (by construction, W' keeps a
/// 2-liberty string that never supplies a one-liberty defense) so the
/// refinement loop must relocate W'.attack_point to A.
#[test]
fn refinement_relocates_an_allys_attack_point_to_the_played_move() {
    let mut board = Board::new();
    let w = Board::point_of(4, 4);
    board.place_stone(w, Color::Black);
    let ally = Board::point_of(0, 0);
    board.place_stone(ally, Color::Black);

    let mut worms = build_worms(&board);
    let a = Board::point_of(4, 5);
    worms.get_mut(w).attack_code = Code::Win;
    worms.get_mut(w).attack_point = a;
    worms.get_mut(ally).attack_code = Code::Win;
    worms.get_mut(ally).defend_code = Code::Win;

    let mut reader = NaiveReader::default();
    refine::refine(&mut board, &mut worms, &mut reader);

    assert_eq!(worms.get(ally).attack_point, a);
}

/// Run the full pipeline once with logging enabled, so the trace/debug
/// output from `make_worms`, `refine`, and `patch_neighbor_defense` is
/// visible under `cargo test -- --nocapture`.
#[test]
fn full_pipeline_runs_with_logging_enabled() {
    let _ = env_logger::try_init();

    let mut board = Board::new();
    let white = Board::point_of(4, 4);
    board.place_stone(white, Color::White);
    for n in Board::neighbors4(white).iter().take(3) {
        board.place_stone(*n, Color::Black);
    }

    let mut reader = NaiveReader::default();
    let patterns = NullPatternSource;
    let life_solver = NullLifeSolver;
    let semeai = NullSmallSemeaiSolver;
    let mut ctx = analyzer(board, &mut reader, &patterns, &life_solver, &semeai);
    ctx.make_worms();

    assert_eq!(ctx.worms.get(Board::point_of(4, 4)).attack_code, Code::Win);
}
