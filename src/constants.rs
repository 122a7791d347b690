//! Board geometry constants.
//!
//! The board uses a 1D array representation with padding around the
//! playable area, so that off-board neighbor lookups never need a bounds
//! check: they just land on a padding cell.
//!
//! # Board Size Configuration
//!
//! The board size is controlled by Cargo features:
//! - `board9x9` (default)
//! - `board13x13`
//! - `board19x19`
//!
//! ```sh
//! cargo build                                       # 9x9 (default)
//! cargo build --no-default-features --features board19x19
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

#[cfg(feature = "board9x9")]
pub const N: usize = 9;

#[cfg(feature = "board13x13")]
pub const N: usize = 13;

#[cfg(feature = "board19x19")]
pub const N: usize = 19;

#[cfg(any(
    all(feature = "board9x9", feature = "board13x13"),
    all(feature = "board9x9", feature = "board19x19"),
    all(feature = "board13x13", feature = "board19x19")
))]
compile_error!("Enable exactly one of 'board9x9', 'board13x13', 'board19x19'");

#[cfg(not(any(feature = "board9x9", feature = "board13x13", feature = "board19x19")))]
compile_error!("Must enable exactly one board size feature: 'board9x9', 'board13x13' or 'board19x19'");

/// Board width including left/right padding columns.
pub const W: usize = N + 2;

/// Total board array size including all padding.
pub const BOARDSIZE: usize = (N + 1) * W + 1;

/// First valid on-board index (skips top and left padding).
pub const BOARD_IMIN: usize = N + 1;

/// One past the last valid on-board index (before bottom padding).
pub const BOARD_IMAX: usize = BOARDSIZE - N - 1;

/// Maximum number of distinct liberties a single string can have.
pub const MAXLIBS: usize = N * N;

/// Sentinel for "no point" (index 0 is padding, so it's safe to reuse).
pub const NO_POINT: usize = 0;

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Offsets to the 4 orthogonal neighbors: North, East, South, West.
///
/// Derived from `W`, the row stride used by `point_of`, not from `N`: the
/// padding columns make the stride `N + 2`, not `N + 1`.
pub const DELTA4: [isize; 4] = [-(W as isize), 1, W as isize, -1];

/// Offsets to the 4 diagonal neighbors: NE, SE, SW, NW.
pub const DELTA4D: [isize; 4] = [
    -(W as isize) + 1,
    W as isize + 1,
    W as isize - 1,
    -(W as isize) - 1,
];

/// All 8 neighbor offsets, orthogonal first then diagonal.
pub const DELTA8: [isize; 8] = [
    DELTA4[0], DELTA4[1], DELTA4[2], DELTA4[3], DELTA4D[0], DELTA4D[1], DELTA4D[2], DELTA4D[3],
];

/// Cap on the number of distinct worms that can be simultaneously "equally
/// closest" to a single empty point in the effective-size diffuser (see
/// spec.md §7 and `worm.c`'s `2*(MAX_BOARD-1)`-sized `worms[][]` array).
pub const MAX_EQUIDISTANT_WORMS: usize = 2 * (N - 1);

/// Radius out to which the effective-size diffuser spreads territorial credit.
pub const EFFECTIVE_SIZE_RADIUS: usize = 3;
