//! Error types for speculative move execution.

/// Result of attempting to play a hypothetical move during analysis.
///
/// Mirrors the teacher's `position::MoveError`: a small enum with a
/// hand-written `Display`/`Error` impl rather than a `thiserror` derive.
/// Every phase that plays a speculative move treats `Err` as "this branch
/// is illegal, skip it" — the same meaning as `trymove` returning false in
/// the original engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeculativeError {
    /// The target point is not empty.
    Occupied,
    /// The move would immediately retake a simple ko.
    Ko,
    /// The move would leave its own string with zero liberties and capture
    /// nothing.
    Suicide,
}

impl std::fmt::Display for SpeculativeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            SpeculativeError::Occupied => "point not EMPTY",
            SpeculativeError::Ko => "retakes ko",
            SpeculativeError::Suicide => "suicide",
        };
        write!(f, "illegal speculative move: {msg}")
    }
}

impl std::error::Error for SpeculativeError {}
