//! Animation error types

use thiserror::Error;

/// Errors produced by the numeric core.
///
/// None of these abort a render. Family functions recover at the point of
/// detection (usually by holding the start-of-range value).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Input range collapses to a single point
    #[error("Degenerate input range: start and end are both {start}")]
    DegenerateRange { start: f64 },

    /// Multi-segment interpolation needs at least two breakpoints
    #[error("Interpolation needs at least 2 breakpoints, got {0}")]
    TooFewPoints(usize),

    /// Input and output ranges differ in length
    #[error("Input range has {input} points but output range has {output}")]
    MismatchedRanges { input: usize, output: usize },

    /// Breakpoints must be strictly ascending
    #[error("Input range must be strictly ascending (index {index})")]
    NotAscending { index: usize },
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, MotionError>;
