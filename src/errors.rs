use crate::geometry::grid_xy::GridXY;
use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum TilingError {
    #[error("board size {size} is below the minimum of {min}")]
    GridTooSmall { size: usize, min: usize },
    #[error("board size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: usize, max: usize },
    #[error("the input is empty")]
    EmptyInput,
    #[error("invalid board size {0:?}")]
    InvalidSize(String),
    #[error("expected {expected} board rows, found {found}")]
    MissingRows { expected: usize, found: usize },
    #[error("board row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("invalid tiling header {0:?}")]
    InvalidHeader(String),
    #[error("invalid domino {text:?} on line {line}")]
    InvalidDomino { line: usize, text: String },
    #[error("the covering failed verification: {0}")]
    InvalidMatching(#[from] TilingViolation),
    #[error("the answer claims the board cannot be covered, but it can")]
    CoverableClaimedImpossible,
}

/// Failure of a command line run, which also reads and writes files.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Tiling(#[from] TilingError),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A reason why a list of dominoes is not a valid covering of a board.
/// Messages show cells counted from 1, as in answer files.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TilingViolation {
    #[error("cell {} is outside of the board", .0.one_based())]
    OutOfBounds(GridXY),
    #[error("cell {} is blocked", .0.one_based())]
    BlockedCell(GridXY),
    #[error("cells {} and {} are not adjacent", .0.one_based(), .1.one_based())]
    NotAdjacent(GridXY, GridXY),
    #[error("domino {}{} is placed more than once", .0.one_based(), .1.one_based())]
    DuplicateDomino(GridXY, GridXY),
    #[error("cell {} is covered more than once", .0.one_based())]
    CoveredTwice(GridXY),
    #[error("open cell {} is not covered", .0.one_based())]
    Uncovered(GridXY),
}
