//! Error types for parsing and path finding

use thiserror::Error;

/// Maze text could not be turned into a grid
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("maze text is empty")]
    Empty,

    #[error("row {row} is too short: expected at least {expected} symbols, found {found}")]
    RowTooShort {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unexpected character `{symbol}` at x={x}, y={y}")]
    UnexpectedSymbol { symbol: char, x: usize, y: usize },

    #[error("grid of {width}x{height} needs {expected} cells, got {found}")]
    Misaligned {
        width: usize,
        height: usize,
        expected: usize,
        found: usize,
    },
}

/// Path query could not be answered
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("maze has no start opening on its border")]
    MissingStart,

    #[error("maze has no end opening on its border")]
    MissingEnd,
}

/// Coordinate text was not of the form `x,y`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid coordinate `{0}`, expected `x,y`")]
pub struct PointParseError(pub String);
