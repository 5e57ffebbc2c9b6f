use core::fmt;
use thiserror::Error;

use crate::coordinate::Coordinate;

/// Convenient result alias for grid construction and search calls.
pub type Result<T> = std::result::Result<T, PreconditionError>;

/// Which end of a search request a coordinate belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

/// Raised before any search work when the request cannot be answered. An exhausted search is
/// not an error; see [SearchOutcome::NoPath](crate::SearchOutcome::NoPath).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PreconditionError {
    /// The grid has no rows or no columns.
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    /// A search endpoint lies outside the grid.
    #[error("{endpoint} {position} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        position: Coordinate,
        rows: usize,
        cols: usize,
    },

    /// Grid rows differ in length.
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = PreconditionError::OutOfBounds {
            endpoint: Endpoint::Goal,
            position: Coordinate::new(3, -1),
            rows: 2,
            cols: 2,
        };
        assert_eq!(err.to_string(), "goal (3, -1) is outside the 2x2 grid");
        let err = PreconditionError::EmptyGrid { rows: 0, cols: 0 };
        assert!(err.to_string().contains("0x0"));
    }
}
