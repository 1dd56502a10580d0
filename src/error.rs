//! Errors raised while loading grids and selecting heuristics. The search itself cannot fail:
//! an unreachable goal is reported through [SearchResult](crate::SearchResult).
use core::fmt;
use grid_util::point::Point;

/// Error type for building a [CostGrid](crate::CostGrid) or validating cells against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows or no columns
    Empty,
    /// A row differs in length from the first row
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character in the text format is not a decimal digit
    InvalidDigit { row: usize, col: usize, found: char },
    /// A cell lies outside the grid
    OutOfBounds { cell: Point },
    /// File I/O error
    Io(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "Grid is empty"),
            GridError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} cells, expected {}",
                row, found, expected
            ),
            GridError::InvalidDigit { row, col, found } => {
                write!(f, "Invalid cost {:?} at ({}, {})", found, row, col)
            }
            GridError::OutOfBounds { cell } => {
                write!(f, "Cell ({}, {}) is outside the grid", cell.y, cell.x)
            }
            GridError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

/// Error type for parsing a [HeuristicKind](crate::HeuristicKind) selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// Neither a selector number in 1..=4 nor a known heuristic name
    Unknown(String),
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorError::Unknown(found) => write!(
                f,
                "Unknown heuristic {:?}, expected 1-4 or one of zero, manhattan, euclidean, perturbed",
                found
            ),
        }
    }
}

impl std::error::Error for SelectorError {}
