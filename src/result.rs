use core::fmt;
use grid_util::point::Point;
use std::time::Duration;

/// Path cost reported when the goal cannot be reached.
pub const UNREACHABLE_COST: i64 = -1;

/// The terminal state a search ended in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was popped from the open set
    Success,
    /// The open set ran empty without reaching the goal
    Exhausted,
}

/// Cost, path and instrumentation of a single search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Sum of the entry costs along the path, or [UNREACHABLE_COST].
    pub total_cost: i64,
    /// Cells from start to goal, both included. [None] if the goal is unreachable.
    pub path: Option<Vec<Point>>,
    /// Number of search nodes allocated, including ones that were later discarded.
    pub nodes_created: usize,
    pub elapsed: Duration,
}

impl SearchResult {
    pub(crate) fn success(
        total_cost: i64,
        path: Vec<Point>,
        nodes_created: usize,
        elapsed: Duration,
    ) -> SearchResult {
        SearchResult {
            total_cost,
            path: Some(path),
            nodes_created,
            elapsed,
        }
    }

    pub(crate) fn exhausted(nodes_created: usize, elapsed: Duration) -> SearchResult {
        SearchResult {
            total_cost: UNREACHABLE_COST,
            path: None,
            nodes_created,
            elapsed,
        }
    }

    pub fn outcome(&self) -> SearchOutcome {
        if self.path.is_some() {
            SearchOutcome::Success
        } else {
            SearchOutcome::Exhausted
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome() == SearchOutcome::Success
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Formats a path as `[(row, col), ...]`.
pub fn format_path(path: &[Point]) -> String {
    let cells = path
        .iter()
        .map(|p| format!("({}, {})", p.y, p.x))
        .collect::<Vec<String>>()
        .join(", ");
    format!("[{}]", cells)
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "1) Path Cost: {}", self.total_cost)?;
        match &self.path {
            Some(path) => writeln!(f, "2) Path: {}", format_path(path))?,
            None => writeln!(f, "2) Path: NULL")?,
        }
        writeln!(f, "3) Nodes Created: {}", self.nodes_created)?;
        write!(f, "4) Runtime: {:.4} ms", self.elapsed_ms())
    }
}
