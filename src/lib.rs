//! # grid_astar
//!
//! Least-cost pathfinding on a weighted, 4-connected grid using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). Every cell carries the cost of
//! entering it, with `0` marking an impassable cell. The heuristic is pluggable through the
//! [Heuristic] trait; four policies are provided, ranging from the zero heuristic (which turns the
//! search into Dijkstra's algorithm) to a deliberately inadmissible, randomly perturbed Manhattan
//! distance for studying how A* degrades under heuristic error.
//!
//! A search returns a [SearchResult] holding the path cost, the path itself, the number of search
//! nodes that were allocated and the wall-clock time spent.
//!
//! Cells are [Point]s where `x` is the column and `y` is the row; use [cell] to build one from a
//! `(row, col)` pair.
pub mod cost_grid;
pub mod error;
pub mod heuristic;
pub mod result;
pub mod search;

pub use cost_grid::CostGrid;
pub use error::{GridError, SelectorError};
pub use grid_util::grid::ValueGrid;
pub use grid_util::point::Point;
pub use heuristic::{
    EuclideanHeuristic, Heuristic, HeuristicKind, ManhattanHeuristic,
    PerturbedManhattanHeuristic, ZeroHeuristic,
};
pub use result::{SearchOutcome, SearchResult, UNREACHABLE_COST};
pub use search::{search, Pathfinder};

/// Offsets `(dx, dy)` of the four neighbours in expansion order: west, east, north, south.
/// The order decides which of several equally cheap paths is returned.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Builds the [Point] for the cell at `row`, `col`.
pub fn cell(row: i32, col: i32) -> Point {
    Point::new(col, row)
}

/// The neighbours of `point` in [NEIGHBOUR_OFFSETS] order, without bounds checks.
pub fn neumann_neighbours(point: &Point) -> [Point; 4] {
    NEIGHBOUR_OFFSETS.map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
}

/// Checks whether two cells differ by exactly one of the four unit offsets.
pub fn adjacent(a: &Point, b: &Point) -> bool {
    (a.x - b.x).abs() + (a.y - b.y).abs() == 1
}
