use grid_util::point::Point;

use crate::heuristic::{manhattan_distance, Heuristic};

/// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) to the goal.
/// Admissible whenever every passable cell costs at least 1 to enter.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanHeuristic;

impl Heuristic for ManhattanHeuristic {
    fn estimate(&mut self, cell: &Point, goal: &Point) -> f64 {
        manhattan_distance(cell, goal) as f64
    }
}
