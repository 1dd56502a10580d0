use grid_util::point::Point;

use crate::heuristic::Heuristic;

/// The straight-line distance to the goal. Never exceeds the Manhattan distance, so it is
/// admissible wherever [ManhattanHeuristic](crate::ManhattanHeuristic) is, but less informed.
#[derive(Clone, Copy, Debug, Default)]
pub struct EuclideanHeuristic;

impl Heuristic for EuclideanHeuristic {
    fn estimate(&mut self, cell: &Point, goal: &Point) -> f64 {
        let dr = (cell.y - goal.y) as f64;
        let dc = (cell.x - goal.x) as f64;
        (dr * dr + dc * dc).sqrt()
    }
}
