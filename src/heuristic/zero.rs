use grid_util::point::Point;

use crate::heuristic::Heuristic;

/// Always estimates zero remaining cost, which reduces A* to Dijkstra's algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&mut self, _: &Point, _: &Point) -> f64 {
        0.0
    }
}
