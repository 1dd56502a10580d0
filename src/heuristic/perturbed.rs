use grid_util::point::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::heuristic::{manhattan_distance, Heuristic};

/// Offsets added to the Manhattan distance; zero is deliberately absent.
pub const PERTURBATIONS: [i32; 6] = [-3, -2, -1, 1, 2, 3];

/// The Manhattan distance plus an offset drawn uniformly from [PERTURBATIONS], floored at zero.
/// Every call draws a fresh offset, so repeated estimates for the same cell differ. The result
/// can overestimate, which means paths found with it need not be optimal.
///
/// This is the only source of non-determinism in the crate. Use [seeded](Self::seeded) or
/// [from_rng](Self::from_rng) for reproducible runs.
#[derive(Clone, Debug)]
pub struct PerturbedManhattanHeuristic<R = StdRng> {
    rng: R,
}

impl PerturbedManhattanHeuristic<StdRng> {
    /// Seeds the random source from the operating system.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for PerturbedManhattanHeuristic<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PerturbedManhattanHeuristic<R> {
    pub fn from_rng(rng: R) -> Self {
        PerturbedManhattanHeuristic { rng }
    }
}

impl<R: Rng> Heuristic for PerturbedManhattanHeuristic<R> {
    fn estimate(&mut self, cell: &Point, goal: &Point) -> f64 {
        let offset = PERTURBATIONS[self.rng.gen_range(0..PERTURBATIONS.len())];
        (manhattan_distance(cell, goal) + offset).max(0) as f64
    }
}
