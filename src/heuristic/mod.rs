use crate::error::SelectorError;
use core::fmt;
use grid_util::point::Point;
use std::str::FromStr;

pub mod euclidean;
pub mod manhattan;
pub mod perturbed;
pub mod zero;

pub use euclidean::EuclideanHeuristic;
pub use manhattan::ManhattanHeuristic;
pub use perturbed::PerturbedManhattanHeuristic;
pub use zero::ZeroHeuristic;

/// Estimates the remaining cost from a cell to the goal. Implementations must not depend on the
/// progress of the search; apart from an explicit random source they are pure functions of their
/// arguments.
pub trait Heuristic {
    fn estimate(&mut self, cell: &Point, goal: &Point) -> f64;
}

impl<H: Heuristic + ?Sized> Heuristic for Box<H> {
    fn estimate(&mut self, cell: &Point, goal: &Point) -> f64 {
        (**self).estimate(cell, goal)
    }
}

pub(crate) fn manhattan_distance(p1: &Point, p2: &Point) -> i32 {
    (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
}

/// Selects one of the provided heuristics, numbered as on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    Zero = 1,
    Manhattan = 2,
    Euclidean = 3,
    PerturbedManhattan = 4,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 4] = [
        HeuristicKind::Zero,
        HeuristicKind::Manhattan,
        HeuristicKind::Euclidean,
        HeuristicKind::PerturbedManhattan,
    ];

    /// Builds the heuristic. The perturbed variant is seeded from the operating system.
    pub fn build(self) -> Box<dyn Heuristic> {
        match self {
            HeuristicKind::Zero => Box::new(ZeroHeuristic),
            HeuristicKind::Manhattan => Box::new(ManhattanHeuristic),
            HeuristicKind::Euclidean => Box::new(EuclideanHeuristic),
            HeuristicKind::PerturbedManhattan => Box::new(PerturbedManhattanHeuristic::new()),
        }
    }

    /// Builds the heuristic with a fixed seed for the perturbed variant; the other variants ignore
    /// the seed.
    pub fn build_seeded(self, seed: u64) -> Box<dyn Heuristic> {
        match self {
            HeuristicKind::PerturbedManhattan => {
                Box::new(PerturbedManhattanHeuristic::seeded(seed))
            }
            kind => kind.build(),
        }
    }

    /// Whether the heuristic never overestimates on grids whose passable cells cost at least 1.
    pub fn admissible(self) -> bool {
        self != HeuristicKind::PerturbedManhattan
    }

    pub fn name(self) -> &'static str {
        match self {
            HeuristicKind::Zero => "zero",
            HeuristicKind::Manhattan => "manhattan",
            HeuristicKind::Euclidean => "euclidean",
            HeuristicKind::PerturbedManhattan => "perturbed",
        }
    }
}

impl TryFrom<u8> for HeuristicKind {
    type Error = SelectorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        HeuristicKind::ALL
            .into_iter()
            .find(|kind| *kind as u8 == value)
            .ok_or_else(|| SelectorError::Unknown(value.to_string()))
    }
}

impl FromStr for HeuristicKind {
    type Err = SelectorError;

    /// Accepts either the selector number or the heuristic name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return HeuristicKind::try_from(n);
        }
        HeuristicKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SelectorError::Unknown(s.to_owned()))
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
