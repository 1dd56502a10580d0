//! Shared fixtures: preset maps and a brute-force reference for least path costs.
#![allow(dead_code)]

use grid_astar::{neumann_neighbours, CostGrid, Point, ValueGrid};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A preset map with a start and goal cell, both given as `(row, col)`.
pub struct Preset {
    pub name: &'static str,
    pub map: &'static str,
    pub start: (i32, i32),
    pub goal: (i32, i32),
}

pub static PRESETS: [Preset; 5] = [
    Preset {
        name: "maze",
        map: "
            1511111111
            1510000001
            1510111101
            1510100101
            1510110101
            1010000101
            1011111101
            1000000001
            1111111111
            0000000000",
        start: (0, 0),
        goal: (8, 0),
    },
    Preset {
        name: "maze inner room",
        map: "
            1511111111
            1510000001
            1510111101
            1510100101
            1510110101
            1010000101
            1011111101
            1000000001
            1111111111
            0000000000",
        start: (0, 0),
        goal: (4, 5),
    },
    Preset {
        name: "corridor",
        map: "
            111
            010
            111",
        start: (0, 0),
        goal: (2, 2),
    },
    Preset {
        name: "weighted field",
        map: "
            1234567
            2919191
            3111111
            4999991
            5111111",
        start: (0, 0),
        goal: (4, 6),
    },
    Preset {
        name: "walled off",
        map: "
            11011
            11011
            00011
            11111",
        start: (0, 0),
        goal: (3, 4),
    },
];

impl Preset {
    pub fn grid(&self) -> CostGrid {
        self.map.parse().unwrap()
    }

    pub fn start(&self) -> Point {
        grid_astar::cell(self.start.0, self.start.1)
    }

    pub fn goal(&self) -> Point {
        grid_astar::cell(self.goal.0, self.goal.1)
    }
}

/// Dijkstra's algorithm over the whole grid with a binary heap, independent of the crate's search.
/// Returns the least total entry cost from `start` to `goal`, or [None] if there is no path.
pub fn reference_cost(grid: &CostGrid, start: Point, goal: Point) -> Option<i64> {
    let mut best = vec![i64::MAX; grid.width() * grid.height()];
    let mut queue = BinaryHeap::new();
    best[grid.get_ix_point(&start)] = 0;
    queue.push(Reverse((0i64, start.y, start.x)));
    while let Some(Reverse((cost, y, x))) = queue.pop() {
        let p = Point::new(x, y);
        if p == goal {
            return Some(cost);
        }
        if cost > best[grid.get_ix_point(&p)] {
            continue;
        }
        for n in neumann_neighbours(&p) {
            if let Some(c) = grid.cost(&n).filter(|c| *c > 0) {
                let next = cost + c as i64;
                let ix = grid.get_ix_point(&n);
                if next < best[ix] {
                    best[ix] = next;
                    queue.push(Reverse((next, n.y, n.x)));
                }
            }
        }
    }
    None
}

/// Asserts that `path` runs from `start` to `goal` in 4-adjacent steps through passable cells and
/// that its cost matches the reported one.
pub fn assert_valid_path(grid: &CostGrid, path: &[Point], start: Point, goal: Point, cost: i64) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for step in path.windows(2) {
        assert!(
            grid_astar::adjacent(&step[0], &step[1]),
            "{:?} -> {:?} is not a unit move",
            step[0],
            step[1]
        );
    }
    assert_eq!(grid.path_cost(path), Some(cost));
}
