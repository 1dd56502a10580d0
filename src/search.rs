//! A* over a [CostGrid] with an insertion-ordered open list.
//!
//! The open set is a plain list of node indices that is scanned linearly for the smallest
//! f-cost, taking the first minimum in insertion order. Nodes dominated by a cheaper-or-equal
//! entry for the same cell are never inserted, but entries that are superseded later stay in the
//! list (lazy deletion). Both rules decide which of several equally cheap paths is returned.
use std::time::Instant;

use fxhash::FxHashSet;
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use itertools::Itertools;
use log::{debug, trace, warn};

use crate::cost_grid::CostGrid;
use crate::heuristic::Heuristic;
use crate::neumann_neighbours;
use crate::result::SearchResult;

/// A cell discovered during a search. All nodes of a search live in one arena and `parent` is an
/// index into it, so parent links always form a tree rooted at the start node.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub position: Point,
    pub parent: Option<usize>,
    /// Accumulated entry cost from the start
    pub g: i64,
    /// Heuristic estimate of the remaining cost
    pub h: f64,
    pub f: f64,
}

impl SearchNode {
    fn new(position: Point, parent: Option<usize>) -> SearchNode {
        SearchNode {
            position,
            parent,
            g: 0,
            h: 0.0,
            f: 0.0,
        }
    }

    /// Whether both nodes stand for the same cell. This is the only notion of node identity used
    /// for open and closed set membership; costs are not compared.
    pub fn same_position(&self, other: &SearchNode) -> bool {
        self.position == other.position
    }
}

/// Walks the parent links from `index` back to the start and returns the cells in start to
/// goal order.
fn reverse_path(nodes: &[SearchNode], index: usize) -> Vec<Point> {
    let mut path: Vec<Point> = std::iter::successors(Some(index), |&i| nodes[i].parent)
        .map(|i| nodes[i].position)
        .collect();
    path.reverse();
    path
}

/// Position within `open` of the first node with minimal f-cost.
fn cheapest(nodes: &[SearchNode], open: &[usize]) -> Option<usize> {
    open.iter()
        .position_min_by(|&&a, &&b| nodes[a].f.total_cmp(&nodes[b].f))
}

/// Runs A* searches on a borrowed [CostGrid]. The grid is only read, so one grid can back any
/// number of pathfinders, including ones on other threads.
#[derive(Clone, Copy, Debug)]
pub struct Pathfinder<'a> {
    grid: &'a CostGrid,
}

impl<'a> Pathfinder<'a> {
    pub fn new(grid: &'a CostGrid) -> Pathfinder<'a> {
        Pathfinder { grid }
    }

    pub fn grid(&self) -> &'a CostGrid {
        self.grid
    }

    /// Computes a least-cost path from `start` to `goal`, moving only west, east, north and south
    /// into cells with a positive cost. Entering a cell adds its cost; the start cell's own cost is
    /// never paid. The path is optimal if the heuristic is admissible.
    ///
    /// Both cells are expected to lie inside the grid; see
    /// [check_in_bounds](CostGrid::check_in_bounds). An unreachable goal yields a result with
    /// cost [UNREACHABLE_COST](crate::UNREACHABLE_COST) and no path.
    pub fn search<H>(&self, start: Point, goal: Point, heuristic: &mut H) -> SearchResult
    where
        H: Heuristic + ?Sized,
    {
        let timer = Instant::now();
        debug!("Searching from {} to {}", start, goal);

        // Every node ever constructed stays in the arena, so its length is the allocation count.
        let mut nodes: Vec<SearchNode> = vec![SearchNode::new(start, None)];
        let mut open: Vec<usize> = vec![0];
        let mut closed: FxHashSet<Point> = FxHashSet::default();

        while let Some(open_ix) = cheapest(&nodes, &open) {
            let current = open.remove(open_ix);
            let position = nodes[current].position;
            let current_g = nodes[current].g;
            closed.insert(position);

            if position == goal {
                let path = reverse_path(&nodes, current);
                let elapsed = timer.elapsed();
                debug!(
                    "Reached {} with cost {} after creating {} nodes",
                    goal,
                    current_g,
                    nodes.len()
                );
                return SearchResult::success(current_g, path, nodes.len(), elapsed);
            }
            trace!(
                "Expanding {} (g = {}, f = {}), {} open",
                position,
                current_g,
                nodes[current].f,
                open.len()
            );

            let first_child = nodes.len();
            for neighbour in neumann_neighbours(&position) {
                if self.grid.is_walkable(&neighbour) {
                    nodes.push(SearchNode::new(neighbour, Some(current)));
                }
            }

            for child in first_child..nodes.len() {
                let child_pos = nodes[child].position;
                if closed.contains(&child_pos) {
                    continue;
                }
                let g = current_g + self.grid.grid.get_point(child_pos) as i64;
                let h = heuristic.estimate(&child_pos, &goal);
                let node = &mut nodes[child];
                node.g = g;
                node.h = h;
                node.f = g as f64 + h;

                let dominated = open
                    .iter()
                    .any(|&ix| nodes[ix].same_position(&nodes[child]) && nodes[ix].g <= g);
                if !dominated {
                    open.push(child);
                }
            }
        }

        let elapsed = timer.elapsed();
        warn!(
            "Open set exhausted without reaching {} from {}, {} nodes created",
            goal,
            start,
            nodes.len()
        );
        SearchResult::exhausted(nodes.len(), elapsed)
    }
}

/// Runs a single search without keeping a [Pathfinder] around.
pub fn search<H>(grid: &CostGrid, start: Point, goal: Point, heuristic: &mut H) -> SearchResult
where
    H: Heuristic + ?Sized,
{
    Pathfinder::new(grid).search(start, goal, heuristic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cell, HeuristicKind, ManhattanHeuristic, ZeroHeuristic, UNREACHABLE_COST};
    use fxhash::FxHashMap;

    /// Looks estimates up in a table, defaulting to zero. Lets tests force an expansion order.
    struct TableHeuristic(FxHashMap<Point, f64>);

    impl Heuristic for TableHeuristic {
        fn estimate(&mut self, cell: &Point, _: &Point) -> f64 {
            self.0.get(cell).copied().unwrap_or(0.0)
        }
    }

    fn grid(rows: Vec<Vec<u32>>) -> CostGrid {
        CostGrid::from_rows(rows).unwrap()
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let cost_grid = grid(vec![vec![3, 1], vec![1, 1]]);
        for kind in HeuristicKind::ALL {
            let start = cell(0, 0);
            let result = search(&cost_grid, start, start, &mut kind.build_seeded(0));
            assert_eq!(result.total_cost, 0);
            assert_eq!(result.path, Some(vec![start]));
            assert_eq!(result.nodes_created, 1);
        }
    }

    /// The only route through the middle row is the single open cell.
    #[test]
    fn solve_corridor_problem() {
        let cost_grid = grid(vec![vec![1, 1, 1], vec![0, 1, 0], vec![1, 1, 1]]);
        let result = search(&cost_grid, cell(0, 0), cell(2, 2), &mut ManhattanHeuristic);
        assert_eq!(result.total_cost, 4);
        assert_eq!(
            result.path,
            Some(vec![cell(0, 0), cell(0, 1), cell(1, 1), cell(2, 1), cell(2, 2)])
        );
        assert_eq!(result.nodes_created, 11);
    }

    /// With equal f-costs the node inserted first is expanded first, so the path heads east
    /// before south, and the second route into the goal is dominated and dropped.
    #[test]
    fn ties_follow_insertion_order() {
        let cost_grid = CostGrid::new(2, 2, 1);
        let result = search(&cost_grid, cell(0, 0), cell(1, 1), &mut ZeroHeuristic);
        assert_eq!(result.total_cost, 2);
        assert_eq!(result.path, Some(vec![cell(0, 0), cell(0, 1), cell(1, 1)]));
        assert_eq!(result.nodes_created, 7);
    }

    #[test]
    fn blocked_goal_is_unreachable() {
        let cost_grid = grid(vec![vec![1, 1], vec![1, 0]]);
        let result = search(&cost_grid, cell(0, 0), cell(1, 1), &mut ManhattanHeuristic);
        assert_eq!(result.total_cost, UNREACHABLE_COST);
        assert_eq!(result.path, None);
        assert_eq!(result.nodes_created, 5);
    }

    /// The start cell's cost is never paid, even when it is impassable.
    #[test]
    fn start_on_blocked_cell() {
        let cost_grid = grid(vec![vec![0, 2, 3]]);
        let result = search(&cost_grid, cell(0, 0), cell(0, 2), &mut ManhattanHeuristic);
        assert_eq!(result.total_cost, 5);
        assert_eq!(result.path, Some(vec![cell(0, 0), cell(0, 1), cell(0, 2)]));
    }

    #[test]
    fn avoids_expensive_cells() {
        let cost_grid = grid(vec![vec![1, 9, 1], vec![1, 1, 1]]);
        let result = search(&cost_grid, cell(0, 0), cell(0, 2), &mut ZeroHeuristic);
        assert_eq!(result.total_cost, 4);
        assert_eq!(
            result.path,
            Some(vec![cell(0, 0), cell(1, 0), cell(1, 1), cell(1, 2), cell(0, 2)])
        );
        assert_eq!(result.nodes_created, 10);
    }

    /// An inconsistent heuristic makes the search find cheaper routes to cells that are already
    /// open. The superseded entries stay in the open list and are expanded once more, which only
    /// costs extra nodes.
    #[test]
    fn superseded_entries_stay_open() {
        let cost_grid = grid(vec![vec![1, 5, 1], vec![1, 1, 1]]);
        let table = [
            (cell(0, 1), 0.0),
            (cell(1, 0), 10.0),
            (cell(0, 2), 100.0),
            (cell(1, 1), 10.0),
            (cell(1, 2), 10.0),
        ];
        let mut heuristic = TableHeuristic(table.into_iter().collect());
        let result = search(&cost_grid, cell(0, 0), cell(0, 2), &mut heuristic);
        assert_eq!(result.total_cost, 4);
        assert_eq!(
            result.path,
            Some(vec![cell(0, 0), cell(1, 0), cell(1, 1), cell(1, 2), cell(0, 2)])
        );
        assert_eq!(result.nodes_created, 16);
    }

    #[test]
    fn same_position_ignores_costs() {
        let mut a = SearchNode::new(cell(1, 2), None);
        let b = SearchNode::new(cell(1, 2), Some(0));
        a.g = 7;
        a.f = 9.0;
        assert!(a.same_position(&b));
        assert!(!a.same_position(&SearchNode::new(cell(2, 1), None)));
    }

    #[test]
    fn boxed_heuristic_through_pathfinder() {
        let cost_grid = grid(vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]);
        let pathfinder = Pathfinder::new(&cost_grid);
        let mut heuristic = HeuristicKind::Euclidean.build();
        let result = pathfinder.search(cell(0, 0), cell(2, 2), &mut heuristic);
        assert_eq!(result.total_cost, 4);
        assert!(result.is_success());
    }
}
