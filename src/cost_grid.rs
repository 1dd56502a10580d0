use crate::error::GridError;
use crate::neumann_neighbours;
use core::fmt;
use grid_util::grid::{SimpleValueGrid, ValueGrid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use std::path::Path;
use std::str::FromStr;

/// [CostGrid] stores the cost of entering each cell in a [SimpleValueGrid], where `0` marks an
/// impassable cell. In addition it maintains information about 4-connected components of
/// passable cells using a [UnionFind] structure, which is used to answer reachability queries
/// without searching. Implements [ValueGrid] by building on [SimpleValueGrid].
#[derive(Clone, Debug)]
pub struct CostGrid {
    pub grid: SimpleValueGrid<u32>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for CostGrid {
    fn default() -> CostGrid {
        CostGrid {
            grid: SimpleValueGrid::new(0, 0, 0),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl CostGrid {
    /// Builds a grid from row-major costs. All rows must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<CostGrid, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if width == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(|r| r.len())
            .enumerate()
            .find(|(_, len)| *len != width)
        {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found,
            });
        }
        let mut cost_grid = CostGrid::new(width, height, 0);
        for (y, row) in rows.iter().enumerate() {
            for (x, &cost) in row.iter().enumerate() {
                cost_grid.grid.set(x as i32, y as i32, cost);
            }
        }
        cost_grid.generate_components();
        Ok(cost_grid)
    }

    /// Reads a grid in the digit text format from a file.
    pub fn load(path: &Path) -> Result<CostGrid, GridError> {
        let contents = std::fs::read_to_string(path).map_err(|e| GridError::Io(e.to_string()))?;
        contents.parse()
    }

    pub fn in_bounds(&self, cell: &Point) -> bool {
        self.grid.index_in_bounds(cell.x, cell.y)
    }

    /// Fails with [GridError::OutOfBounds] if the cell lies outside the grid.
    pub fn check_in_bounds(&self, cell: &Point) -> Result<(), GridError> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { cell: *cell })
        }
    }

    /// The cost of entering `cell`, or [None] if it is out of bounds.
    pub fn cost(&self, cell: &Point) -> Option<u32> {
        self.in_bounds(cell).then(|| self.grid.get_point(*cell))
    }

    pub fn is_walkable(&self, cell: &Point) -> bool {
        self.cost(cell).is_some_and(|c| c > 0)
    }

    /// Sets the cost of a cell. Equivalent to [ValueGrid::set_point].
    pub fn set_cost(&mut self, cell: Point, cost: u32) {
        self.set(cell.x, cell.y, cost);
    }

    /// Sums the entry costs of every cell after the first one. Returns [None] if the path contains a
    /// step that is not between 4-adjacent cells or that enters an impassable or out-of-bounds cell.
    pub fn path_cost(&self, path: &[Point]) -> Option<i64> {
        path.windows(2).try_fold(0i64, |total, step| {
            if !crate::adjacent(&step[0], &step[1]) || !self.is_walkable(&step[1]) {
                return None;
            }
            Some(total + self.grid.get_point(step[1]) as i64)
        })
    }

    /// Checks whether `goal` can be reached from `start` by 4-adjacent moves into passable cells.
    /// Like the search, this ignores the cost of the start cell itself. Relies on the components
    /// being up to date, see [update](Self::update).
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if !self.in_bounds(start) || !self.in_bounds(goal) {
            return false;
        }
        if start == goal {
            return true;
        }
        if !self.is_walkable(goal) {
            return false;
        }
        let goal_ix = self.get_ix_point(goal);
        neumann_neighbours(start).iter().any(|n| {
            self.is_walkable(n) && self.components.equiv(self.get_ix_point(n), goal_ix)
        })
    }

    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        let w = self.width();
        let h = self.height();
        info!("Generating connected components for {}x{} grid", w, h);
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                let point = Point::new(x, y);
                if !self.is_walkable(&point) {
                    continue;
                }
                let parent_ix = self.get_ix_point(&point);
                for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.is_walkable(&p) {
                        let ix = self.get_ix_point(&p);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl FromStr for CostGrid {
    type Err = GridError;

    /// Parses lines of single decimal digits, each digit being the cost of one cell. Surrounding
    /// whitespace is stripped from every line and blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, c)| {
                        c.to_digit(10)
                            .ok_or(GridError::InvalidDigit { row, col, found: c })
                    })
                    .collect::<Result<Vec<u32>, GridError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        CostGrid::from_rows(rows)
    }
}

impl fmt::Display for CostGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let single_digit = (0..self.height() as i32)
            .all(|y| (0..self.width() as i32).all(|x| self.grid.get(x, y) < 10));
        let separator = if single_digit { "" } else { " " };
        for y in 0..self.height() as i32 {
            let line = (0..self.width() as i32)
                .map(|x| self.grid.get(x, y).to_string())
                .collect::<Vec<String>>()
                .join(separator);
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl ValueGrid<u32> for CostGrid {
    fn new(width: usize, height: usize, default_value: u32) -> Self {
        let mut cost_grid = CostGrid {
            grid: SimpleValueGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        if default_value > 0 {
            cost_grid.generate_components();
        }
        cost_grid
    }
    fn get(&self, x: i32, y: i32) -> u32 {
        self.grid.get(x, y)
    }
    /// Updates a cell cost. Joins newly connected components and flags the components as dirty
    /// if a passable cell becomes impassable, as that may split a component apart.
    fn set(&mut self, x: i32, y: i32, cost: u32) {
        let p = Point::new(x, y);
        let was_walkable = self.grid.get(x, y) > 0;
        self.grid.set(x, y, cost);
        if cost == 0 {
            if was_walkable {
                self.components_dirty = true;
            }
        } else {
            let p_ix = self.grid.get_ix_point(&p);
            for n in neumann_neighbours(&p) {
                if self.is_walkable(&n) {
                    self.components.union(p_ix, self.grid.get_ix_point(&n));
                }
            }
        }
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
