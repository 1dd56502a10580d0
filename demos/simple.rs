use grid_astar::{cell, search, CostGrid, ManhattanHeuristic};

// In this example a path is found on a 3x3 grid with costs
//  ___
// |1 1 1|
// |0 1 0|
// |1 1 1|
//  ___
// where a 0 marks an impassable cell. The start is the top left corner and the goal the bottom
// right corner, so the path has to pass through the single opening in the middle row.

fn main() {
    let grid: CostGrid = "111\n010\n111".parse().unwrap();
    println!("{}", grid);
    let result = search(&grid, cell(0, 0), cell(2, 2), &mut ManhattanHeuristic);
    println!("{}", result);
}
