use grid_astar::{cell, CostGrid, HeuristicKind, Pathfinder};

// Runs every heuristic on the same weighted maze and prints the reports side by side. Compare the
// node counts; the perturbed variant may also return a more expensive path.

const MAZE: &str = "
    1511111111
    1510000001
    1510111101
    1510100101
    1510110101
    1010000101
    1011111101
    1000000001
    1111111111
    0000000000";

fn main() {
    env_logger::init();
    let grid: CostGrid = MAZE.parse().unwrap();
    let pathfinder = Pathfinder::new(&grid);
    for kind in HeuristicKind::ALL {
        println!("{} heuristic:", kind);
        let result = pathfinder.search(cell(0, 0), cell(4, 5), &mut kind.build_seeded(0));
        println!("{}\n", result);
    }
}
