use clap::Parser;
use grid_astar::{
    cell, search, CostGrid, GridError, HeuristicKind, Point, SearchResult, ValueGrid,
};
use log::info;
use std::error::Error;
use std::io::Read;
use std::path::PathBuf;

/// Finds a least-cost path across a grid of digit costs, where 0 marks an impassable cell.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Map file with one row of digits per line, or `-` to read it from stdin
    map: PathBuf,
    /// Start cell as ROW,COL
    #[clap(short, long, value_parser = parse_cell)]
    start: Point,
    /// Goal cell as ROW,COL
    #[clap(short, long, value_parser = parse_cell)]
    goal: Point,
    /// 1 = zero, 2 = manhattan, 3 = euclidean, 4 = perturbed manhattan
    #[clap(long = "heuristic", short = 'H', default_value = "2")]
    heuristic: HeuristicKind,
    /// Seed for the perturbed heuristic
    #[clap(long)]
    seed: Option<u64>,
}

fn parse_cell(s: &str) -> Result<Point, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {:?}", s))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid coordinate {:?}: {}", v, e))
    };
    Ok(cell(parse(row)?, parse(col)?))
}

fn read_map(path: &PathBuf) -> Result<CostGrid, GridError> {
    if path.as_os_str() == "-" {
        let mut contents = String::new();
        std::io::stdin()
            .read_to_string(&mut contents)
            .map_err(|e| GridError::Io(e.to_string()))?;
        contents.parse()
    } else {
        CostGrid::load(path)
    }
}

/// Loads the map, validates the endpoints and runs the search.
fn run(args: &Args) -> Result<SearchResult, Box<dyn Error>> {
    let grid = read_map(&args.map)?;
    grid.check_in_bounds(&args.start)?;
    grid.check_in_bounds(&args.goal)?;
    info!(
        "Loaded {}x{} grid, goal {} from start",
        grid.height(),
        grid.width(),
        if grid.reachable(&args.start, &args.goal) {
            "reachable"
        } else {
            "unreachable"
        }
    );

    let mut heuristic = match args.seed {
        Some(seed) => args.heuristic.build_seeded(seed),
        None => args.heuristic.build(),
    };
    info!("Using {} heuristic", args.heuristic);
    Ok(search(&grid, args.start, args.goal, &mut heuristic))
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(result) => println!("{}", result),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_file(name: &str, contents: &str) -> PathBuf {
        let file_name = format!("grid_astar_{}_{}.txt", name, std::process::id());
        let path = std::env::temp_dir().join(file_name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn args(map: PathBuf, start: &str, goal: &str) -> Args {
        Args::parse_from(["grid_astar", map.to_str().unwrap(), "-s", start, "-g", goal])
    }

    #[test]
    fn out_of_bounds_goal_reports_display_message() {
        let map = map_file("bounds", "111\n010\n111\n");
        let err = run(&args(map, "0,0", "10,0")).unwrap_err();
        assert_eq!(err.to_string(), "Cell (10, 0) is outside the grid");
    }

    #[test]
    fn invalid_map_reports_display_message() {
        let map = map_file("digits", "11\n1x\n");
        let err = run(&args(map, "0,0", "1,1")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid cost 'x' at (1, 1)");
    }

    #[test]
    fn runs_search_on_map_file() {
        let map = map_file("corridor", "111\n010\n111\n");
        let result = run(&args(map, "0,0", "2,2")).unwrap();
        assert_eq!(result.total_cost, 4);
    }

    #[test]
    fn parses_cells_as_row_col() {
        assert_eq!(parse_cell("3, 5"), Ok(cell(3, 5)));
        assert!(parse_cell("3;5").is_err());
        assert!(parse_cell("a,5").is_err());
    }
}
