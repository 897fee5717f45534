use std::{
    fs::File,
    io,
    io::prelude::*,
};

use docopt::Docopt;
use serde_derive::Deserialize;
use smallvec::smallvec;
use tracing::{debug, info};

use mazes::{
    cells::{Cell, CellSmallVec},
    generators,
    grid_dimensions::GridDimensions,
    grid_displays::{GridDisplay, MazeText, PathDisplay, StartEndPointsDisplay},
    maze::Maze,
    pathing,
    random,
    units,
};

const USAGE: &str = "Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver [(--grid-size=<n>|[--rows=<r> --columns=<c>])] [--start-row=<sr> --start-column=<sc>] [--seed=<s>] [--goal=<kind>] [--show-distances|--show-path] [--text-out=<path>] [--save-edges=<path>] [--verbose]

Options:
    -h --help              Show this screen.
    --grid-size=<n>        The grid is n * n cells.
    --rows=<r>             Rows of cells in an r*c grid [default: 5].
    --columns=<c>          Columns of cells in an r*c grid [default: 10].
    --start-row=<sr>       Row of the cell the maze is carved from. Random if not given.
    --start-column=<sc>    Column of the cell the maze is carved from. Random if not given.
    --seed=<s>             Seed for the random number generator. Drawn from entropy and logged if not given.
    --goal=<kind>          Mark a goal cell: 'random' for any cell or 'furthest' for the cell furthest from the start.
    --show-distances       Show the distance from the start to every other cell.
    --show-path            Show the path from the start to the goal, the furthest cell if no goal is given.
    --text-out=<path>      Output file path for the text drawing of the maze instead of stdout.
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based row-major vertex indices.
    --verbose              Debug logging.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_rows: usize,
    flag_columns: usize,
    flag_start_row: Option<usize>,
    flag_start_column: Option<usize>,
    flag_seed: Option<u64>,
    flag_goal: String,
    flag_show_distances: bool,
    flag_show_path: bool,
    flag_text_out: String,
    flag_save_edges: String,
    flag_verbose: bool,
}

// The driver's own errors, chaining to the library's.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Mazes(::mazes::errors::Error, ::mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum GoalPlacement {
    Random,
    Furthest,
}

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;
    setup_logging(args.flag_verbose);

    let (rows, columns) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_rows, args.flag_columns)
    };
    let dimensions = GridDimensions::new(units::RowsCount(rows), units::ColumnsCount(columns))?;

    let seed = args.flag_seed.unwrap_or_else(random::entropy_seed);
    info!(seed, rows, columns, "generating maze");
    let mut rng = random::seeded_rng(seed);

    let start = match (args.flag_start_row, args.flag_start_column) {
        (Some(row), Some(column)) => Cell::new(row, column),
        (None, None) => dimensions.random_cell(&mut rng)?,
        _ => return Err("--start-row and --start-column must be given together".into()),
    };

    let maze = generators::recursive_backtracker(dimensions, start, &mut rng)
        .chain_err(|| format!("Failed to generate a maze from {}", start))?;
    debug!(perfect = maze.is_perfect(), openings = maze.openings_count(), "maze ready");

    let goal = match goal_placement(&args.flag_goal)? {
        Some(GoalPlacement::Random) => Some(dimensions.random_cell(&mut rng)?),
        Some(GoalPlacement::Furthest) => furthest_cell(&maze, start),
        None => None,
    };
    if let Some(goal_cell) = goal {
        info!(%start, goal = %goal_cell, "placed goal");
    }

    let text = render_maze_text(&maze, &args, start, goal);
    if args.flag_text_out.is_empty() {
        println!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze, &args.flag_save_edges)?;
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let log_filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };
    tracing_subscriber::fmt::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter)
        .init();
}

fn goal_placement(flag: &str) -> Result<Option<GoalPlacement>> {
    match flag {
        "" => Ok(None),
        "random" => Ok(Some(GoalPlacement::Random)),
        "furthest" => Ok(Some(GoalPlacement::Furthest)),
        other => Err(format!("Unknown goal placement '{}', expected 'random' or 'furthest'", other).into()),
    }
}

fn furthest_cell(maze: &Maze, from: Cell) -> Option<Cell> {
    pathing::Distances::new(maze, from).map(|distances| distances.furthest_cell())
}

/// Decide what goes in the cell bodies of the text drawing:
/// - distances from the start to every cell
/// - the path from the start to the goal, or to the furthest cell without a goal
/// - otherwise just the start and goal markers
fn render_maze_text(maze: &Maze, maze_args: &MazeArgs, start: Cell, goal: Option<Cell>) -> String {

    let distances = pathing::Distances::new(maze, start);

    let grid_display: Box<dyn GridDisplay> = match distances {
        Some(distances) if maze_args.flag_show_distances => Box::new(distances),
        Some(distances) if maze_args.flag_show_path => {
            let end = goal.unwrap_or_else(|| distances.furthest_cell());
            let path = pathing::shortest_path(maze, &distances, end).unwrap_or_else(Vec::new);
            Box::new(PathDisplay::new(&path))
        }
        _ => {
            let ends: CellSmallVec = goal.into_iter().collect();
            Box::new(StartEndPointsDisplay::new(smallvec![start], ends))
        }
    };

    MazeText::new(maze, Some(grid_display.as_ref())).to_string()
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze: &Maze, file_path: &str) -> Result<()> {
    let f = File::create(file_path)
        .chain_err(|| format!("Failed to create maze graph file {}", file_path))?;
    let mut writer = io::BufWriter::new(f);
    maze.write_edges(&mut writer)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;
    writer.flush()
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;
    Ok(())
}
