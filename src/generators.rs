use error_chain::bail;
use tracing::{debug, instrument, trace};

use crate::cells::{Cell, Direction};
use crate::errors::*;
use crate::grid::Grid;
use crate::grid_dimensions::GridDimensions;
use crate::maze::Maze;
use crate::random::RandomSource;
use crate::utils;

/// Apply the recursive backtracker maze generation algorithm to a fresh grid.
///
/// A randomized depth first walk from `start`: each cell entered shuffles its four neighbours,
/// then carves a passage into, and walks from, every neighbour still unvisited when its turn
/// comes round. Dead ends backtrack to the most recent cell with unvisited neighbours. Every
/// cell is entered exactly once through exactly one passage, giving a perfect maze.
///
/// Either the whole maze is returned or nothing is: a failing random source aborts the walk
/// and the half carved grid is dropped.
#[instrument(level = "debug", skip(rng))]
pub fn recursive_backtracker<R>(dimensions: GridDimensions, start: Cell, rng: &mut R) -> Result<Maze>
    where R: RandomSource + ?Sized
{
    debug!(rows = dimensions.rows().0, columns = dimensions.columns().0, %start, "generating maze");
    let mut grid = Grid::new(dimensions);
    carve_passages(&mut grid, start, rng)?;

    debug!(openings = grid.openings_count(), "maze generated");
    grid.into_maze(start)
}

/// Pending work for one entered cell: its shuffled neighbours and how many have been looked at.
#[derive(Debug)]
struct Frame {
    cell: Cell,
    neighbours: [Direction; 4],
    next: usize,
}

/// Run the recursive backtracker over `grid` from `start`, in place.
///
/// Uses an explicit stack of frames rather than native recursion so deep walks on large grids
/// cannot exhaust the call stack. The random draws, visit order and openings are those of the
/// textbook recursive version.
///
/// An out of grid `start` is rejected before `grid` is touched. A fully carved `grid` is left
/// as it is, and a partly carved one, left behind by an earlier failure, is rejected. A random
/// source failure is returned as soon as it happens and leaves `grid` partly carved.
pub fn carve_passages<R>(grid: &mut Grid, start: Cell, rng: &mut R) -> Result<()>
    where R: RandomSource + ?Sized
{
    let dimensions = *grid.dimensions();
    if !dimensions.is_valid_cell(start) {
        bail!(ErrorKind::InvalidStartCell(start.row,
                                          start.column,
                                          dimensions.rows().0,
                                          dimensions.columns().0));
    }
    if grid.is_fully_visited() {
        return Ok(());
    }
    if grid.visited_count() > 0 {
        bail!(ErrorKind::UnfinishedGrid(grid.visited_count(), dimensions.size().0));
    }

    let mut stack = Vec::with_capacity(dimensions.size().0);
    stack.push(enter_cell(grid, start, rng)?);

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.neighbours.len() {
            // dead end, backtrack
            stack.pop();
            continue;
        }
        let cell = frame.cell;
        let direction = frame.neighbours[frame.next];
        frame.next += 1;

        let neighbour = match dimensions.neighbour_at_direction(cell, direction) {
            Some(neighbour) if !grid.is_visited(neighbour) => neighbour,
            _ => continue,
        };

        grid.open_wall(cell, direction);
        trace!(from = %cell, to = %neighbour, %direction, "carved passage");
        stack.push(enter_cell(grid, neighbour, rng)?);
    }

    Ok(())
}

fn enter_cell<R>(grid: &mut Grid, cell: Cell, rng: &mut R) -> Result<Frame>
    where R: RandomSource + ?Sized
{
    grid.visit(cell);
    let mut neighbours = Direction::ALL;
    utils::shuffle(&mut neighbours, rng)?;
    Ok(Frame {
        cell,
        neighbours,
        next: 0,
    })
}
