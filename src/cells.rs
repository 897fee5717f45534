use smallvec::SmallVec;
use std::convert::From;
use std::fmt;

use crate::grid_dimensions::GridDimensions;

/// A grid position. Row 0 is the top of the grid, column 0 the left side.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

pub type CellSmallVec = SmallVec<[Cell; 4]>;

#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Cell {
    pub fn new(row: usize, column: usize) -> Cell {
        Cell { row, column }
    }

    /// Inverse of `row_major_index`. The index is not checked against the grid size.
    #[inline]
    pub fn from_row_major_index(index: usize, dimensions: &GridDimensions) -> Cell {
        let width = dimensions.columns().0;
        Cell::new(index / width, index % width)
    }

    #[inline]
    pub fn row_major_index(&self, dimensions: &GridDimensions) -> usize {
        self.row * dimensions.columns().0 + self.column
    }
}

impl From<(usize, usize)> for Cell {
    fn from(row_column_pair: (usize, usize)) -> Cell {
        Cell::new(row_column_pair.0, row_column_pair.1)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl Direction {
    /// Neighbour listing order before any shuffling.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
        }
    }

    /// Creates a new `Cell` offset 1 cell away in this direction.
    /// Returns None if the cell would have a negative coordinate; the far grid
    /// boundaries are the business of `GridDimensions`.
    pub fn offset(self, cell: Cell) -> Option<Cell> {
        let Cell { row, column } = cell;
        match self {
            Direction::Up => row.checked_sub(1).map(|r| Cell::new(r, column)),
            Direction::Left => column.checked_sub(1).map(|c| Cell::new(row, c)),
            Direction::Down => row.checked_add(1).map(|r| Cell::new(r, column)),
            Direction::Right => column.checked_add(1).map(|c| Cell::new(row, c)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match *self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
        };
        f.write_str(label)
    }
}
