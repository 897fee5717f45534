use bit_set::BitSet;
use error_chain::bail;

use crate::cells::{Cell, Direction};
use crate::errors::*;
use crate::grid_dimensions::{GridDimensions, Wall};
use crate::matrix::BoolMatrix;
use crate::maze::Maze;

/// The mutable state of one maze generation: which cells have been visited and which walls
/// have been knocked through.
///
/// Every wall starts closed and every cell unvisited. Cells are only ever marked visited and
/// walls only ever opened, and only by the generators in this crate.
#[derive(Debug, Clone)]
pub struct Grid {
    dimensions: GridDimensions,
    visited: BitSet,
    verticals: BoolMatrix,
    horizontals: BoolMatrix,
}

impl Grid {
    pub fn new(dimensions: GridDimensions) -> Grid {
        let (v_rows, v_columns) = dimensions.vertical_openings_shape();
        let (h_rows, h_columns) = dimensions.horizontal_openings_shape();
        Grid {
            dimensions,
            visited: BitSet::with_capacity(dimensions.size().0),
            verticals: BoolMatrix::new(v_rows, v_columns),
            horizontals: BoolMatrix::new(h_rows, h_columns),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> &GridDimensions {
        &self.dimensions
    }

    /// Cells outside the grid are never visited.
    #[inline]
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.dimensions.is_valid_cell(cell) &&
        self.visited.contains(cell.row_major_index(&self.dimensions))
    }

    /// Mark a cell visited. Returns true if it was not visited before.
    pub(crate) fn visit(&mut self, cell: Cell) -> bool {
        if !self.dimensions.is_valid_cell(cell) {
            return false;
        }
        self.visited.insert(cell.row_major_index(&self.dimensions))
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn is_fully_visited(&self) -> bool {
        self.visited_count() == self.dimensions.size().0
    }

    /// The visited flags as a rows by columns matrix.
    pub fn visited(&self) -> BoolMatrix {
        let mut matrix = BoolMatrix::new(self.dimensions.rows(), self.dimensions.columns());
        for index in self.visited.iter() {
            let cell = Cell::from_row_major_index(index, &self.dimensions);
            matrix.set(cell.row, cell.column);
        }
        matrix
    }

    /// Knock through the wall between `cell` and its neighbour in `direction`.
    /// Returns false if there is no such wall inside the grid.
    pub(crate) fn open_wall(&mut self, cell: Cell, direction: Direction) -> bool {
        match self.dimensions.wall_between(cell, direction) {
            Some(Wall::Vertical { row, column }) => self.verticals.set(row, column),
            Some(Wall::Horizontal { row, column }) => self.horizontals.set(row, column),
            None => false,
        }
    }

    #[inline]
    pub fn verticals(&self) -> &BoolMatrix {
        &self.verticals
    }

    #[inline]
    pub fn horizontals(&self) -> &BoolMatrix {
        &self.horizontals
    }

    pub fn openings_count(&self) -> usize {
        self.verticals.count_true() + self.horizontals.count_true()
    }

    /// Hand the openings over as a finished maze started from `start`.
    ///
    /// Fails unless every cell has been visited.
    pub fn into_maze(self, start: Cell) -> Result<Maze> {
        if !self.dimensions.is_valid_cell(start) {
            bail!(ErrorKind::InvalidStartCell(start.row,
                                              start.column,
                                              self.dimensions.rows().0,
                                              self.dimensions.columns().0));
        }
        if !self.is_fully_visited() {
            bail!(ErrorKind::UnfinishedGrid(self.visited_count(), self.dimensions.size().0));
        }
        Ok(Maze::new(self.dimensions, start, self.verticals, self.horizontals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{ColumnsCount, RowsCount};

    fn grid(rows: usize, columns: usize) -> Grid {
        Grid::new(GridDimensions::new(RowsCount(rows), ColumnsCount(columns)).unwrap())
    }

    #[test]
    fn starts_closed_and_unvisited() {
        let g = grid(3, 4);
        assert_eq!(g.visited_count(), 0);
        assert_eq!(g.openings_count(), 0);
        assert_eq!(g.verticals().shape(), (RowsCount(3), ColumnsCount(3)));
        assert_eq!(g.horizontals().shape(), (RowsCount(2), ColumnsCount(4)));
        assert_eq!(g.visited().to_rows(), vec![vec![false; 4]; 3]);
    }

    #[test]
    fn visiting_is_monotonic() {
        let mut g = grid(2, 2);
        let c = Cell::new(1, 0);
        assert!(g.visit(c));
        assert!(!g.visit(c));
        assert!(g.is_visited(c));
        assert!(!g.is_visited(Cell::new(0, 0)));
        assert_eq!(g.visited().to_rows(), vec![vec![false, false], vec![true, false]]);
    }

    #[test]
    fn cells_outside_the_grid() {
        let mut g = grid(2, 2);
        assert!(!g.visit(Cell::new(2, 0)));
        assert!(!g.is_visited(Cell::new(2, 0)));
        assert_eq!(g.visited_count(), 0);
    }

    #[test]
    fn full_visit() {
        let mut g = grid(2, 3);
        let cells = g.dimensions().iter().collect::<Vec<_>>();
        for cell in cells {
            assert!(!g.is_fully_visited());
            g.visit(cell);
        }
        assert!(g.is_fully_visited());
        assert!(g.visited().all());
    }

    #[test]
    fn opening_walls_in_each_direction() {
        let mut g = grid(3, 3);
        let c = Cell::new(1, 1);
        assert!(g.open_wall(c, Direction::Left));
        assert!(g.open_wall(c, Direction::Right));
        assert!(g.open_wall(c, Direction::Up));
        assert!(g.open_wall(c, Direction::Down));

        assert_eq!(g.verticals().iter_true().collect::<Vec<_>>(), vec![(1, 0), (1, 1)]);
        assert_eq!(g.horizontals().iter_true().collect::<Vec<_>>(), vec![(0, 1), (1, 1)]);
        assert_eq!(g.openings_count(), 4);
    }

    #[test]
    fn boundary_walls_cannot_open() {
        let mut g = grid(2, 2);
        assert!(!g.open_wall(Cell::new(0, 0), Direction::Up));
        assert!(!g.open_wall(Cell::new(0, 0), Direction::Left));
        assert!(!g.open_wall(Cell::new(1, 1), Direction::Down));
        assert!(!g.open_wall(Cell::new(1, 1), Direction::Right));
        assert_eq!(g.openings_count(), 0);
    }

    #[test]
    fn only_a_fully_visited_grid_becomes_a_maze() {
        let mut g = grid(1, 3);
        g.visit(Cell::new(0, 1));
        match *g.clone().into_maze(Cell::new(0, 0)).unwrap_err().kind() {
            ErrorKind::UnfinishedGrid(1, 3) => (),
            ref other => panic!("unexpected error {:?}", other),
        }

        g.visit(Cell::new(0, 0));
        g.visit(Cell::new(0, 2));
        g.open_wall(Cell::new(0, 1), Direction::Left);
        g.open_wall(Cell::new(0, 1), Direction::Right);
        assert!(g.clone().into_maze(Cell::new(0, 3)).is_err());
        let maze = g.into_maze(Cell::new(0, 0)).unwrap();
        assert!(maze.is_perfect());
    }

    #[test]
    fn opening_from_either_side_is_the_same_wall() {
        let mut g = grid(2, 2);
        g.open_wall(Cell::new(0, 0), Direction::Right);
        g.open_wall(Cell::new(0, 1), Direction::Left);
        assert_eq!(g.openings_count(), 1);
    }
}
