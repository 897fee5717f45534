use error_chain::bail;

use crate::cells::{Cell, CellSmallVec, Direction};
use crate::errors::*;
use crate::random::RandomSource;
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};

/// The extent of a rectangular grid of cells, always at least 1 by 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

/// A wall between two adjacent cells, addressed by its slot in one of the openings matrices.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Wall {
    /// Between (row, column) and (row, column + 1).
    Vertical { row: usize, column: usize },
    /// Between (row, column) and (row + 1, column).
    Horizontal { row: usize, column: usize },
}

impl GridDimensions {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<GridDimensions> {
        let RowsCount(r) = rows;
        let ColumnsCount(c) = columns;
        if r == 0 || c == 0 || r.checked_mul(c).is_none() {
            bail!(ErrorKind::InvalidDimensions(r, c));
        }
        Ok(GridDimensions { rows, columns })
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.rows.0 * self.columns.0)
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// Nodes and edges of any spanning tree over the grid.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let NodesCount(cells_count) = self.size();
        (NodesCount(cells_count), EdgesCount(cells_count - 1))
    }

    /// Shape of the matrix of walls between horizontally adjacent cells.
    pub fn vertical_openings_shape(&self) -> (RowsCount, ColumnsCount) {
        (self.rows, ColumnsCount(self.columns.0 - 1))
    }

    /// Shape of the matrix of walls between vertically adjacent cells.
    pub fn horizontal_openings_shape(&self) -> (RowsCount, ColumnsCount) {
        (RowsCount(self.rows.0 - 1), self.columns)
    }

    #[inline]
    pub fn is_valid_cell(&self, cell: Cell) -> bool {
        cell.row < self.rows.0 && cell.column < self.columns.0
    }

    pub fn neighbour_at_direction(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        direction.offset(cell).filter(|neighbour| self.is_valid_cell(*neighbour))
    }

    /// Cells up, left, down and right of `cell` that lie within the grid.
    pub fn neighbours(&self, cell: Cell) -> CellSmallVec {
        Direction::ALL
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(cell, *dir))
            .collect()
    }

    /// The wall separating `cell` from its neighbour in `direction`.
    /// None if either cell is outside the grid.
    pub fn wall_between(&self, cell: Cell, direction: Direction) -> Option<Wall> {
        if !self.is_valid_cell(cell) {
            return None;
        }
        self.neighbour_at_direction(cell, direction).map(|neighbour| match direction {
            Direction::Left => Wall::Vertical { row: cell.row, column: neighbour.column },
            Direction::Right => Wall::Vertical { row: cell.row, column: cell.column },
            Direction::Up => Wall::Horizontal { row: neighbour.row, column: cell.column },
            Direction::Down => Wall::Horizontal { row: cell.row, column: cell.column },
        })
    }

    /// A uniformly random cell of the grid.
    pub fn random_cell<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Cell> {
        let index = rng.gen_index(self.size().0)?;
        Ok(Cell::from_row_major_index(index, self))
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> {
        let columns = self.columns.0;
        (0..self.rows.0).flat_map(move |row| (0..columns).map(move |column| Cell::new(row, column)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ReplaySource;
    use itertools::Itertools;

    fn dims(rows: usize, columns: usize) -> GridDimensions {
        GridDimensions::new(RowsCount(rows), ColumnsCount(columns)).expect("valid dimensions")
    }

    #[test]
    fn zero_extents_are_rejected() {
        for &(r, c) in &[(0, 0), (0, 5), (5, 0)] {
            let err = GridDimensions::new(RowsCount(r), ColumnsCount(c)).unwrap_err();
            match *err.kind() {
                ErrorKind::InvalidDimensions(er, ec) => assert_eq!((er, ec), (r, c)),
                ref other => panic!("unexpected error {:?}", other),
            }
        }
    }

    #[test]
    fn overflowing_cell_count_is_rejected() {
        assert!(GridDimensions::new(RowsCount(usize::MAX), ColumnsCount(2)).is_err());
    }

    #[test]
    fn sizes_and_shapes() {
        let d = dims(5, 10);
        assert_eq!(d.size(), NodesCount(50));
        assert_eq!(d.graph_size(), (NodesCount(50), EdgesCount(49)));
        assert_eq!(d.vertical_openings_shape(), (RowsCount(5), ColumnsCount(9)));
        assert_eq!(d.horizontal_openings_shape(), (RowsCount(4), ColumnsCount(10)));

        let single = dims(1, 1);
        assert_eq!(single.vertical_openings_shape(), (RowsCount(1), ColumnsCount(0)));
        assert_eq!(single.horizontal_openings_shape(), (RowsCount(0), ColumnsCount(1)));
    }

    #[test]
    fn neighbour_cells() {
        let g = dims(10, 10);
        let check_expected_neighbours = |cell, expected: &[Cell]| {
            let found = g.neighbours(cell).iter().cloned().sorted().collect::<Vec<_>>();
            let expected = expected.iter().cloned().sorted().collect::<Vec<_>>();
            assert_eq!(found, expected);
        };
        let gc = |r, c| Cell::new(r, c);

        // corners
        check_expected_neighbours(gc(0, 0), &[gc(1, 0), gc(0, 1)]);
        check_expected_neighbours(gc(0, 9), &[gc(0, 8), gc(1, 9)]);
        check_expected_neighbours(gc(9, 0), &[gc(8, 0), gc(9, 1)]);
        check_expected_neighbours(gc(9, 9), &[gc(8, 9), gc(9, 8)]);

        // sides
        check_expected_neighbours(gc(0, 1), &[gc(0, 0), gc(1, 1), gc(0, 2)]);
        check_expected_neighbours(gc(8, 9), &[gc(7, 9), gc(9, 9), gc(8, 8)]);

        check_expected_neighbours(gc(1, 1), &[gc(0, 1), gc(1, 0), gc(2, 1), gc(1, 2)]);
    }

    #[test]
    fn walls_between_cells() {
        let g = dims(3, 3);
        let c = Cell::new(1, 1);
        assert_eq!(g.wall_between(c, Direction::Left), Some(Wall::Vertical { row: 1, column: 0 }));
        assert_eq!(g.wall_between(c, Direction::Right), Some(Wall::Vertical { row: 1, column: 1 }));
        assert_eq!(g.wall_between(c, Direction::Up), Some(Wall::Horizontal { row: 0, column: 1 }));
        assert_eq!(g.wall_between(c, Direction::Down), Some(Wall::Horizontal { row: 1, column: 1 }));

        assert_eq!(g.wall_between(Cell::new(0, 0), Direction::Up), None);
        assert_eq!(g.wall_between(Cell::new(2, 2), Direction::Right), None);
        assert_eq!(g.wall_between(Cell::new(5, 5), Direction::Left), None);
    }

    #[test]
    fn both_sides_of_a_wall_agree() {
        let g = dims(4, 3);
        for cell in g.iter() {
            for dir in &Direction::ALL {
                if let Some(neighbour) = g.neighbour_at_direction(cell, *dir) {
                    assert_eq!(g.wall_between(cell, *dir), g.wall_between(neighbour, dir.opposite()));
                }
            }
        }
    }

    #[test]
    fn random_cell_uses_row_major_draw() {
        let g = dims(3, 4);
        let mut rng = ReplaySource::new(vec![0, 5, 11]);
        assert_eq!(g.random_cell(&mut rng).unwrap(), Cell::new(0, 0));
        assert_eq!(g.random_cell(&mut rng).unwrap(), Cell::new(1, 1));
        assert_eq!(g.random_cell(&mut rng).unwrap(), Cell::new(2, 3));
        assert!(g.random_cell(&mut rng).is_err());
    }

    #[test]
    fn random_cells_stay_in_the_grid() {
        let g = dims(4, 7);
        let mut rng = crate::random::seeded_rng(17);
        for _ in 0..1000 {
            assert!(g.is_valid_cell(g.random_cell(&mut rng).unwrap()));
        }
    }

    #[test]
    fn cell_iter() {
        let g = dims(2, 2);
        assert_eq!(g.iter().collect::<Vec<Cell>>(),
                   &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]);
    }
}
