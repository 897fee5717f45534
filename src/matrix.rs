use std::fmt;

use itertools::Itertools;

use crate::units::{ColumnsCount, RowsCount};

/// A dense row-major matrix of booleans.
///
/// Either dimension may be zero: a 1 by 1 maze has a 1 by 0 matrix of vertical openings and a
/// 0 by 1 matrix of horizontal openings.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct BoolMatrix {
    rows: RowsCount,
    columns: ColumnsCount,
    cells: Vec<bool>,
}

impl BoolMatrix {
    /// An all `false` matrix.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> BoolMatrix {
        BoolMatrix {
            rows,
            columns,
            cells: vec![false; rows.0 * columns.0],
        }
    }

    /// Build from nested rows, each of which must be `columns` long.
    ///
    /// `columns` is explicit as a matrix with no rows still has a column count.
    pub fn from_rows(columns: ColumnsCount, rows: &[Vec<bool>]) -> Option<BoolMatrix> {
        if rows.iter().any(|row| row.len() != columns.0) {
            return None;
        }
        Some(BoolMatrix {
            rows: RowsCount(rows.len()),
            columns,
            cells: rows.concat(),
        })
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn shape(&self) -> (RowsCount, ColumnsCount) {
        (self.rows, self.columns)
    }

    /// True when the matrix has no entries at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<bool> {
        self.index(row, column).map(|i| self.cells[i])
    }

    /// Set an entry to true. Returns false if the entry is outside the matrix.
    pub fn set(&mut self, row: usize, column: usize) -> bool {
        match self.index(row, column) {
            Some(i) => {
                self.cells[i] = true;
                true
            }
            None => false,
        }
    }

    pub fn count_true(&self) -> usize {
        self.cells.iter().filter(|&&entry| entry).count()
    }

    pub fn all(&self) -> bool {
        self.cells.iter().all(|&entry| entry)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        let width = self.columns.0;
        (0..self.rows.0).map(move |row| &self.cells[row * width..(row + 1) * width])
    }

    /// (row, column) of every true entry in row-major order.
    pub fn iter_true(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.columns.0;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &entry)| entry)
            .map(move |(i, _)| (i / width, i % width))
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter_rows().map(|row| row.to_vec()).collect()
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.rows.0 && column < self.columns.0 {
            Some(row * self.columns.0 + column)
        } else {
            None
        }
    }
}

/// One line per row, `1` for true and `0` for false.
impl fmt::Display for BoolMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.iter_rows() {
            writeln!(f, "{}", row.iter().map(|&entry| if entry { '1' } else { '0' }).join(""))?;
        }
        Ok(())
    }
}
