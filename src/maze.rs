use std::io::Write;

use error_chain::bail;
use petgraph::algo;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::{Cell, CellSmallVec, Direction};
use crate::errors::*;
use crate::grid_dimensions::{GridDimensions, Wall};
use crate::matrix::BoolMatrix;
use crate::units::{EdgesCount, NodesCount};

/// A finished maze: which walls between adjacent cells are open passages.
///
/// `verticals` is rows by (columns - 1), entry [r][c] opening the wall between (r, c) and
/// (r, c + 1). `horizontals` is (rows - 1) by columns, entry [r][c] opening the wall between
/// (r, c) and (r + 1, c). Nothing mutates a maze once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    dimensions: GridDimensions,
    start: Cell,
    verticals: BoolMatrix,
    horizontals: BoolMatrix,
}

impl Maze {
    pub(crate) fn new(dimensions: GridDimensions,
                      start: Cell,
                      verticals: BoolMatrix,
                      horizontals: BoolMatrix)
                      -> Maze {
        Maze {
            dimensions,
            start,
            verticals,
            horizontals,
        }
    }

    /// Wrap openings produced elsewhere. The matrix shapes and the start cell are checked, the
    /// passage layout is not: the result need not be a perfect maze.
    pub fn from_openings(dimensions: GridDimensions,
                         start: Cell,
                         verticals: BoolMatrix,
                         horizontals: BoolMatrix)
                         -> Result<Maze> {
        if !dimensions.is_valid_cell(start) {
            bail!(ErrorKind::InvalidStartCell(start.row,
                                              start.column,
                                              dimensions.rows().0,
                                              dimensions.columns().0));
        }
        for &(matrix, expected) in &[(&verticals, dimensions.vertical_openings_shape()),
                                     (&horizontals, dimensions.horizontal_openings_shape())] {
            if matrix.shape() != expected {
                bail!(ErrorKind::InvalidOpeningsShape(matrix.rows().0,
                                                      matrix.columns().0,
                                                      (expected.0).0,
                                                      (expected.1).0));
            }
        }
        Ok(Maze::new(dimensions, start, verticals, horizontals))
    }

    #[inline]
    pub fn dimensions(&self) -> &GridDimensions {
        &self.dimensions
    }

    /// The cell the maze was carved from.
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size().0
    }

    #[inline]
    pub fn verticals(&self) -> &BoolMatrix {
        &self.verticals
    }

    #[inline]
    pub fn horizontals(&self) -> &BoolMatrix {
        &self.horizontals
    }

    /// Is there a passage from `cell` to its neighbour in `direction`?
    pub fn is_open(&self, cell: Cell, direction: Direction) -> bool {
        match self.dimensions.wall_between(cell, direction) {
            Some(Wall::Vertical { row, column }) => self.verticals.get(row, column) == Some(true),
            Some(Wall::Horizontal { row, column }) => self.horizontals.get(row, column) == Some(true),
            None => false,
        }
    }

    /// Cells reachable from `cell` in one step. None if `cell` is outside the grid.
    pub fn links(&self, cell: Cell) -> Option<CellSmallVec> {
        if !self.dimensions.is_valid_cell(cell) {
            return None;
        }
        let linked = Direction::ALL
            .iter()
            .filter(|dir| self.is_open(cell, **dir))
            .filter_map(|dir| self.dimensions.neighbour_at_direction(cell, *dir))
            .collect();
        Some(linked)
    }

    pub fn openings_count(&self) -> usize {
        self.verticals.count_true() + self.horizontals.count_true()
    }

    /// Every passage once, as the pair of cells it joins. Vertical openings come first.
    pub fn iter_links(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        let across = self.verticals
            .iter_true()
            .map(|(row, column)| (Cell::new(row, column), Cell::new(row, column + 1)));
        let down = self.horizontals
            .iter_true()
            .map(|(row, column)| (Cell::new(row, column), Cell::new(row + 1, column)));
        across.chain(down)
    }

    /// Give up the maze for its (verticals, horizontals) openings.
    pub fn into_openings(self) -> (BoolMatrix, BoolMatrix) {
        (self.verticals, self.horizontals)
    }

    /// The passage graph, one node per cell weighted with its `Cell`. Node indices follow the
    /// row-major cell order.
    pub fn to_graph(&self) -> UnGraph<Cell, ()> {
        let (NodesCount(nodes), EdgesCount(edges)) = self.dimensions.graph_size();
        let mut graph = UnGraph::with_capacity(nodes, edges);
        for cell in self.dimensions.iter() {
            let _ = graph.add_node(cell);
        }
        for (a, b) in self.iter_links() {
            let _ = graph.add_edge(NodeIndex::new(a.row_major_index(&self.dimensions)),
                                   NodeIndex::new(b.row_major_index(&self.dimensions)),
                                   ());
        }
        graph
    }

    /// A spanning tree: cells - 1 passages and everything connected.
    pub fn is_perfect(&self) -> bool {
        let (_, EdgesCount(tree_edges)) = self.dimensions.graph_size();
        self.openings_count() == tree_edges && algo::connected_components(&self.to_graph()) == 1
    }

    /// Serialize the passage graph as text. Line 1: n (#vertices) m (#edges).
    /// Then one line per edge between 1-based row-major vertex indices.
    pub fn write_edges<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{} {}", self.size(), self.openings_count())?;
        for (a, b) in self.iter_links() {
            writeln!(writer,
                     "{} {}",
                     a.row_major_index(&self.dimensions) + 1,
                     b.row_major_index(&self.dimensions) + 1)?;
        }
        Ok(())
    }
}
