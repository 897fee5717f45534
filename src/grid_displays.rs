use std::fmt;

use crate::cells::{Cell, CellSmallVec, Direction};
use crate::maze::Maze;
use crate::pathing::Distances;
use crate::units::{ColumnsCount, RowsCount};
use crate::utils::FnvHashSet;

pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: Cell) -> String {
        String::from("   ")
    }
}

impl GridDisplay for Distances {
    fn render_cell_body(&self, cell: Cell) -> String {
        if let Some(d) = self.distance_to(cell) {
            // centre align, padding 3, lowercase hexadecimal
            format!("{:^3x}", d)
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_cells: FnvHashSet<Cell>,
}
impl PathDisplay {
    pub fn new(path: &[Cell]) -> Self {
        PathDisplay { on_path_cells: path.iter().cloned().collect() }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, cell: Cell) -> String {
        if self.on_path_cells.contains(&cell) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start_cells: CellSmallVec,
    end_cells: CellSmallVec,
}
impl StartEndPointsDisplay {
    pub fn new(starts: CellSmallVec, ends: CellSmallVec) -> StartEndPointsDisplay {
        StartEndPointsDisplay {
            start_cells: starts,
            end_cells: ends,
        }
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, cell: Cell) -> String {
        if self.start_cells.contains(&cell) {
            String::from(" S ")
        } else if self.end_cells.contains(&cell) {
            String::from(" E ")
        } else {
            String::from("   ")
        }
    }
}

/// A maze drawn with box drawing characters, cell bodies optionally filled in by a `GridDisplay`.
pub struct MazeText<'a> {
    maze: &'a Maze,
    grid_display: Option<&'a dyn GridDisplay>,
}

impl<'a> MazeText<'a> {
    pub fn new(maze: &'a Maze, grid_display: Option<&'a dyn GridDisplay>) -> MazeText<'a> {
        MazeText { maze, grid_display }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&MazeText::new(self, None), f)
    }
}

impl<'a> fmt::Display for MazeText<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR_3: &str = "───";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";
        let default_cell_body = String::from("   ");

        let maze = self.maze;
        let dimensions = maze.dimensions();
        let ColumnsCount(columns_count) = dimensions.columns();
        let RowsCount(rows_count) = dimensions.rows();

        // Start by special case rendering the text for the top boundary
        let mut output = String::from(WALL_RD);
        for column in 0..columns_count {
            output.push_str(WALL_LR_3);
            if maze.is_open(Cell::new(0, column), Direction::Right) {
                output.push_str(WALL_LR);
            } else if column == columns_count - 1 {
                output.push_str(WALL_LD);
            } else {
                output.push_str(WALL_LRD);
            }
        }
        output.push('\n');

        for row in 0..rows_count {

            let is_last_row = row == rows_count - 1;

            // The left boundary of the row is special cased.
            // The top section of the cell is done by the previous row.
            let mut row_middle_section_render = String::from(WALL_UD);
            let mut row_bottom_section_render = String::new();

            for column in 0..columns_count {

                let cell = Cell::new(row, column);
                let is_first_column = column == 0;
                let is_last_column = column == columns_count - 1;
                let east_open = maze.is_open(cell, Direction::Right);
                let south_open = maze.is_open(cell, Direction::Down);

                // Each cell uses the bottom wall of the cell above as its own top wall, so we only
                // draw the body, the right boundary ('|') and the bottom boundary ('---+') minus the
                // bottom left corner.
                let east_boundary = if east_open { " " } else { WALL_UD };

                match self.grid_display {
                    Some(displayer) => row_middle_section_render.push_str(&displayer.render_cell_body(cell)),
                    None => row_middle_section_render.push_str(&default_cell_body),
                }
                row_middle_section_render.push_str(east_boundary);

                if is_first_column {
                    row_bottom_section_render = if is_last_row {
                        String::from(WALL_RU)
                    } else if south_open {
                        String::from(WALL_UD)
                    } else {
                        String::from(WALL_RUD)
                    };
                }
                let south_boundary = if south_open { "   " } else { WALL_LR_3 };
                row_bottom_section_render.push_str(south_boundary);

                let corner = match (is_last_row, is_last_column) {
                    (true, true) => WALL_LU,
                    (true, false) => if east_open { WALL_LR } else { WALL_LRU },
                    (false, true) => if south_open { WALL_UD } else { WALL_LUD },
                    (false, false) => {
                        let access_se_from_east =
                            dimensions.neighbour_at_direction(cell, Direction::Right)
                                .map_or(false, |c| maze.is_open(c, Direction::Down));
                        let access_se_from_south =
                            dimensions.neighbour_at_direction(cell, Direction::Down)
                                .map_or(false, |c| maze.is_open(c, Direction::Right));
                        let show_right_section = !access_se_from_east;
                        let show_down_section = !access_se_from_south;
                        let show_up_section = !east_open;
                        let show_left_section = !south_open;

                        match (show_left_section,
                               show_right_section,
                               show_up_section,
                               show_down_section) {
                            (true, true, true, true) => WALL_LRUD,
                            (true, true, true, false) => WALL_LRU,
                            (true, true, false, true) => WALL_LRD,
                            (true, false, true, true) => WALL_LUD,
                            (false, true, true, true) => WALL_RUD,
                            (true, true, false, false) => WALL_LR,
                            (false, false, true, true) => WALL_UD,
                            (false, true, true, false) => WALL_RU,
                            (true, false, false, true) => WALL_LD,
                            (true, false, true, false) => WALL_LU,
                            (false, true, false, true) => WALL_RD,
                            (true, false, false, false) => WALL_L,
                            (false, true, false, false) => WALL_R,
                            (false, false, true, false) => WALL_U,
                            (false, false, false, true) => WALL_D,
                            _ => " ",
                        }
                    }
                };

                row_bottom_section_render.push_str(corner);
            }

            output.push_str(&row_middle_section_render);
            output.push('\n');
            output.push_str(&row_bottom_section_render);
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}
