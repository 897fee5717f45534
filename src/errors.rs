// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get access to everything `error_chain!` creates.
use error_chain::*;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        ParseInt(::std::num::ParseIntError);
    }

    errors {
        InvalidDimensions(rows: usize, columns: usize) {
            description("invalid grid dimensions")
            display("invalid grid dimensions: {} rows by {} columns", rows, columns)
        }
        InvalidStartCell(row: usize, column: usize, rows: usize, columns: usize) {
            description("start cell outside of the grid")
            display("start cell ({}, {}) is outside of a {} by {} grid", row, column, rows, columns)
        }
        InvalidOpeningsShape(rows: usize, columns: usize, expected_rows: usize, expected_columns: usize) {
            description("openings matrix does not match the grid dimensions")
            display("openings matrix is {} by {}, expected {} by {}",
                    rows, columns, expected_rows, expected_columns)
        }
        UnfinishedGrid(visited: usize, cells: usize) {
            description("grid is only partly carved")
            display("grid has {} of {} cells visited", visited, cells)
        }
        RandomSourceExhausted(draws: usize) {
            description("random source exhausted")
            display("random source exhausted after {} draws", draws)
        }
        InvalidRandomRange(upper: usize, value: usize) {
            description("random value outside of the requested range")
            display("random value {} is not in the range [0, {})", value, upper)
        }
    }
}
