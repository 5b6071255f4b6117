use super::plaintext::{parse_plaintext, PatternError};
use crate::engine::LifeGrid;

/// A named seed configuration: a plaintext drawing plus the grid position
/// of its top-left corner.
pub struct Shape {
    pub name: &'static str,
    pub row: usize,
    pub col: usize,
    drawing: &'static str,
}

pub const GLIDER: Shape = Shape {
    name: "glider",
    row: 1,
    col: 1,
    drawing: "\
.O.
..O
OOO",
};

pub const BEACON: Shape = Shape {
    name: "beacon",
    row: 5,
    col: 5,
    drawing: "\
OO..
OO..
..OO
..OO",
};

pub const BLINKER: Shape = Shape {
    name: "blinker",
    row: 9,
    col: 8,
    drawing: "OOO",
};

pub const BLOCK: Shape = Shape {
    name: "block",
    row: 9,
    col: 9,
    drawing: "\
OO
OO",
};

/// Clears the grid and stamps `shape` at its anchor position.
pub fn seed_shape(grid: &mut LifeGrid, shape: &Shape) -> Result<(), PatternError> {
    let drawing = parse_plaintext(shape.drawing)?;
    if shape.row + drawing.rows > grid.rows() || shape.col + drawing.cols > grid.cols() {
        return Err(PatternError::DoesNotFit {
            name: shape.name,
            rows: shape.row + drawing.rows,
            cols: shape.col + drawing.cols,
            grid_rows: grid.rows(),
            grid_cols: grid.cols(),
        });
    }
    grid.clear();
    for &(row, col) in &drawing.cells {
        grid.set(shape.row + row, shape.col + col, true);
    }
    Ok(())
}
