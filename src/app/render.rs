use std::io::{self, Write};

use crate::engine::LifeGrid;

/// Writes one generation to `out`: a banner, column/row digit headers
/// (index mod 10) and `" *"` / `"  "` cells.
pub fn draw_grid(out: &mut impl Write, grid: &LifeGrid, generation: u64) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "=== Game of Life - generation {} ===", generation)?;
    write!(out, "  ")?;
    for col in 0..grid.cols() {
        write!(out, "{:2}", col % 10)?;
    }
    writeln!(out)?;
    for row in 0..grid.rows() {
        write!(out, "{:2}", row % 10)?;
        for col in 0..grid.cols() {
            write!(out, "{}", if grid.get(row, col) { " *" } else { "  " })?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::draw_grid;
    use crate::engine::LifeGrid;

    #[test]
    fn test_draws_live_cells_as_stars() {
        let mut grid = LifeGrid::blank(3, 3);
        grid.set(1, 1, true);
        let mut out = Vec::new();
        draw_grid(&mut out, &grid, 7).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("=== Game of Life - generation 7 ==="));
        let lines: Vec<_> = text.lines().collect();
        // banner and header precede the three grid rows
        assert_eq!(lines[3], "   0 1 2");
        assert_eq!(lines[4], " 0      ");
        assert_eq!(lines[5], " 1   *  ");
    }
}
