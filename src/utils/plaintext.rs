/// Errors reported while turning pattern text into grid cells.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The drawing contains no live cells.
    #[error("pattern drawing has no live cells")]
    Empty,

    /// The drawing uses a character other than `.`, `O` or a `!` comment.
    #[error("unexpected character {ch:?} in pattern drawing at line {line}")]
    UnexpectedChar { ch: char, line: usize },

    /// The drawing does not fit on the target grid at its anchor.
    #[error("{name} needs rows {rows} and cols {cols}, grid is {grid_rows}x{grid_cols}")]
    DoesNotFit {
        name: &'static str,
        rows: usize,
        cols: usize,
        grid_rows: usize,
        grid_cols: usize,
    },
}

/// A parsed plaintext drawing: bounding box plus live-cell offsets
/// relative to its top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawing {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>,
}

/// Parses a plaintext cell drawing: `O` is alive, `.` is dead, lines
/// starting with `!` are comments. Rows may be ragged; missing trailing
/// cells are dead.
pub fn parse_plaintext(data: &str) -> Result<Drawing, PatternError> {
    let mut cells = Vec::new();
    let (mut rows, mut cols) = (0, 0);
    for (line_no, line) in data.lines().enumerate() {
        // comment lines don't contribute a row
        if line.starts_with('!') {
            continue;
        }
        let mut width = 0;
        for (col, ch) in line.chars().enumerate() {
            match ch {
                'O' => cells.push((rows, col)),
                '.' => {}
                _ => {
                    return Err(PatternError::UnexpectedChar {
                        ch,
                        line: line_no + 1,
                    })
                }
            }
            width = col + 1;
        }
        cols = cols.max(width);
        rows += 1;
    }
    if cells.is_empty() {
        return Err(PatternError::Empty);
    }
    Ok(Drawing { rows, cols, cells })
}
