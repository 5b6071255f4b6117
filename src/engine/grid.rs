use super::rules::next_state;

/// Square playing field with a back buffer for the next generation.
///
/// Coordinates are `(row, col)` in `[0, rows) x [0, cols)`. Cells outside
/// the field are dead: neighbor counting clips at the edges instead of
/// wrapping, so a corner cell has at most 3 countable neighbors.
pub struct LifeGrid {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl LifeGrid {
    pub fn blank(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1);
        let size = rows * cols;
        Self {
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.rows && col < self.cols);
        self.cells_curr[col + row * self.cols]
    }

    pub fn set(&mut self, row: usize, col: usize, state: bool) {
        assert!(row < self.rows && col < self.cols);
        self.cells_curr[col + row * self.cols] = state;
    }

    /// Number of live cells in the 8-cell Moore neighborhood of `(row, col)`,
    /// treating out-of-range coordinates as dead.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows && col < self.cols);
        let r1 = row.saturating_sub(1);
        let r2 = (row + 1).min(self.rows - 1);
        let c1 = col.saturating_sub(1);
        let c2 = (col + 1).min(self.cols - 1);
        let mut count = 0;
        for r in r1..=r2 {
            for c in c1..=c2 {
                if (r, c) != (row, col) {
                    count += self.get(r, c) as usize;
                }
            }
        }
        count
    }

    /// Advances the field by one generation. The rule is applied against the
    /// current buffer only, written into the back buffer, then the buffers
    /// are swapped.
    pub fn advance(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = col + row * self.cols;
                let neighbors = self.count_live_neighbors(row, col);
                self.cells_next[idx] = next_state(self.cells_curr[idx], neighbors);
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
    }

    /// Current generation as a row-major slice.
    pub fn cells(&self) -> &[bool] {
        &self.cells_curr
    }

    pub fn population(&self) -> usize {
        self.cells_curr.iter().filter(|&&alive| alive).count()
    }

    pub fn clear(&mut self) {
        self.cells_curr.fill(false);
    }

    /// Refills the whole field, reviving each cell with probability `fill_rate`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        for cell in self.cells_curr.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
    }
}

impl PartialEq for LifeGrid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells_curr == other.cells_curr
    }
}

impl Eq for LifeGrid {}
