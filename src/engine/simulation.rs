use super::LifeGrid;
use tracing::debug;

/// Classification of one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The population changed; the run continues.
    Advanced,
    /// The new generation equals its predecessor (still life).
    Stable,
    /// The new generation equals the one from two steps back (period-2 cycle).
    Oscillating,
    /// The generation cap was reached without settling.
    MaxGenerations,
}

/// One simulation run: the live field plus snapshots of the two most
/// recently completed generations, used to classify termination.
pub struct Simulation {
    grid: LifeGrid,
    prev: Vec<bool>,
    prev2: Vec<bool>,
    generation: u64,
    max_generations: u64,
}

impl Simulation {
    pub fn new(grid: LifeGrid, max_generations: u64) -> Self {
        let prev = grid.cells().to_vec();
        Self {
            prev2: prev.clone(),
            prev,
            grid,
            generation: 0,
            max_generations,
        }
    }

    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances the field by one generation and reports whether the run
    /// should stop. Stability is checked before the generation cap, so a
    /// population that settles exactly at the cap is still classified as
    /// stable or oscillating.
    pub fn advance(&mut self) -> Step {
        // recycle the older snapshot's allocation
        std::mem::swap(&mut self.prev, &mut self.prev2);
        self.prev.clear();
        self.prev.extend_from_slice(self.grid.cells());

        self.grid.advance();
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "generation advanced"
        );

        if self.grid.cells() == self.prev.as_slice() {
            Step::Stable
        } else if self.grid.cells() == self.prev2.as_slice() {
            Step::Oscillating
        } else if self.generation >= self.max_generations {
            Step::MaxGenerations
        } else {
            Step::Advanced
        }
    }
}
