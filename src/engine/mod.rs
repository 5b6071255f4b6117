mod grid;
mod rules;
mod simulation;
#[cfg(test)]
mod tests;

pub use grid::LifeGrid;
pub use rules::next_state;
pub use simulation::{Simulation, Step};
