/// Compile-time tunables for the simulator.
pub struct Config;

impl Config {
    /// Side length of the square playing field.
    pub const GRID_SIZE: usize = 20;

    /// Generations per run before the simulation gives up.
    pub const MAX_GENERATIONS: u64 = 100;

    /// Accepted range for the random-pattern fill density, in percent.
    /// Prompted values outside it are clamped.
    pub const MIN_DENSITY: u32 = 1;
    pub const MAX_DENSITY: u32 = 50;
}
