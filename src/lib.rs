#![warn(clippy::all)]

mod app;
mod engine;
mod utils;

pub use app::App;
pub use engine::{next_state, LifeGrid, Simulation, Step};
pub use utils::{
    parse_plaintext, seed_shape, Config, Drawing, PatternError, Shape, BEACON, BLINKER, BLOCK,
    GLIDER,
};
