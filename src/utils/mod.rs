mod config;
mod patterns;
mod plaintext;

pub use config::Config;
pub use patterns::{seed_shape, Shape, BEACON, BLINKER, BLOCK, GLIDER};
pub use plaintext::{parse_plaintext, Drawing, PatternError};
