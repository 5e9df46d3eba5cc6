//! Command implementations

pub mod play;

pub use play::{Statistics, run_play};
