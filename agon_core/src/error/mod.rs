//! Error types returned by game construction, solvers and data utilities.
mod game;
mod data;

pub use game::*;
pub use data::*;
