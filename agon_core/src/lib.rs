//! # agon_core
//!
//! Crate providing building blocks to analyse two player normal form (bimatrix) games:
//! payoff matrices, mixed strategies, expected payoff evaluation and solvers
//! enumerating Nash equilibria.
//!
//! ## Examples
//! For runnable programs look at `agon_examples`.
//! ## Licence: MIT

/// Structures used for error handling in framework.
pub mod error;
/// Numeric types accepted as payoffs.
pub mod payoff;
/// Dense payoff matrix of single player.
pub mod matrix;
/// Probability distributions over actions.
pub mod strategy;
/// Game made of two payoff matrices.
pub mod game;
/// Equilibrium and payoff pair.
pub mod equilibrium;
pub mod solver;
pub mod util;

pub mod reexport{
    pub use ndarray;
}
