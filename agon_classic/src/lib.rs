//! This crate provides minimal infrastructure to deal with classical game theory problems such as:
//! 1. [Prisoners' dilemma](https://en.wikipedia.org/wiki/Prisoner's_dilemma) (or any other game represented in 2x2 grid)
//! 2. [Hawk-Dove](https://en.wikipedia.org/wiki/Chicken_(game)) resource conflict.
//!
//! Games are turned into [`Game`](agon_core::game::Game) and solved with any
//! [`EquilibriumSolver`](agon_core::solver::EquilibriumSolver).

/// Module for definition of classic actions and sides.
pub mod domain;
/// Deriving strictly competitive games from one matrix.
pub mod encoding;
/// Named games used by example programs.
pub mod scenario;
/// Printing equilibria and their payoffs.
pub mod report;
pub mod simulation;

mod common;

pub use common::*;
