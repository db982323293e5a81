//! Equilibrium solvers for bimatrix games.
//!
//! Every solver implements [`EquilibriumSolver`], so code printing or analysing equilibria
//! can be written once and run with any of them.
mod linear;
mod support;
mod pure;
mod lemke_howson;

pub use support::*;
pub use pure::*;
pub use lemke_howson::*;

use crate::equilibrium::Equilibrium;
use crate::error::GameError;
use crate::game::Game;

/// Finds Nash equilibria of a game.
/// Returned list is finite and may be empty, it is not an error if no equilibrium was found.
/// Order of equilibria is specific to the solver.
pub trait EquilibriumSolver{
    fn solve(&self, game: &Game) -> Result<Vec<Equilibrium>, GameError>;

    /// Short name of solver, used in logs.
    fn name(&self) -> &'static str;
}

impl<T: EquilibriumSolver + ?Sized> EquilibriumSolver for Box<T>{
    fn solve(&self, game: &Game) -> Result<Vec<Equilibrium>, GameError> {
        self.as_ref().solve(game)
    }

    fn name(&self) -> &'static str {
        self.as_ref().name()
    }
}

impl<T: EquilibriumSolver + ?Sized> EquilibriumSolver for &T{
    fn solve(&self, game: &Game) -> Result<Vec<Equilibrium>, GameError> {
        (*self).solve(game)
    }

    fn name(&self) -> &'static str {
        (*self).name()
    }
}
