use std::fmt::{Display, Formatter};
use crate::equilibrium::{Equilibrium, PayoffPair};
use crate::error::GameError;
use crate::matrix::PayoffMatrix;
use crate::solver::EquilibriumSolver;
use crate::strategy::MixedStrategy;

/// Two player normal form game given by one payoff matrix per player.
/// Both matrices have the same shape; rows are actions of the row player and columns
/// are actions of the column player.
///
/// ```
/// use agon_core::game::Game;
/// use agon_core::matrix::PayoffMatrix;
/// use agon_core::strategy::MixedStrategy;
/// let game = Game::new(
///     PayoffMatrix::from_array([[10, 4], [12, 0]]),
///     PayoffMatrix::from_array([[10, 12], [4, 0]]),
/// ).unwrap();
/// let payoffs = game.payoffs(
///     &MixedStrategy::pure(2, 0).unwrap(),
///     &MixedStrategy::pure(2, 1).unwrap()).unwrap();
/// assert_eq!((payoffs.row, payoffs.column), (4.0, 12.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game{
    row: PayoffMatrix,
    column: PayoffMatrix,
}

impl Game{
    pub fn new(row: PayoffMatrix, column: PayoffMatrix) -> Result<Self, GameError>{
        if row.shape() != column.shape(){
            return Err(GameError::ShapeMismatch { row: row.shape(), column: column.shape() });
        }
        Ok(Self{row, column})
    }

    /// Game where column player's payoff is the negation of row player's payoff.
    pub fn zero_sum(row: PayoffMatrix) -> Self{
        let column = row.negated();
        Self{row, column}
    }

    pub fn row_matrix(&self) -> &PayoffMatrix{
        &self.row
    }

    pub fn column_matrix(&self) -> &PayoffMatrix{
        &self.column
    }

    /// `(actions of row player, actions of column player)`
    pub fn shape(&self) -> (usize, usize){
        self.row.shape()
    }

    pub fn is_zero_sum(&self, tolerance: f64) -> bool{
        self.row.values().iter()
            .zip(self.column.values().iter())
            .all(|(a, b)| (a + b).abs() <= tolerance)
    }

    /// Expected payoffs `(σrᵀ A σc, σrᵀ B σc)`.
    pub fn payoffs(&self, row: &MixedStrategy, column: &MixedStrategy) -> Result<PayoffPair, GameError>{
        Ok(PayoffPair::new(
            self.row.bilinear(row, column)?,
            self.column.bilinear(row, column)?
        ))
    }

    pub fn equilibrium_payoffs(&self, equilibrium: &Equilibrium) -> Result<PayoffPair, GameError>{
        self.payoffs(&equilibrium.row, &equilibrium.column)
    }

    /// Checks for both players whether their strategy is a best response to the other's.
    /// Every action in support must reach the maximal payoff (within `tolerance`).
    pub fn is_best_response(&self, row: &MixedStrategy, column: &MixedStrategy, tolerance: f64)
        -> Result<(bool, bool), GameError>{

        let row_payoffs = self.row.row_payoffs(column)?;
        let column_payoffs = self.column.column_payoffs(row)?;
        Ok((
            supported_reach_max(row_payoffs.iter().copied(), row, tolerance),
            supported_reach_max(column_payoffs.iter().copied(), column, tolerance)
        ))
    }

    pub fn is_equilibrium(&self, equilibrium: &Equilibrium, tolerance: f64) -> Result<bool, GameError>{
        let (row_ok, column_ok) = self.is_best_response(&equilibrium.row, &equilibrium.column, tolerance)?;
        Ok(row_ok && column_ok)
    }

    pub fn solve<S: EquilibriumSolver + ?Sized>(&self, solver: &S) -> Result<Vec<Equilibrium>, GameError>{
        solver.solve(self)
    }
}

fn supported_reach_max(payoffs: impl Iterator<Item = f64> + Clone, strategy: &MixedStrategy, tolerance: f64) -> bool{
    let max = payoffs.clone().fold(f64::NEG_INFINITY, f64::max);
    payoffs.zip(strategy.probabilities().iter())
        .filter(|(_, p)| **p > 0.0)
        .all(|(v, _)| v >= max - tolerance)
}

impl Display for Game{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bimatrix game\n\nRow player:\n{}\n\nColumn player:\n{}", self.row, self.column)
    }
}
