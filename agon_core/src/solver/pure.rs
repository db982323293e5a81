use crate::equilibrium::Equilibrium;
use crate::error::GameError;
use crate::game::Game;
use crate::solver::EquilibriumSolver;
use crate::strategy::MixedStrategy;

/// Finds equilibria in pure strategies only, checking every cell of the game.
/// Cells are visited row by row.
#[derive(Debug, Copy, Clone, Default)]
pub struct PureEnumeration{
    pub tolerance: f64,
}

impl EquilibriumSolver for PureEnumeration{
    fn solve(&self, game: &Game) -> Result<Vec<Equilibrium>, GameError> {
        let (rows, cols) = game.shape();
        let a = game.row_matrix();
        let b = game.column_matrix();
        let mut equilibria = Vec::new();
        for i in 0..rows{
            for j in 0..cols{
                let row_best = (0..rows).all(|k| a[(i, j)] >= a[(k, j)] - self.tolerance);
                let column_best = (0..cols).all(|l| b[(i, j)] >= b[(i, l)] - self.tolerance);
                if row_best && column_best{
                    #[cfg(feature = "log_debug")]
                    log::debug!("Pure equilibrium in cell ({i}, {j})");
                    equilibria.push(Equilibrium::new(
                        MixedStrategy::pure(rows, i)?,
                        MixedStrategy::pure(cols, j)?
                    ));
                }
            }
        }
        Ok(equilibria)
    }

    fn name(&self) -> &'static str {
        "pure enumeration"
    }
}
