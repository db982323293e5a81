use rand::Rng;
use agon_core::equilibrium::{Equilibrium, PayoffPair};
use agon_core::error::GameError;
use agon_core::game::Game;
use crate::report::EquilibriumReport;

/// Plays `rounds` independent encounters where both players sample actions from
/// their strategies and returns the average payoffs.
/// For many rounds result approaches expected payoffs from [`Game::payoffs`].
pub fn average_payoffs<R: Rng + ?Sized>(game: &Game, equilibrium: &Equilibrium, rounds: usize, rng: &mut R)
    -> Result<PayoffPair, GameError>{

    let (rows, cols) = game.shape();
    for (strategy, expected) in [(&equilibrium.row, rows), (&equilibrium.column, cols)]{
        if strategy.len() != expected{
            return Err(GameError::StrategyDimension {
                expected,
                found: strategy.len(),
                context: "simulating encounters".to_string(),
            });
        }
    }
    if rounds == 0{
        return Ok(PayoffPair::new(0.0, 0.0));
    }
    let mut sum_row = 0.0;
    let mut sum_column = 0.0;
    for _ in 0..rounds{
        let i = equilibrium.row.sample(rng);
        let j = equilibrium.column.sample(rng);
        sum_row += game.row_matrix()[(i, j)];
        sum_column += game.column_matrix()[(i, j)];
    }
    log::trace!("Simulated {rounds} encounters with {equilibrium}");
    Ok(PayoffPair::new(sum_row / rounds as f64, sum_column / rounds as f64))
}

/// Runs [`average_payoffs`] for every reported equilibrium, in report order.
pub fn simulate_reports<R: Rng + ?Sized>(game: &Game, reports: &[EquilibriumReport], rounds: usize, rng: &mut R)
    -> Result<Vec<PayoffPair>, GameError>{

    reports.iter()
        .map(|r| average_payoffs(game, &r.equilibrium, rounds, &mut *rng))
        .collect()
}
