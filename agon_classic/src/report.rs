use std::fmt::{Display, Formatter};
use agon_core::equilibrium::{Equilibrium, PayoffPair};
use agon_core::error::GameError;
use agon_core::game::Game;
use agon_core::solver::EquilibriumSolver;
use agon_core::util::format_decimal;
use crate::scenario::Scenario;

/// Equilibrium together with payoffs it gives to players.
#[derive(Debug, Clone, PartialEq)]
pub struct EquilibriumReport{
    pub equilibrium: Equilibrium,
    pub payoffs: PayoffPair,
}

impl Display for EquilibriumReport{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} with a payoff of {}.", self.equilibrium, self.payoffs)
    }
}

/// Evaluates payoffs of every equilibrium, keeping order.
pub fn evaluate(game: &Game, equilibria: Vec<Equilibrium>) -> Result<Vec<EquilibriumReport>, GameError>{
    equilibria.into_iter()
        .map(|equilibrium| -> Result<EquilibriumReport, GameError> {
            let payoffs = game.equilibrium_payoffs(&equilibrium)?;
            Ok(EquilibriumReport{equilibrium, payoffs})
        })
        .collect()
}

/// Solves scenario's game with `solver` and evaluates found equilibria.
pub fn solve_scenario<S: EquilibriumSolver + ?Sized>(scenario: &Scenario, solver: &S) -> Result<Vec<EquilibriumReport>, GameError>{
    log::info!("Solving {} with {}", scenario.title, solver.name());
    let equilibria = solver.solve(&scenario.game)?;
    log::debug!("Solver returned {} equilibria for {}", equilibria.len(), scenario.title);
    evaluate(&scenario.game, equilibria)
}

/// Header with number of equilibria followed by one line per equilibrium.
pub fn render_summary(scenario: &Scenario, reports: &[EquilibriumReport]) -> String{
    let mut lines = Vec::with_capacity(reports.len() + 1);
    lines.push(format!("In this version of the {} {} equilibria exist:", scenario.title, reports.len()));
    lines.extend(reports.iter().map(|r| r.to_string()));
    lines.join("\n")
}

/// All equilibria in one line, `[(σr, σc), ...]`.
pub fn render_list(reports: &[EquilibriumReport]) -> String{
    let inner = reports.iter()
        .map(|r| r.equilibrium.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]")
}

/// Strategies and payoffs of the first equilibrium, addressed by players' names.
pub fn render_first(scenario: &Scenario, reports: &[EquilibriumReport]) -> String{
    match reports.first(){
        None => "No equilibrium found.".to_string(),
        Some(r) => format!(
            "{row}'s strategy: {sr} - {col}'s strategy {sc}\n{row}'s payoff: {pr} - {col}'s payoff: {pc}",
            row = scenario.row_player,
            col = scenario.column_player,
            sr = r.equilibrium.row,
            sc = r.equilibrium.column,
            pr = format_decimal(r.payoffs.row),
            pc = format_decimal(r.payoffs.column),
        )
    }
}

/// One line per equilibrium comparing payoffs averaged over `rounds` sampled encounters
/// with the expected ones.
pub fn render_simulation(reports: &[EquilibriumReport], simulated: &[PayoffPair], rounds: usize) -> String{
    reports.iter().zip(simulated.iter())
        .map(|(r, s)| format!("{} averaged {} over {rounds} rounds, expected {}.", r.equilibrium, s, r.payoffs))
        .collect::<Vec<_>>()
        .join("\n")
}
