use clap::Parser;
use agon_classic::encoding::CompetitiveEncoding;
use agon_classic::report::{render_first, render_simulation, solve_scenario};
use agon_classic::simulation::simulate_reports;
use agon_classic::scenario::competitive_prisoners_dilemma;
use agon_examples::options::ScenarioOptions;
use agon_examples::setup::setup_logger;

fn main() -> Result<(), anyhow::Error>{
    let args = ScenarioOptions::parse();
    setup_logger(&args.log)?;

    let scenario = competitive_prisoners_dilemma(CompetitiveEncoding::NegatedTranspose)?;
    log::info!("{}", scenario.game);
    let solver = args.build_solver();
    let reports = solve_scenario(&scenario, solver.as_ref())?;

    println!("{}", render_first(&scenario, &reports));

    if let Some(rounds) = args.simulate{
        let first = &reports[..reports.len().min(1)];
        let mut rng = args.rng();
        let simulated = simulate_reports(&scenario.game, first, rounds, &mut rng)?;
        println!("{}", render_simulation(first, &simulated, rounds));
    }
    Ok(())
}
