use clap::Parser;
use agon_classic::report::{render_simulation, render_summary, solve_scenario};
use agon_classic::simulation::simulate_reports;
use agon_classic::scenario::crop_game;
use agon_examples::options::ScenarioOptions;
use agon_examples::setup::setup_logger;

fn main() -> Result<(), anyhow::Error>{
    let args = ScenarioOptions::parse();
    setup_logger(&args.log)?;

    let scenario = crop_game()?;
    let solver = args.build_solver();
    let reports = solve_scenario(&scenario, solver.as_ref())?;

    println!("{}", render_summary(&scenario, &reports));

    if let Some(rounds) = args.simulate{
        let mut rng = args.rng();
        let simulated = simulate_reports(&scenario.game, &reports, rounds, &mut rng)?;
        println!("{}", render_simulation(&reports, &simulated, rounds));
    }
    Ok(())
}
