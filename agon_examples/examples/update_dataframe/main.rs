use clap::Parser;
use agon_examples::dataset::{demo_table, remap_survey};
use agon_examples::options::DataframeOptions;
use agon_examples::setup::setup_logger;

fn main() -> Result<(), anyhow::Error>{
    let args = DataframeOptions::parse();
    setup_logger(&args.log)?;

    let mut table = demo_table()?;
    log::debug!("Table before remapping:\n{table}");
    remap_survey(&mut table)?;

    if args.json{
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        println!("{table}");
    }
    Ok(())
}
