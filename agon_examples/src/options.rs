use std::path::PathBuf;
use clap::{Args, Parser, ValueEnum};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use agon_core::solver::{EquilibriumSolver, LemkeHowson, PureEnumeration, SupportEnumeration};

#[derive(Args, Debug, Clone)]
pub struct LogOptions{

    #[arg(short = 'v', long = "log_level", default_value = "warn")]
    pub log_level: LevelFilter,

    #[arg(short = 'a', long = "log_level_agon", default_value = "warn")]
    pub log_level_agon: LevelFilter,

    #[arg(short = 'o', long = "logfile")]
    pub log_file: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SolverSelect{
    Support,
    Pure,
    LemkeHowson,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct ScenarioOptions{

    #[command(flatten)]
    pub log: LogOptions,

    #[arg(short = 's', long = "solver", value_enum, default_value = "support")]
    pub solver: SolverSelect,

    /// Label dropped at start of Lemke-Howson
    #[arg(short = 'l', long = "label", default_value = "0")]
    pub dropped_label: usize,

    /// Check support enumeration only with supports of equal size
    #[arg(long = "non_degenerate")]
    pub non_degenerate: bool,

    /// Play this many sampled encounters per reported equilibrium and print average payoffs
    #[arg(long = "simulate")]
    pub simulate: Option<usize>,

    /// Seed for sampling encounters, taken from OS when not set
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

impl ScenarioOptions{
    pub fn build_solver(&self) -> Box<dyn EquilibriumSolver>{
        match self.solver{
            SolverSelect::Support => Box::new(SupportEnumeration{
                non_degenerate: self.non_degenerate,
                ..Default::default()
            }),
            SolverSelect::Pure => Box::new(PureEnumeration::default()),
            SolverSelect::LemkeHowson => Box::new(LemkeHowson::new(self.dropped_label)),
        }
    }

    pub fn rng(&self) -> StdRng{
        match self.seed{
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct DataframeOptions{

    #[command(flatten)]
    pub log: LogOptions,

    /// Print table as JSON
    #[arg(long = "json")]
    pub json: bool,
}
