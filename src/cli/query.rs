use crate::PROBABILITY_FLOOR;
use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Analyze finite normal-form games", long_about = None)]
pub struct Args {
    /// print results as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub query: Query,
}

#[derive(Subcommand, Debug)]
pub enum Query {
    #[command(
        about = "Strongly and weakly dominant strategies and equilibria",
        alias = "dom"
    )]
    Dominance {
        #[arg(required = true)]
        dir: PathBuf,
    },
    #[command(about = "Maxmin and minmax values per player", alias = "sec")]
    Security {
        #[arg(required = true)]
        dir: PathBuf,
    },
    #[command(about = "Pure strategy Nash equilibria", alias = "psne")]
    Nash {
        #[arg(required = true)]
        dir: PathBuf,
    },
    #[command(
        about = "Iterated elimination of weakly dominated strategies",
        alias = "elim"
    )]
    Eliminate {
        #[arg(required = true)]
        dir: PathBuf,
    },
    #[command(about = "Mixed Nash equilibrium of a two player game", alias = "msne")]
    Mixed {
        #[arg(required = true)]
        dir: PathBuf,
        /// solve as a zero-sum game and report its saddle point
        #[arg(long)]
        zero_sum: bool,
        /// reduce the game by iterated elimination first
        #[arg(long)]
        eliminate: bool,
        /// lower probability bound for supported strategies
        #[arg(long, default_value_t = PROBABILITY_FLOOR)]
        floor: f64,
    },
    #[command(
        about = "Check every social choice function of an environment",
        alias = "mech"
    )]
    Mechanism {
        #[arg(required = true)]
        dir: PathBuf,
        /// stop after this many candidate functions
        #[arg(long)]
        limit: Option<usize>,
    },
}
