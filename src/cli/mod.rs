//! Command-line driver: one subcommand per analysis, each rendered as a
//! console report or as JSON.
mod query;
mod report;
mod run;

pub use query::*;
pub use report::*;
pub use run::*;
