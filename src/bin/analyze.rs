//! Game Analysis Binary
//!
//! Loads a game or mechanism environment from a test-case directory and
//! runs one analysis on it.

use clap::Parser;
use nashkit::cli::Args;

fn main() -> anyhow::Result<()> {
    nashkit::log()?;
    nashkit::cli::run(Args::parse())
}
