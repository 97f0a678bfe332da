//! Analysis of finite normal-form games.
//!
//! Dominance relations, iterated elimination, pure-strategy Nash equilibria,
//! mixed equilibria of two-player games via linear programming, and
//! incentive/efficiency checks for social-choice functions.
pub mod bimatrix;
pub mod dominance;
pub mod equilibrium;
pub mod game;
pub mod load;
pub mod lp;
pub mod mechanism;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payoffs, expected values, and security levels.
pub type Utility = f64;
/// Mixed strategy weights.
pub type Probability = f64;
/// Zero-based player position. Console output is one-based.
pub type Position = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// LINEAR PROGRAMMING
// Dense two-phase simplex used by the mixed equilibrium solvers.
// ============================================================================
/// Pivot and feasibility epsilon. Entries smaller than this are zero.
pub const TOLERANCE: f64 = 1e-9;
/// Pivot cap per phase. Bland's rule never cycles, so this only guards
/// against numerical drift on degenerate tableaus.
pub const SIMPLEX_ITERATIONS: usize = 4096;

// ============================================================================
// MIXED EQUILIBRIUM BOUNDS
// Per-strategy probability bounds inside a candidate support.
// ============================================================================
/// Lower bound for a supported strategy. Near zero rather than exactly zero
/// so the solver never treats a supported strategy as unsupported.
pub const PROBABILITY_FLOOR: Probability = 1e-12;
/// Upper bound for any strategy.
pub const PROBABILITY_CEILING: Probability = 1.0;
/// Slack allowed when re-checking a reported equilibrium.
pub const EQUILIBRIUM_TOLERANCE: f64 = 1e-6;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
/// `NASHKIT_LOG` overrides the terminal level.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let level = std::env::var("NASHKIT_LOG")
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
