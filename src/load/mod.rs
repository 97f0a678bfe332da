//! Flat-file game descriptions.
//!
//! A directory holds `meta.txt` (player count, then one comma separated
//! list per line) and `utility.csv` (a header, then one row per profile).
//! Whitespace inside fields is ignored.
mod environment;
mod game;
mod meta;
mod rows;

pub use environment::*;
pub use game::*;
pub use meta::*;
pub use rows::*;

pub const META: &str = "meta.txt";
pub const UTILITY: &str = "utility.csv";

/// Reads both description files from `dir`.
fn read(dir: &std::path::Path) -> anyhow::Result<(String, String)> {
    use anyhow::Context;
    let meta = std::fs::read_to_string(dir.join(META))
        .with_context(|| format!("reading {}", dir.join(META).display()))?;
    let utility = std::fs::read_to_string(dir.join(UTILITY))
        .with_context(|| format!("reading {}", dir.join(UTILITY).display()))?;
    Ok((meta, utility))
}
