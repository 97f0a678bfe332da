//! Dominance relations between strategies, dominant-strategy equilibria,
//! and iterated elimination of weakly dominated strategies.
mod dominance;
mod elimination;
mod relation;

pub use dominance::*;
pub use elimination::*;
pub use relation::*;
