//! Two-player games over dense payoff matrices, and their mixed equilibria.
//!
//! [`Bimatrix`] reads the oracle exactly once per cell at construction.
//! General-sum games are solved by support enumeration with one linear
//! feasibility program per player and support pair. [`ZeroSum`] games
//! are solved by a single minimax program per player and may also have a
//! pure saddle point.
mod bimatrix;
mod error;
mod mixed;
mod msne;
mod supports;
mod zerosum;

pub use bimatrix::*;
pub use error::*;
pub use mixed::*;
pub use msne::*;
pub use supports::*;
pub use zerosum::*;
