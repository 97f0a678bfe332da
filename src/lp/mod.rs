//! Small dense linear programs.
//!
//! The mixed equilibrium solvers only need feasibility, an optimal value,
//! and the solution vector, so this is a plain two-phase tableau simplex
//! with Bland's pivoting rule rather than anything sparse or interior-point.
mod bound;
mod program;
mod simplex;
mod solution;

pub use bound::*;
pub use program::*;
pub use solution::*;
