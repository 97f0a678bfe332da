//! Mechanism design over finite type and outcome spaces.
//!
//! An [`Environment`] fixes each player's type set, a shared outcome set,
//! and a [`Valuation`] over (outcome, type profile) pairs. A
//! [`SocialChoice`] maps every type profile to an outcome and can be
//! checked for incentive compatibility, ex-post efficiency, and
//! dictatorship. [`Functions`] enumerates every candidate lazily.
mod environment;
mod error;
mod functions;
mod label;
mod social;
mod theta;
mod valuation;

pub use environment::*;
pub use error::*;
pub use functions::*;
pub use label::*;
pub use social::*;
pub use theta::*;
pub use valuation::*;

#[cfg(test)]
pub(crate) mod fixtures;
