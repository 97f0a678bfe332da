//! Normal-form game abstraction.
//!
//! A game is a player count, one ordered strategy set per player, and an
//! [`Oracle`] that maps complete strategy profiles to payoff vectors.
//! Every analysis in this crate reads payoffs through the slicing
//! primitives here: [`NormalForm::payoff`], [`NormalForm::tensor`], and
//! the lazy [`Profiles`] enumeration.
mod arbitrary;
mod error;
mod game;
mod oracle;
mod payoff;
mod profile;
mod profiles;
mod strategy;
mod tensor;

pub use error::*;
pub use game::*;
pub use oracle::*;
pub use payoff::*;
pub use profile::*;
pub use profiles::*;
pub use strategy::*;
pub use tensor::*;

#[cfg(test)]
pub(crate) mod fixtures;
