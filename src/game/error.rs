use super::profile::Profile;
use crate::Position;

/// Failures raised while building or querying a [`NormalForm`](super::NormalForm).
///
/// Absence of a dominant strategy or equilibrium is not an error; those
/// queries return `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// construction rejected the game description
    Validation(String),
    /// the oracle has no payoff for this profile
    Lookup(Profile),
    /// player position outside `0..n`
    Player(Position),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(s) => write!(f, "invalid game: {}", s),
            Self::Lookup(p) => write!(f, "no payoff defined for profile {}", p),
            Self::Player(i) => write!(f, "no such player: {}", i + 1),
        }
    }
}

impl std::error::Error for GameError {}
