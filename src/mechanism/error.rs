use super::label::Outcome;
use super::theta::Theta;
use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub enum MechanismError {
    /// malformed environment or social choice function
    Validation(String),
    /// the valuation has no payoff vector for this pair
    Lookup { outcome: Outcome, theta: Theta },
    /// the social choice function assigns nothing to this type profile
    Unmapped(Theta),
    /// player index out of range
    Player(Position),
}

impl std::fmt::Display for MechanismError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(s) => write!(f, "invalid environment: {}", s),
            Self::Lookup { outcome, theta } => {
                write!(f, "no utility for outcome {} at {}", outcome, theta)
            }
            Self::Unmapped(theta) => write!(f, "no outcome chosen for {}", theta),
            Self::Player(p) => write!(f, "no player {}", p + 1),
        }
    }
}

impl std::error::Error for MechanismError {}
