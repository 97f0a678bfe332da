use crate::game::GameError;

/// Failures specific to two-player and zero-sum games.
#[derive(Debug, Clone, PartialEq)]
pub enum MixedError {
    /// the game does not have exactly two players
    NotTwoPlayer(usize),
    /// U1 != -U2 at the given row and column
    NotZeroSum { row: usize, col: usize },
    /// building the matrices hit a lookup or validation failure
    Game(GameError),
    /// the solver failed on a program that must have an optimum
    Solver(String),
}

impl From<GameError> for MixedError {
    fn from(e: GameError) -> Self {
        Self::Game(e)
    }
}

impl std::fmt::Display for MixedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotTwoPlayer(n) => write!(f, "expected a two player game, got {} players", n),
            Self::NotZeroSum { row, col } => {
                write!(f, "not a zero sum game: payoffs disagree at cell ({}, {})", row + 1, col + 1)
            }
            Self::Game(e) => write!(f, "{}", e),
            Self::Solver(s) => write!(f, "solver failure: {}", s),
        }
    }
}

impl std::error::Error for MixedError {}
