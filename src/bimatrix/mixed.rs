use super::*;
use crate::PROBABILITY_CEILING;
use crate::PROBABILITY_FLOOR;
use crate::Probability;
use crate::Utility;
use crate::game::*;
use serde::Serialize;

/// A probability distribution over one player's strategies, in the
/// order of that player's strategy set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mixed {
    pub strategies: Vec<Strategy>,
    pub weights: Vec<Probability>,
}

impl Mixed {
    pub fn weight(&self, strategy: &Strategy) -> Probability {
        self.strategies
            .iter()
            .position(|s| s == strategy)
            .map(|i| self.weights[i])
            .unwrap_or(0.)
    }

    /// strategies played with positive probability
    pub fn support(&self) -> Vec<&Strategy> {
        self.strategies
            .iter()
            .zip(self.weights.iter())
            .filter(|(_, w)| **w > 0.)
            .map(|(s, _)| s)
            .collect()
    }

    pub fn weights(&self) -> &[Probability] {
        &self.weights
    }
}

impl std::fmt::Display for Mixed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let terms = self
            .strategies
            .iter()
            .zip(self.weights.iter())
            .filter(|(_, w)| **w > 0.)
            .map(|(s, w)| format!("{}: {:.4}", s, w))
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{{{}}}", terms)
    }
}

/// A mixed profile of a two-player game with each player's expected payoff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equilibrium {
    pub row: Mixed,
    pub col: Mixed,
    pub values: [Utility; 2],
}

impl Equilibrium {
    /// Re-derives the equilibrium conditions from the payoff matrices.
    /// Both distributions are non-negative and sum to one, and no pure
    /// strategy beats the mix by more than `tolerance` against the
    /// opponent's mix.
    pub fn verify(&self, game: &Bimatrix, tolerance: f64) -> bool {
        let p = self.row.weights();
        let q = self.col.weights();
        let distribution = |w: &[Probability]| {
            w.iter().all(|x| *x >= -tolerance) && (w.iter().sum::<Probability>() - 1.).abs() <= tolerance
        };
        if p.len() != game.rows() || q.len() != game.cols() || !distribution(p) || !distribution(q) {
            return false;
        }
        let (Ok(v1), Ok(v2)) = (game.expected(0, p, q), game.expected(1, p, q)) else {
            return false;
        };
        let pure = |n: usize, i: usize| (0..n).map(|k| if k == i { 1. } else { 0. }).collect::<Vec<Probability>>();
        let rows = (0..game.rows()).all(|i| {
            game.expected(0, &pure(game.rows(), i), q)
                .is_ok_and(|u| u <= v1 + tolerance)
        });
        let cols = (0..game.cols()).all(|j| {
            game.expected(1, p, &pure(game.cols(), j))
                .is_ok_and(|u| u <= v2 + tolerance)
        });
        rows && cols
            && (v1 - self.values[0]).abs() <= tolerance
            && (v2 - self.values[1]).abs() <= tolerance
    }
}

impl std::fmt::Display for Equilibrium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "P1 {} value {:.4}", self.row, self.values[0])?;
        write!(f, "P2 {} value {:.4}", self.col, self.values[1])
    }
}

/// Outcome of the support-enumeration search.
///
/// `Incomplete` means every support pair was tried and none was feasible
/// within the solver's tolerance. Finite games always have a mixed
/// equilibrium, so this is a limit of the search and says nothing about
/// the game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Search {
    Found(Equilibrium),
    Incomplete,
}

impl Search {
    pub fn found(self) -> Option<Equilibrium> {
        match self {
            Self::Found(e) => Some(e),
            Self::Incomplete => None,
        }
    }
}

/// Probability bounds on strategies inside a candidate support.
///
/// The floor sits slightly above zero so a supported strategy is never
/// silently dropped to probability zero by the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub floor: Probability,
    pub ceiling: Probability,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            floor: PROBABILITY_FLOOR,
            ceiling: PROBABILITY_CEILING,
        }
    }
}
