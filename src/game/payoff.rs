use crate::Position;
use crate::Utility;
use serde::Serialize;

/// One utility per player, in player order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payoff(Vec<Utility>);

impl Payoff {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn get(&self, player: Position) -> Option<Utility> {
        self.0.get(player).copied()
    }
    /// utilitarian welfare
    pub fn total(&self) -> Utility {
        self.0.iter().sum()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Utility> {
        self.0.iter()
    }
}

impl From<Vec<Utility>> for Payoff {
    fn from(utilities: Vec<Utility>) -> Self {
        Self(utilities)
    }
}

impl<const N: usize> From<[Utility; N]> for Payoff {
    fn from(utilities: [Utility; N]) -> Self {
        Self(utilities.to_vec())
    }
}

impl std::ops::Index<Position> for Payoff {
    type Output = Utility;
    fn index(&self, player: Position) -> &Self::Output {
        &self.0[player]
    }
}

impl std::fmt::Display for Payoff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = self
            .0
            .iter()
            .map(|u| format!("{}", u))
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "[{}]", cells)
    }
}
