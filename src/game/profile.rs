use super::strategy::Strategy;
use crate::Position;
use serde::Serialize;

/// One strategy per player, in player order.
/// Used as the key into an [`Oracle`](super::Oracle).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Profile(Vec<Strategy>);

impl Profile {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Strategy> {
        self.0.iter()
    }
    /// the same profile with `player` unilaterally deviating to `strategy`
    pub fn deviate(&self, player: Position, strategy: &Strategy) -> Self {
        let mut strategies = self.0.clone();
        strategies[player] = strategy.clone();
        Self(strategies)
    }
}

impl From<Vec<Strategy>> for Profile {
    fn from(strategies: Vec<Strategy>) -> Self {
        Self(strategies)
    }
}

impl<S> FromIterator<S> for Profile
where
    S: Into<Strategy>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl std::ops::Index<Position> for Profile {
    type Output = Strategy;
    fn index(&self, player: Position) -> &Self::Output {
        &self.0[player]
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels = self
            .0
            .iter()
            .map(Strategy::as_str)
            .collect::<Vec<&str>>()
            .join(", ");
        write!(f, "({})", labels)
    }
}
