use super::label::Type;
use crate::Position;
use serde::Serialize;

/// One reported type per player, in player order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Theta(Vec<Type>);

impl Theta {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Type> {
        self.0.iter()
    }
    /// the same report with `player` claiming `kind` instead
    pub fn misreport(&self, player: Position, kind: &Type) -> Self {
        let mut types = self.0.clone();
        types[player] = kind.clone();
        Self(types)
    }
}

impl From<Vec<Type>> for Theta {
    fn from(types: Vec<Type>) -> Self {
        Self(types)
    }
}

impl<T> FromIterator<T> for Theta
where
    T: Into<Type>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl std::ops::Index<Position> for Theta {
    type Output = Type;
    fn index(&self, player: Position) -> &Self::Output {
        &self.0[player]
    }
}

impl std::fmt::Display for Theta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels = self
            .0
            .iter()
            .map(Type::as_str)
            .collect::<Vec<&str>>()
            .join(" ");
        write!(f, "{{{}}}", labels)
    }
}
