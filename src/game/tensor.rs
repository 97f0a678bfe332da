use crate::Utility;

/// One player's payoffs with their own strategy held fixed, across every
/// profile of the remaining players. Tensors of the same player share an
/// enumeration order and may be compared pointwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor(Vec<Utility>);

impl Tensor {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Utility> {
        self.0.iter()
    }
    /// worst case over opponents
    pub fn min(&self) -> Utility {
        self.0.iter().copied().fold(Utility::INFINITY, Utility::min)
    }
    /// best case over opponents
    pub fn max(&self) -> Utility {
        self.0.iter().copied().fold(Utility::NEG_INFINITY, Utility::max)
    }
    /// pointwise combination of two equally long tensors
    pub fn zip(&self, other: &Self, f: impl Fn(Utility, Utility) -> Utility) -> Self {
        debug_assert!(self.len() == other.len());
        Self(self.0.iter().zip(other.0.iter()).map(|(&a, &b)| f(a, b)).collect())
    }
}

impl From<Vec<Utility>> for Tensor {
    fn from(utilities: Vec<Utility>) -> Self {
        Self(utilities)
    }
}

impl FromIterator<Utility> for Tensor {
    fn from_iter<I: IntoIterator<Item = Utility>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
