use super::*;
use std::collections::BTreeMap;

/// A social choice function as an explicit table from type profile to
/// outcome. Lookups of unmapped profiles fail rather than defaulting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SocialChoice(BTreeMap<Theta, Outcome>);

impl SocialChoice {
    pub fn choose(&self, theta: &Theta) -> Result<&Outcome, MechanismError> {
        self.0
            .get(theta)
            .ok_or_else(|| MechanismError::Unmapped(theta.clone()))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Theta, &Outcome)> {
        self.0.iter()
    }
}

impl FromIterator<(Theta, Outcome)> for SocialChoice {
    fn from_iter<I: IntoIterator<Item = (Theta, Outcome)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for SocialChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (theta, outcome) in self.0.iter() {
            writeln!(f, "  {} -> {}", theta, outcome)?;
        }
        Ok(())
    }
}
