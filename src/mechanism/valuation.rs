use super::label::Outcome;
use super::theta::Theta;
use crate::game::Payoff;
use std::collections::HashMap;

/// Payoff vector of every player when `outcome` is chosen and the true
/// types are `theta`. `None` where undefined.
pub trait Valuation: Send + Sync {
    fn value(&self, outcome: &Outcome, theta: &Theta) -> Option<Payoff>;
}

/// Hashed valuation table, as read from a utility file.
#[derive(Debug, Clone, Default)]
pub struct Valuations(HashMap<(Outcome, Theta), Payoff>);

impl Valuations {
    pub fn insert(&mut self, outcome: Outcome, theta: Theta, payoff: Payoff) -> Option<Payoff> {
        self.0.insert((outcome, theta), payoff)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Outcome, Theta, Payoff)> for Valuations {
    fn from_iter<I: IntoIterator<Item = (Outcome, Theta, Payoff)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(o, t, p)| ((o, t), p)).collect())
    }
}

impl Valuation for Valuations {
    fn value(&self, outcome: &Outcome, theta: &Theta) -> Option<Payoff> {
        // keyed by value, so the lookup clones the pair once
        self.0.get(&(outcome.clone(), theta.clone())).cloned()
    }
}

impl<F> Valuation for F
where
    F: Fn(&Outcome, &Theta) -> Option<Payoff> + Send + Sync,
{
    fn value(&self, outcome: &Outcome, theta: &Theta) -> Option<Payoff> {
        self(outcome, theta)
    }
}
