use super::*;
use std::sync::Arc;

/// Every total map from type profiles to outcomes, in odometer order
/// with the last type profile's outcome varying fastest.
///
/// There are |O|^|Θ| of them. Nothing is materialized beyond the current
/// digit vector, and a clone restarts from the clone's position, so the
/// sequence can be split or handed to `par_bridge`.
#[derive(Debug, Clone)]
pub struct Functions {
    thetas: Arc<[Theta]>,
    outcomes: Arc<[Outcome]>,
    digits: Vec<usize>,
    done: bool,
}

impl Functions {
    pub fn new(thetas: Vec<Theta>, outcomes: Vec<Outcome>) -> Self {
        let done = outcomes.is_empty() && !thetas.is_empty();
        Self {
            digits: vec![0; thetas.len()],
            thetas: thetas.into(),
            outcomes: outcomes.into(),
            done,
        }
    }

    /// |O|^|Θ|, or `None` if that overflows
    pub fn total(&self) -> Option<usize> {
        u32::try_from(self.thetas.len())
            .ok()
            .and_then(|exponent| self.outcomes.len().checked_pow(exponent))
    }

    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.outcomes.len() {
                return;
            }
            *digit = 0;
        }
        self.done = true;
    }
}

impl Iterator for Functions {
    type Item = SocialChoice;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let f = self
            .thetas
            .iter()
            .zip(self.digits.iter())
            .map(|(theta, &d)| (theta.clone(), self.outcomes[d].clone()))
            .collect();
        self.advance();
        Some(f)
    }
}
