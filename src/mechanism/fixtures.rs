//! Small environments shared across test modules.
use super::*;
use crate::game::Payoff;

/// Two bidders, each high or low, choosing between outcomes a and b.
/// A high type values a at 2 and b at 0, a low type values a at 0 and b at 1.
pub(crate) fn auction() -> Environment {
    let types = vec![
        vec![Type::from("h"), Type::from("l")],
        vec![Type::from("h"), Type::from("l")],
    ];
    let outcomes = vec![Outcome::from("a"), Outcome::from("b")];
    let valuation = |outcome: &Outcome, theta: &Theta| {
        let payoff = theta
            .iter()
            .map(|kind| match (kind.as_str(), outcome.as_str()) {
                ("h", "a") => 2.,
                ("l", "b") => 1.,
                _ => 0.,
            })
            .collect::<Vec<_>>();
        Some(Payoff::from(payoff))
    };
    Environment::new(2, types, outcomes, valuation).expect("valid fixture")
}

/// social choice over [`auction`] given outcomes in type profile order
pub(crate) fn choice(outcomes: &[&str]) -> SocialChoice {
    auction()
        .thetas()
        .iter()
        .cloned()
        .zip(outcomes.iter().copied().map(Outcome::from))
        .collect()
}
