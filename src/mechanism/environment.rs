use super::*;
use crate::Position;
use crate::Utility;
use crate::game::Payoff;
use std::collections::HashSet;
use std::sync::Arc;

/// Players, their type sets, the outcome set, and a [`Valuation`].
///
/// Every type profile is enumerated once at construction, with the last
/// player's type varying fastest.
#[derive(Clone)]
pub struct Environment {
    types: Vec<Vec<Type>>,
    outcomes: Vec<Outcome>,
    thetas: Vec<Theta>,
    valuation: Arc<dyn Valuation>,
}

impl Environment {
    pub fn new<V>(n: usize, types: Vec<Vec<Type>>, outcomes: Vec<Outcome>, valuation: V) -> Result<Self, MechanismError>
    where
        V: Valuation + 'static,
    {
        if n == 0 {
            return Err(MechanismError::Validation("environment needs at least one player".into()));
        }
        if n != types.len() {
            return Err(MechanismError::Validation(format!(
                "declared {} players but found {} type sets",
                n,
                types.len()
            )));
        }
        for (i, set) in types.iter().enumerate() {
            if set.is_empty() {
                return Err(MechanismError::Validation(format!("player {} has no types", i + 1)));
            }
            if let Some(dup) = duplicate(set) {
                return Err(MechanismError::Validation(format!("player {} lists type {} twice", i + 1, dup)));
            }
        }
        if outcomes.is_empty() {
            return Err(MechanismError::Validation("outcome set is empty".into()));
        }
        if let Some(dup) = duplicate(&outcomes) {
            return Err(MechanismError::Validation(format!("outcome {} listed twice", dup)));
        }
        let thetas = types.iter().fold(vec![Vec::<Type>::new()], |prefixes, set| {
            prefixes
                .iter()
                .flat_map(|prefix| {
                    set.iter().map(move |kind| {
                        let mut next = prefix.clone();
                        next.push(kind.clone());
                        next
                    })
                })
                .collect()
        });
        Ok(Self {
            types,
            outcomes,
            thetas: thetas.into_iter().map(Theta::from).collect(),
            valuation: Arc::new(valuation),
        })
    }

    pub fn n(&self) -> usize {
        self.types.len()
    }

    pub fn players(&self) -> std::ops::Range<Position> {
        0..self.n()
    }

    pub fn types(&self, player: Position) -> Result<&[Type], MechanismError> {
        self.types
            .get(player)
            .map(Vec::as_slice)
            .ok_or(MechanismError::Player(player))
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// every type profile, in enumeration order
    pub fn thetas(&self) -> &[Theta] {
        &self.thetas
    }

    /// Payoff vector at `outcome` under true types `theta`.
    pub fn utility(&self, outcome: &Outcome, theta: &Theta) -> Result<Payoff, MechanismError> {
        self.valuation
            .value(outcome, theta)
            .filter(|payoff| payoff.len() == self.n())
            .ok_or_else(|| MechanismError::Lookup {
                outcome: outcome.clone(),
                theta: theta.clone(),
            })
    }

    fn component(&self, player: Position, outcome: &Outcome, theta: &Theta) -> Result<Utility, MechanismError> {
        self.utility(outcome, theta)?
            .get(player)
            .ok_or(MechanismError::Player(player))
    }

    /// Dominant-strategy incentive compatibility.
    ///
    /// For every true profile, every player, and every type that player
    /// could claim instead, the misreport must not pay strictly more
    /// than the truth when evaluated at the true types.
    pub fn is_dsic(&self, f: &SocialChoice) -> Result<bool, MechanismError> {
        for theta in self.thetas.iter() {
            for player in self.players() {
                let truth = self.component(player, f.choose(theta)?, theta)?;
                for kind in self.types(player)? {
                    let lie = theta.misreport(player, kind);
                    if self.component(player, f.choose(&lie)?, theta)? > truth {
                        log::debug!("player {} gains by reporting {} at {}", player + 1, kind, theta);
                        return Ok(false);
                    }
                }
            }
        }
        Ok(true)
    }

    /// The chosen outcome maximizes total utility at every type profile.
    pub fn is_ex_post_efficient(&self, f: &SocialChoice) -> Result<bool, MechanismError> {
        for theta in self.thetas.iter() {
            let chosen = self.utility(f.choose(theta)?, theta)?.total();
            for outcome in self.outcomes.iter() {
                if self.utility(outcome, theta)?.total() > chosen {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Some single player gets an outcome they like at least as much as
    /// any other, at every type profile.
    pub fn is_dictatorial(&self, f: &SocialChoice) -> Result<bool, MechanismError> {
        Ok(self.dictator(f)?.is_some())
    }

    /// the first player whose preferences `f` always follows
    pub fn dictator(&self, f: &SocialChoice) -> Result<Option<Position>, MechanismError> {
        'players: for player in self.players() {
            for theta in self.thetas.iter() {
                let chosen = self.component(player, f.choose(theta)?, theta)?;
                for outcome in self.outcomes.iter() {
                    if self.component(player, outcome, theta)? > chosen {
                        continue 'players;
                    }
                }
            }
            return Ok(Some(player));
        }
        Ok(None)
    }

    /// the function that always picks `outcome`
    pub fn constant(&self, outcome: &Outcome) -> SocialChoice {
        self.thetas
            .iter()
            .map(|theta| (theta.clone(), outcome.clone()))
            .collect()
    }

    /// Every social choice function over this environment, lazily.
    pub fn functions(&self) -> Functions {
        Functions::new(self.thetas.clone(), self.outcomes.clone())
    }
}

fn duplicate<T: Eq + std::hash::Hash>(items: &[T]) -> Option<&T> {
    let ref mut seen = HashSet::new();
    items.iter().find(|item| !seen.insert(*item))
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("types", &self.types)
            .field("outcomes", &self.outcomes)
            .finish_non_exhaustive()
    }
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanism::fixtures::*;

    #[test]
    fn enumerates_type_profiles() {
        let env = auction();
        let thetas = env.thetas().iter().map(Theta::to_string).collect::<Vec<_>>();
        assert_eq!(thetas, vec!["{h h}", "{h l}", "{l h}", "{l l}"]);
    }

    #[test]
    fn validation() {
        let v = |_: &Outcome, _: &Theta| Some(Payoff::from([0.]));
        assert!(matches!(Environment::new(0, vec![], vec![Outcome::from("a")], v), Err(MechanismError::Validation(_))));
        assert!(matches!(Environment::new(2, vec![vec![Type::from("h")]], vec![Outcome::from("a")], v), Err(MechanismError::Validation(_))));
        assert!(matches!(Environment::new(1, vec![vec![]], vec![Outcome::from("a")], v), Err(MechanismError::Validation(_))));
        assert!(matches!(Environment::new(1, vec![vec![Type::from("h")]], vec![], v), Err(MechanismError::Validation(_))));
        assert!(matches!(Environment::new(1, vec![vec![Type::from("h"), Type::from("h")]], vec![Outcome::from("a")], v), Err(MechanismError::Validation(_))));
        assert!(Environment::new(1, vec![vec![Type::from("h")]], vec![Outcome::from("a")], v).is_ok());
    }

    #[test]
    fn constant_is_dsic_but_not_efficient() {
        let env = auction();
        let f = env.constant(&Outcome::from("a"));
        assert_eq!(env.is_dsic(&f), Ok(true));
        assert_eq!(env.is_ex_post_efficient(&f), Ok(false));
        assert_eq!(env.is_dictatorial(&f), Ok(false));
    }

    #[test]
    fn efficient_rule() {
        let env = auction();
        let f = choice(&["a", "a", "a", "b"]);
        assert_eq!(env.is_dsic(&f), Ok(true));
        assert_eq!(env.is_ex_post_efficient(&f), Ok(true));
        assert_eq!(env.is_dictatorial(&f), Ok(false));
    }

    #[test]
    fn dictatorship() {
        let env = auction();
        assert_eq!(env.dictator(&choice(&["a", "a", "b", "b"])), Ok(Some(0)));
        assert_eq!(env.dictator(&choice(&["a", "b", "a", "b"])), Ok(Some(1)));
        assert_eq!(env.is_ex_post_efficient(&choice(&["a", "a", "b", "b"])), Ok(false));
    }

    #[test]
    fn manipulable_rule() {
        // at {h h} player one reports l to move the outcome to a
        let env = auction();
        assert_eq!(env.is_dsic(&choice(&["b", "a", "a", "a"])), Ok(false));
    }

    #[test]
    fn missing_entries_fail() {
        let env = auction();
        let partial = [(Theta::from_iter(["h", "h"]), Outcome::from("a"))].into_iter().collect::<SocialChoice>();
        assert_eq!(env.is_ex_post_efficient(&partial), Err(MechanismError::Unmapped(Theta::from_iter(["h", "l"]))));
        let env = Environment::new(1, vec![vec![Type::from("h")]], vec![Outcome::from("a")], Valuations::default()).unwrap();
        let f = env.constant(&Outcome::from("a"));
        assert_eq!(env.is_dsic(&f), Err(MechanismError::Lookup { outcome: Outcome::from("a"), theta: Theta::from_iter(["h"]) }));
    }

    #[test]
    fn counts_over_all_functions() {
        let env = auction();
        let mut dsic = 0;
        let mut efficient = 0;
        let mut dictatorial = 0;
        for f in env.functions() {
            dsic += env.is_dsic(&f).unwrap() as usize;
            efficient += env.is_ex_post_efficient(&f).unwrap() as usize;
            dictatorial += env.is_dictatorial(&f).unwrap() as usize;
        }
        assert_eq!(efficient, 1);
        assert_eq!(dictatorial, 2);
        // monotone rules only: both constants, both dictatorships, the
        // efficient rule, and the rule picking a only at {h h}
        assert_eq!(dsic, 6);
    }
}
