use super::*;
use crate::Position;
use crate::Utility;
use std::collections::HashSet;
use std::sync::Arc;

/// A finite game in normal form: `n` players, one ordered strategy set
/// per player, and a payoff [`Oracle`].
///
/// Values are immutable once built. Elimination produces a new game that
/// shares the same oracle through an `Arc` but owns its own strategy sets,
/// so a reduced game never aliases the sets of its parent.
#[derive(Clone)]
pub struct NormalForm {
    strategies: Vec<Vec<Strategy>>,
    oracle: Arc<dyn Oracle>,
}

impl NormalForm {
    /// Validates the declared player count against the strategy sets.
    /// Every set must be non-empty and free of duplicates.
    pub fn new<O>(n: usize, strategies: Vec<Vec<Strategy>>, oracle: O) -> Result<Self, GameError>
    where
        O: Oracle + 'static,
    {
        Self::shared(n, strategies, Arc::new(oracle))
    }

    pub fn shared(
        n: usize,
        strategies: Vec<Vec<Strategy>>,
        oracle: Arc<dyn Oracle>,
    ) -> Result<Self, GameError> {
        if n == 0 {
            return Err(GameError::Validation("game needs at least one player".into()));
        }
        if n != strategies.len() {
            return Err(GameError::Validation(format!(
                "declared {} players but found {} strategy sets",
                n,
                strategies.len()
            )));
        }
        for (i, set) in strategies.iter().enumerate() {
            if set.is_empty() {
                return Err(GameError::Validation(format!(
                    "player {} has no strategies",
                    i + 1
                )));
            }
            let ref mut seen = HashSet::new();
            if let Some(dup) = set.iter().find(|s| !seen.insert(*s)) {
                return Err(GameError::Validation(format!(
                    "player {} lists strategy {} twice",
                    i + 1,
                    dup
                )));
            }
        }
        Ok(Self { strategies, oracle })
    }

    pub fn n(&self) -> usize {
        self.strategies.len()
    }

    pub fn players(&self) -> std::ops::Range<Position> {
        0..self.n()
    }

    pub fn strategies(&self, player: Position) -> Result<&[Strategy], GameError> {
        self.strategies
            .get(player)
            .map(Vec::as_slice)
            .ok_or(GameError::Player(player))
    }

    /// number of strategies per player
    pub fn shape(&self) -> Vec<usize> {
        self.strategies.iter().map(Vec::len).collect()
    }

    pub fn oracle(&self) -> Arc<dyn Oracle> {
        Arc::clone(&self.oracle)
    }

    /// Payoff vector for a complete profile. The profile must pick one
    /// member of each player's set; anything else is a lookup failure.
    pub fn payoff(&self, profile: &Profile) -> Result<Payoff, GameError> {
        let valid = profile.len() == self.n()
            && profile
                .iter()
                .zip(self.strategies.iter())
                .all(|(s, set)| set.contains(s));
        match valid {
            true => self.lookup(profile),
            false => Err(GameError::Lookup(profile.clone())),
        }
    }

    /// `player`'s utility at `profile`
    pub fn utility(&self, player: Position, profile: &Profile) -> Result<Utility, GameError> {
        self.strategies(player)?;
        self.payoff(profile).and_then(|payoff| Self::component(payoff, player, profile))
    }

    /// Payoffs `player` receives with `strategy` fixed, over every profile
    /// of the other players. The enumeration order depends only on the
    /// other players' sets, never on `strategy`. A `strategy` outside
    /// `player`'s set fails like any other foreign profile.
    pub fn tensor(&self, player: Position, strategy: &Strategy) -> Result<Tensor, GameError> {
        self.strategies(player)?;
        self.fixing(player, strategy)
            .map(|profile| {
                self.payoff(&profile)
                    .and_then(|payoff| Self::component(payoff, player, &profile))
            })
            .collect()
    }

    /// every profile of the game, lazily
    pub fn profiles(&self) -> Profiles<'_> {
        Profiles::from(self.strategies.iter().map(Vec::as_slice).collect::<Vec<_>>())
    }

    /// every profile in which `player` plays `strategy`
    pub fn fixing<'a>(&'a self, player: Position, strategy: &'a Strategy) -> Profiles<'a> {
        Profiles::from(
            self.strategies
                .iter()
                .enumerate()
                .map(|(i, set)| match i == player {
                    true => std::slice::from_ref(strategy),
                    false => set.as_slice(),
                })
                .collect::<Vec<_>>(),
        )
    }

    /// A new game without `strategy` in `player`'s set. Refuses to remove
    /// a player's last strategy.
    pub fn without(&self, player: Position, strategy: &Strategy) -> Result<Self, GameError> {
        let set = self.strategies(player)?;
        if set.len() <= 1 {
            return Err(GameError::Validation(format!(
                "cannot remove the last strategy of player {}",
                player + 1
            )));
        }
        let mut strategies = self.strategies.clone();
        strategies[player].retain(|s| s != strategy);
        Self::shared(self.n(), strategies, self.oracle())
    }

    fn lookup(&self, profile: &Profile) -> Result<Payoff, GameError> {
        self.oracle
            .lookup(profile)
            .filter(|payoff| payoff.len() == self.n())
            .ok_or_else(|| GameError::Lookup(profile.clone()))
    }

    fn component(payoff: Payoff, player: Position, profile: &Profile) -> Result<Utility, GameError> {
        payoff
            .get(player)
            .ok_or_else(|| GameError::Lookup(profile.clone()))
    }
}

impl PartialEq for NormalForm {
    /// structural equality over strategy sets; oracles are compared by identity
    fn eq(&self, other: &Self) -> bool {
        self.strategies == other.strategies && Arc::ptr_eq(&self.oracle, &other.oracle)
    }
}

impl std::fmt::Debug for NormalForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NormalForm")
            .field("strategies", &self.strategies)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for NormalForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, set) in self.strategies.iter().enumerate() {
            let labels = set
                .iter()
                .map(Strategy::as_str)
                .collect::<Vec<&str>>()
                .join(", ");
            writeln!(f, "S{} = {{{}}}", i + 1, labels)?;
        }
        for profile in self.profiles() {
            match self.lookup(&profile) {
                Ok(payoff) => writeln!(f, "  {} -> {}", profile, payoff)?,
                Err(_) => writeln!(f, "  {} -> undefined", profile)?,
            }
        }
        Ok(())
    }
}
