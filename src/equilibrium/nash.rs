use crate::Position;
use crate::Utility;
use crate::game::*;
use rayon::prelude::*;
use std::collections::BTreeSet;

impl NormalForm {
    /// Pure-strategy Nash equilibria by best-response intersection.
    ///
    /// Starts from every profile of the game and intersects, player by
    /// player, with the profiles in which that player best-responds. A
    /// profile survives iff every player best-responds at once. `None`
    /// when the intersection is empty.
    pub fn psne(&self) -> Result<Option<BTreeSet<Profile>>, GameError> {
        let responses = self
            .players()
            .into_par_iter()
            .map(|player| self.best_responses(player))
            .collect::<Result<Vec<BTreeSet<Profile>>, GameError>>()?;
        let equilibria = responses
            .iter()
            .fold(self.profiles().collect::<BTreeSet<Profile>>(), |candidates, responses| {
                candidates.intersection(responses).cloned().collect()
            });
        log::debug!("{} pure equilibria", equilibria.len());
        Ok(Some(equilibria).filter(|e| !e.is_empty()))
    }

    /// Profiles in which `player`'s strategy maximizes their payoff given
    /// everyone else's strategies. Ties are all best responses.
    pub fn best_responses(&self, player: Position) -> Result<BTreeSet<Profile>, GameError> {
        let set = self.strategies(player)?;
        let mut responses = BTreeSet::new();
        for ref base in self.fixing(player, &set[0]) {
            let deviations = set
                .iter()
                .map(|s| base.deviate(player, s))
                .map(|p| self.utility(player, &p).map(|u| (p, u)))
                .collect::<Result<Vec<(Profile, Utility)>, GameError>>()?;
            let best = deviations
                .iter()
                .map(|(_, u)| *u)
                .fold(Utility::NEG_INFINITY, Utility::max);
            responses.extend(
                deviations
                    .into_iter()
                    .filter(|(_, u)| *u == best)
                    .map(|(p, _)| p),
            );
        }
        Ok(responses)
    }

    /// True iff no player gains by a unilateral deviation from `profile`.
    pub fn is_nash(&self, profile: &Profile) -> Result<bool, GameError> {
        for player in self.players() {
            let current = self.utility(player, profile)?;
            for strategy in self.strategies(player)? {
                if self.utility(player, &profile.deviate(player, strategy))? > current {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }
}
