use super::*;
use crate::Position;
use crate::game::*;

/// running state of a left-to-right dominance scan
struct Scan {
    candidate: Strategy,
    tensor: Tensor,
    envelope: Tensor,
    exists: bool,
}

impl NormalForm {
    /// Strategy of `player` that dominates every alternative under
    /// `relation`, or `None` if no single strategy does.
    pub fn dominant(&self, player: Position, relation: Relation) -> Result<Option<Strategy>, GameError> {
        self.extreme(player, relation, Extreme::Best)
    }

    /// Strategy of `player` dominated by every alternative under `relation`.
    pub fn dominated(&self, player: Position, relation: Relation) -> Result<Option<Strategy>, GameError> {
        self.extreme(player, relation, Extreme::Worst)
    }

    pub fn strongly_dominant(&self, player: Position) -> Result<Option<Strategy>, GameError> {
        self.dominant(player, Relation::Strong)
    }

    pub fn weakly_dominant(&self, player: Position) -> Result<Option<Strategy>, GameError> {
        self.dominant(player, Relation::Weak)
    }

    /// Profile of per-player dominant strategies found by `solver`.
    /// `None` as soon as any player has none.
    pub fn dominant_equilibrium<F>(&self, solver: F) -> Result<Option<Profile>, GameError>
    where
        F: Fn(&Self, Position) -> Result<Option<Strategy>, GameError>,
    {
        let mut profile = Vec::with_capacity(self.n());
        for player in self.players() {
            match solver(self, player)? {
                Some(strategy) => profile.push(strategy),
                None => return Ok(None),
            }
        }
        Ok(Some(Profile::from(profile)))
    }

    /// strongly dominant strategy equilibrium
    pub fn sdse(&self) -> Result<Option<Profile>, GameError> {
        self.dominant_equilibrium(Self::strongly_dominant)
    }

    /// weakly dominant strategy equilibrium
    pub fn wdse(&self) -> Result<Option<Profile>, GameError> {
        self.dominant_equilibrium(Self::weakly_dominant)
    }

    /// Scans the strategy set once, keeping the current candidate and an
    /// envelope of every tensor seen so far. An incomparable tensor is
    /// folded into the envelope and clears `exists`; a later strategy
    /// that dominates the whole envelope reinstates it.
    ///
    /// Under weak dominance a strategy can dominate each rival while only
    /// matching their envelope, e.g. (1, 1) against (1, 0) and (0, 1).
    /// A candidate that covers the envelope is confirmed pairwise.
    fn extreme(&self, player: Position, relation: Relation, extreme: Extreme) -> Result<Option<Strategy>, GameError> {
        let set = self.strategies(player)?;
        let (first, rest) = set
            .split_first()
            .ok_or_else(|| GameError::Validation(format!("player {} has no strategies", player + 1)))?;
        let tensor = self.tensor(player, first)?;
        let init = Scan {
            candidate: first.clone(),
            envelope: tensor.clone(),
            tensor,
            exists: true,
        };
        let scan = rest.iter().try_fold(init, |scan, strategy| {
            let tensor = self.tensor(player, strategy)?;
            Ok::<_, GameError>(match extreme.orient(relation.compare(&scan.envelope, &tensor)) {
                Dominance::Dominates => scan,
                Dominance::DominatedBy => Scan {
                    candidate: strategy.clone(),
                    envelope: tensor.clone(),
                    tensor,
                    exists: true,
                },
                Dominance::Incomparable => {
                    let envelope = extreme.envelope(&scan.envelope, &tensor);
                    match envelope == tensor {
                        true => Scan {
                            candidate: strategy.clone(),
                            tensor,
                            envelope,
                            exists: false,
                        },
                        false => Scan {
                            envelope,
                            exists: false,
                            ..scan
                        },
                    }
                }
            })
        })?;
        if scan.exists {
            return Ok(Some(scan.candidate));
        }
        if scan.tensor != scan.envelope {
            return Ok(None);
        }
        for strategy in set.iter().filter(|s| **s != scan.candidate) {
            let rival = self.tensor(player, strategy)?;
            if extreme.orient(relation.compare(&scan.tensor, &rival)) != Dominance::Dominates {
                return Ok(None);
            }
        }
        Ok(Some(scan.candidate))
    }
}
