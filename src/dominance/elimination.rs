use super::*;
use crate::Position;
use crate::game::*;

impl NormalForm {
    /// Iterated elimination of weakly dominated strategies.
    ///
    /// Each pass scans players in order and removes the first strategy
    /// that is weakly dominated by every other strategy still available to
    /// its player, then restarts from the first player on the reduced game.
    /// The loop stops at the first pass that removes nothing, so the
    /// result is a fixpoint: eliminating again returns an equal game.
    ///
    /// Weak elimination is order dependent in general. The fixed scan
    /// order makes the reduced game reproducible, not canonical.
    pub fn eliminate(&self) -> Result<NormalForm, GameError> {
        let mut game = self.clone();
        while let Some((player, strategy)) = game.eliminable()? {
            log::debug!("eliminating {} from player {}", strategy, player + 1);
            game = game.without(player, &strategy)?;
        }
        log::debug!("reduced game shape {:?}", game.shape());
        Ok(game)
    }

    fn eliminable(&self) -> Result<Option<(Position, Strategy)>, GameError> {
        for player in self.players() {
            if self.strategies(player)?.len() > 1 {
                if let Some(strategy) = self.dominated(player, Relation::Weak)? {
                    return Ok(Some((player, strategy)));
                }
            }
        }
        Ok(None)
    }
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::fixtures::*;

    #[test]
    fn dilemma_reduces_to_defection() {
        let reduced = dilemma().eliminate().unwrap();
        assert_eq!(reduced.shape(), vec![1, 1]);
        assert_eq!(reduced.strategies(0).unwrap(), &[strategy("d")]);
        assert_eq!(reduced.strategies(1).unwrap(), &[strategy("d")]);
    }

    #[test]
    fn ladder_reduces_to_corner() {
        let reduced = ladder().eliminate().unwrap();
        assert_eq!(reduced.profiles().collect::<Vec<_>>(), vec![Profile::from_iter(["c", "r"])]);
    }

    #[test]
    fn weak_elimination_follows_player_order() {
        // removing "b" first leaves the column player indifferent
        let reduced = weak().eliminate().unwrap();
        assert_eq!(reduced.strategies(0).unwrap(), &[strategy("a")]);
        assert_eq!(reduced.shape(), vec![1, 2]);
    }

    #[test]
    fn nothing_to_eliminate() {
        let game = coordination();
        assert_eq!(game.eliminate().unwrap(), game);
        let game = pennies();
        assert_eq!(game.eliminate().unwrap(), game);
    }

    #[test]
    fn idempotent() {
        for game in [dilemma(), ladder(), coordination(), weak(), pennies(), saddle(), rps()] {
            let once = game.eliminate().unwrap();
            let twice = once.eliminate().unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn original_is_untouched() {
        let game = ladder();
        let _ = game.eliminate().unwrap();
        assert_eq!(game.shape(), vec![3, 3]);
    }

    #[test]
    fn elimination_cascades() {
        // "b" is only dominated once "q" is gone
        let game = bimatrix(
            &["a", "b"],
            &["p", "q"],
            &[&[1., 0.], &[0., 2.]],
            &[&[3., 1.], &[3., 1.]],
        );
        let reduced = game.eliminate().unwrap();
        assert_eq!(reduced.profiles().collect::<Vec<_>>(), vec![Profile::from_iter(["a", "p"])]);
    }

    #[test]
    fn partial_oracle_fails() {
        let game = build(&[&["a", "b"], &["p"]], &[(&["a", "p"], &[1., 1.])]);
        assert_eq!(game.eliminate(), Err(GameError::Lookup(Profile::from_iter(["b", "p"]))));
    }
}
