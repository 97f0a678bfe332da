use crate::Position;
use crate::Utility;
use crate::game::*;
use serde::Serialize;

/// A guaranteed value together with every strategy that attains it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Security {
    pub value: Utility,
    pub strategies: Vec<Strategy>,
}

impl std::fmt::Display for Security {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels = self
            .strategies
            .iter()
            .map(Strategy::as_str)
            .collect::<Vec<&str>>()
            .join(", ");
        write!(f, "{} via {{{}}}", self.value, labels)
    }
}

impl NormalForm {
    /// max over own strategies of the worst payoff across opponents
    pub fn maxmin(&self, player: Position) -> Result<Security, GameError> {
        self.security(player, Tensor::min, |a, b| a > b)
    }

    /// min over own strategies of the best payoff across opponents
    pub fn minmax(&self, player: Position) -> Result<Security, GameError> {
        self.security(player, Tensor::max, |a, b| a < b)
    }

    fn security(
        &self,
        player: Position,
        inner: fn(&Tensor) -> Utility,
        better: fn(Utility, Utility) -> bool,
    ) -> Result<Security, GameError> {
        let mut security: Option<Security> = None;
        for strategy in self.strategies(player)? {
            let value = inner(&self.tensor(player, strategy)?);
            match security {
                Some(ref mut s) if s.value == value => s.strategies.push(strategy.clone()),
                Some(ref s) if !better(value, s.value) => {}
                _ => {
                    security = Some(Security {
                        value,
                        strategies: vec![strategy.clone()],
                    })
                }
            }
        }
        security.ok_or_else(|| GameError::Validation(format!("player {} has no strategies", player + 1)))
    }
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::fixtures::*;

    #[test]
    fn saddle_security() {
        let game = saddle();
        assert_eq!(game.maxmin(0), Ok(Security { value: 2., strategies: vec![strategy("b")] }));
        assert_eq!(game.maxmin(1), Ok(Security { value: -2., strategies: vec![strategy("q")] }));
    }

    #[test]
    fn ties_are_kept() {
        let game = weak();
        assert_eq!(game.maxmin(1), Ok(Security { value: 1., strategies: vec![strategy("p")] }));
        assert_eq!(game.minmax(0), Ok(Security { value: 2., strategies: vec![strategy("a"), strategy("b")] }));
        let game = coordination();
        assert_eq!(game.maxmin(0), Ok(Security { value: 0., strategies: vec![strategy("a"), strategy("b"), strategy("c")] }));
        assert_eq!(game.minmax(1), Ok(Security { value: 1., strategies: vec![strategy("r")] }));
    }

    #[test]
    fn unknown_player() {
        assert_eq!(dilemma().maxmin(5), Err(GameError::Player(5)));
    }
}
