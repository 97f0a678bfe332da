use super::*;
use crate::Probability;
use crate::TOLERANCE;
use crate::Utility;
use crate::equilibrium::Security;
use crate::game::*;
use crate::lp::*;
use ndarray::Array2;
use serde::Serialize;

/// A [`Bimatrix`] whose payoffs satisfy U1 = -U2 exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroSum(Bimatrix);

/// Pure profiles at which the row player's guaranteed value and the
/// column player's guaranteed concession coincide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Saddle {
    pub value: Utility,
    pub profiles: Vec<Profile>,
}

impl std::fmt::Display for Saddle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let profiles = self
            .profiles
            .iter()
            .map(Profile::to_string)
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{} at {}", self.value, profiles)
    }
}

impl TryFrom<Bimatrix> for ZeroSum {
    type Error = MixedError;
    fn try_from(game: Bimatrix) -> Result<Self, Self::Error> {
        let u1 = game.matrix(0)?;
        let u2 = game.matrix(1)?;
        match u1
            .indexed_iter()
            .find(|((i, j), u)| **u != -u2[(*i, *j)])
        {
            Some(((row, col), _)) => Err(MixedError::NotZeroSum { row, col }),
            None => Ok(Self(game)),
        }
    }
}

impl ZeroSum {
    pub fn new(game: NormalForm) -> Result<Self, MixedError> {
        Self::try_from(Bimatrix::new(game)?)
    }

    pub fn bimatrix(&self) -> &Bimatrix {
        &self.0
    }

    /// Optimal mixed strategies from one minimax program per player.
    /// The program always has an optimum for a finite zero-sum game, so
    /// anything else is reported as a solver failure.
    pub fn msne(&self) -> Result<Equilibrium, MixedError> {
        let u1 = self.0.matrix(0)?;
        let u2 = self.0.matrix(1)?.t().to_owned();
        let (p, v1) = minimax(u1)?;
        let (q, v2) = minimax(&u2)?;
        log::debug!("zero sum value {} / {}", v1, v2);
        Ok(Equilibrium {
            row: Mixed {
                strategies: self.0.strategies(0)?.to_vec(),
                weights: p,
            },
            col: Mixed {
                strategies: self.0.strategies(1)?.to_vec(),
                weights: q,
            },
            values: [v1, v2],
        })
    }

    /// what the row player can guarantee with a pure strategy
    pub fn lower(&self) -> Result<Security, MixedError> {
        Ok(self.0.game().maxmin(0)?)
    }

    /// What the column player can hold the row player to with a pure
    /// strategy, in the row player's units.
    pub fn upper(&self) -> Result<Security, MixedError> {
        let Security { value, strategies } = self.0.game().maxmin(1)?;
        Ok(Security {
            value: -value,
            strategies,
        })
    }

    /// Pure saddle points, present iff the lower and upper values agree.
    /// Every pairing of a maxmin row with a minmax column is then a saddle.
    pub fn saddle_point(&self) -> Result<Option<Saddle>, MixedError> {
        let lower = self.lower()?;
        let upper = self.upper()?;
        if lower.value != upper.value {
            return Ok(None);
        }
        let profiles = lower
            .strategies
            .iter()
            .flat_map(|r| {
                upper
                    .strategies
                    .iter()
                    .map(move |c| Profile::from(vec![r.clone(), c.clone()]))
            })
            .collect();
        Ok(Some(Saddle {
            value: lower.value,
            profiles,
        }))
    }

    pub fn eliminate(&self) -> Result<Self, MixedError> {
        Self::try_from(self.0.eliminate()?)
    }
}

/// `max v` such that the mix over `u`'s rows earns at least `v` against
/// every column. Variables are `[v, p₀, .., pₘ]`.
fn minimax(u: &Array2<Utility>) -> Result<(Vec<Probability>, Utility), MixedError> {
    let m = u.nrows();
    let mut objective = vec![0.; m + 1];
    objective[0] = 1.;
    let mut total = vec![1.; m + 1];
    total[0] = 0.;
    let program = u.columns().into_iter().fold(
        Program::maximize(objective)
            .bounded(0, Bound::free())
            .subject_to(total, Sense::Eq, 1.),
        |program, column| {
            let coefficients = std::iter::once(-1.).chain(column.iter().copied()).collect();
            program.subject_to(coefficients, Sense::Ge, 0.)
        },
    );
    match program.solve(TOLERANCE) {
        Solution::Optimal { x, .. } => Ok((x[1..].iter().map(|p| p.max(0.)).collect(), x[0])),
        other => Err(MixedError::Solver(format!("minimax program {}", other))),
    }
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::EQUILIBRIUM_TOLERANCE;
    use crate::game::fixtures::*;
    use rand::Rng;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    /// random integer zero-sum game with up to four strategies a side
    fn random() -> NormalForm {
        let ref mut rng = rand::rng();
        let rows = rng.random_range(1..=4);
        let cols = rng.random_range(1..=4);
        let u1 = (0..rows)
            .map(|_| (0..cols).map(|_| rng.random_range(-3..=3) as Utility).collect::<Vec<Utility>>())
            .collect::<Vec<_>>();
        let u2 = u1.iter().map(|row| row.iter().map(|u| -u).collect::<Vec<Utility>>()).collect::<Vec<_>>();
        let r = (0..rows).map(|i| format!("r{}", i)).collect::<Vec<String>>();
        let c = (0..cols).map(|j| format!("c{}", j)).collect::<Vec<String>>();
        bimatrix(
            &r.iter().map(String::as_str).collect::<Vec<_>>(),
            &c.iter().map(String::as_str).collect::<Vec<_>>(),
            &u1.iter().map(Vec::as_slice).collect::<Vec<_>>(),
            &u2.iter().map(Vec::as_slice).collect::<Vec<_>>(),
        )
    }

    #[test]
    fn rejects_general_sum() {
        assert_eq!(ZeroSum::new(dilemma()), Err(MixedError::NotZeroSum { row: 0, col: 0 }));
        assert!(ZeroSum::new(pennies()).is_ok());
    }

    #[test]
    fn pennies_value_zero() {
        let game = ZeroSum::new(pennies()).unwrap();
        let e = game.msne().unwrap();
        assert!(close(e.row.weights[0], 0.5) && close(e.col.weights[0], 0.5));
        assert!(close(e.values[0], 0.) && close(e.values[1], 0.));
        assert_eq!(game.saddle_point(), Ok(None));
    }

    #[test]
    fn rps_minimax() {
        let game = ZeroSum::new(rps()).unwrap();
        let e = game.msne().unwrap();
        for (w, expected) in e.row.weights.iter().chain(e.col.weights.iter()).zip([0.25, 0.5, 0.25, 0.25, 0.5, 0.25]) {
            assert!(close(*w, expected));
        }
        assert!(e.verify(game.bimatrix(), EQUILIBRIUM_TOLERANCE));
    }

    #[test]
    fn saddle_fixture() {
        let game = ZeroSum::new(saddle()).unwrap();
        let saddle = game.saddle_point().unwrap().unwrap();
        assert_eq!(saddle.value, 2.);
        assert_eq!(saddle.profiles, vec![Profile::from_iter(["b", "q"])]);
        let e = game.msne().unwrap();
        assert!(close(e.values[0], 2.) && close(e.values[1], -2.));
        assert!(close(e.row.weight(&strategy("b")), 1.));
    }

    #[test]
    fn saddle_iff_values_meet() {
        for _ in 0..64 {
            let game = ZeroSum::new(random()).unwrap();
            let lower = game.lower().unwrap().value;
            let upper = game.upper().unwrap().value;
            assert!(lower <= upper);
            match game.saddle_point().unwrap() {
                Some(saddle) => {
                    assert_eq!(lower, upper);
                    assert_eq!(saddle.value, lower);
                    for profile in saddle.profiles.iter() {
                        assert_eq!(game.bimatrix().game().utility(0, profile), Ok(lower));
                    }
                }
                None => assert!(lower < upper),
            }
        }
    }

    #[test]
    fn minimax_value_between_pure_bounds() {
        for _ in 0..64 {
            let game = ZeroSum::new(random()).unwrap();
            let e = game.msne().unwrap();
            assert!(e.verify(game.bimatrix(), EQUILIBRIUM_TOLERANCE), "{}", game.bimatrix());
            assert!(close(e.values[0], -e.values[1]));
            assert!(game.lower().unwrap().value <= e.values[0] + 1e-6);
            assert!(game.upper().unwrap().value >= e.values[0] - 1e-6);
        }
    }

    #[test]
    fn elimination_stays_zero_sum() {
        let game = ZeroSum::new(saddle()).unwrap().eliminate().unwrap();
        assert!(game.bimatrix().rows() <= 3);
        assert_eq!(game.saddle_point().unwrap().map(|s| s.value), Some(2.));
    }
}
