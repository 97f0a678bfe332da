use super::*;
use crate::Arbitrary;
use crate::Utility;
use rand::Rng;

/// Random small games with integer payoffs, so ties between strategies
/// show up often enough to exercise weak dominance and best-response sets.
impl Arbitrary for NormalForm {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let n = rng.random_range(1..=3);
        let strategies = (0..n)
            .map(|i| {
                (0..rng.random_range(1..=3))
                    .map(|j| Strategy::from(format!("{}{}", (b'a' + i as u8) as char, j)))
                    .collect::<Vec<Strategy>>()
            })
            .collect::<Vec<_>>();
        let table = Profiles::from(strategies.iter().map(Vec::as_slice).collect::<Vec<_>>())
            .map(|profile| {
                let payoff = (0..n)
                    .map(|_| rng.random_range(0..4) as Utility)
                    .collect::<Vec<Utility>>();
                (profile, Payoff::from(payoff))
            })
            .collect::<Table>();
        match NormalForm::new(n, strategies, table) {
            Ok(game) => game,
            Err(e) => unreachable!("generated game is valid: {}", e),
        }
    }
}
