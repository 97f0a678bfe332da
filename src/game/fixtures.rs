//! Small games shared across test modules.
use super::*;
use crate::Utility;

/// builds a game from strategy labels and a payoff row per profile
pub(crate) fn build(sets: &[&[&str]], rows: &[(&[&str], &[Utility])]) -> NormalForm {
    let table = rows
        .iter()
        .map(|(p, u)| (Profile::from_iter(p.iter().copied()), Payoff::from(u.to_vec())))
        .collect::<Table>();
    let strategies = sets
        .iter()
        .map(|set| set.iter().copied().map(Strategy::from).collect())
        .collect();
    NormalForm::new(sets.len(), strategies, table).expect("valid fixture")
}

/// every profile of a two-player game laid out as a row-major bimatrix
pub(crate) fn bimatrix(rows: &[&str], cols: &[&str], u1: &[&[Utility]], u2: &[&[Utility]]) -> NormalForm {
    let profiles = rows
        .iter()
        .enumerate()
        .flat_map(|(i, r)| cols.iter().enumerate().map(move |(j, c)| (i, j, *r, *c)))
        .map(|(i, j, r, c)| (Profile::from_iter([r, c]), Payoff::from([u1[i][j], u2[i][j]])))
        .collect::<Table>();
    let strategies = vec![
        rows.iter().copied().map(Strategy::from).collect(),
        cols.iter().copied().map(Strategy::from).collect(),
    ];
    NormalForm::new(2, strategies, profiles).expect("valid fixture")
}

pub(crate) fn strategy(s: &str) -> Strategy {
    Strategy::from(s)
}

#[rustfmt::skip]
pub(crate) fn dilemma() -> NormalForm {
    bimatrix(
        &["c", "d"],
        &["c", "d"],
        &[&[-1., -3.], &[ 0., -2.]],
        &[&[-1.,  0.], &[-3., -2.]],
    )
}

/// row payoffs rise down every column, column payoffs rise along every row
#[rustfmt::skip]
pub(crate) fn ladder() -> NormalForm {
    bimatrix(
        &["a", "b", "c"],
        &["p", "q", "r"],
        &[&[ 0.,  1.,  2.], &[10., 11., 12.], &[20., 21., 22.]],
        &[&[ 0., 10., 20.], &[ 1., 11., 21.], &[ 2., 12., 22.]],
    )
}

/// pure coordination on the diagonal
#[rustfmt::skip]
pub(crate) fn coordination() -> NormalForm {
    bimatrix(
        &["a", "b", "c"],
        &["p", "q", "r"],
        &[&[3., 0., 0.], &[0., 2., 0.], &[0., 0., 1.]],
        &[&[3., 0., 0.], &[0., 2., 0.], &[0., 0., 1.]],
    )
}

/// "a" weakly dominates "b" for the row player, "p" weakly dominates "q" for the column player
#[rustfmt::skip]
pub(crate) fn weak() -> NormalForm {
    bimatrix(
        &["a", "b"],
        &["p", "q"],
        &[&[2., 1.], &[2., 0.]],
        &[&[2., 2.], &[1., 0.]],
    )
}

#[rustfmt::skip]
pub(crate) fn pennies() -> NormalForm {
    bimatrix(
        &["h", "t"],
        &["h", "t"],
        &[&[ 1., -1.], &[-1.,  1.]],
        &[&[-1.,  1.], &[ 1., -1.]],
    )
}

/// zero-sum with a pure saddle point at (b, q), value 2
#[rustfmt::skip]
pub(crate) fn saddle() -> NormalForm {
    bimatrix(
        &["a", "b", "c"],
        &["p", "q", "r"],
        &[&[ 4.,  1., -3.], &[ 3.,  2.,  5.], &[ 0.,  1.,  6.]],
        &[&[-4., -1.,  3.], &[-3., -2., -5.], &[ 0., -1., -6.]],
    )
}

/// asymmetric rock-paper-scissors, rock beats scissors twice as hard
#[rustfmt::skip]
pub(crate) fn rps() -> NormalForm {
    bimatrix(
        &["r", "p", "s"],
        &["r", "p", "s"],
        &[&[ 0., -1.,  2.], &[ 1.,  0., -1.], &[-2.,  1.,  0.]],
        &[&[ 0.,  1., -2.], &[-1.,  0.,  1.], &[ 2., -1.,  0.]],
    )
}
