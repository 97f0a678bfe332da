use super::*;
use crate::Probability;
use crate::TOLERANCE;
use crate::Utility;
use crate::lp::*;
use ndarray::Array2;
use rayon::prelude::*;

impl Bimatrix {
    /// [`Bimatrix::msne_with`] under the default probability bounds.
    pub fn msne(&self) -> Result<Search, MixedError> {
        self.msne_with(Bounds::default())
    }

    /// Mixed Nash equilibrium by support enumeration.
    ///
    /// Support pairs are tried with the row player's support outermost,
    /// each side ordered by size and then lexicographically, so pure
    /// equilibria come first. Pairs are checked in parallel but the
    /// reported equilibrium is always the first feasible pair in that
    /// order. Other equilibria may exist; only this one is returned.
    pub fn msne_with(&self, bounds: Bounds) -> Result<Search, MixedError> {
        let rows = Supports::from(self.rows()).collect::<Vec<Support>>();
        let cols = Supports::from(self.cols()).collect::<Vec<Support>>();
        let u1 = self.matrix(0)?;
        let u2 = self.matrix(1)?.t().to_owned();
        let found = (0..rows.len() * cols.len())
            .into_par_iter()
            .find_map_first(|k| {
                let ref r = rows[k / cols.len()];
                let ref c = cols[k % cols.len()];
                let (q, v1) = indifference(u1, r, c, bounds)?;
                let (p, v2) = indifference(&u2, c, r, bounds)?;
                log::debug!("feasible supports {:?} x {:?}", r.members(), c.members());
                Some((p, q, [v1, v2]))
            });
        match found {
            None => {
                log::warn!("no feasible support pair in a {}x{} game", self.rows(), self.cols());
                Ok(Search::Incomplete)
            }
            Some((p, q, values)) => Ok(Search::Found(Equilibrium {
                row: Mixed {
                    strategies: self.strategies(0)?.to_vec(),
                    weights: p,
                },
                col: Mixed {
                    strategies: self.strategies(1)?.to_vec(),
                    weights: q,
                },
                values,
            })),
        }
    }
}

/// Opponent mix over `theirs` that leaves the player owning `u` indifferent
/// across `mine` and no better off anywhere else.
///
/// Variables are `[v, q₀, .., qₖ]` with `v` free, `q` summing to one,
/// `q` within `bounds` on `theirs` and zero off it. Every row in `mine`
/// pays exactly `v` and every other row at most `v`. Returns the mix and
/// `v`, or `None` when the program is infeasible.
fn indifference(
    u: &Array2<Utility>,
    mine: &Support,
    theirs: &Support,
    bounds: Bounds,
) -> Option<(Vec<Probability>, Utility)> {
    let k = u.ncols();
    let mut total = vec![1.; k + 1];
    total[0] = 0.;
    let mut program = Program::feasibility(k + 1)
        .bounded(0, Bound::free())
        .subject_to(total, Sense::Eq, 1.);
    for j in 0..k {
        program = match theirs.contains(j) {
            true => program.bounded(j + 1, Bound::between(bounds.floor, bounds.ceiling)),
            false => program.bounded(j + 1, Bound::fixed(0.)),
        };
    }
    for (i, row) in u.rows().into_iter().enumerate() {
        let coefficients = std::iter::once(-1.).chain(row.iter().copied()).collect();
        let sense = match mine.contains(i) {
            true => Sense::Eq,
            false => Sense::Le,
        };
        program = program.subject_to(coefficients, sense, 0.);
    }
    let solution = program.solve(TOLERANCE);
    let x = solution.x()?;
    let mix = (0..k)
        .map(|j| match theirs.contains(j) {
            true => x[j + 1].max(0.),
            false => 0.,
        })
        .collect();
    Some((mix, x[0]))
}
