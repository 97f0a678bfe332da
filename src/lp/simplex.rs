use super::*;
use crate::SIMPLEX_ITERATIONS;
use ndarray::Array2;

/// how an original variable maps onto nonnegative tableau columns
#[derive(Debug, Clone, Copy)]
enum Column {
    /// x = lo + y
    Shifted { col: usize, lo: f64 },
    /// x = y⁺ - y⁻
    Split { pos: usize, neg: usize },
}

enum Pivoting {
    Optimal,
    Unbounded,
    Stalled,
}

/// Dense simplex tableau in standard form.
///
/// columns are laid out as structural variables, then one slack or
/// surplus per inequality row, then one artificial per `>=` or `=` row,
/// then the right-hand side. the last row holds reduced costs, with the
/// negated objective value in the right-hand-side cell.
pub(super) struct Tableau {
    t: Array2<f64>,
    basis: Vec<usize>,
    columns: Vec<Column>,
    artificial: usize,
    rhs: usize,
    m: usize,
}

impl From<&Program> for Tableau {
    fn from(program: &Program) -> Self {
        let mut n = 0;
        let columns = program
            .bounds()
            .iter()
            .map(|bound| match bound.lo {
                Some(lo) => {
                    n += 1;
                    Column::Shifted { col: n - 1, lo }
                }
                None => {
                    n += 2;
                    Column::Split {
                        pos: n - 2,
                        neg: n - 1,
                    }
                }
            })
            .collect::<Vec<Column>>();

        let mut rows = Vec::new();
        for constraint in program.constraints() {
            let mut coefficients = vec![0.; n];
            let mut rhs = constraint.rhs;
            for (a, column) in constraint.coefficients.iter().zip(columns.iter()) {
                match *column {
                    Column::Shifted { col, lo } => {
                        coefficients[col] += a;
                        rhs -= a * lo;
                    }
                    Column::Split { pos, neg } => {
                        coefficients[pos] += a;
                        coefficients[neg] -= a;
                    }
                }
            }
            rows.push((coefficients, constraint.sense, rhs));
        }
        for (bound, column) in program.bounds().iter().zip(columns.iter()) {
            if let Some(hi) = bound.hi {
                let mut coefficients = vec![0.; n];
                let rhs = match *column {
                    Column::Shifted { col, lo } => {
                        coefficients[col] = 1.;
                        hi - lo
                    }
                    Column::Split { pos, neg } => {
                        coefficients[pos] = 1.;
                        coefficients[neg] = -1.;
                        hi
                    }
                };
                rows.push((coefficients, Sense::Le, rhs));
            }
        }
        for (coefficients, sense, rhs) in rows.iter_mut() {
            if *rhs < 0. {
                coefficients.iter_mut().for_each(|a| *a = -*a);
                *rhs = -*rhs;
                *sense = sense.flip();
            }
        }

        let m = rows.len();
        let slacks = rows.iter().filter(|(_, s, _)| *s != Sense::Eq).count();
        let artificials = rows.iter().filter(|(_, s, _)| *s != Sense::Le).count();
        let artificial = n + slacks;
        let rhs = artificial + artificials;
        let mut t = Array2::<f64>::zeros((m + 1, rhs + 1));
        let mut basis = vec![0; m];
        let mut s = n;
        let mut a = artificial;
        for (i, (coefficients, sense, b)) in rows.into_iter().enumerate() {
            for (j, v) in coefficients.into_iter().enumerate() {
                t[(i, j)] = v;
            }
            t[(i, rhs)] = b;
            if sense != Sense::Eq {
                t[(i, s)] = if sense == Sense::Le { 1. } else { -1. };
                basis[i] = s;
                s += 1;
            }
            if sense != Sense::Le {
                t[(i, a)] = 1.;
                basis[i] = a;
                a += 1;
            }
        }
        Self {
            t,
            basis,
            columns,
            artificial,
            rhs,
            m,
        }
    }
}

impl Tableau {
    pub(super) fn solve(mut self, program: &Program, tolerance: f64) -> Solution {
        let scale = 1. + (0..self.m).map(|i| self.t[(i, self.rhs)]).sum::<f64>();

        // phase one: minimize the sum of artificials
        let costs = (0..self.rhs)
            .map(|j| if j >= self.artificial { 1. } else { 0. })
            .collect::<Vec<f64>>();
        self.price(&costs);
        match self.optimize(self.rhs, tolerance) {
            Pivoting::Optimal => {}
            // bounded below by zero, so only numerical trouble gets here
            Pivoting::Unbounded | Pivoting::Stalled => return Solution::Stalled,
        }
        if -self.t[(self.m, self.rhs)] > tolerance * scale {
            return Solution::Infeasible;
        }
        self.expel(tolerance);

        // phase two: the real objective, artificials barred from entering
        let sign = match program.goal() {
            Goal::Minimize => 1.,
            Goal::Maximize => -1.,
        };
        let mut costs = vec![0.; self.rhs];
        for (c, column) in program.objective().iter().zip(self.columns.iter()) {
            match *column {
                Column::Shifted { col, .. } => costs[col] += sign * c,
                Column::Split { pos, neg } => {
                    costs[pos] += sign * c;
                    costs[neg] -= sign * c;
                }
            }
        }
        self.price(&costs);
        match self.optimize(self.artificial, tolerance) {
            Pivoting::Optimal => {}
            Pivoting::Unbounded => return Solution::Unbounded,
            Pivoting::Stalled => return Solution::Stalled,
        }
        let x = self.extract();
        let value = x.iter().zip(program.objective()).map(|(x, c)| x * c).sum();
        Solution::Optimal { x, value }
    }

    /// reduced costs of `costs` under the current basis
    fn price(&mut self, costs: &[f64]) {
        let m = self.m;
        for j in 0..self.rhs {
            self.t[(m, j)] = costs[j];
        }
        self.t[(m, self.rhs)] = 0.;
        for i in 0..m {
            let c = costs[self.basis[i]];
            if c != 0. {
                let row = self.t.row(i).to_owned();
                self.t.row_mut(m).scaled_add(-c, &row);
            }
        }
    }

    /// Bland's rule: lowest-index improving column enters, ties in the
    /// ratio test leave by lowest basic index. never cycles.
    fn optimize(&mut self, eligible: usize, tolerance: f64) -> Pivoting {
        for _ in 0..SIMPLEX_ITERATIONS {
            let Some(col) = (0..eligible).find(|&j| self.t[(self.m, j)] < -tolerance) else {
                return Pivoting::Optimal;
            };
            let Some(row) = self.leaving(col, tolerance) else {
                return Pivoting::Unbounded;
            };
            log::trace!("pivot on ({}, {})", row, col);
            self.pivot(row, col);
        }
        log::warn!("simplex stalled after {} pivots", SIMPLEX_ITERATIONS);
        Pivoting::Stalled
    }

    fn leaving(&self, col: usize, tolerance: f64) -> Option<usize> {
        let ratios = (0..self.m)
            .filter(|&i| self.t[(i, col)] > tolerance)
            .map(|i| (i, self.t[(i, self.rhs)].max(0.) / self.t[(i, col)]))
            .collect::<Vec<(usize, f64)>>();
        let least = ratios
            .iter()
            .map(|(_, r)| *r)
            .fold(f64::INFINITY, f64::min);
        ratios
            .into_iter()
            .filter(|(_, r)| *r <= least + tolerance)
            .min_by_key(|(i, _)| self.basis[*i])
            .map(|(i, _)| i)
    }

    fn pivot(&mut self, row: usize, col: usize) {
        let p = self.t[(row, col)];
        self.t.row_mut(row).mapv_inplace(|x| x / p);
        let pivot = self.t.row(row).to_owned();
        for i in 0..=self.m {
            let f = self.t[(i, col)];
            if i != row && f != 0. {
                self.t.row_mut(i).scaled_add(-f, &pivot);
                self.t[(i, col)] = 0.;
            }
        }
        self.t[(row, col)] = 1.;
        self.basis[row] = col;
    }

    /// Pivots zero-level artificials out of the basis after phase one.
    /// Rows with no structural entry left are redundant and keep theirs.
    fn expel(&mut self, tolerance: f64) {
        for i in 0..self.m {
            if self.basis[i] >= self.artificial {
                self.t[(i, self.rhs)] = 0.;
                if let Some(j) = (0..self.artificial).find(|&j| self.t[(i, j)].abs() > tolerance) {
                    self.pivot(i, j);
                }
            }
        }
    }

    fn extract(&self) -> Vec<f64> {
        let mut y = vec![0.; self.rhs];
        for (i, &b) in self.basis.iter().enumerate() {
            y[b] = self.t[(i, self.rhs)];
        }
        self.columns
            .iter()
            .map(|column| match *column {
                Column::Shifted { col, lo } => lo + y[col],
                Column::Split { pos, neg } => y[pos] - y[neg],
            })
            .collect()
    }
}
