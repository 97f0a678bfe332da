use super::simplex::Tableau;
use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Le,
    Eq,
    Ge,
}

impl Sense {
    pub(super) fn flip(self) -> Self {
        match self {
            Self::Le => Self::Ge,
            Self::Eq => Self::Eq,
            Self::Ge => Self::Le,
        }
    }
}

/// `coefficients · x (sense) rhs`
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub coefficients: Vec<f64>,
    pub sense: Sense,
    pub rhs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Minimize,
    Maximize,
}

/// A linear program over `n` variables, built up fluently:
///
/// ```
/// use nashkit::lp::*;
/// let solution = Program::maximize(vec![1., 1.])
///     .subject_to(vec![1., 2.], Sense::Le, 4.)
///     .subject_to(vec![3., 1.], Sense::Le, 6.)
///     .solve(nashkit::TOLERANCE);
/// assert!((solution.value().unwrap() - 2.8).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    goal: Goal,
    objective: Vec<f64>,
    constraints: Vec<Constraint>,
    bounds: Vec<Bound>,
}

impl Program {
    pub fn minimize(objective: Vec<f64>) -> Self {
        Self::new(Goal::Minimize, objective)
    }

    pub fn maximize(objective: Vec<f64>) -> Self {
        Self::new(Goal::Maximize, objective)
    }

    /// zero objective; only feasibility matters
    pub fn feasibility(n: usize) -> Self {
        Self::new(Goal::Minimize, vec![0.; n])
    }

    fn new(goal: Goal, objective: Vec<f64>) -> Self {
        let bounds = vec![Bound::default(); objective.len()];
        Self {
            goal,
            objective,
            constraints: Vec::new(),
            bounds,
        }
    }

    pub fn subject_to(mut self, coefficients: Vec<f64>, sense: Sense, rhs: f64) -> Self {
        debug_assert!(coefficients.len() == self.n());
        self.constraints.push(Constraint {
            coefficients,
            sense,
            rhs,
        });
        self
    }

    pub fn bounded(mut self, variable: usize, bound: Bound) -> Self {
        self.bounds[variable] = bound;
        self
    }

    pub fn n(&self) -> usize {
        self.objective.len()
    }
    pub fn goal(&self) -> Goal {
        self.goal
    }
    pub fn objective(&self) -> &[f64] {
        &self.objective
    }
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
    pub fn bounds(&self) -> &[Bound] {
        &self.bounds
    }

    /// Entries with magnitude below `tolerance` are treated as zero.
    pub fn solve(&self, tolerance: f64) -> Solution {
        Tableau::from(self).solve(self, tolerance)
    }
}
