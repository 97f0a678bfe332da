use crate::Utility;
use crate::game::Tensor;

/// Outcome of comparing tensor A against tensor B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    Dominates,
    DominatedBy,
    Incomparable,
}

impl Dominance {
    pub fn flip(self) -> Self {
        match self {
            Self::Dominates => Self::DominatedBy,
            Self::DominatedBy => Self::Dominates,
            Self::Incomparable => Self::Incomparable,
        }
    }
}

/// Pointwise order used to compare two tensors of equal length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// strictly greater everywhere
    Strong,
    /// never smaller, strictly greater somewhere
    Weak,
}

impl Relation {
    pub fn compare(&self, a: &Tensor, b: &Tensor) -> Dominance {
        if self.dominates(a, b) {
            Dominance::Dominates
        } else if self.dominates(b, a) {
            Dominance::DominatedBy
        } else {
            Dominance::Incomparable
        }
    }

    pub fn dominates(&self, a: &Tensor, b: &Tensor) -> bool {
        debug_assert!(a.len() == b.len());
        let mut pairs = a.iter().zip(b.iter());
        match self {
            Self::Strong => pairs.all(|(x, y)| x > y),
            Self::Weak => {
                let mut strict = false;
                pairs.all(|(x, y)| {
                    strict |= x > y;
                    x >= y
                }) && strict
            }
        }
    }
}

/// Which end of the dominance order a scan is looking for.
///
/// `Best` finds a strategy that dominates every alternative and folds
/// incomparable tensors into a pointwise max envelope. `Worst` finds a
/// strategy dominated by every alternative and folds with pointwise min.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Best,
    Worst,
}

impl Extreme {
    pub fn orient(&self, dominance: Dominance) -> Dominance {
        match self {
            Self::Best => dominance,
            Self::Worst => dominance.flip(),
        }
    }

    pub fn envelope(&self, a: &Tensor, b: &Tensor) -> Tensor {
        match self {
            Self::Best => a.zip(b, Utility::max),
            Self::Worst => a.zip(b, Utility::min),
        }
    }
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use super::*;

    fn t(v: &[Utility]) -> Tensor {
        Tensor::from(v.to_vec())
    }

    #[test]
    fn strong() {
        assert_eq!(Relation::Strong.compare(&t(&[2., 3.]), &t(&[1., 2.])), Dominance::Dominates);
        assert_eq!(Relation::Strong.compare(&t(&[1., 2.]), &t(&[2., 3.])), Dominance::DominatedBy);
        assert_eq!(Relation::Strong.compare(&t(&[2., 2.]), &t(&[1., 2.])), Dominance::Incomparable);
    }

    #[test]
    fn weak() {
        assert_eq!(Relation::Weak.compare(&t(&[2., 2.]), &t(&[1., 2.])), Dominance::Dominates);
        assert_eq!(Relation::Weak.compare(&t(&[1., 2.]), &t(&[1., 2.])), Dominance::Incomparable);
        assert_eq!(Relation::Weak.compare(&t(&[0., 3.]), &t(&[1., 2.])), Dominance::Incomparable);
        assert_eq!(Relation::Weak.compare(&t(&[0., 2.]), &t(&[1., 2.])), Dominance::DominatedBy);
    }

    #[test]
    fn envelopes() {
        assert_eq!(Extreme::Best.envelope(&t(&[0., 3.]), &t(&[1., 2.])), t(&[1., 3.]));
        assert_eq!(Extreme::Worst.envelope(&t(&[0., 3.]), &t(&[1., 2.])), t(&[0., 2.]));
        assert_eq!(Extreme::Worst.orient(Dominance::Dominates), Dominance::DominatedBy);
    }
}
