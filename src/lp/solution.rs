/// Result of solving a [`Program`](super::Program).
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    Optimal { x: Vec<f64>, value: f64 },
    Infeasible,
    Unbounded,
    /// pivot cap reached before optimality was proven
    Stalled,
}

impl Solution {
    pub fn is_optimal(&self) -> bool {
        matches!(self, Self::Optimal { .. })
    }
    pub fn x(&self) -> Option<&[f64]> {
        match self {
            Self::Optimal { x, .. } => Some(x),
            _ => None,
        }
    }
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Optimal { value, .. } => Some(*value),
            _ => None,
        }
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Optimal { value, .. } => write!(f, "optimal ({:.6})", value),
            Self::Infeasible => write!(f, "infeasible"),
            Self::Unbounded => write!(f, "unbounded"),
            Self::Stalled => write!(f, "stalled"),
        }
    }
}
