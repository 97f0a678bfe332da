/// Box bound on a single decision variable. `None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub lo: Option<f64>,
    pub hi: Option<f64>,
}

impl Bound {
    pub fn free() -> Self {
        Self { lo: None, hi: None }
    }
    pub fn nonnegative() -> Self {
        Self {
            lo: Some(0.),
            hi: None,
        }
    }
    pub fn between(lo: f64, hi: f64) -> Self {
        Self {
            lo: Some(lo),
            hi: Some(hi),
        }
    }
    pub fn fixed(value: f64) -> Self {
        Self::between(value, value)
    }
}

impl Default for Bound {
    fn default() -> Self {
        Self::nonnegative()
    }
}
