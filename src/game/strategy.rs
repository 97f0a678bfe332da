use serde::Serialize;

/// An opaque strategy label. Two strategies are the same
/// strategy iff their labels are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Strategy(String);

impl Strategy {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Strategy {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Strategy {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
