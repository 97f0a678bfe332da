use serde::Serialize;

/// A player's private type, e.g. a valuation class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Type(String);

/// A member of the shared outcome set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Outcome(String);

impl Type {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Outcome {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Type {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Type {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Outcome {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Outcome {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
