use super::payoff::Payoff;
use super::profile::Profile;
use std::collections::HashMap;

/// Maps a complete strategy profile to one payoff per player.
///
/// Partial oracles return `None` for unmapped profiles; the game turns
/// that into [`GameError::Lookup`](super::GameError::Lookup) for the caller.
/// Implementations must be pure so analyses may share them across threads.
pub trait Oracle: Send + Sync {
    fn lookup(&self, profile: &Profile) -> Option<Payoff>;
}

/// Hashed payoff table, as read from a utility file.
#[derive(Debug, Clone, Default)]
pub struct Table(HashMap<Profile, Payoff>);

impl Table {
    pub fn insert(&mut self, profile: Profile, payoff: Payoff) -> Option<Payoff> {
        self.0.insert(profile, payoff)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Profile, Payoff)> for Table {
    fn from_iter<I: IntoIterator<Item = (Profile, Payoff)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Oracle for Table {
    fn lookup(&self, profile: &Profile) -> Option<Payoff> {
        self.0.get(profile).cloned()
    }
}

/// Procedural payoff rule.
pub struct Rule<F>(F)
where
    F: Fn(&Profile) -> Option<Payoff> + Send + Sync;

impl<F> Rule<F>
where
    F: Fn(&Profile) -> Option<Payoff> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Oracle for Rule<F>
where
    F: Fn(&Profile) -> Option<Payoff> + Send + Sync,
{
    fn lookup(&self, profile: &Profile) -> Option<Payoff> {
        (self.0)(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_partial() {
        let table = [(Profile::from_iter(["a", "p"]), Payoff::from([1., 2.]))]
            .into_iter()
            .collect::<Table>();
        assert_eq!(table.lookup(&Profile::from_iter(["a", "p"])), Some(Payoff::from([1., 2.])));
        assert_eq!(table.lookup(&Profile::from_iter(["a", "q"])), None);
    }

    #[test]
    fn rule_is_procedural() {
        let rule = Rule::new(|p: &Profile| Some(Payoff::from(vec![p.len() as f64; p.len()])));
        assert_eq!(rule.lookup(&Profile::from_iter(["x", "y", "z"])), Some(Payoff::from([3., 3., 3.])));
    }
}
