use super::profile::Profile;
use super::strategy::Strategy;

/// Lazy cartesian product over per-player strategy sets.
///
/// the last player's strategy varies fastest, so two enumerations over
/// sets of equal shape visit opponents in the same order. dominance
/// comparisons depend on this when they zip tensors pointwise.
#[derive(Debug, Clone)]
pub struct Profiles<'a> {
    sets: Vec<&'a [Strategy]>,
    cursor: Vec<usize>,
    remaining: usize,
}

impl<'a> From<Vec<&'a [Strategy]>> for Profiles<'a> {
    fn from(sets: Vec<&'a [Strategy]>) -> Self {
        let remaining = sets.iter().map(|s| s.len()).product();
        let cursor = vec![0; sets.len()];
        Self {
            sets,
            cursor,
            remaining,
        }
    }
}

impl Profiles<'_> {
    fn advance(&mut self) {
        for (digit, set) in self.cursor.iter_mut().zip(self.sets.iter()).rev() {
            *digit += 1;
            if *digit < set.len() {
                return;
            }
            *digit = 0;
        }
    }
}

impl Iterator for Profiles<'_> {
    type Item = Profile;
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let profile = self
            .cursor
            .iter()
            .zip(self.sets.iter())
            .map(|(&i, set)| set[i].clone())
            .collect::<Vec<Strategy>>();
        self.remaining -= 1;
        self.advance();
        Some(Profile::from(profile))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Profiles<'_> {}
