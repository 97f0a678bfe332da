/// A non-empty subset of one player's strategy indices, sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Support(Vec<usize>);

impl Support {
    pub fn contains(&self, i: usize) -> bool {
        self.0.binary_search(&i).is_ok()
    }
    pub fn members(&self) -> &[usize] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Every non-empty subset of `0..n`: smaller supports first, then
/// lexicographic within a size. 2ⁿ - 1 items, so pure profiles are
/// always tried before any genuinely mixed one.
#[derive(Debug, Clone)]
pub struct Supports {
    n: usize,
    current: Vec<usize>,
    remaining: usize,
}

impl From<usize> for Supports {
    fn from(n: usize) -> Self {
        Self {
            n,
            current: Vec::new(),
            remaining: u32::try_from(n)
                .ok()
                .and_then(|n| 1usize.checked_shl(n))
                .map_or(usize::MAX, |subsets| subsets - 1),
        }
    }
}

impl Supports {
    /// next k-combination in lexicographic order, or the first
    /// (k+1)-combination once the k-combinations run out
    fn advance(&mut self) {
        let k = self.current.len();
        for i in (0..k).rev() {
            if self.current[i] < self.n - k + i {
                self.current[i] += 1;
                for j in i + 1..k {
                    self.current[j] = self.current[j - 1] + 1;
                }
                return;
            }
        }
        self.current = (0..k + 1).collect();
    }
}

impl Iterator for Supports {
    type Item = Support;
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.advance();
        self.remaining -= 1;
        Some(Support(self.current.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Supports {}
