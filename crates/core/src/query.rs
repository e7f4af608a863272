use alloc::vec::Vec;

use hashbrown::HashSet;

/// Distinct-character count above which membership switches to a hashed set.
pub const HASHED_QUERY_THRESHOLD: usize = 16;

/// The set of characters a scan looks for.
///
/// Order and duplicates in the source slice are irrelevant; only
/// membership is observed.
#[derive(Debug, Clone)]
pub enum QuerySet {
    /// Small sets: deduplicated slice, searched linearly.
    Linear(Vec<char>),
    /// Large sets: constant-time lookup.
    Hashed(HashSet<char>),
}

impl QuerySet {
    pub fn new(chars: &[char]) -> Self {
        let mut distinct: Vec<char> = chars.to_vec();
        distinct.sort_unstable();
        distinct.dedup();

        if distinct.len() > HASHED_QUERY_THRESHOLD {
            Self::Hashed(distinct.into_iter().collect())
        } else {
            Self::Linear(distinct)
        }
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        match self {
            Self::Linear(chars) => chars.contains(&ch),
            Self::Hashed(chars) => chars.contains(&ch),
        }
    }

    /// Number of distinct characters.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Linear(chars) => chars.len(),
            Self::Hashed(chars) => chars.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub const fn is_hashed(&self) -> bool {
        matches!(self, Self::Hashed(_))
    }
}

impl From<&[char]> for QuerySet {
    fn from(chars: &[char]) -> Self {
        Self::new(chars)
    }
}

impl FromIterator<char> for QuerySet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let chars: Vec<char> = iter.into_iter().collect();
        Self::new(&chars)
    }
}
