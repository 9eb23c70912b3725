use std::collections::BTreeSet;

use serde::Serialize;

/// A set of normalized (lowercase, trimmed) skill tokens.
///
/// Every insertion path normalizes, so two spellings that differ only in
/// case or surrounding whitespace collapse to one member. Empty tokens are
/// never stored. Iteration order is lexicographic, which keeps rendered
/// skill lists deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercases and trims a raw token.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Parses a comma-separated skills field, e.g. `"Python, SQL , excel"`.
    pub fn parse_list(raw: &str) -> Self {
        raw.split(',').collect()
    }

    /// Inserts a token after normalizing it. Returns `false` for empty or
    /// already-present tokens.
    pub fn insert(&mut self, raw: &str) -> bool {
        let token = Self::normalize(raw);
        if token.is_empty() {
            return false;
        }
        self.0.insert(token)
    }

    /// Exact membership test. `token` is expected to be normalized already.
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        SkillSet(self.0.intersection(&other.0).cloned().collect())
    }

    pub fn union_with(&mut self, other: &SkillSet) {
        self.0.extend(other.0.iter().cloned());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn join(&self, sep: &str) -> String {
        self.0.iter().map(String::as_str).collect::<Vec<_>>().join(sep)
    }
}

impl<'a> FromIterator<&'a str> for SkillSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for raw in iter {
            set.insert(raw);
        }
        set
    }
}
