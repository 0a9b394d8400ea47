//! Candidate lists for one-of lookups.

/// Separator between alternative locator values. Semicolon followed by exactly
/// one space; a bare `;` is part of the value.
pub const CANDIDATE_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList(Vec<String>);

impl CandidateList {
    /// Empty segments are kept, so `"a; "` yields `["a", ""]`.
    pub fn split(value: &str) -> Self {
        Self(value.split(CANDIDATE_SEPARATOR).map(str::to_string).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }
}

impl IntoIterator for CandidateList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
