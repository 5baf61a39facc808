//! Batch value objects: how many jokes to fetch, and what came back.

use super::error::DomainError;
use super::joke::Joke;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Number of jokes requested in one fan-out (Value Object)
///
/// Always at least 1. A count of zero is rejected at construction, so the
/// fetcher never has to decide what an empty batch means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BatchSize(NonZeroUsize);

impl BatchSize {
    pub fn new(count: usize) -> Result<Self, DomainError> {
        NonZeroUsize::new(count)
            .map(Self)
            .ok_or(DomainError::InvalidBatchSize)
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for BatchSize {
    type Error = DomainError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl std::fmt::Display for BatchSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unordered collection of fetched jokes
///
/// Entries appear in completion order, which has no relation to the order in
/// which requests were submitted. Compare batches with [`JokeBatch::sorted_texts`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JokeBatch {
    jokes: Vec<Joke>,
}

impl JokeBatch {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            jokes: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, joke: Joke) {
        self.jokes.push(joke);
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Joke> {
        self.jokes.iter()
    }

    /// Joke texts sorted, for order-insensitive comparison between batches
    pub fn sorted_texts(&self) -> Vec<String> {
        let mut texts: Vec<String> = self.jokes.iter().map(|j| j.text().to_string()).collect();
        texts.sort();
        texts
    }
}

impl FromIterator<Joke> for JokeBatch {
    fn from_iter<I: IntoIterator<Item = Joke>>(iter: I) -> Self {
        Self {
            jokes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for JokeBatch {
    type Item = Joke;
    type IntoIter = std::vec::IntoIter<Joke>;

    fn into_iter(self) -> Self::IntoIter {
        self.jokes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_rejected() {
        assert_eq!(BatchSize::new(0), Err(DomainError::InvalidBatchSize));
        assert!(BatchSize::try_from(0usize).is_err());
    }

    #[test]
    fn test_positive_is_accepted() {
        assert_eq!(BatchSize::new(1).unwrap().get(), 1);
        assert_eq!(BatchSize::new(5).unwrap().to_string(), "5");
    }

    #[test]
    fn test_sorted_texts_ignores_completion_order() {
        let a: JokeBatch = ["b", "a", "c"].into_iter().map(Joke::from).collect();
        let b: JokeBatch = ["c", "b", "a"].into_iter().map(Joke::from).collect();
        assert_ne!(a, b);
        assert_eq!(a.sorted_texts(), b.sorted_texts());
    }

    #[test]
    fn test_sorted_texts_keeps_duplicates() {
        let batch: JokeBatch = ["X", "X", "Y"].into_iter().map(Joke::from).collect();
        assert_eq!(batch.sorted_texts(), vec!["X", "X", "Y"]);
        assert_eq!(batch.len(), 3);
    }

    #[test]
    fn test_serializes_as_array() {
        let batch: JokeBatch = ["X"].into_iter().map(Joke::from).collect();
        let json = serde_json::to_string(&batch).unwrap();
        assert_eq!(json, r#"[{"joke":"X"}]"#);
    }
}
