//! Bounded newest-first history.

use std::collections::VecDeque;

/// Ordered list, newest first, capped at `limit` entries.
///
/// Pushing past the cap drops the oldest entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History<T> {
    limit: usize,
    entries: VecDeque<T>,
}

impl<T> History<T> {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            entries: VecDeque::with_capacity(limit),
        }
    }

    /// Rebuild from stored entries (newest first), trimming to `limit`.
    pub fn from_entries(entries: impl IntoIterator<Item = T>, limit: usize) -> Self {
        let mut entries: VecDeque<T> = entries.into_iter().collect();
        entries.truncate(limit);
        Self { limit, entries }
    }

    pub fn push(&mut self, entry: T) {
        if self.limit == 0 {
            return;
        }
        self.entries.push_front(entry);
        self.entries.truncate(self.limit);
    }

    /// Newest entry, if any.
    pub fn latest(&self) -> Option<&T> {
        self.entries.front()
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.entries.remove(index)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn limit(&self) -> usize {
        self.limit
    }

    pub fn into_vec(self) -> Vec<T> {
        self.entries.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first_and_bounded() {
        let mut history = History::new(3);
        for n in 1..=5 {
            history.push(n);
        }
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![5, 4, 3]);
        assert_eq!(history.latest(), Some(&5));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn loading_trims_oversized_lists() {
        let history = History::from_entries(vec!["c", "b", "a"], 2);
        assert_eq!(history.into_vec(), vec!["c", "b"]);
    }

    #[test]
    fn remove_and_clear() {
        let mut history = History::from_entries(vec![3, 2, 1], 10);
        assert_eq!(history.remove(1), Some(2));
        assert_eq!(history.remove(7), None);
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let mut history = History::new(0);
        history.push(1);
        assert!(history.is_empty());
    }
}
