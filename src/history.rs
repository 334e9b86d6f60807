//! Process-wide execution history.
//!
//! Entries are appended under a mutex and kept in a ring buffer of fixed
//! capacity; once full, the oldest entry is evicted. Reads clone the
//! requested tail, so callers get a consistent snapshot.

use crate::instrument::ExecutionResult;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;

/// Default number of entries retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Default number of entries returned by a history query.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Immutable record of one successful execution.
#[derive(Clone, Debug, Serialize)]
pub struct HistoryEntry {
    /// Sequence number, starting at 1
    pub id: u64,
    pub algorithm: String,
    pub input_size: usize,
    /// Result snapshot, without the step log
    pub result: ExecutionResult,
    pub executed_at: DateTime<Utc>,
}

struct HistoryInner {
    entries: VecDeque<HistoryEntry>,
    next_id: u64,
}

/// Bounded, append-only execution history.
pub struct History {
    inner: Mutex<HistoryInner>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(HistoryInner {
                entries: VecDeque::with_capacity(capacity.min(1024)),
                next_id: 1,
            }),
            capacity,
        }
    }

    /// Append an entry for `algorithm`, evicting the oldest one when full.
    ///
    /// Returns the sequence number assigned to the entry.
    pub fn record(&self, algorithm: &str, result: &ExecutionResult) -> u64 {
        let snapshot = result.without_steps();
        let mut inner = self.inner.lock();

        let id = inner.next_id;
        inner.next_id += 1;

        if self.capacity == 0 {
            return id;
        }
        if inner.entries.len() == self.capacity {
            inner.entries.pop_front();
        }
        inner.entries.push_back(HistoryEntry {
            id,
            algorithm: algorithm.to_string(),
            input_size: snapshot.metadata.input_size,
            result: snapshot,
            executed_at: Utc::now(),
        });

        id
    }

    /// The most recent `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> Vec<HistoryEntry> {
        let inner = self.inner.lock();
        let skip = inner.entries.len().saturating_sub(limit);
        inner.entries.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of executions recorded since creation, including evicted ones.
    pub fn total_recorded(&self) -> u64 {
        self.inner.lock().next_id - 1
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::instrument::{run_with_metrics, InstrumentSettings};
    use crate::registry::RunOptions;
    use crate::sorting::merge_sort::MergeSortRunner;
    use std::sync::Arc;

    fn result(size: i64) -> ExecutionResult {
        let options = RunOptions {
            include_steps: true,
            ..RunOptions::default()
        };
        run_with_metrics(
            &MergeSortRunner,
            &Dataset::integers((0..size).rev()),
            &options,
            &InstrumentSettings::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_recent_returns_tail_in_order() {
        let history = History::new(10);
        for size in 1..=5 {
            history.record("merge_sort", &result(size));
        }

        let recent = history.recent(3);
        let sizes: Vec<usize> = recent.iter().map(|e| e.input_size).collect();
        assert_eq!(sizes, vec![3, 4, 5]);
        assert_eq!(recent[0].id, 3);

        assert_eq!(history.recent(100).len(), 5);
        assert!(history.recent(0).is_empty());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let history = History::new(2);
        for size in 1..=4 {
            history.record("merge_sort", &result(size));
        }
        assert_eq!(history.len(), 2);
        assert_eq!(history.total_recorded(), 4);
        let ids: Vec<u64> = history.recent(10).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let history = History::new(0);
        history.record("merge_sort", &result(3));
        assert!(history.is_empty());
        assert_eq!(history.total_recorded(), 1);
    }

    #[test]
    fn test_entries_drop_step_log() {
        let history = History::default();
        let with_steps = result(4);
        assert!(with_steps.steps.is_some());
        history.record("merge_sort", &with_steps);
        assert!(history.recent(1)[0].result.steps.is_none());
    }

    #[test]
    fn test_concurrent_appends_are_serialized() {
        let history = Arc::new(History::new(1000));
        let sample = result(8);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let history = Arc::clone(&history);
                let sample = sample.clone();
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        history.record("merge_sort", &sample);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let entries = history.recent(1000);
        assert_eq!(entries.len(), 400);
        let mut ids: Vec<u64> = entries.iter().map(|e| e.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 400);
        assert!(entries.windows(2).all(|w| w[0].id < w[1].id));
    }
}
