//! Bounded command history
//!
//! A fixed-capacity, oldest-evicting log of accepted commands. The capacity
//! invariant is enforced inside `append`, so callers can never grow the log
//! past its bound.

use std::collections::VecDeque;

use crate::{CommandRecord, MAX_HISTORY};

/// Fixed-capacity FIFO log of [`CommandRecord`]s.
///
/// Appending at capacity evicts the single oldest entry first, so
/// `len() <= capacity()` holds at all times.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    records: VecDeque<CommandRecord>,
    capacity: usize,
}

impl HistoryLog {
    /// Create an empty log with the standard capacity of [`MAX_HISTORY`].
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }

    /// Create an empty log bounded at `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a record, evicting the oldest entry if the log is full.
    /// Always succeeds; O(1) amortized.
    pub fn append(&mut self, record: CommandRecord) {
        if self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// The up-to-`limit` most recent records in chronological order
    /// (oldest of the window first, newest last).
    ///
    /// `limit = 0` returns an empty vec; a limit beyond the current length
    /// returns everything the log holds.
    pub fn recent(&self, limit: usize) -> Vec<CommandRecord> {
        let skip = self.records.len().saturating_sub(limit);
        self.records.iter().skip(skip).cloned().collect()
    }

    /// Current number of records in the log.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The configured capacity bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: i64) -> CommandRecord {
        CommandRecord {
            timestamp: format!("2026-08-30T12:00:{:02}.000000", n % 60),
            command: format!("CMD{n}"),
            speedness: n,
        }
    }

    #[test]
    fn test_starts_empty() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert_eq!(log.capacity(), MAX_HISTORY);
    }

    #[test]
    fn test_append_and_len() {
        let mut log = HistoryLog::new();
        log.append(record(1));
        log.append(record(2));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_eviction_at_capacity() {
        let mut log = HistoryLog::with_capacity(3);
        for n in 0..5 {
            log.append(record(n));
            assert!(log.len() <= 3, "bound violated after append {n}");
        }
        // Oldest two entries evicted, last three survive in order
        let remaining = log.recent(3);
        let commands: Vec<_> = remaining.iter().map(|r| r.command.as_str()).collect();
        assert_eq!(commands, vec!["CMD2", "CMD3", "CMD4"]);
    }

    #[test]
    fn test_full_capacity_bound() {
        let mut log = HistoryLog::new();
        for n in 0..150 {
            log.append(record(n));
        }
        assert_eq!(log.len(), MAX_HISTORY);

        // The earliest 50 writes were evicted; the window is writes 50..150
        let window = log.recent(MAX_HISTORY);
        assert_eq!(window.len(), MAX_HISTORY);
        assert_eq!(window.first().unwrap().speedness, 50);
        assert_eq!(window.last().unwrap().speedness, 149);
    }

    #[test]
    fn test_recent_window_ordering() {
        let mut log = HistoryLog::new();
        for n in 0..10 {
            log.append(record(n));
        }
        let window = log.recent(3);
        let speeds: Vec<_> = window.iter().map(|r| r.speedness).collect();
        assert_eq!(speeds, vec![7, 8, 9]);
    }

    #[test]
    fn test_recent_limit_edge_cases() {
        let mut log = HistoryLog::new();
        log.append(record(1));
        log.append(record(2));

        assert!(log.recent(0).is_empty());
        assert_eq!(log.recent(100).len(), 2);
    }
}
