//! Shared command store with internal mutual exclusion

use std::sync::Arc;

use tankrelay_shared::history::HistoryLog;
use tankrelay_shared::{CommandRecord, CommandState};
use tokio::sync::RwLock;

/// Process-wide store of the current command plus its bounded history.
///
/// Every accepted write replaces both fields of the current state and appends
/// a timestamped record to the history inside one write-lock critical
/// section, so a reader observes either the full pre-write or the full
/// post-write state. Readers share the lock; writers serialize against each
/// other, last writer wins. The lock is never held across I/O.
#[derive(Clone)]
pub struct CommandStore {
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    current: CommandState,
    history: HistoryLog,
}

impl CommandStore {
    /// Create a store in the initial `{STOP, 0}` state with an empty history.
    pub fn new() -> Self {
        Self::with_history_capacity(tankrelay_shared::MAX_HISTORY)
    }

    /// Create a store whose history is bounded at `capacity` entries.
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                current: CommandState::initial(),
                history: HistoryLog::with_capacity(capacity),
            })),
        }
    }

    /// Accept a write: replace the current state and append a history record.
    ///
    /// `command` is stored verbatim (callers normalize case at the boundary);
    /// no range or vocabulary checks happen here. Returns the record that was
    /// appended.
    pub async fn submit(&self, command: impl Into<String>, speedness: i64) -> CommandRecord {
        let command = command.into();
        let mut inner = self.inner.write().await;

        // Stamp inside the critical section so history order and record
        // timestamps agree.
        let record = CommandRecord::now(command.clone(), speedness);
        inner.current = CommandState { command, speedness };
        inner.history.append(record.clone());
        record
    }

    /// Snapshot the current command state. Never fails, never blocks other
    /// readers.
    pub async fn current(&self) -> CommandState {
        self.inner.read().await.current.clone()
    }

    /// The up-to-`limit` most recent history records, oldest first.
    pub async fn recent(&self, limit: usize) -> Vec<CommandRecord> {
        self.inner.read().await.history.recent(limit)
    }

    /// Current history length, for reporting.
    pub async fn history_len(&self) -> usize {
        self.inner.read().await.history.len()
    }
}

impl Default for CommandStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tankrelay_shared::MAX_HISTORY;

    #[tokio::test]
    async fn test_initial_state() {
        let store = CommandStore::new();
        let state = store.current().await;
        assert_eq!(state, CommandState::initial());
        assert_eq!(store.history_len().await, 0);
    }

    #[tokio::test]
    async fn test_submit_replaces_state_and_records() {
        let store = CommandStore::new();
        let record = store.submit("FORWARD", 50).await;

        assert_eq!(record.command, "FORWARD");
        assert_eq!(record.speedness, 50);

        let state = store.current().await;
        assert_eq!(state.command, "FORWARD");
        assert_eq!(state.speedness, 50);

        let recent = store.recent(1).await;
        assert_eq!(recent, vec![record]);
    }

    #[tokio::test]
    async fn test_out_of_domain_values_stored_as_is() {
        let store = CommandStore::new();
        store.submit("FLY", 9999).await;

        let state = store.current().await;
        assert_eq!(state.command, "FLY");
        assert_eq!(state.speedness, 9999);
    }

    #[tokio::test]
    async fn test_history_bound_and_eviction() {
        let store = CommandStore::new();
        for n in 0..150 {
            store.submit(format!("CMD{n}"), n).await;
        }

        assert_eq!(store.history_len().await, MAX_HISTORY);

        let window = store.recent(MAX_HISTORY).await;
        assert_eq!(window.first().unwrap().speedness, 50);
        assert_eq!(window.last().unwrap().speedness, 149);
    }

    #[tokio::test]
    async fn test_concurrent_writes_stay_paired() {
        let store = CommandStore::new();
        let mut handles = Vec::new();

        for task in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                for n in 0..25 {
                    let id = task * 100 + n;
                    store.submit(format!("CMD{id}"), id).await;
                }
            }));
        }
        for handle in handles {
            handle.await.expect("writer task panicked");
        }

        // Whatever write won, command and speedness must come from the same
        // submission.
        let state = store.current().await;
        assert_eq!(state.command, format!("CMD{}", state.speedness));

        for record in store.recent(MAX_HISTORY).await {
            assert_eq!(record.command, format!("CMD{}", record.speedness));
        }
    }
}
