//! Tank Relay Shared Types
//!
//! This crate provides the command types, payload decoding and bounded
//! history log shared by the relay server and its tests. It is pure and
//! synchronous; all concurrency lives in the server.

pub mod history;
pub mod payload;

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Command token the relay falls back to when a payload omits `command`.
pub const DEFAULT_COMMAND: &str = "STOP";

/// Fixed capacity of the command history log.
pub const MAX_HISTORY: usize = 100;

/// Default window size for history queries.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Get the current local time as an ISO-8601-like string
/// (e.g. `2026-08-30T14:03:07.123456`)
pub fn now_iso() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// The single current command shared by all callers.
///
/// The relay stores whatever it was given after case normalization; it does
/// not enforce a closed command set and does not clamp `speedness`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandState {
    pub command: String,
    pub speedness: i64,
}

impl CommandState {
    /// The state every relay starts in: stopped, zero speed.
    pub fn initial() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            speedness: 0,
        }
    }
}

impl Default for CommandState {
    fn default() -> Self {
        Self::initial()
    }
}

/// An immutable timestamped snapshot of one accepted write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    pub timestamp: String,
    pub command: String,
    pub speedness: i64,
}

impl CommandRecord {
    /// Stamp a record for a command accepted right now.
    pub fn now(command: impl Into<String>, speedness: i64) -> Self {
        Self {
            timestamp: now_iso(),
            command: command.into(),
            speedness,
        }
    }
}
