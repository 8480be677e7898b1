//! Append-only, turn-tagged event log.
//!
//! Backed by `im::Vector` so a checkpoint clone shares the log's structure
//! instead of copying every line.

use im::Vector;
use serde::{Deserialize, Serialize};

/// A single log line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Turn number the event happened on.
    pub turn: u32,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Turn {} | {}", self.turn, self.message)
    }
}

/// Ordered record of everything that happened this game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    entries: Vector<LogEntry>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, turn: u32, message: impl Into<String>) {
        self.entries.push_back(LogEntry {
            turn,
            message: message.into(),
        });
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// Formatted lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_format() {
        let mut log = EventLog::new();
        log.push(1, "Ana claims Nature's Reset.");
        log.push(2, "Ben self-cares.");

        let lines: Vec<_> = log.lines().collect();
        assert_eq!(
            lines,
            vec!["Turn 1 | Ana claims Nature's Reset.", "Turn 2 | Ben self-cares."]
        );
        assert_eq!(log.last().map(|e| e.turn), Some(2));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut log = EventLog::new();
        log.push(1, "first");

        let snapshot = log.clone();
        log.push(1, "second");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }
}
