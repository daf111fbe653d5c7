//! Event log — timestamped lines shown newest-first in the log panel.

use std::collections::VecDeque;
use std::fmt;

use chrono::NaiveTime;

use crate::time::clock_label;

/// Default number of lines kept before the oldest is evicted.
pub const DEFAULT_LOG_CAPACITY: usize = 200;

/// Something worth telling the operator about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The page finished starting up.
    UiReady,
    /// The readout and legend now show a fresh reading.
    StatusUpdated,
    /// The server has not produced a frame yet.
    NoDataYet,
    /// Fetching or decoding `/status` failed.
    FetchFailed(String),
    /// A status response arrived after a newer one had been applied.
    StaleStatus,
    /// The interval control produced an unusable value.
    IntervalRejected(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UiReady => f.write_str("UI ready"),
            Self::StatusUpdated => f.write_str("Status updated"),
            Self::NoDataYet => f.write_str("No data yet"),
            Self::FetchFailed(message) => write!(f, "Error fetching status: {message}"),
            Self::StaleStatus => f.write_str("Stale status discarded"),
            Self::IntervalRejected(value) => write!(f, "Ignored refresh interval {value:?}"),
        }
    }
}

/// A single log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub message: String,
}

impl LogEntry {
    /// Stamp `message` with the wall-clock time it was produced.
    #[must_use]
    pub fn new(time: NaiveTime, message: impl Into<String>) -> Self {
        Self {
            timestamp: clock_label(time),
            message: message.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp, self.message)
    }
}

/// Bounded, newest-first list of [`LogEntry`] lines.
///
/// Pushing into a full log evicts the oldest line.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl EventLog {
    /// Create an empty log holding at most `capacity` lines (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_LOG_CAPACITY)),
            capacity,
        }
    }

    /// Prepend a line, evicting the oldest one when full.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Lines, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: u32) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap()
    }

    #[test]
    fn should_render_entry_with_bracketed_timestamp() {
        let entry = LogEntry::new(at(3661), Notice::StatusUpdated.to_string());
        assert_eq!(entry.to_string(), "[01:01:01] Status updated");
    }

    #[test]
    fn should_render_fetch_failure_with_message() {
        let notice = Notice::FetchFailed("timeout".to_string());
        assert_eq!(notice.to_string(), "Error fetching status: timeout");
    }

    #[test]
    fn should_render_fixed_notices() {
        assert_eq!(Notice::UiReady.to_string(), "UI ready");
        assert_eq!(Notice::NoDataYet.to_string(), "No data yet");
        assert_eq!(Notice::StaleStatus.to_string(), "Stale status discarded");
    }

    #[test]
    fn should_list_newest_entry_first() {
        let mut log = EventLog::default();
        log.push(LogEntry::new(at(1), "first"));
        log.push(LogEntry::new(at(2), "second"));

        let messages: Vec<_> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["second", "first"]);
        assert_eq!(log.latest().unwrap().message, "second");
    }

    #[test]
    fn should_evict_oldest_entry_when_full() {
        let mut log = EventLog::with_capacity(3);
        for i in 0..5 {
            log.push(LogEntry::new(at(i), format!("line {i}")));
        }

        assert_eq!(log.len(), 3);
        let messages: Vec<_> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["line 4", "line 3", "line 2"]);
    }

    #[test]
    fn should_keep_at_least_one_line() {
        let mut log = EventLog::with_capacity(0);
        log.push(LogEntry::new(at(0), "only"));
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn should_start_empty() {
        let log = EventLog::default();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
        assert_eq!(log.capacity(), DEFAULT_LOG_CAPACITY);
    }
}
