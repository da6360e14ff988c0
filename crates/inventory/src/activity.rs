//! Caller-owned activity log for stock additions.
//!
//! The log is never persisted; it lives as long as the caller keeps it.

use chrono::{DateTime, Local};
use serde::Serialize;

/// One timestamped line of activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub message: String,
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.at.format("%Y-%m-%d %H:%M:%S%.6f"), self.message)
    }
}

/// Ordered sequence of log entries, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry stamped with the current local time.
    pub fn record(&mut self, message: impl Into<String>) {
        self.record_at(Local::now(), message);
    }

    pub fn record_at(&mut self, at: DateTime<Local>, message: impl Into<String>) {
        self.entries.push(LogEntry {
            at,
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, TimeZone};

    #[test]
    fn entries_keep_insertion_order() {
        let mut log = ActivityLog::new();
        log.record("first");
        log.record("second");

        let messages: Vec<_> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert!(log.entries()[0].at <= log.entries()[1].at);
    }

    #[test]
    fn record_stamps_with_local_wall_clock() {
        let before = Local::now();
        let mut log = ActivityLog::new();
        log.record("Added 1 of pear");
        let after = Local::now();

        let at = log.entries()[0].at;
        assert!(before <= at && at <= after);
        assert_eq!(at.offset().fix(), after.offset().fix());
        assert_eq!(
            log.entries()[0].to_string(),
            format!("{}: Added 1 of pear", at.naive_local().format("%Y-%m-%d %H:%M:%S%.6f"))
        );
    }

    #[test]
    fn entry_renders_timestamp_prefix() {
        let mut log = ActivityLog::new();
        let at = Local.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        log.record_at(at, "Added 10 of apple");

        assert_eq!(
            log.entries()[0].to_string(),
            "2024-03-01 09:30:00.000000: Added 10 of apple"
        );
    }
}
