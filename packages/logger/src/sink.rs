//! Output sinks for formatted log lines

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Target used when lines are forwarded to the `log` facade
pub const LOG_TARGET: &str = "ducks_logger";

/// Receives every line the logger emits
pub trait LogSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Prints lines to stdout
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }
}

/// Forwards lines to the `log` facade at a fixed level
#[derive(Clone, Copy, Debug)]
pub struct LogCrateSink {
    level: log::Level,
}

impl LogCrateSink {
    pub fn new(level: log::Level) -> Self {
        Self { level }
    }
}

impl LogSink for LogCrateSink {
    fn emit(&self, line: &str) {
        log::log!(target: LOG_TARGET, self.level, "{}", line);
    }
}

fn default_history_limit() -> usize {
    1000
}

/// Keeps the most recent lines in memory.
///
/// Clones share the same buffer, so one handle can be given to the logger
/// while another is read by a debug console or a test.
#[derive(Clone, Debug)]
pub struct LogHistory {
    limit: usize,
    entries: Arc<Mutex<VecDeque<String>>>,
}

impl LogHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(limit.min(1024)))),
        }
    }

    /// Snapshot of the stored lines, oldest first
    pub fn entries(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for LogHistory {
    fn default() -> Self {
        Self::new(default_history_limit())
    }
}

impl LogSink for LogHistory {
    fn emit(&self, line: &str) {
        if self.limit == 0 {
            return;
        }
        let mut entries = self.lock();
        while entries.len() >= self.limit {
            entries.pop_front();
        }
        entries.push_back(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_keeps_lines_in_order() {
        let history = LogHistory::default();
        history.emit("first");
        history.emit("second");

        assert_eq!(history.entries(), vec!["first", "second"]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_history_drops_oldest_over_limit() {
        let history = LogHistory::new(2);
        history.emit("a");
        history.emit("b");
        history.emit("c");

        assert_eq!(history.entries(), vec!["b", "c"]);
    }

    #[test]
    fn test_history_with_zero_limit_stores_nothing() {
        let history = LogHistory::new(0);
        history.emit("ignored");
        assert!(history.is_empty());
    }

    #[test]
    fn test_history_clones_share_buffer() {
        let history = LogHistory::new(10);
        let handle = history.clone();
        history.emit("shared");

        assert_eq!(handle.entries(), vec!["shared"]);

        handle.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_log_crate_sink_emits_with_target_and_level() {
        crate::testing::install();
        let sink = LogCrateSink::new(log::Level::Info);

        sink.emit("DucksSwift - Action: Increment");

        let records = crate::testing::records_for(LOG_TARGET);
        let record = records
            .iter()
            .find(|r| r.message == "DucksSwift - Action: Increment")
            .expect("line forwarded to the log facade");
        assert_eq!(record.level, log::Level::Info);
        assert_eq!(record.target, "ducks_logger");
    }

    #[test]
    fn test_history_keeps_empty_lines() {
        let history = LogHistory::new(10);
        history.emit("");
        assert_eq!(history.entries(), vec![String::new()]);
    }
}
