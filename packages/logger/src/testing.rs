//! Capturing `log` backend for unit tests

use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

#[derive(Clone, Debug)]
pub struct CapturedRecord {
    pub target: String,
    pub level: Level,
    pub message: String,
}

struct CaptureLogger;

static RECORDS: Mutex<Vec<CapturedRecord>> = Mutex::new(Vec::new());
static INSTALLED: OnceLock<()> = OnceLock::new();

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(CapturedRecord {
                target: record.target().to_string(),
                level: record.level(),
                message: record.args().to_string(),
            });
    }

    fn flush(&self) {}
}

/// Install the capturing logger for this test binary. Safe to call repeatedly.
pub fn install() {
    INSTALLED.get_or_init(|| {
        if log::set_boxed_logger(Box::new(CaptureLogger)).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
}

/// Records captured so far for `target`, oldest first
pub fn records_for(target: &str) -> Vec<CapturedRecord> {
    RECORDS
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .iter()
        .filter(|record| record.target == target)
        .cloned()
        .collect()
}
