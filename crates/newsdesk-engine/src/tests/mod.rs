use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, Once};
use tempfile::TempDir;

/// Create a temporary articles directory
pub fn create_test_articles_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content
pub fn create_test_file(articles_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = articles_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Records every log line emitted by the crate under test.
///
/// Tests run in parallel and share one logger, so assertions should look for
/// a message unique to the test rather than count records.
struct RecordingLogger {
    records: Mutex<Vec<(log::Level, String)>>,
}

static LOGGER: RecordingLogger = RecordingLogger {
    records: Mutex::new(Vec::new()),
};

impl log::Log for RecordingLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

/// Install the recording logger. Safe to call from every test.
pub fn record_logs() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(log::LevelFilter::Trace);
    });
}

/// Messages logged at `level` that contain `needle`.
pub fn logged(level: log::Level, needle: &str) -> Vec<String> {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, message)| *l == level && message.contains(needle))
        .map(|(_, message)| message.clone())
        .collect()
}
