//! Log-record assertions
//!
//! [`capture_json_logs`] runs code under a JSON subscriber and returns the
//! lines it wrote. [`strip_log_records`] reduces those lines to level and
//! message so tests can assert on them with [`contains_log_records`].

use serde::Deserialize;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Level and message of a log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRec {
    /// Lowercase level name, e.g. `"warn"`
    pub level: String,
    pub msg: String,
}

impl LogRec {
    pub fn new(level: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            msg: msg.into(),
        }
    }
}

#[derive(Deserialize)]
struct LogLine {
    #[serde(default)]
    level: String,
    #[serde(default)]
    fields: LogFields,
    // Present when events are flattened
    message: Option<String>,
}

#[derive(Deserialize, Default)]
struct LogFields {
    #[serde(default)]
    message: String,
}

/// Convert JSON log lines to [`LogRec`]s, skipping lines that are not JSON
/// objects
pub fn strip_log_records<S: AsRef<str>>(lines: &[S]) -> Vec<LogRec> {
    let mut records = Vec::new();

    for line in lines {
        let text = line.as_ref().trim_start();
        if !text.starts_with('{') {
            tracing::warn!("invalid log record, missing {{: {text}");
            continue;
        }
        match serde_json::from_str::<LogLine>(text) {
            Ok(parsed) => records.push(LogRec {
                level: parsed.level.to_ascii_lowercase(),
                msg: parsed.message.unwrap_or(parsed.fields.message),
            }),
            Err(err) => tracing::warn!("invalid log record: {text}, failed to parse json, {err}"),
        }
    }

    records
}

/// Whether every expected record appears in `results`, in order
pub fn contains_log_records(results: &[LogRec], expected: &[LogRec]) -> bool {
    let mut expected = expected.iter().peekable();
    for record in results {
        if expected.peek() == Some(&record) {
            expected.next();
        }
    }
    expected.peek().is_none()
}

/// Shared buffer the JSON formatter writes into
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map(|mut bytes| bytes.extend_from_slice(buf))
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log buffer poisoned"))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl CapturedLogs {
    fn lines(&self) -> Vec<String> {
        self.0
            .lock()
            .map(|bytes| {
                String::from_utf8_lossy(&bytes)
                    .lines()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Run `f` with a JSON subscriber on the current thread, returning its
/// result and the log lines it emitted
pub fn capture_json_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(logs.clone())
        .with_max_level(Level::TRACE)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.lines())
}
