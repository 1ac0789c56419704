//! Log sinks: where formatted lines go

use parking_lot::Mutex;
use tracing::Level;

/// Target used by [`TracingSink`] events
pub const TRACING_TARGET: &str = "ouroboros_http_log";

/// Destination for log lines.
///
/// A sink accepts a level and a single line of text. Logging has no failure
/// path, so sinks that can fail must absorb their own errors.
pub trait LogSink: Send + Sync {
    fn log(&self, level: Level, line: &str);
}

/// Forwards lines to `tracing` under [`TRACING_TARGET`].
///
/// The sink's `name` is attached to every event as the `logger` field, so
/// several loggers sharing one subscriber stay distinguishable.
#[derive(Debug, Clone)]
pub struct TracingSink {
    name: String,
}

impl TracingSink {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(TRACING_TARGET)
    }
}

impl LogSink for TracingSink {
    fn log(&self, level: Level, line: &str) {
        // Event levels must be constant per callsite
        if level == Level::TRACE {
            tracing::trace!(target: TRACING_TARGET, logger = %self.name, "{}", line);
        } else if level == Level::DEBUG {
            tracing::debug!(target: TRACING_TARGET, logger = %self.name, "{}", line);
        } else if level == Level::INFO {
            tracing::info!(target: TRACING_TARGET, logger = %self.name, "{}", line);
        } else if level == Level::WARN {
            tracing::warn!(target: TRACING_TARGET, logger = %self.name, "{}", line);
        } else {
            tracing::error!(target: TRACING_TARGET, logger = %self.name, "{}", line);
        }
    }
}

/// Keeps every line in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far
    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.lock().clone()
    }

    /// Just the text of each line
    pub fn lines(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Returns true if any line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.records.lock().iter().any(|(_, line)| line.contains(needle))
    }
}

impl LogSink for MemorySink {
    fn log(&self, level: Level, line: &str) {
        self.records.lock().push((level, line.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    impl Captured {
        fn output(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    #[test]
    fn test_memory_sink_records_levels() {
        let sink = MemorySink::new();
        sink.log(Level::INFO, "first");
        sink.log(Level::WARN, "second");

        assert_eq!(
            sink.records(),
            vec![
                (Level::INFO, "first".to_string()),
                (Level::WARN, "second".to_string())
            ]
        );
        assert!(sink.contains("sec"));
        assert_eq!(sink.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_tracing_sink_default_name() {
        assert_eq!(TracingSink::default().name, TRACING_TARGET);
    }

    #[test]
    fn test_tracing_sink_emits_events() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .finish();

        let sink = TracingSink::new("payments");
        tracing::subscriber::with_default(subscriber, || {
            sink.log(Level::WARN, "Response status code: 503");
            sink.log(Level::TRACE, "filtered out");
        });

        let output = captured.output();
        assert!(output.contains("WARN"));
        assert!(output.contains(TRACING_TARGET));
        assert!(output.contains("logger=payments"));
        assert!(output.contains("Response status code: 503"));
        assert!(!output.contains("filtered out"));
    }
}
