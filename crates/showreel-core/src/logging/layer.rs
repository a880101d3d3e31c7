//! Custom tracing Layer that renders events for a console-like sink.

use std::fmt::Write as FmtWrite;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use super::entry::{LogEntry, LogFormat};

/// Destination for rendered log lines.
pub trait LogSink: Send + Sync + 'static {
    /// Write one rendered entry at the given level.
    fn write(&self, level: &Level, line: &str);
}

/// A tracing Layer that hands every event to a [`LogSink`].
pub struct ConsoleLayer<S> {
    sink: S,
    format: LogFormat,
}

impl<S: LogSink> ConsoleLayer<S> {
    /// Create a new layer writing to `sink` in `format`.
    pub fn new(sink: S, format: LogFormat) -> Self {
        Self { sink, format }
    }
}

impl<S, Sub> Layer<Sub> for ConsoleLayer<S>
where
    S: LogSink,
    Sub: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, Sub>) {
        let metadata = event.metadata();

        let mut visitor = JsonVisitor::new();
        event.record(&mut visitor);

        let mut entry = LogEntry::new(
            metadata.level().as_str().to_lowercase(),
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );

        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !spans.is_empty() {
                entry = entry.with_span(spans.join(" > "));
            }
        }

        self.sink.write(metadata.level(), &entry.render(self.format));
    }
}

/// Build an [`EnvFilter`] from a directive, falling back to `info`.
pub fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Visitor that extracts the message and fields from tracing events.
struct JsonVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JsonVisitor {
    fn new() -> Self {
        Self {
            message: None,
            fields: serde_json::Map::new(),
        }
    }

    fn insert(&mut self, field: &Field, value: serde_json::Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);

        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.insert(field, serde_json::Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.insert(field, serde_json::Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, serde_json::Value::Number(value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, serde_json::Value::Number(value.into()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, serde_json::Value::Bool(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.insert(field, serde_json::Value::Number(n));
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, serde_json::Value::String(value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use tracing_subscriber::prelude::*;

    #[derive(Clone, Default)]
    struct MemorySink(Arc<Mutex<Vec<(Level, String)>>>);

    impl LogSink for MemorySink {
        fn write(&self, level: &Level, line: &str) {
            self.0.lock().unwrap().push((*level, line.to_string()));
        }
    }

    #[test]
    fn test_console_layer_captures_events() {
        let sink = MemorySink::default();
        let subscriber =
            tracing_subscriber::registry().with(ConsoleLayer::new(sink.clone(), LogFormat::Json));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Test message");
            tracing::warn!(count = 42, "Warning with field");
        });

        let lines = sink.0.lock().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, Level::INFO);
        assert!(lines[0].1.contains("Test message"));
        assert!(lines[0].1.contains("\"level\":\"info\""));
        assert_eq!(lines[1].0, Level::WARN);
        assert!(lines[1].1.contains("\"count\":42"));
    }

    #[test]
    fn test_text_format_includes_span_scope() {
        let sink = MemorySink::default();
        let subscriber =
            tracing_subscriber::registry().with(ConsoleLayer::new(sink.clone(), LogFormat::Text));

        tracing::subscriber::with_default(subscriber, || {
            let span = tracing::info_span!("mount");
            let _guard = span.enter();
            tracing::debug!(selector = ".preloader", "controller disabled");
        });

        let lines = sink.0.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].1.starts_with("DEBUG "));
        assert!(lines[0].1.contains("[mount]: controller disabled selector=.preloader"));
    }

    #[test]
    fn test_filter_drops_lower_levels() {
        let sink = MemorySink::default();
        let subscriber = tracing_subscriber::registry()
            .with(env_filter("warn"))
            .with(ConsoleLayer::new(sink.clone(), LogFormat::Text));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("hidden");
            tracing::error!("shown");
        });

        let lines = sink.0.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].1.contains("shown"));
    }

    #[test]
    fn test_bad_directive_falls_back() {
        let sink = MemorySink::default();
        let subscriber = tracing_subscriber::registry()
            .with(env_filter("showreel=notalevel"))
            .with(ConsoleLayer::new(sink.clone(), LogFormat::Text));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("hidden");
            tracing::info!("shown");
        });

        let lines = sink.0.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].1.contains("shown"));
    }
}
