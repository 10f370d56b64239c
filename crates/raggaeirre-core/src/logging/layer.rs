//! `tracing` layer that mirrors events into the journal, and the subscriber
//! setup shared by the desktop app and the CLI.

use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use super::entry::JournalEntry;
use super::writer::JournalWriter;
use crate::error::{SiteError, SiteResult};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "raggaeirre=info";

/// Writes every event it sees to a [`JournalWriter`]
pub struct JsonlLayer {
    writer: Arc<JournalWriter>,
}

impl JsonlLayer {
    pub fn new(logs_dir: impl AsRef<Path>, instance: impl Into<String>) -> std::io::Result<Self> {
        Ok(Self {
            writer: Arc::new(JournalWriter::new(logs_dir, instance)?),
        })
    }

    pub fn log_path(&self) -> &Path {
        self.writer.path()
    }

    pub fn instance(&self) -> &str {
        self.writer.instance()
    }
}

impl<S> Layer<S> for JsonlLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let mut entry = JournalEntry::new(
            metadata.level().as_str().to_lowercase(),
            self.writer.instance(),
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

        // a failed journal write must never take the app down
        let _ = self.writer.write(&entry);
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl FieldVisitor {
    fn insert(&mut self, field: &Field, value: serde_json::Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldVisitor {
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
        self.insert(field, value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.into());
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

/// Global subscriber setup: env filter, console output, optional journal.
pub struct LoggingBuilder {
    instance: String,
    logs_dir: Option<PathBuf>,
    console: bool,
    filter: Option<String>,
}

impl LoggingBuilder {
    pub fn new(instance: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
            logs_dir: None,
            console: true,
            filter: None,
        }
    }

    /// Also write a journal under `logs_dir`.
    pub fn journal(mut self, logs_dir: impl Into<PathBuf>) -> Self {
        self.logs_dir = Some(logs_dir.into());
        self
    }

    pub fn no_console(mut self) -> Self {
        self.console = false;
        self
    }

    /// Filter directives used when `RUST_LOG` is unset.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Journal layer alone, for manual composition.
    pub fn build_layer(&self) -> std::io::Result<Option<JsonlLayer>> {
        self.logs_dir
            .as_ref()
            .map(|dir| JsonlLayer::new(dir, &self.instance))
            .transpose()
    }

    /// Install the subscriber. Returns the journal path when one is written.
    pub fn init(self) -> SiteResult<Option<PathBuf>> {
        let fallback = self.filter.as_deref().unwrap_or(DEFAULT_FILTER);
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback))
            .map_err(|e| SiteError::Config(format!("invalid log filter: {}", e)))?;

        let journal = self.build_layer()?;
        let path = journal.as_ref().map(|layer| layer.log_path().to_path_buf());
        let console = self
            .console
            .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

        tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .with(journal)
            .try_init()
            .map_err(|e| SiteError::Config(format!("logging already initialised: {}", e)))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::read_journal;
    use tempfile::TempDir;
    use tracing_subscriber::prelude::*;

    #[test]
    fn test_layer_journals_events_with_fields() {
        let temp = TempDir::new().unwrap();
        let logs = temp.path().join("logs");
        let layer = JsonlLayer::new(&logs, "test").unwrap();
        assert_eq!(layer.instance(), "test");

        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            let span = tracing::info_span!("donation");
            let _guard = span.enter();
            tracing::info!(amount = 1000u64, method = "mpesa", "Donation submitted");
            tracing::warn!("Validation failed");
        });

        let entries = read_journal(&logs).unwrap();
        assert_eq!(entries.len(), 2);

        let submitted = entries.iter().find(|e| e.msg == "Donation submitted").unwrap();
        assert_eq!(submitted.level, "info");
        assert_eq!(submitted.field("amount"), Some(&serde_json::json!(1000)));
        assert_eq!(submitted.span.as_deref(), Some("donation"));
        assert!(entries.iter().any(|e| e.level == "warn"));
    }

    #[test]
    fn test_builder_without_journal() {
        let builder = LoggingBuilder::new("cli").no_console();
        assert!(builder.build_layer().unwrap().is_none());
    }
}
