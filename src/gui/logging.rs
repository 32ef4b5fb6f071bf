use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::{Event, Subscriber, field::Visit};
use tracing_subscriber::layer::{Context, Layer};

/// Entries kept before the oldest are dropped.
pub const LOG_CAPACITY: usize = 1000;

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: tracing::Level,
    pub timestamp: String,
    pub message: String,
    pub target: String,
}

impl LogEntry {
    pub fn new(level: tracing::Level, message: String, target: String) -> Self {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        Self {
            level,
            timestamp,
            message,
            target,
        }
    }
}

static LOG_BUFFER: once_cell::sync::Lazy<Arc<Mutex<Vec<LogEntry>>>> =
    once_cell::sync::Lazy::new(|| Arc::new(Mutex::new(Vec::new())));

pub fn get_log_buffer() -> Arc<Mutex<Vec<LogEntry>>> {
    LOG_BUFFER.clone()
}

/// Drop the oldest entries so at most [`LOG_CAPACITY`] remain.
pub fn trim_to_capacity(entries: &mut Vec<LogEntry>) {
    let len = entries.len();
    if len > LOG_CAPACITY {
        entries.drain(0..(len - LOG_CAPACITY));
    }
}

/// Forwards tracing events into the buffer drained by the log panel.
#[derive(Default)]
pub struct GuiLogLayer;

impl GuiLogLayer {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

impl<S> Layer<S> for GuiLogLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let message = if !visitor.message.is_empty() {
            visitor.message
        } else {
            metadata.target().to_string()
        };

        let log_entry = LogEntry::new(*metadata.level(), message, metadata.target().to_string());

        if let Ok(mut buf) = LOG_BUFFER.lock() {
            buf.push(log_entry);
            trim_to_capacity(&mut buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::prelude::*;

    #[test]
    fn layer_captures_messages() {
        let subscriber = tracing_subscriber::Registry::default().with(GuiLogLayer::new());
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("cell grid {}x{}", 3, 4);
        });

        let buf = get_log_buffer();
        let logs = buf.lock().unwrap();
        assert!(
            logs.iter()
                .any(|e| e.message == "cell grid 3x4" && e.level == tracing::Level::WARN)
        );
    }

    #[test]
    fn trim_keeps_newest() {
        let mut entries: Vec<LogEntry> = (0..LOG_CAPACITY + 5)
            .map(|i| LogEntry::new(tracing::Level::INFO, i.to_string(), "test".to_string()))
            .collect();
        trim_to_capacity(&mut entries);
        assert_eq!(entries.len(), LOG_CAPACITY);
        assert_eq!(entries[0].message, "5");
    }
}
