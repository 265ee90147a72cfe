//! Usage-event capture.
//!
//! The search pipeline reports one event per active query. Delivery is
//! fire-and-forget: callers log a failed capture and carry on.

use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

/// Errors from an event sink.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("Telemetry sink unavailable: {0}")]
    Unavailable(String),

    #[error("Internal lock error")]
    LockPoisoned,
}

/// Destination for usage events.
pub trait EventSink: Send + Sync {
    fn capture(&self, event: &str, properties: Value) -> Result<(), TelemetryError>;
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn capture(&self, _event: &str, _properties: Value) -> Result<(), TelemetryError> {
        Ok(())
    }
}

/// Writes events to the `tracing` log under the `medtrack::telemetry` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn capture(&self, event: &str, properties: Value) -> Result<(), TelemetryError> {
        tracing::info!(target: "medtrack::telemetry", event, %properties, "event captured");
        Ok(())
    }
}

/// A captured event, as held by [`MemorySink`].
#[derive(Debug, Clone, Serialize)]
pub struct CapturedEvent {
    pub name: String,
    pub properties: Value,
    /// RFC 3339 capture time.
    pub captured_at: String,
}

/// Keeps events in memory for inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<CapturedEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything captured so far.
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl EventSink for MemorySink {
    fn capture(&self, event: &str, properties: Value) -> Result<(), TelemetryError> {
        let mut events = self.events.lock().map_err(|_| TelemetryError::LockPoisoned)?;
        events.push(CapturedEvent {
            name: event.to_string(),
            properties,
            captured_at: chrono::Utc::now().to_rfc3339(),
        });
        Ok(())
    }
}

impl<T: EventSink + ?Sized> EventSink for std::sync::Arc<T> {
    fn capture(&self, event: &str, properties: Value) -> Result<(), TelemetryError> {
        (**self).capture(event, properties)
    }
}
