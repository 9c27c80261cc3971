//! Event capture - records tracing events emitted inside a closure
//!
//! The capturing subscriber is installed with `with_default`, so it only
//! sees events from the current thread for the duration of the call. Tests
//! running in parallel do not observe each other's warnings.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

/// Severity of a captured event
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CapturedLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<Level> for CapturedLevel {
    fn from(level: Level) -> Self {
        if level == Level::TRACE {
            CapturedLevel::Trace
        } else if level == Level::DEBUG {
            CapturedLevel::Debug
        } else if level == Level::INFO {
            CapturedLevel::Info
        } else if level == Level::WARN {
            CapturedLevel::Warn
        } else {
            CapturedLevel::Error
        }
    }
}

/// One recorded event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedEvent {
    pub level: CapturedLevel,
    pub target: String,
    pub message: String,
}

/// Layer appending every event to a shared buffer
#[derive(Clone, Default)]
pub struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything recorded so far
    pub fn take(&self) -> Vec<CapturedEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        self.events.lock().push(CapturedEvent {
            level: (*metadata.level()).into(),
            target: metadata.target().to_string(),
            message: visitor.message,
        });
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// Run `f` with a capturing subscriber and return its result with the events
pub fn capture_events<R>(f: impl FnOnce() -> R) -> (R, Vec<CapturedEvent>) {
    let layer = CaptureLayer::new();
    let subscriber = Registry::default().with(layer.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, layer.take())
}

/// Warning-level events only
pub fn warnings(events: &[CapturedEvent]) -> Vec<&CapturedEvent> {
    events
        .iter()
        .filter(|e| e.level == CapturedLevel::Warn)
        .collect()
}
