//! In-memory event capture for logging assertions in tests

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use peoplex_core_types::schema::{FIELD_COMPONENT, FIELD_EVENT, FIELD_OP};

/// One recorded event, every field rendered as text
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    /// `start`, `end` or `end_error` for events logged through the op macros
    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }

    pub fn component(&self) -> Option<&str> {
        self.field(FIELD_COMPONENT)
    }

    fn is(&self, op: &str, event: &str) -> bool {
        self.op() == Some(op) && self.event() == Some(event)
    }
}

struct TextFields<'a>(&'a mut BTreeMap<String, String>);

impl Visit for TextFields<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{:?}", value));
    }
}

type Buffer = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer {
    buffer: Buffer,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut TextFields(&mut fields));

        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(CapturedEvent {
                level: *event.metadata().level(),
                fields,
            });
        }
    }
}

/// Shared view of every event captured so far
#[derive(Clone)]
pub struct TestCapture {
    buffer: Buffer,
}

impl TestCapture {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.buffer
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn events_for_op(&self, op: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op() == Some(op))
            .collect()
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }

    /// # Panics
    ///
    /// Panics when no captured event has this op and event name
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.is(op, event)),
            "no {} event for op {} among {} captured events",
            event,
            op,
            events.len()
        );
    }
}

static CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber and return its handle
///
/// The first call installs; later calls in the same test binary return the
/// same buffer, so tests should filter on an op name only they use.
///
/// ```
/// use peoplex_core::logging_facility::test_capture::init_test_capture;
/// use peoplex_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_capture_example");
/// capture.assert_event_exists("doc_capture_example", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    CAPTURE
        .get_or_init(|| {
            let buffer = Buffer::default();
            tracing_subscriber::registry()
                .with(CaptureLayer {
                    buffer: buffer.clone(),
                })
                .init();
            TestCapture { buffer }
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_read_canonical_fields() {
        let fields = BTreeMap::from([
            ("op".to_string(), "list_people".to_string()),
            ("event".to_string(), "end".to_string()),
            ("rows".to_string(), "3".to_string()),
        ]);
        let event = CapturedEvent {
            level: Level::INFO,
            fields,
        };

        assert!(event.is("list_people", "end"));
        assert_eq!(event.field("rows"), Some("3"));
        assert_eq!(event.component(), None);
    }
}
