//! Log output of the builders, checked through a capturing layer.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use app_mutations::{Entity, unlock_application, update_application};
use serde_json::Value;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: Level,
    fields: BTreeMap<String, String>,
}

#[derive(Clone, Default)]
struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl EventCapture {
    fn warnings(&self) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.level == Level::WARN)
            .cloned()
            .collect()
    }
}

#[derive(Default)]
struct FieldVisitor(BTreeMap<String, String>);

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }
}

impl<S: Subscriber> Layer<S> for EventCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: visitor.0,
        });
    }
}

fn run_captured<T>(f: impl FnOnce() -> T) -> (T, EventCapture) {
    let capture = EventCapture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, capture)
}

#[test]
fn missing_identifier_logs_one_warning() {
    let entity = Entity::new().with("name", "n");
    let (descriptor, capture) = run_captured(|| update_application(&entity, None));

    assert_eq!(descriptor.param("applicationId"), Some(&Value::Null));
    let warnings = capture.warnings();
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    let fields = &warnings[0].fields;
    assert_eq!(fields.get("mutation").map(String::as_str), Some("updateApplication"));
    assert_eq!(fields.get("field").map(String::as_str), Some("_id"));
}

#[test]
fn present_identifier_logs_no_warning() {
    let entity = Entity::new().with("_id", "A1").with("name", "n");
    let (_, capture) = run_captured(|| update_application(&entity, None));
    assert!(capture.warnings().is_empty());

    let (_, capture) = run_captured(|| unlock_application(&entity, None));
    assert!(capture.warnings().is_empty());
}

#[test]
fn unlock_without_identifier_names_its_mutation() {
    let (_, capture) = run_captured(|| unlock_application(&Entity::new(), None));
    let warnings = capture.warnings();
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert_eq!(
        warnings[0].fields.get("mutation").map(String::as_str),
        Some("unlockApplication")
    );
}
