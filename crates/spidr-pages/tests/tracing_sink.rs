//! The tracing sink emits one structured INFO event per submission

use rstest::rstest;
use spidr_pages::sink::SUBMISSION_TARGET;
use spidr_pages::{InterestFormComponent, TracingSink};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Clone)]
struct CapturedEvent {
	level: tracing::Level,
	target: String,
	fields: HashMap<String, String>,
}

struct LogCapture {
	events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
		struct FieldVisitor {
			fields: HashMap<String, String>,
		}

		impl tracing::field::Visit for FieldVisitor {
			fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
				self.fields
					.insert(field.name().to_string(), format!("{:?}", value));
			}
		}

		let mut visitor = FieldVisitor {
			fields: HashMap::new(),
		};
		event.record(&mut visitor);

		self.events.lock().unwrap().push(CapturedEvent {
			level: *event.metadata().level(),
			target: event.metadata().target().to_string(),
			fields: visitor.fields,
		});
	}
}

fn fill_valid(component: &InterestFormComponent) {
	for (name, raw) in [
		("firstName", "Kai"),
		("lastName", "Depweg"),
		("phone", "123-456-7890"),
		("email", "kai@example.com"),
		("costGuess", "69"),
		("spidrPin", "1234-5678-9012-3456"),
	] {
		component.handle_change(name, raw).unwrap();
	}
}

fn submission_events(events: &Arc<Mutex<Vec<CapturedEvent>>>) -> Vec<CapturedEvent> {
	events
		.lock()
		.unwrap()
		.iter()
		.filter(|e| e.target == SUBMISSION_TARGET)
		.cloned()
		.collect()
}

#[rstest]
fn test_valid_submission_is_logged_as_json() {
	// Arrange
	let events = Arc::new(Mutex::new(Vec::new()));
	let capture = LogCapture {
		events: events.clone(),
	};
	let _guard = tracing_subscriber::registry().with(capture).set_default();
	let component = InterestFormComponent::new(TracingSink::new("waitlist"));
	fill_valid(&component);

	// Act
	let outcome = component.handle_submit().unwrap();

	// Assert
	assert!(outcome.is_submitted());
	let logged = submission_events(&events);
	assert_eq!(logged.len(), 1);
	let event = &logged[0];
	assert_eq!(event.level, tracing::Level::INFO);
	assert_eq!(event.fields["message"], "Validated form data");
	assert_eq!(event.fields["channel"], "waitlist");

	let record: serde_json::Value = serde_json::from_str(&event.fields["submission"]).unwrap();
	assert_eq!(record["firstName"], "Kai");
	assert_eq!(record["costGuess"], 69.0);
	assert_eq!(record["spidrPin"], "1234-5678-9012-3456");
}

#[rstest]
fn test_rejected_submission_is_not_logged() {
	// Arrange
	let events = Arc::new(Mutex::new(Vec::new()));
	let capture = LogCapture {
		events: events.clone(),
	};
	let _guard = tracing_subscriber::registry().with(capture).set_default();
	let component = InterestFormComponent::new(TracingSink::default());

	// Act
	let outcome = component.handle_submit().unwrap();

	// Assert
	assert!(!outcome.is_submitted());
	assert!(submission_events(&events).is_empty());
	let all = events.lock().unwrap();
	assert!(
		all.iter()
			.any(|e| e.fields.get("message").map(String::as_str) == Some("submission rejected"))
	);
}

#[rstest]
fn test_field_change_logs_field_validity() {
	// Arrange
	let events = Arc::new(Mutex::new(Vec::new()));
	let capture = LogCapture {
		events: events.clone(),
	};
	let _guard = tracing_subscriber::registry().with(capture).set_default();
	let component = InterestFormComponent::new(TracingSink::default());

	// Act
	component.handle_change("phone", "123456").unwrap();
	component.handle_change("phone", "1234567890").unwrap();

	// Assert
	let all = events.lock().unwrap();
	let changes: Vec<&str> = all
		.iter()
		.filter(|e| e.fields.get("message").map(String::as_str) == Some("field changed"))
		.map(|e| e.fields["valid"].as_str())
		.collect();
	assert_eq!(changes, vec!["false", "true"]);
	assert!(all.iter().all(|e| !e.fields.values().any(|v| v.contains("1234567890"))));
}
