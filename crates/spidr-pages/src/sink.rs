//! Destinations for validated submissions
//!
//! A sink receives every submission that passes validation. Nothing is read
//! back, so any consumer (a log line, a queue, a test buffer) fits behind
//! [`SubmissionSink`].

use spidr_forms::InterestSubmission;
use std::cell::RefCell;
use std::rc::Rc;

/// Log target used by [`TracingSink`]
pub const SUBMISSION_TARGET: &str = "spidr::submission";

/// Receives validated submissions
pub trait SubmissionSink {
	fn emit(&self, submission: &InterestSubmission);
}

impl<F> SubmissionSink for F
where
	F: Fn(&InterestSubmission),
{
	fn emit(&self, submission: &InterestSubmission) {
		self(submission)
	}
}

/// Logs each submission as JSON at INFO
///
/// Events use the [`SUBMISSION_TARGET`] target and carry a `channel` field so
/// several forms can share one subscriber.
#[derive(Debug, Clone)]
pub struct TracingSink {
	channel: String,
}

impl TracingSink {
	pub fn new(channel: impl Into<String>) -> Self {
		Self {
			channel: channel.into(),
		}
	}

	pub fn channel(&self) -> &str {
		&self.channel
	}
}

impl Default for TracingSink {
	fn default() -> Self {
		Self::new("interest-form")
	}
}

impl SubmissionSink for TracingSink {
	fn emit(&self, submission: &InterestSubmission) {
		match serde_json::to_string(submission) {
			Ok(json) => tracing::info!(
				target: SUBMISSION_TARGET,
				channel = %self.channel,
				submission = %json,
				"Validated form data"
			),
			Err(e) => tracing::error!(
				target: SUBMISSION_TARGET,
				channel = %self.channel,
				error = %e,
				"Failed to serialize submission"
			),
		}
	}
}

/// Keeps submissions in memory
///
/// Clones share the same buffer, so a clone can be handed to a component
/// while the first handle is inspected afterwards.
///
/// # Examples
///
/// ```
/// use spidr_pages::sink::{MemorySink, SubmissionSink};
/// use spidr_forms::InterestSubmission;
///
/// let sink = MemorySink::new();
/// let submission = InterestSubmission {
///     first_name: "Kai".into(),
///     last_name: "D".into(),
///     phone: "123-456-7890".into(),
///     email: "a@b.com".into(),
///     cost_guess: 69.0,
///     spidr_pin: "1234-5678-9012-3456".into(),
/// };
///
/// sink.clone().emit(&submission);
/// assert_eq!(sink.submissions(), vec![submission]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
	submissions: Rc<RefCell<Vec<InterestSubmission>>>,
}

impl MemorySink {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn submissions(&self) -> Vec<InterestSubmission> {
		self.submissions.borrow().clone()
	}

	pub fn last(&self) -> Option<InterestSubmission> {
		self.submissions.borrow().last().cloned()
	}

	pub fn len(&self) -> usize {
		self.submissions.borrow().len()
	}

	pub fn is_empty(&self) -> bool {
		self.submissions.borrow().is_empty()
	}
}

impl SubmissionSink for MemorySink {
	fn emit(&self, submission: &InterestSubmission) {
		self.submissions.borrow_mut().push(submission.clone());
	}
}

/// Writes submissions to the browser console (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

#[cfg(target_arch = "wasm32")]
impl SubmissionSink for ConsoleSink {
	fn emit(&self, submission: &InterestSubmission) {
		use wasm_bindgen::JsValue;

		let payload = serde_json::to_string(submission)
			.ok()
			.and_then(|json| js_sys::JSON::parse(&json).ok())
			.unwrap_or(JsValue::NULL);
		web_sys::console::log_2(&"Validated form data:".into(), &payload);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::cell::Cell;

	fn submission() -> InterestSubmission {
		InterestSubmission {
			first_name: "Kai".to_string(),
			last_name: "Depweg".to_string(),
			phone: "123-456-7890".to_string(),
			email: "kai@example.com".to_string(),
			cost_guess: 69.0,
			spidr_pin: "1234-5678-9012-3456".to_string(),
		}
	}

	#[rstest]
	fn test_closure_is_a_sink() {
		let count = Cell::new(0);
		let sink = |_: &InterestSubmission| count.set(count.get() + 1);

		sink.emit(&submission());
		sink.emit(&submission());

		assert_eq!(count.get(), 2);
	}

	#[rstest]
	fn test_memory_sink_clones_share_buffer() {
		// Arrange
		let sink = MemorySink::new();
		let handle = sink.clone();

		// Act
		handle.emit(&submission());

		// Assert
		assert_eq!(sink.len(), 1);
		assert_eq!(sink.last().map(|s| s.cost_guess), Some(69.0));
	}

	#[rstest]
	fn test_tracing_sink_default_channel() {
		assert_eq!(TracingSink::default().channel(), "interest-form");
	}
}
