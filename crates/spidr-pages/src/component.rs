//! Interest form component
//!
//! `InterestFormComponent` owns the live state of one interest form: the
//! typed values, the errors from the last submission and the PIN visibility
//! flag. Each is held in a [`Signal`] so a mounted view can follow changes.
//!
//! ## Event flow
//!
//! ```text
//!  input event ──▶ handle_change ──▶ mask ──▶ values ─┐
//!                        │                           │
//!                        └──▶ clear field error      ├──▶ subscribers (DOM)
//!                                                    │
//!  submit event ──▶ handle_submit ──▶ validate ──▶ errors
//!                                        │
//!                                        └──▶ SubmissionSink (on success)
//! ```
//!
//! ## Example
//!
//! ```
//! use spidr_pages::{InterestFormComponent, MemorySink, SubmitOutcome};
//!
//! let sink = MemorySink::new();
//! let form = InterestFormComponent::new(sink.clone());
//!
//! assert_eq!(form.handle_change("phone", "1234567890").unwrap(), "123-456-7890");
//!
//! let outcome = form.handle_submit().unwrap();
//! assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
//! assert!(form.error("phone").is_none());
//! assert_eq!(form.error("firstName"), Some("First name is required".to_string()));
//! assert!(sink.is_empty());
//! ```

use crate::reactive::Signal;
use crate::sink::{SubmissionSink, TracingSink};
use spidr_conf::Settings;
use spidr_forms::interest::{self, SPIDR_PIN};
use spidr_forms::{ErrorMap, Form, FormError, FormResult, FormState, InterestSubmission};
use std::rc::Rc;

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
	/// Every field passed; the record was handed to the sink
	Submitted(InterestSubmission),
	/// At least one field failed; nothing was emitted
	Rejected(ErrorMap),
}

impl SubmitOutcome {
	pub fn is_submitted(&self) -> bool {
		matches!(self, SubmitOutcome::Submitted(_))
	}
}

/// Live state and handlers of the interest form
#[derive(Clone)]
pub struct InterestFormComponent {
	form: Rc<Form>,
	values: Signal<FormState>,
	errors: Signal<ErrorMap>,
	show_pin: Signal<bool>,
	sink: Rc<dyn SubmissionSink>,
}

impl InterestFormComponent {
	/// Create a component with empty values and a masked PIN
	pub fn new(sink: impl SubmissionSink + 'static) -> Self {
		let form = interest::interest_form();
		let values = form.initial_state();

		Self {
			form: Rc::new(form),
			values: Signal::new(values),
			errors: Signal::new(ErrorMap::new()),
			show_pin: Signal::new(false),
			sink: Rc::new(sink),
		}
	}

	/// Create a component configured by `settings`, logging through a
	/// [`TracingSink`] on the configured channel
	pub fn from_settings(settings: &Settings) -> Self {
		Self::new(TracingSink::new(settings.logging.channel.clone()))
			.with_pin_visible(settings.pin_visible_by_default)
	}

	/// Set the initial PIN visibility
	pub fn with_pin_visible(self, visible: bool) -> Self {
		self.show_pin.set(visible);
		self
	}

	/// The form definition driving this component
	pub fn form(&self) -> &Form {
		&self.form
	}

	/// Handle one change event on `name`.
	///
	/// The raw text is masked, stored and returned so the caller can write
	/// it back into the input. Any error shown for this field is removed;
	/// errors of other fields stay until the next submission.
	pub fn handle_change(&self, name: &str, raw: &str) -> FormResult<String> {
		let formatted = self.form.format_input(name, raw)?;

		let mut values = self.values.get();
		values.set(name, formatted.clone())?;
		let valid = self.form.clean_field(name, &values).is_ok();
		self.values.set(values);

		if self.errors.with(|errors| errors.contains(name)) {
			self.errors.update(|errors| {
				errors.remove(name);
			});
		}

		tracing::debug!(field = name, valid, "field changed");
		Ok(formatted)
	}

	/// Handle a submit event.
	///
	/// Validation failures replace the error map and skip the sink. On
	/// success the error map is cleared and the typed record is emitted once.
	pub fn handle_submit(&self) -> FormResult<SubmitOutcome> {
		let values = self.values.get();

		match self.form.validate(&values) {
			Err(errors) => {
				tracing::debug!(
					invalid = errors.len(),
					fields = ?errors.fields().collect::<Vec<_>>(),
					"submission rejected"
				);
				self.errors.set(errors.clone());
				Ok(SubmitOutcome::Rejected(errors))
			}
			Ok(cleaned) => {
				let submission = InterestSubmission::from_cleaned(cleaned)?;
				self.errors.set(ErrorMap::new());
				self.sink.emit(&submission);
				Ok(SubmitOutcome::Submitted(submission))
			}
		}
	}

	/// Flip PIN visibility and return the new value
	pub fn toggle_pin_visibility(&self) -> bool {
		let mut visible = false;
		self.show_pin.update(|show| {
			*show = !*show;
			visible = *show;
		});
		tracing::debug!(visible, "pin visibility toggled");
		visible
	}

	pub fn pin_visible(&self) -> bool {
		self.show_pin.get()
	}

	/// Current display value of `name`
	pub fn value(&self, name: &str) -> FormResult<String> {
		self.values.with(|values| {
			values
				.get(name)
				.map(str::to_string)
				.ok_or_else(|| FormError::UnknownField(name.to_string()))
		})
	}

	/// Snapshot of all values
	pub fn state(&self) -> FormState {
		self.values.get()
	}

	/// Snapshot of the current errors
	pub fn errors(&self) -> ErrorMap {
		self.errors.get()
	}

	/// Error currently shown for `name`
	pub fn error(&self, name: &str) -> Option<String> {
		self.errors.with(|errors| errors.get(name).map(str::to_string))
	}

	/// Input type the PIN field should render with
	pub fn pin_input_type(&self) -> &'static str {
		if self.pin_visible() { "text" } else { "password" }
	}

	/// Whether `name` is the field governed by the visibility toggle
	pub fn is_pin_field(name: &str) -> bool {
		name == SPIDR_PIN
	}

	pub fn values_signal(&self) -> &Signal<FormState> {
		&self.values
	}

	pub fn errors_signal(&self) -> &Signal<ErrorMap> {
		&self.errors
	}

	pub fn pin_signal(&self) -> &Signal<bool> {
		&self.show_pin
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sink::MemorySink;
	use rstest::{fixture, rstest};
	use spidr_forms::interest::{COST_GUESS, EMAIL, FIRST_NAME, LAST_NAME, PHONE};

	#[fixture]
	fn sink() -> MemorySink {
		MemorySink::new()
	}

	#[rstest]
	fn test_new_component_is_empty(sink: MemorySink) {
		let component = InterestFormComponent::new(sink);

		assert!(component.errors().is_empty());
		assert!(!component.pin_visible());
		assert_eq!(component.value(FIRST_NAME).unwrap(), "");
		assert_eq!(component.state().len(), 6);
	}

	#[rstest]
	fn test_change_masks_and_stores(sink: MemorySink) {
		// Arrange
		let component = InterestFormComponent::new(sink);

		// Act
		let shown = component.handle_change(SPIDR_PIN, "1234 5678 9012").unwrap();

		// Assert
		assert_eq!(shown, "1234-5678-9012");
		assert_eq!(component.value(SPIDR_PIN).unwrap(), "1234-5678-9012");
	}

	#[rstest]
	fn test_change_on_unknown_field_is_an_error(sink: MemorySink) {
		let component = InterestFormComponent::new(sink);

		let result = component.handle_change("nickname", "Kai");

		assert!(matches!(result, Err(FormError::UnknownField(name)) if name == "nickname"));
		assert!(component.value("nickname").is_err());
	}

	#[rstest]
	fn test_change_notifies_values_only_when_stored(sink: MemorySink) {
		// Arrange
		let component = InterestFormComponent::new(sink);
		let writes = Rc::new(std::cell::Cell::new(0));
		let counter = Rc::clone(&writes);
		component
			.values_signal()
			.subscribe(move |_: &FormState| counter.set(counter.get() + 1));

		// Act
		let unknown = component.handle_change("nickname", "Kai");
		component.handle_change(FIRST_NAME, "Kai").unwrap();

		// Assert
		assert!(unknown.is_err());
		assert_eq!(writes.get(), 1);
	}

	#[rstest]
	fn test_change_clears_only_that_field(sink: MemorySink) {
		// Arrange
		let component = InterestFormComponent::new(sink);
		component.handle_submit().unwrap();
		assert_eq!(component.errors().len(), 6);

		// Act
		component.handle_change(EMAIL, "not-an-email").unwrap();

		// Assert
		let errors = component.errors();
		assert_eq!(errors.len(), 5);
		assert!(!errors.contains(EMAIL));
		assert!(errors.contains(PHONE));
	}

	#[rstest]
	fn test_successful_submit_clears_errors_and_emits(sink: MemorySink) {
		// Arrange
		let component = InterestFormComponent::new(sink.clone());
		component.handle_submit().unwrap();
		for (name, value) in [
			(FIRST_NAME, "Kai"),
			(LAST_NAME, "Depweg"),
			(PHONE, "1234567890"),
			(EMAIL, "kai@example.com"),
			(COST_GUESS, "69"),
			(SPIDR_PIN, "1234567890123456"),
		] {
			component.handle_change(name, value).unwrap();
		}

		// Act
		let outcome = component.handle_submit().unwrap();

		// Assert
		assert!(outcome.is_submitted());
		assert!(component.errors().is_empty());
		assert_eq!(sink.len(), 1);
		assert_eq!(sink.last().unwrap().spidr_pin, "1234-5678-9012-3456");
	}

	#[rstest]
	fn test_toggle_flips_visibility(sink: MemorySink) {
		let component = InterestFormComponent::new(sink);

		assert!(component.toggle_pin_visibility());
		assert_eq!(component.pin_input_type(), "text");
		assert!(!component.toggle_pin_visibility());
		assert_eq!(component.pin_input_type(), "password");
	}

	#[rstest]
	fn test_from_settings_honours_pin_default() {
		let mut settings = Settings::default();
		settings.pin_visible_by_default = true;

		let component = InterestFormComponent::from_settings(&settings);

		assert!(component.pin_visible());
	}

	#[rstest]
	fn test_clones_share_state(sink: MemorySink) {
		let component = InterestFormComponent::new(sink);
		let handle = component.clone();

		handle.handle_change(FIRST_NAME, "Kai").unwrap();

		assert_eq!(component.value(FIRST_NAME).unwrap(), "Kai");
	}
}
