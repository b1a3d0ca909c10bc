//! The Spidr air fryer interest form
//!
//! Field names match the keys used in form state, in rendered markup and in
//! the serialized submission.

use crate::fields::{CharField, EmailField, FloatField, RegexField};
use crate::form::{CleanedData, Form, FormError, FormResult};
use crate::mask::InputMask;
use crate::validators::PatternValidator;
use crate::Widget;
use serde::{Deserialize, Serialize};

pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const PHONE: &str = "phone";
pub const EMAIL: &str = "email";
pub const COST_GUESS: &str = "costGuess";
pub const SPIDR_PIN: &str = "spidrPin";

/// Every field of the interest form, in display order
pub const FIELD_NAMES: [&str; 6] = [FIRST_NAME, LAST_NAME, PHONE, EMAIL, COST_GUESS, SPIDR_PIN];

/// Build the interest form schema
///
/// # Examples
///
/// ```
/// use spidr_forms::interest::{self, FIELD_NAMES};
///
/// let form = interest::interest_form();
/// assert_eq!(form.field_names().collect::<Vec<_>>(), FIELD_NAMES);
/// ```
pub fn interest_form() -> Form {
	Form::new()
		.with_field(
			CharField::new(FIRST_NAME)
				.required("First name is required")
				.with_label("First Name")
				.with_placeholder("Ex. Kai"),
		)
		.with_field(
			CharField::new(LAST_NAME)
				.required("Last name is required")
				.with_label("Last Name")
				.with_placeholder("Ex. Depweg"),
		)
		.with_field(
			RegexField::new(
				PHONE,
				PatternValidator::phone().with_message("Phone number must be XXX-XXX-XXXX"),
			)
			.with_mask(InputMask::Phone)
			.with_label("Phone Number")
			.with_placeholder("Ex. 123-456-7890"),
		)
		.with_field(
			EmailField::new(EMAIL)
				.with_message("Invalid email address")
				.with_label("Email Address")
				.with_placeholder("Ex. kai@example.com"),
		)
		.with_field(
			FloatField::new(COST_GUESS)
				.positive("Cost must be positive")
				.with_label("Guess the Air Fryer\u{2019}s Cost ($)")
				.with_placeholder("Ex. 69"),
		)
		.with_field(
			RegexField::new(
				SPIDR_PIN,
				PatternValidator::pin()
					.with_message("PIN must be 16 digits in ####-####-####-#### format"),
			)
			.with_mask(InputMask::Pin)
			.with_widget(Widget::PasswordInput)
			.with_label("Very, Very Secret 16-Digit Spidr PIN")
			.with_placeholder("1234-5678-9012-3456"),
		)
}

/// A validated interest form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestSubmission {
	pub first_name: String,
	pub last_name: String,
	pub phone: String,
	pub email: String,
	pub cost_guess: f64,
	pub spidr_pin: String,
}

impl InterestSubmission {
	/// Build the typed record from the cleaned data of [`interest_form`]
	pub fn from_cleaned(cleaned: CleanedData) -> FormResult<Self> {
		let object: serde_json::Map<String, serde_json::Value> = cleaned.into_iter().collect();
		serde_json::from_value(serde_json::Value::Object(object))
			.map_err(|e| FormError::Validation(e.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::FormField;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_interest_form_masks() {
		// Arrange
		let form = interest_form();

		// Act
		let masks: Vec<InputMask> = form.fields().iter().map(|f| f.mask()).collect();

		// Assert
		assert_eq!(
			masks,
			vec![
				InputMask::None,
				InputMask::None,
				InputMask::Phone,
				InputMask::None,
				InputMask::None,
				InputMask::Pin,
			]
		);
	}

	#[rstest]
	fn test_interest_form_widgets() {
		let form = interest_form();

		let widget = |name: &str| *form.get_field(name).unwrap().widget();

		assert_eq!(widget(EMAIL), Widget::EmailInput);
		assert_eq!(widget(COST_GUESS), Widget::NumberInput);
		assert_eq!(widget(SPIDR_PIN), Widget::PasswordInput);
		assert_eq!(widget(PHONE), Widget::TextInput);
	}

	#[rstest]
	fn test_cost_guess_label_apostrophe() {
		let form = interest_form();

		let label = form.get_field(COST_GUESS).unwrap().label().unwrap();

		assert_eq!(label, "Guess the Air Fryer’s Cost ($)");
	}

	#[rstest]
	fn test_submission_serializes_camel_case() {
		// Arrange
		let submission = InterestSubmission {
			first_name: "Kai".to_string(),
			last_name: "D".to_string(),
			phone: "123-456-7890".to_string(),
			email: "a@b.com".to_string(),
			cost_guess: 69.0,
			spidr_pin: "1234-5678-9012-3456".to_string(),
		};

		// Act
		let value = serde_json::to_value(&submission).unwrap();

		// Assert
		assert_eq!(
			value,
			json!({
				"firstName": "Kai",
				"lastName": "D",
				"phone": "123-456-7890",
				"email": "a@b.com",
				"costGuess": 69.0,
				"spidrPin": "1234-5678-9012-3456",
			})
		);
	}

	#[rstest]
	fn test_from_cleaned_rejects_incomplete_data() {
		let mut cleaned = CleanedData::new();
		cleaned.insert(FIRST_NAME.to_string(), json!("Kai"));

		let result = InterestSubmission::from_cleaned(cleaned);

		assert!(matches!(result, Err(FormError::Validation(_))));
	}
}
