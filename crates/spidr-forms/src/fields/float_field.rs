use crate::field::{FieldError, FieldResult, FormField, Widget};

/// FloatField for numeric input entered as text.
///
/// Text is coerced the way a browser number input coerces it: surrounding
/// whitespace is ignored and an empty value reads as `0`.
#[derive(Debug, Clone)]
pub struct FloatField {
	pub name: String,
	pub label: Option<String>,
	pub placeholder: Option<String>,
	pub widget: Widget,
	pub positive: bool,
	pub positive_message: String,
	pub invalid_message: String,
}

impl FloatField {
	/// Create a new FloatField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use spidr_forms::fields::FloatField;
	/// use spidr_forms::FormField;
	///
	/// let field = FloatField::new("costGuess");
	/// assert_eq!(field.clean(Some("69")).unwrap(), serde_json::json!(69.0));
	/// assert_eq!(field.clean(Some("")).unwrap(), serde_json::json!(0.0));
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			placeholder: None,
			widget: Widget::NumberInput,
			positive: false,
			positive_message: "Ensure this value is greater than 0".to_string(),
			invalid_message: "Expected number, received nan".to_string(),
		}
	}

	/// Require the coerced number to be strictly greater than zero
	///
	/// # Examples
	///
	/// ```
	/// use spidr_forms::fields::FloatField;
	/// use spidr_forms::FormField;
	///
	/// let field = FloatField::new("costGuess").positive("Cost must be positive");
	/// assert!(field.clean(Some("0.01")).is_ok());
	/// assert_eq!(
	///     field.clean(Some("0")).unwrap_err().to_string(),
	///     "Cost must be positive"
	/// );
	/// ```
	pub fn positive(mut self, message: impl Into<String>) -> Self {
		self.positive = true;
		self.positive_message = message.into();
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	fn coerce(&self, value: &str) -> FieldResult<f64> {
		let trimmed = value.trim();
		if trimmed.is_empty() {
			return Ok(0.0);
		}

		// f64::from_str also accepts "inf" and "nan" spellings.
		let is_decimal = trimmed
			.chars()
			.all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
		if !is_decimal {
			return Err(FieldError::Invalid(self.invalid_message.clone()));
		}

		match trimmed.parse::<f64>() {
			Ok(num) if num.is_finite() => Ok(num),
			_ => Err(FieldError::Invalid(self.invalid_message.clone())),
		}
	}
}

impl FormField for FloatField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.positive
	}

	fn placeholder(&self) -> Option<&str> {
		self.placeholder.as_deref()
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn clean(&self, value: Option<&str>) -> FieldResult<serde_json::Value> {
		let num = self.coerce(value.unwrap_or_default())?;

		if self.positive && num <= 0.0 {
			return Err(FieldError::Validation(self.positive_message.clone()));
		}

		Ok(serde_json::json!(num))
	}
}
