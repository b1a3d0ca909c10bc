//! Email address field

use crate::field::{FieldResult, FormField, Widget};
use crate::validators::EmailValidator;

/// Field that accepts a single email address
#[derive(Debug, Clone)]
pub struct EmailField {
	pub name: String,
	pub label: Option<String>,
	pub placeholder: Option<String>,
	pub widget: Widget,
	validator: EmailValidator,
}

impl EmailField {
	/// Create a new EmailField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use spidr_forms::fields::EmailField;
	/// use spidr_forms::FormField;
	///
	/// let field = EmailField::new("email").with_message("Invalid email address");
	/// assert!(field.clean(Some("kai@example.com")).is_ok());
	/// assert_eq!(
	///     field.clean(Some("kai")).unwrap_err().to_string(),
	///     "Invalid email address"
	/// );
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			placeholder: None,
			widget: Widget::EmailInput,
			validator: EmailValidator::new(),
		}
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.validator = self.validator.with_message(message);
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
}

impl FormField for EmailField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		true
	}

	fn placeholder(&self) -> Option<&str> {
		self.placeholder.as_deref()
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	// An empty address fails the shape check, so it reports the same message.
	fn clean(&self, value: Option<&str>) -> FieldResult<serde_json::Value> {
		let value = value.unwrap_or_default();
		self.validator.validate(value)?;
		Ok(serde_json::Value::String(value.to_string()))
	}
}
