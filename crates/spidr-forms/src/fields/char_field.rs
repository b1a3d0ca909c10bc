//! Character field for text input

use crate::field::{FieldError, FieldResult, FormField, Widget};

/// Plain text field with an optional required rule
#[derive(Debug, Clone)]
pub struct CharField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub required_message: String,
	pub help_text: Option<String>,
	pub placeholder: Option<String>,
	pub widget: Widget,
}

impl CharField {
	/// Create a new optional CharField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use spidr_forms::fields::CharField;
	///
	/// let field = CharField::new("firstName");
	/// assert_eq!(field.name, "firstName");
	/// assert!(!field.required);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: false,
			required_message: "This field is required".to_string(),
			help_text: None,
			placeholder: None,
			widget: Widget::TextInput,
		}
	}

	/// Mark the field as required, reporting `message` when it is empty
	///
	/// # Examples
	///
	/// ```
	/// use spidr_forms::fields::CharField;
	///
	/// let field = CharField::new("firstName").required("First name is required");
	/// assert!(field.required);
	/// assert_eq!(field.required_message, "First name is required");
	/// ```
	pub fn required(mut self, message: impl Into<String>) -> Self {
		self.required = true;
		self.required_message = message.into();
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}
}

impl FormField for CharField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.required
	}

	fn help_text(&self) -> Option<&str> {
		self.help_text.as_deref()
	}

	fn placeholder(&self) -> Option<&str> {
		self.placeholder.as_deref()
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	// Length is checked on the raw value; whitespace counts as content.
	fn clean(&self, value: Option<&str>) -> FieldResult<serde_json::Value> {
		let value = value.unwrap_or_default();
		if value.is_empty() && self.required {
			return Err(FieldError::Required(self.required_message.clone()));
		}
		Ok(serde_json::Value::String(value.to_string()))
	}
}
