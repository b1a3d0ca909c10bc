//! Pattern-validated text field with an input mask

use crate::field::{FieldResult, FormField, Widget};
use crate::mask::InputMask;
use crate::validators::PatternValidator;

/// Text field whose cleaned value must match a pattern.
///
/// Pairs naturally with an [`InputMask`] that produces values in the
/// pattern's shape as the user types.
#[derive(Debug, Clone)]
pub struct RegexField {
	pub name: String,
	pub label: Option<String>,
	pub placeholder: Option<String>,
	pub widget: Widget,
	pub mask: InputMask,
	validator: PatternValidator,
}

impl RegexField {
	/// Create a new RegexField validated by `validator`
	///
	/// # Examples
	///
	/// ```
	/// use spidr_forms::fields::RegexField;
	/// use spidr_forms::validators::PatternValidator;
	/// use spidr_forms::{FormField, InputMask};
	///
	/// let field = RegexField::new("phone", PatternValidator::phone())
	///     .with_mask(InputMask::Phone);
	/// assert_eq!(field.mask(), InputMask::Phone);
	/// assert!(field.clean(Some("123-456-7890")).is_ok());
	/// ```
	pub fn new(name: impl Into<String>, validator: PatternValidator) -> Self {
		Self {
			name: name.into(),
			label: None,
			placeholder: None,
			widget: Widget::TextInput,
			mask: InputMask::None,
			validator,
		}
	}

	pub fn with_mask(mut self, mask: InputMask) -> Self {
		self.mask = mask;
		self
	}

	pub fn with_widget(mut self, widget: Widget) -> Self {
		self.widget = widget;
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

impl FormField for RegexField {
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

	fn mask(&self) -> InputMask {
		self.mask
	}

	fn clean(&self, value: Option<&str>) -> FieldResult<serde_json::Value> {
		let value = value.unwrap_or_default();
		self.validator.validate(value)?;
		Ok(serde_json::Value::String(value.to_string()))
	}
}
