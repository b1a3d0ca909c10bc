//! Field trait, widget kinds and field-level errors

use crate::mask::InputMask;
use serde::{Deserialize, Serialize};

/// Error produced when a single field fails to clean.
///
/// The display form of every variant is the message shown next to the input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
	#[error("{0}")]
	Required(String),
	#[error("{0}")]
	Invalid(String),
	#[error("{0}")]
	Validation(String),
}

impl FieldError {
	/// The user-facing message carried by this error
	///
	/// # Examples
	///
	/// ```
	/// use spidr_forms::FieldError;
	///
	/// let err = FieldError::Required("First name is required".to_string());
	/// assert_eq!(err.message(), "First name is required");
	/// ```
	pub fn message(&self) -> &str {
		match self {
			FieldError::Required(msg) | FieldError::Invalid(msg) | FieldError::Validation(msg) => {
				msg
			}
		}
	}
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Input widget used to render a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Widget {
	TextInput,
	EmailInput,
	NumberInput,
	PasswordInput,
}

impl Widget {
	/// Value of the HTML `type` attribute for this widget
	///
	/// # Examples
	///
	/// ```
	/// use spidr_forms::Widget;
	///
	/// assert_eq!(Widget::EmailInput.input_type(), "email");
	/// assert_eq!(Widget::PasswordInput.input_type(), "password");
	/// ```
	pub fn input_type(&self) -> &'static str {
		match self {
			Widget::TextInput => "text",
			Widget::EmailInput => "email",
			Widget::NumberInput => "number",
			Widget::PasswordInput => "password",
		}
	}
}

/// A single field of a [`Form`](crate::Form).
///
/// Fields receive the raw string held in form state and either produce a
/// cleaned JSON value or a [`FieldError`].
pub trait FormField: Send + Sync {
	fn name(&self) -> &str;

	fn label(&self) -> Option<&str>;

	fn required(&self) -> bool;

	fn help_text(&self) -> Option<&str> {
		None
	}

	fn placeholder(&self) -> Option<&str> {
		None
	}

	fn widget(&self) -> &Widget;

	/// Mask applied to raw input before it is stored
	fn mask(&self) -> InputMask {
		InputMask::None
	}

	/// Clean a raw value. `None` means the field is absent from state.
	fn clean(&self, value: Option<&str>) -> FieldResult<serde_json::Value>;
}
