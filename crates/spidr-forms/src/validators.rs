//! String validators used by the form fields
//!
//! Patterns are compiled once and shared between validator instances.

use crate::field::{FieldError, FieldResult};
use regex::Regex;
use std::sync::LazyLock;

// Phone number in its fully masked form: DDD-DDD-DDDD, ASCII digits only.
pub static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("PHONE_REGEX: invalid regex pattern")
});

// 16-digit PIN in its fully masked form: DDDD-DDDD-DDDD-DDDD.
pub static PIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[0-9]{4}-[0-9]{4}-[0-9]{4}-[0-9]{4}$").expect("PIN_REGEX: invalid regex pattern")
});

// Email shape.
//
// - Local part of letters, digits and `_ ' + - .`, ending in a letter,
//   digit, `_`, `+` or `-`
// - One or more domain labels that start with a letter or digit
// - A top-level domain of at least two letters
//
// Letters are ASCII only. A leading dot and consecutive dots in the local
// part are rejected separately since the regex crate has no lookahead.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
	)
		.expect("EMAIL_REGEX: invalid regex pattern")
});

/// Validates that a string has the shape of an email address.
///
/// # Examples
///
/// ```
/// use spidr_forms::validators::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("kai@example.com").is_ok());
/// assert!(validator.validate("kai@example").is_err());
/// assert!(validator.validate(".kai@example.com").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
	message: Option<String>,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	///
	/// # Examples
	///
	/// ```
	/// use spidr_forms::validators::EmailValidator;
	///
	/// let validator = EmailValidator::new().with_message("Invalid email address");
	/// let err = validator.validate("nope").unwrap_err();
	/// assert_eq!(err.to_string(), "Invalid email address");
	/// ```
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn is_valid(&self, value: &str) -> bool {
		!value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value)
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if self.is_valid(value) {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Enter a valid email address");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates a string against a regular expression.
///
/// # Examples
///
/// ```
/// use spidr_forms::validators::PatternValidator;
///
/// let validator = PatternValidator::phone();
/// assert!(validator.validate("123-456-7890").is_ok());
/// assert!(validator.validate("1234567890").is_err());
///
/// let validator = PatternValidator::pin();
/// assert!(validator.validate("1234-5678-9012-3456").is_ok());
/// assert!(validator.validate("1234-5678-9012-345").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PatternValidator {
	regex: Regex,
	message: Option<String>,
}

impl PatternValidator {
	pub fn new(regex: Regex) -> Self {
		Self {
			regex,
			message: None,
		}
	}

	/// Validator for a masked phone number (`DDD-DDD-DDDD`)
	pub fn phone() -> Self {
		Self::new(PHONE_REGEX.clone())
	}

	/// Validator for a masked PIN (`DDDD-DDDD-DDDD-DDDD`)
	pub fn pin() -> Self {
		Self::new(PIN_REGEX.clone())
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn pattern(&self) -> &str {
		self.regex.as_str()
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if self.regex.is_match(value) {
			Ok(())
		} else {
			let msg = self.message.as_deref().unwrap_or("Enter a valid value");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}
