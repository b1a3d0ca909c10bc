//! Form state and per-field error messages

use crate::form::{FormError, FormResult};
use indexmap::IndexMap;
use serde::Serialize;

/// Current string value of every field, in schema order.
///
/// The set of fields is fixed when the state is created; writes to a name
/// outside that set are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormState {
	values: IndexMap<String, String>,
}

impl FormState {
	/// Create a state holding an empty string for every name
	///
	/// # Examples
	///
	/// ```
	/// use spidr_forms::FormState;
	///
	/// let state = FormState::new(["firstName", "lastName"]);
	/// assert_eq!(state.get("firstName"), Some(""));
	/// assert_eq!(state.len(), 2);
	/// ```
	pub fn new<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			values: names
				.into_iter()
				.map(|name| (name.into(), String::new()))
				.collect(),
		}
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.values.get(name).map(String::as_str)
	}

	/// Replace the value of an existing field
	///
	/// # Examples
	///
	/// ```
	/// use spidr_forms::{FormError, FormState};
	///
	/// let mut state = FormState::new(["email"]);
	/// state.set("email", "kai@example.com").unwrap();
	/// assert_eq!(state.get("email"), Some("kai@example.com"));
	///
	/// assert!(matches!(
	///     state.set("nickname", "K"),
	///     Err(FormError::UnknownField(_))
	/// ));
	/// ```
	pub fn set(&mut self, name: &str, value: impl Into<String>) -> FormResult<()> {
		match self.values.get_mut(name) {
			Some(slot) => {
				*slot = value.into();
				Ok(())
			}
			None => Err(FormError::UnknownField(name.to_string())),
		}
	}

	pub fn contains(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

/// Validation messages keyed by field name, in insertion order.
///
/// Holds at most one message per field: the first one recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
	entries: IndexMap<String, String>,
}

impl ErrorMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record a message for `field` unless one is already present.
	///
	/// Returns `true` when the message was stored.
	///
	/// # Examples
	///
	/// ```
	/// use spidr_forms::ErrorMap;
	///
	/// let mut errors = ErrorMap::new();
	/// assert!(errors.insert("phone", "Phone number must be XXX-XXX-XXXX"));
	/// assert!(!errors.insert("phone", "second message"));
	/// assert_eq!(errors.get("phone"), Some("Phone number must be XXX-XXX-XXXX"));
	/// ```
	pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) -> bool {
		let field = field.into();
		if self.entries.contains_key(&field) {
			return false;
		}
		self.entries.insert(field, message.into());
		true
	}

	/// Remove the message for one field, keeping the order of the rest
	pub fn remove(&mut self, field: &str) -> Option<String> {
		self.entries.shift_remove(field)
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}

	pub fn get(&self, field: &str) -> Option<&str> {
		self.entries.get(field).map(String::as_str)
	}

	pub fn contains(&self, field: &str) -> bool {
		self.entries.contains_key(field)
	}

	pub fn fields(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
