use crate::field::{FieldError, FormField};
use crate::state::{ErrorMap, FormState};
use indexmap::IndexMap;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Field error in {field}: {error}")]
	Field { field: String, error: FieldError },
	#[error("Unknown field: {0}")]
	UnknownField(String),
	#[error("Validation error: {0}")]
	Validation(String),
}

pub type FormResult<T> = Result<T, FormError>;

/// Cleaned field values, in schema order
pub type CleanedData = IndexMap<String, serde_json::Value>;

/// Declarative validation schema: an ordered list of fields.
///
/// A `Form` holds no per-view state. The view keeps a [`FormState`] created
/// by [`Form::initial_state`] and hands it to [`Form::validate`] on submit.
pub struct Form {
	fields: Vec<Box<dyn FormField>>,
}

impl Form {
	/// Create a new empty form
	///
	/// # Examples
	///
	/// ```
	/// use spidr_forms::Form;
	///
	/// let form = Form::new();
	/// assert_eq!(form.field_count(), 0);
	/// ```
	pub fn new() -> Self {
		Self { fields: vec![] }
	}

	/// Add a field to the form
	///
	/// # Examples
	///
	/// ```
	/// use spidr_forms::{CharField, Form};
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(CharField::new("firstName")));
	/// assert_eq!(form.field_count(), 1);
	/// ```
	pub fn add_field(&mut self, field: Box<dyn FormField>) {
		self.fields.push(field);
	}

	/// Builder form of [`Form::add_field`]
	pub fn with_field(mut self, field: impl FormField + 'static) -> Self {
		self.add_field(Box::new(field));
		self
	}

	pub fn fields(&self) -> &[Box<dyn FormField>] {
		&self.fields
	}

	pub fn get_field(&self, name: &str) -> Option<&dyn FormField> {
		self.fields
			.iter()
			.find(|f| f.name() == name)
			.map(|f| f.as_ref())
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}

	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|f| f.name())
	}

	/// Fresh state with an empty string for every field
	pub fn initial_state(&self) -> FormState {
		FormState::new(self.field_names())
	}

	/// Apply the named field's input mask to a raw value
	///
	/// # Examples
	///
	/// ```
	/// use spidr_forms::fields::RegexField;
	/// use spidr_forms::validators::PatternValidator;
	/// use spidr_forms::{Form, InputMask};
	///
	/// let form = Form::new()
	///     .with_field(RegexField::new("phone", PatternValidator::phone()).with_mask(InputMask::Phone));
	///
	/// assert_eq!(form.format_input("phone", "5551234").unwrap(), "555-123-4");
	/// assert!(form.format_input("fax", "5551234").is_err());
	/// ```
	pub fn format_input(&self, name: &str, raw: &str) -> FormResult<String> {
		let field = self
			.get_field(name)
			.ok_or_else(|| FormError::UnknownField(name.to_string()))?;
		Ok(field.mask().apply(raw))
	}

	/// Validate `state` against every field.
	///
	/// Returns the cleaned values when all fields pass. Otherwise returns an
	/// [`ErrorMap`] with the first message of each failing field; the state
	/// itself is never modified.
	///
	/// # Examples
	///
	/// ```
	/// use spidr_forms::{CharField, Form};
	///
	/// let form = Form::new()
	///     .with_field(CharField::new("firstName").required("First name is required"));
	/// let mut state = form.initial_state();
	///
	/// let errors = form.validate(&state).unwrap_err();
	/// assert_eq!(errors.get("firstName"), Some("First name is required"));
	///
	/// state.set("firstName", "Kai").unwrap();
	/// let cleaned = form.validate(&state).unwrap();
	/// assert_eq!(cleaned["firstName"], "Kai");
	/// ```
	pub fn validate(&self, state: &FormState) -> Result<CleanedData, ErrorMap> {
		let mut cleaned = CleanedData::new();
		let mut errors = ErrorMap::new();

		for field in &self.fields {
			match field.clean(state.get(field.name())) {
				Ok(value) => {
					cleaned.insert(field.name().to_string(), value);
				}
				Err(e) => {
					errors.insert(field.name(), e.message());
				}
			}
		}

		if errors.is_empty() {
			Ok(cleaned)
		} else {
			Err(errors)
		}
	}

	/// Clean a single field's current value
	pub fn clean_field(&self, name: &str, state: &FormState) -> FormResult<serde_json::Value> {
		let field = self
			.get_field(name)
			.ok_or_else(|| FormError::UnknownField(name.to_string()))?;
		field
			.clean(state.get(name))
			.map_err(|error| FormError::Field {
				field: name.to_string(),
				error,
			})
	}
}

impl Default for Form {
	fn default() -> Self {
		Self::new()
	}
}
