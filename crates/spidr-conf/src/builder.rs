//! Merges configuration sources into [`Settings`]

use crate::settings::{Settings, SettingsError};
use crate::sources::{ConfigSource, DefaultSource, merge_values};
use serde_json::Value;

/// Collects sources and merges them by priority.
///
/// [`DefaultSource`] is always present, so a builder with no other sources
/// produces [`Settings::default`].
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	pub fn new() -> Self {
		Self {
			sources: vec![Box::new(DefaultSource)],
		}
	}

	pub fn add_source(mut self, source: impl ConfigSource + 'static) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Descriptions of the registered sources, lowest priority first
	pub fn describe(&self) -> Vec<String> {
		let mut sources: Vec<&dyn ConfigSource> = self.sources.iter().map(|s| s.as_ref()).collect();
		sources.sort_by_key(|s| s.priority());
		sources.iter().map(|s| s.description()).collect()
	}

	/// Merged configuration as a JSON object
	pub fn merged(&self) -> Result<Value, SettingsError> {
		let mut sources: Vec<&dyn ConfigSource> = self.sources.iter().map(|s| s.as_ref()).collect();
		// Stable sort keeps insertion order among equal priorities.
		sources.sort_by_key(|s| s.priority());

		let mut merged = Value::Object(serde_json::Map::new());
		for source in sources {
			let layer = source.load().map_err(|error| SettingsError::Source {
				source_name: source.description(),
				error,
			})?;
			merge_values(&mut merged, Value::Object(layer.into_iter().collect()));
		}
		Ok(merged)
	}

	/// Merge all sources, deserialize and validate the result
	pub fn build(self) -> Result<Settings, SettingsError> {
		let merged = self.merged()?;
		let settings: Settings = serde_json::from_value(merged)
			.map_err(|e| SettingsError::ParseError(e.to_string()))?;
		settings.validate()?;
		Ok(settings)
	}
}

impl Default for SettingsBuilder {
	fn default() -> Self {
		Self::new()
	}
}
