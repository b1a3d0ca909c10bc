//! Configuration sources for layered settings
//!
//! Each source yields a map of top-level keys to JSON values. Sources are
//! merged by [`SettingsBuilder`](crate::SettingsBuilder) in priority order.

use crate::settings::Settings;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

// Settings keys (with `__` nesting) that hold booleans
const BOOL_KEYS: &[&str] = &["pin_visible_by_default"];

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Missing file: {0}")]
	Missing(String),
}

/// Built-in defaults, always the lowest layer
#[derive(Debug, Default)]
pub struct DefaultSource;

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		let value = serde_json::to_value(Settings::default())?;
		let map = value
			.as_object()
			.ok_or_else(|| SourceError::Parse("Expected object at root".to_string()))?;
		Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
	}

	fn priority(&self) -> u8 {
		0
	}

	fn description(&self) -> String {
		"Built-in defaults".to_string()
	}
}

/// TOML file configuration source
pub struct TomlFileSource {
	path: PathBuf,
	required: bool,
}

impl TomlFileSource {
	/// Create a new TOML file configuration source
	///
	/// A missing file yields no values unless the source is
	/// [`required`](Self::required).
	///
	/// # Examples
	///
	/// ```
	/// use spidr_conf::sources::{ConfigSource, TomlFileSource};
	///
	/// let source = TomlFileSource::new("missing.toml");
	/// assert!(source.load().unwrap().is_empty());
	/// assert!(TomlFileSource::new("missing.toml").required().load().is_err());
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: false,
		}
	}

	/// Fail to load when the file does not exist
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			if self.required {
				return Err(SourceError::Missing(self.path.display().to_string()));
			}
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let toml_value: toml::Value = toml::from_str(&content)?;

		// Convert TOML value to JSON value
		let json_value = serde_json::to_value(&toml_value)?;

		let map = json_value
			.as_object()
			.ok_or_else(|| SourceError::Parse("Expected object at root".to_string()))?;

		Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
	}

	fn priority(&self) -> u8 {
		50 // Medium priority
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// Environment variable configuration source.
///
/// After the prefix is stripped, keys are lowercased and `__` separates
/// nested tables: `SPIDR_LOGGING__LEVEL=debug` sets `logging.level`.
/// Only boolean settings read `yes`/`no` style values as booleans, every
/// other value stays a string.
pub struct EnvSource {
	prefix: Option<String>,
	vars: Option<HashMap<String, String>>,
}

impl EnvSource {
	/// Create a source over the process environment
	pub fn new() -> Self {
		Self {
			prefix: None,
			vars: None,
		}
	}

	/// Only read variables starting with `prefix`
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	/// Read from the given variables instead of the process environment
	pub fn with_vars(mut self, vars: HashMap<String, String>) -> Self {
		self.vars = Some(vars);
		self
	}

	fn parse_value(key: &str, value: String) -> Value {
		if !BOOL_KEYS.contains(&key) {
			return Value::String(value);
		}
		match value.trim().to_lowercase().as_str() {
			"true" | "1" | "yes" | "on" => Value::Bool(true),
			"false" | "0" | "no" | "off" => Value::Bool(false),
			_ => Value::String(value),
		}
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		let vars: Vec<(String, String)> = match &self.vars {
			Some(vars) => vars.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
			None => std::env::vars().collect(),
		};

		let mut config = IndexMap::new();

		for (key, value) in vars {
			let clean_key = match &self.prefix {
				Some(prefix) => match key.strip_prefix(prefix.as_str()) {
					Some(rest) => rest.to_lowercase(),
					None => continue,
				},
				None => key.to_lowercase(),
			};

			let mut path = clean_key.split("__").filter(|s| !s.is_empty());
			let Some(head) = path.next() else {
				continue;
			};
			let rest: Vec<&str> = path.collect();

			let mut leaf = Self::parse_value(&clean_key, value);
			for segment in rest.iter().rev() {
				let mut object = serde_json::Map::new();
				object.insert((*segment).to_string(), leaf);
				leaf = Value::Object(object);
			}

			match config.get_mut(head) {
				Some(existing) => merge_values(existing, leaf),
				None => {
					config.insert(head.to_string(), leaf);
				}
			}
		}

		Ok(config)
	}

	fn priority(&self) -> u8 {
		100 // Highest priority
	}

	fn description(&self) -> String {
		match &self.prefix {
			Some(prefix) => format!("Environment variables (prefix: {})", prefix),
			None => "Environment variables".to_string(),
		}
	}
}

/// Deep-merge `overlay` into `base`; objects merge key by key, anything else
/// replaces the base value.
pub(crate) fn merge_values(base: &mut Value, overlay: Value) {
	match (base, overlay) {
		(Value::Object(base_map), Value::Object(overlay_map)) => {
			for (key, value) in overlay_map {
				match base_map.get_mut(&key) {
					Some(existing) => merge_values(existing, value),
					None => {
						base_map.insert(key, value);
					}
				}
			}
		}
		(base, overlay) => *base = overlay,
	}
}
