//! Settings values and their defaults

use crate::builder::SettingsBuilder;
use crate::sources::{EnvSource, SourceError, TomlFileSource};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the form view and its host
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
	/// Heading shown above the form
	#[serde(default = "default_title")]
	pub title: String,

	/// Text of the submit button
	#[serde(default = "default_submit_label")]
	pub submit_label: String,

	/// Whether the PIN is shown in plain text when the view mounts
	#[serde(default)]
	pub pin_visible_by_default: bool,

	/// Logging configuration
	#[serde(default)]
	pub logging: LoggingSettings,
}

fn default_title() -> String {
	"Spidr Air Fryer Interest Form".to_string()
}

fn default_submit_label() -> String {
	"Submit".to_string()
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			title: default_title(),
			submit_label: default_submit_label(),
			pin_visible_by_default: false,
			logging: LoggingSettings::default(),
		}
	}
}

impl Settings {
	/// Load settings from an optional TOML file and `SPIDR_` environment variables
	pub fn load(config_path: Option<&Path>) -> Result<Self, SettingsError> {
		let mut builder = SettingsBuilder::new();
		if let Some(path) = config_path {
			builder = builder.add_source(TomlFileSource::new(path).required());
		}
		builder
			.add_source(EnvSource::new().with_prefix(crate::ENV_PREFIX))
			.build()
	}

	/// Check values that deserialize fine but cannot be used
	pub fn validate(&self) -> Result<(), SettingsError> {
		const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

		if self.title.trim().is_empty() {
			return Err(SettingsError::ValidationError(
				"title must not be empty".to_string(),
			));
		}
		if !LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
			return Err(SettingsError::ValidationError(format!(
				"unknown logging level '{}'",
				self.logging.level
			)));
		}
		if self.logging.channel.is_empty() {
			return Err(SettingsError::ValidationError(
				"logging channel must not be empty".to_string(),
			));
		}
		Ok(())
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
	#[serde(default = "default_level")]
	pub level: String,
	/// Channel name recorded on every logged submission
	#[serde(default = "default_channel")]
	pub channel: String,
}

fn default_level() -> String {
	"info".to_string()
}

fn default_channel() -> String {
	"interest-form".to_string()
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: default_level(),
			channel: default_channel(),
		}
	}
}

/// Settings error
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Source error in {source_name}: {error}")]
	Source {
		source_name: String,
		error: SourceError,
	},

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),
}
