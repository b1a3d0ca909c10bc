//! Settings loading tests across file and environment layers

use rstest::rstest;
use serial_test::serial;
use spidr_conf::{EnvSource, Settings, SettingsBuilder, SettingsError, TomlFileSource};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
	let path = dir.path().join("spidr.toml");
	fs::write(&path, content).unwrap();
	path
}

#[rstest]
fn test_toml_file_overrides_defaults() {
	// Arrange
	let dir = TempDir::new().unwrap();
	let path = write_config(
		&dir,
		r#"
title = "Air Fryer Waitlist"
pin_visible_by_default = true

[logging]
level = "debug"
"#,
	);

	// Act
	let settings = SettingsBuilder::new()
		.add_source(TomlFileSource::new(&path))
		.build()
		.unwrap();

	// Assert
	assert_eq!(settings.title, "Air Fryer Waitlist");
	assert!(settings.pin_visible_by_default);
	assert_eq!(settings.logging.level, "debug");
	assert_eq!(settings.logging.channel, "interest-form");
	assert_eq!(settings.submit_label, "Submit");
}

#[rstest]
fn test_env_overrides_toml_file() {
	// Arrange
	let dir = TempDir::new().unwrap();
	let path = write_config(&dir, "[logging]\nlevel = \"debug\"\nchannel = \"file\"\n");
	let env = HashMap::from([("SPIDR_LOGGING__LEVEL".to_string(), "error".to_string())]);

	// Act
	let settings = SettingsBuilder::new()
		.add_source(EnvSource::new().with_prefix("SPIDR_").with_vars(env))
		.add_source(TomlFileSource::new(&path))
		.build()
		.unwrap();

	// Assert
	assert_eq!(settings.logging.level, "error");
	assert_eq!(settings.logging.channel, "file");
}

#[rstest]
fn test_env_strings_that_look_boolean_stay_strings() {
	// Arrange
	let env = HashMap::from([
		("SPIDR_SUBMIT_LABEL".to_string(), "Yes".to_string()),
		("SPIDR_LOGGING__CHANNEL".to_string(), "1".to_string()),
		("SPIDR_PIN_VISIBLE_BY_DEFAULT".to_string(), "on".to_string()),
	]);

	// Act
	let settings = SettingsBuilder::new()
		.add_source(EnvSource::new().with_prefix("SPIDR_").with_vars(env))
		.build()
		.unwrap();

	// Assert
	assert_eq!(settings.submit_label, "Yes");
	assert_eq!(settings.logging.channel, "1");
	assert!(settings.pin_visible_by_default);
}

#[rstest]
fn test_malformed_toml_is_reported() {
	// Arrange
	let dir = TempDir::new().unwrap();
	let path = write_config(&dir, "title = \n");

	// Act
	let result = SettingsBuilder::new()
		.add_source(TomlFileSource::new(&path))
		.build();

	// Assert
	assert!(matches!(result, Err(SettingsError::Source { .. })));
}

#[rstest]
fn test_invalid_level_fails_validation() {
	let dir = TempDir::new().unwrap();
	let path = write_config(&dir, "[logging]\nlevel = \"chatty\"\n");

	let result = SettingsBuilder::new()
		.add_source(TomlFileSource::new(&path))
		.build();

	assert!(matches!(result, Err(SettingsError::ValidationError(_))));
}

#[rstest]
fn test_load_requires_explicit_config_file() {
	let dir = TempDir::new().unwrap();
	let missing = dir.path().join("absent.toml");

	let result = Settings::load(Some(&missing));

	assert!(matches!(result, Err(SettingsError::Source { .. })));
}

#[rstest]
#[serial(spidr_env)]
fn test_load_reads_process_environment() {
	// Arrange
	// SAFETY: serialized with every other test that touches SPIDR_ variables.
	unsafe {
		std::env::set_var("SPIDR_SUBMIT_LABEL", "Count me in");
	}

	// Act
	let settings = Settings::load(None);

	// Cleanup before asserting so a failure does not leak the variable
	unsafe {
		std::env::remove_var("SPIDR_SUBMIT_LABEL");
	}

	// Assert
	assert_eq!(settings.unwrap().submit_label, "Count me in");
}
